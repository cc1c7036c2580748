//! Helper crate for fast log initializing.
//!
//! This crate reexports all macros from [`log`] crate and uses [`env_logger`]
//! crate for logger initializing.
//!
//! Example:
//! ```rust
//! use logger::*;
//!
//! init_logger();
//!
//! info!("Logger initialized successfully!");
//! ```

pub use log::{debug, error, info, trace, warn, LevelFilter};

/// Default log level for debug compilations.
const DEBUG_LOG_LEVEL: &str = "trace";

/// Default log level for release compilations.
const RELEASE_LOG_LEVEL: &str = "info";

/// Environment variable for log level setting.
const LOG_LEVEL_ENV: &str = "BOMB_SNAKE_LOG";

/// Environment variable for log style setting.
const LOG_STYLE_ENV: &str = "BOMB_SNAKE_LOG_STYLE";

/// Default log style.
const LOG_STYLE: &str = "auto";

use env_logger::fmt::Formatter;
use log::Record;
use std::io;

/// Logger initializer. Run this function in binary crate to initialize logging.
/// This function should be ran only once.
pub fn init_logger() {
	let log_level = match cfg!(debug_assertions) {
		true => DEBUG_LOG_LEVEL,
		false => RELEASE_LOG_LEVEL,
	};

	builder(log_level).init();
}

/// Like [`init_logger`], but `level` wins over the environment.
pub fn init_with_level(level: LevelFilter) {
	builder(RELEASE_LOG_LEVEL).filter_level(level).init();
}

fn builder(default_level: &str) -> env_logger::Builder {
	let mut builder = env_logger::Builder::from_env(
		env_logger::Env::default()
			.filter_or(LOG_LEVEL_ENV, default_level)
			.write_style_or(LOG_STYLE_ENV, LOG_STYLE),
	);
	builder.format(format).target(env_logger::Target::Stderr);
	builder
}

/// Logging output format.
fn format(buf: &'_ mut Formatter, record: &'_ Record<'_>) -> io::Result<()> {
	use env_logger::fmt::Color;
	use log::Level;
	use std::io::Write;

	let mut style = buf.style();
	match record.level() {
		Level::Error => style.set_color(Color::Red).set_bold(true),
		Level::Warn => style.set_color(Color::Yellow),
		Level::Info => style.set_color(Color::Cyan),
		Level::Debug => style.set_color(Color::Magenta),
		Level::Trace => style.set_color(Color::Blue),
	};

	writeln!(
		buf,
		"{}\t{}\t{}",
		style.value(record.level()),
		record.target(),
		record.args()
	)
}
