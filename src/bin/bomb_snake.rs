use bomb_snake::{
	replay::{self, Autopilot},
	script,
};
use game::prelude::*;
use logger::{error, info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};
use std::{fs, path::PathBuf, process};

/// Default number of turns after which the game is stopped.
const TURNS_LIMIT: u64 = 1000;

fn main() {
	let matches = init_cli();
	match matches.occurrences_of("verbose") {
		0 => logger::init_logger(),
		1 => logger::init_with_level(LevelFilter::Debug),
		_ => logger::init_with_level(LevelFilter::Trace),
	}

	let options = match init_options(&matches) {
		Ok(options) => options,
		Err(e) => {
			error!("Invalid arguments: {}", e);
			process::exit(2);
		}
	};

	if let Err(e) = run(options) {
		error!("Error while playing: {}", e);
		process::exit(1);
	}
}

fn run(options: Options) -> game::Result<()> {
	let spawner = match options.seed {
		Some(seed) => RandomSpawner::seeded(options.settings.board_size, seed),
		None => RandomSpawner::new(options.settings.board_size),
	};
	let mut game = Game::new(options.settings, Box::new(spawner))?;
	info!(
		"Playing on {}x{} board",
		game.board().length(),
		game.board().height()
	);

	let output = options.output;
	let mut recording = replay::play(
		&mut game,
		options.moves,
		options.autopilot,
		options.turns,
		options.record.is_some(),
		|board, frame| match output {
			Output::Json => match serde_json::to_string(frame) {
				Ok(line) => println!("{}", line),
				Err(e) => error!("Can't serialize frame {}: {}", frame.turn, e),
			},
			Output::Text { ansi } => {
				print!("{}", bomb_snake::term::draw(board, ansi));
				println!("turn {}, score {}\n", frame.turn, frame.score);
			}
			Output::Quiet => (),
		},
	)?;

	match &recording.game_over {
		Some(reason) => info!("Game over: {}. Score {}", reason, game.score()),
		None => info!("Stopped after {} turns. Score {}", game.turn(), game.score()),
	}

	if let Some(path) = options.record {
		recording.seed = options.seed;
		fs::write(&path, recording.as_bytes()?)?;
		info!("Recording of {} turns saved to {}", recording.moves.len(), path.display());
	}
	Ok(())
}

fn init_cli() -> clap::ArgMatches<'static> {
	use clap::{App, Arg};

	App::new("Bomb Snake")
		.about("Plays bomb snake without a display, turn after turn")
		.arg(
			Arg::with_name("grid_size")
				.short("g")
				.long("grid-size")
				.value_name("SIZE")
				.help(&format!(
					"Board size. Default is {}x{}",
					Settings::BOARD_SIZE.0,
					Settings::BOARD_SIZE.1
				)),
		)
		.arg(
			Arg::with_name("apples")
				.short("a")
				.long("apples")
				.value_name("NUMBER")
				.help(&format!(
					"Number of apples on the board. Default is {}",
					Settings::APPLES_AMOUNT
				)),
		)
		.arg(
			Arg::with_name("bombs")
				.short("b")
				.long("bombs")
				.value_name("NUMBER")
				.help(&format!(
					"Number of bombs on the board. Default is {}",
					Settings::BOMBS_AMOUNT
				)),
		)
		.arg(
			Arg::with_name("seed")
				.short("s")
				.long("seed")
				.value_name("NUMBER")
				.help("Seed of apples and bombs generation, random if not given"),
		)
		.arg(
			Arg::with_name("moves")
				.short("m")
				.long("moves")
				.value_name("SCRIPT")
				.help("Comma separated directions, one per turn, e.g. \"r,,,d,,u\""),
		)
		.arg(
			Arg::with_name("autopilot")
				.long("autopilot")
				.value_name("MODE")
				.possible_values(&["off", "idle", "random"])
				.help("What to do when moves run out. Default is random"),
		)
		.arg(
			Arg::with_name("turns")
				.short("t")
				.long("turns")
				.value_name("NUMBER")
				.help(&format!("Maximum number of turns. Default is {}", TURNS_LIMIT)),
		)
		.arg(
			Arg::with_name("record")
				.short("r")
				.long("record")
				.value_name("FILE")
				.help("Save moves and frames of the game to a json file"),
		)
		.arg(
			Arg::with_name("accumulate_blasts")
				.long("accumulate-blasts")
				.help("Replace apples caught by every bomb, not only by the last one"),
		)
		.arg(
			Arg::with_name("json")
				.long("json")
				.conflicts_with_all(&["plain", "quiet"])
				.help("Print frames as json lines"),
		)
		.arg(
			Arg::with_name("plain")
				.long("plain")
				.help("Draw the board without colors"),
		)
		.arg(
			Arg::with_name("quiet")
				.short("q")
				.long("quiet")
				.help("Don't draw the board"),
		)
		.arg(
			Arg::with_name("verbose")
				.short("v")
				.multiple(true)
				.help("Log more, twice for everything"),
		)
		.get_matches()
}

#[derive(Debug, Clone, Copy)]
enum Output {
	Json,
	Text { ansi: bool },
	Quiet,
}

struct Options {
	settings: Settings,
	seed: Option<u64>,
	moves: Vec<Option<Direction>>,
	autopilot: Autopilot,
	turns: u64,
	output: Output,
	record: Option<PathBuf>,
}

fn init_options(matches: &clap::ArgMatches) -> game::Result<Options> {
	let mut settings = Settings::default();
	if let Some(val) = matches.value_of("grid_size") {
		settings.board_size = script::parse_size(val)?;
	}
	if let Some(val) = matches.value_of("apples") {
		settings.apples_amount = val.parse()?;
	}
	if let Some(val) = matches.value_of("bombs") {
		settings.bombs_amount = val.parse()?;
	}
	if matches.is_present("accumulate_blasts") {
		settings.blast_policy = BlastPolicy::Accumulate;
	}

	let seed = match matches.value_of("seed") {
		Some(val) => Some(val.parse::<u64>()?),
		None => None,
	};
	let moves = match matches.value_of("moves") {
		Some(val) => script::parse_moves(val)?,
		None => Vec::new(),
	};
	let autopilot = match matches.value_of("autopilot").unwrap_or("random") {
		"off" => Autopilot::Off,
		"idle" => Autopilot::Idle,
		_ => Autopilot::Random(match seed {
			Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
			None => StdRng::from_entropy(),
		}),
	};
	let turns = match matches.value_of("turns") {
		Some(val) => val.parse()?,
		None => TURNS_LIMIT,
	};

	let record = matches.value_of("record").map(PathBuf::from);

	let output = if matches.is_present("json") {
		Output::Json
	} else if matches.is_present("quiet") {
		Output::Quiet
	} else {
		Output::Text {
			ansi: !matches.is_present("plain"),
		}
	};

	Ok(Options {
		settings,
		seed,
		moves,
		autopilot,
		turns,
		output,
		record,
	})
}
