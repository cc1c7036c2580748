//! Text rendering of the board for terminals.

use game::{aux::Paint, board::Board};

/// Character a paint is drawn with.
pub fn glyph(paint: Option<Paint>) -> char {
	match paint {
		Some(Paint::Apple) => 'o',
		Some(Paint::Snake) => '#',
		Some(Paint::Bomb) => '*',
		Some(Paint::Shockwave) => '+',
		None => '.',
	}
}

/// Draw the board, top row first. With `ansi` occupied cells get their paint
/// color as background and every cell is two characters wide.
pub fn draw(board: &Board, ansi: bool) -> String {
	let cells = board.render();
	let width = if ansi { 2 } else { 1 };
	let mut out = String::with_capacity((board.length() * width + 1) * board.height());

	for row in (0..board.height()).rev() {
		for column in cells.iter() {
			let paint = column[row];
			let g = glyph(paint);
			match (ansi, paint) {
				(true, Some(paint)) => {
					let c = paint.color();
					out.push_str(&format!("\x1b[48;2;{};{};{}m{}{}\x1b[0m", c.r, c.g, c.b, g, g));
				}
				(true, None) => out.push_str("  "),
				(false, _) => out.push(g),
			}
		}
		out.push('\n');
	}

	out
}
