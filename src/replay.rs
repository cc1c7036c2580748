//! Playing a game without a player: scripted moves, then an optional
//! autopilot.

use game::{aux::Direction, board::Board, frame::Frame, Game};
use log::debug;
use rand::{rngs::StdRng, Rng};
use serde::{Deserialize, Serialize};

/// What to do once the scripted moves run out.
#[derive(Debug, Clone)]
pub enum Autopilot {
	/// Stop playing.
	Off,

	/// Keep going straight.
	Idle,

	/// Turn at random, or not.
	Random(StdRng),
}

impl Autopilot {
	fn next(&mut self) -> Option<Option<Direction>> {
		match self {
			Self::Off => None,
			Self::Idle => Some(None),
			Self::Random(rng) => Some(rng.gen()),
		}
	}
}

/// Everything that happened in a game. Saved recordings of a seeded game
/// can be compared against a replay of the same moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Recording {
	/// Seed of the spawner, if it was seeded.
	pub seed: Option<u64>,

	/// Requested directions, one per turn.
	pub moves: Vec<Option<Direction>>,

	/// The initial frame followed by a frame per turn.
	pub frames: Vec<Frame>,

	/// Why the game ended, `None` if it was stopped earlier.
	pub game_over: Option<String>,
}

impl Recording {
	/// Convert [`Recording`] to binary json.
	pub fn as_bytes(&self) -> game::Result<Vec<u8>> {
		Ok(serde_json::to_string(self)?.as_bytes().to_vec())
	}

	/// Convert json string to [`Recording`].
	pub fn from_string<T: AsRef<str>>(string: T) -> game::Result<Self> {
		Ok(serde_json::from_str(string.as_ref())?)
	}
}

/// Play `moves` and then follow `autopilot` until the game is over or
/// `limit` turns are played. `observe` sees the board and the frame after
/// every turn, and before the first one.
///
/// Moves and frames are kept in the returned [`Recording`] only if `record`
/// is set, otherwise it holds just the game over reason.
pub fn play<F>(
	game: &mut Game,
	moves: Vec<Option<Direction>>,
	mut autopilot: Autopilot,
	limit: u64,
	record: bool,
	mut observe: F,
) -> game::Result<Recording>
where
	F: FnMut(&Board, &Frame),
{
	let initial = game.frame();
	observe(game.board(), &initial);
	let mut recording = Recording {
		seed: None,
		moves: Vec::new(),
		frames: Vec::new(),
		game_over: None,
	};
	if record {
		recording.moves.reserve(moves.len());
		recording.frames.push(initial);
	}

	let mut script = moves.into_iter();
	while game.is_playing() && game.turn() < limit {
		let direction = match script.next() {
			Some(direction) => direction,
			None => match autopilot.next() {
				Some(direction) => direction,
				None => {
					debug!("out of moves after {} turns", game.turn());
					break;
				}
			},
		};

		game.single_turn(direction)?;
		let frame = game.frame();
		observe(game.board(), &frame);
		if record {
			recording.moves.push(direction);
			recording.frames.push(frame);
		}
	}

	recording.game_over = game.game_over().map(|reason| reason.to_string());
	Ok(recording)
}

#[cfg(test)]
mod tests {
	use super::*;
	use game::prelude::*;
	use rand::SeedableRng;

	fn quiet_game() -> Game {
		let settings = Settings {
			board_size: (10, 10),
			apples_amount: 0,
			bombs_amount: 0,
			..Default::default()
		};
		Game::new(settings, Box::new(Scripted::default())).unwrap()
	}

	#[test]
	fn stops_with_the_script() -> game::Result<()> {
		let mut game = quiet_game();
		let mut observed = 0;
		let recording = play(
			&mut game,
			vec![Some(Direction::Left), None],
			Autopilot::Off,
			100,
			true,
			|_, _| observed += 1,
		)?;

		assert_eq!(observed, 3);
		assert_eq!(recording.frames.len(), 3);
		assert_eq!(recording.frames[2].turn, 2);
		assert_eq!(recording.game_over, None);
		assert_eq!(game.snake()?.head(), Coordinates::new(3, 5));
		Ok(())
	}

	#[test]
	fn idles_into_the_wall() -> game::Result<()> {
		let mut game = quiet_game();
		let recording = play(&mut game, vec![], Autopilot::Idle, 100, true, |_, _| ())?;

		assert_eq!(recording.moves.len(), 5);
		assert_eq!(recording.game_over.as_deref(), Some("the snake hit a wall"));
		assert!(!recording.frames.last().unwrap().playing);
		Ok(())
	}

	#[test]
	fn respects_the_limit() -> game::Result<()> {
		let mut game = quiet_game();
		let autopilot = Autopilot::Random(StdRng::seed_from_u64(5));
		let recording = play(&mut game, vec![], autopilot, 3, true, |_, _| ())?;
		assert!(recording.moves.len() <= 3);
		assert!(game.turn() <= 3);
		Ok(())
	}

	#[test]
	fn keeps_nothing_unless_recording() -> game::Result<()> {
		let mut game = quiet_game();
		let mut observed = 0;
		let recording = play(&mut game, vec![], Autopilot::Idle, 100, false, |_, _| {
			observed += 1
		})?;

		assert_eq!(observed, 6);
		assert!(recording.moves.is_empty());
		assert!(recording.frames.is_empty());
		assert_eq!(recording.game_over.as_deref(), Some("the snake hit a wall"));
		Ok(())
	}

	#[test]
	fn saved_recording_matches_a_replay() -> game::Result<()> {
		let seeded = || -> game::Result<Game> {
			let settings = Settings {
				board_size: (12, 12),
				..Default::default()
			};
			Game::new(settings, Box::new(RandomSpawner::seeded((12, 12), 7)))
		};
		let moves = vec![Some(Direction::Right), None, Some(Direction::Down)];

		let mut game = seeded()?;
		let mut recording = play(&mut game, moves, Autopilot::Idle, 20, true, |_, _| ())?;
		recording.seed = Some(7);
		let saved = String::from_utf8(recording.as_bytes()?)?;
		let loaded = Recording::from_string(saved)?;
		assert_eq!(loaded, recording);

		let mut game = seeded()?;
		let replayed = play(&mut game, loaded.moves.clone(), Autopilot::Off, 20, true, |_, _| ())?;
		assert_eq!(replayed.frames, loaded.frames);
		assert_eq!(replayed.game_over, loaded.game_over);
		Ok(())
	}
}
