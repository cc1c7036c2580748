//! Game abstractions crate.
//!
//! A snake moves on a bounded board, eats apples to grow and score points,
//! and dies when it bumps into itself, leaves the board or gets caught by a
//! bomb's shock-wave. [`Game`] advances the simulation one turn at a time.

pub mod apple;
pub mod aux;
pub mod board;
pub mod bomb;
pub mod entity;
pub mod error;
pub mod frame;
pub mod snake;
pub mod spawner;

/// This is an alias for standart [`Result`](std::result::Result) type which
/// represents failure.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Common reexports in one place.
pub mod prelude {
	pub use crate::{
		aux::*,
		board::{Board, Strengths},
		frame::{Frame, FrameCell},
		spawner::{AppleData, BombData, RandomSpawner, Scripted, Spawner},
		BlastPolicy, Game, GameOver, Settings,
	};
}

use apple::Apple;
use aux::{Coordinates, Direction};
use board::{Board, Strengths};
use bomb::Bomb;
use entity::{Entity, EntityId, Moving, Printable};
use error::GameError;
use frame::{Frame, FrameCell};
use log::{debug, info, trace, warn};
use snake::Snake;
use spawner::Spawner;
use std::{collections::HashSet, fmt};

/// Why the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOver {
	/// The snake bumped into itself.
	Bumped,

	/// The snake left the board.
	HitWall,

	/// The snake got caught by a bomb.
	Exploded,

	/// There's no room left for a new apple.
	BoardFull,
}

impl fmt::Display for GameOver {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let reason = match self {
			Self::Bumped => "the snake bumped into itself",
			Self::HitWall => "the snake hit a wall",
			Self::Exploded => "the snake exploded",
			Self::BoardFull => "the board is full",
		};
		write!(f, "{}", reason)
	}
}

/// Which apples are replaced after the bombs move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlastPolicy {
	/// Only apples caught by the last bomb in the list are replaced. Apples
	/// caught by other bombs stay where they are.
	LastBomb,

	/// Apples caught by any bomb are replaced.
	Accumulate,
}

impl Default for BlastPolicy {
	fn default() -> Self {
		Self::LastBomb
	}
}

/// Game settings.
#[derive(Debug, Clone)]
pub struct Settings {
	/// Board (length, height).
	pub board_size: (usize, usize),

	/// Number of apples on the board.
	pub apples_amount: usize,

	/// Number of bombs on the board.
	pub bombs_amount: usize,

	/// Paint precedences of the board.
	pub strengths: Strengths,

	/// How many candidates are asked from the spawner before giving up on
	/// placing an apple or a bomb.
	pub placement_attempts: usize,

	/// Apples replaced after an explosion.
	pub blast_policy: BlastPolicy,
}

impl Settings {
	/// Default board size.
	pub const BOARD_SIZE: (usize, usize) = (40, 30);

	/// Default number of apples.
	pub const APPLES_AMOUNT: usize = 3;

	/// Default number of bombs.
	pub const BOMBS_AMOUNT: usize = 1;

	/// Default number of placement attempts.
	pub const PLACEMENT_ATTEMPTS: usize = 10_000;
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			board_size: Self::BOARD_SIZE,
			apples_amount: Self::APPLES_AMOUNT,
			bombs_amount: Self::BOMBS_AMOUNT,
			strengths: Strengths::default(),
			placement_attempts: Self::PLACEMENT_ATTEMPTS,
			blast_policy: BlastPolicy::default(),
		}
	}
}

/// The game rules.
pub struct Game {
	board: Board,
	settings: Settings,
	spawner: Box<dyn Spawner>,

	snake: EntityId,
	apples: Vec<EntityId>,
	bombs: Vec<EntityId>,

	score: u32,
	turn: u64,
	game_over: Option<GameOver>,
}

impl Game {
	/// Return a new [`Game`]. The snake is placed in the center of the
	/// board, then bombs and apples are created as `settings` say.
	pub fn new(settings: Settings, spawner: Box<dyn Spawner>) -> Result<Self> {
		let mut board = Board::new(settings.board_size, settings.strengths.clone())?;
		let snake = match board.add(Snake::centered(settings.board_size)) {
			Some(id) => id,
			None => return Err(Box::new(GameError::SnakeDoesNotFit(settings.board_size))),
		};

		let mut game = Self {
			board,
			settings,
			spawner,
			snake,
			apples: Vec::new(),
			bombs: Vec::new(),
			score: 0,
			turn: 0,
			game_over: None,
		};
		for _ in 0..game.settings.bombs_amount {
			game.create_bomb()?;
		}
		for _ in 0..game.settings.apples_amount {
			game.create_apple()?;
		}
		Ok(game)
	}

	/// Execute a single turn:
	///
	/// 1. the snake turns to `direction`, if it's given and isn't a reversal;
	/// 2. the snake moves;
	/// 3. the game ends if the snake died;
	/// 4. an apple under the snake's head is eaten and replaced;
	/// 5. bombs count down or advance their ripples;
	/// 6. the game ends if a ripple caught the snake;
	/// 7. faded bombs and blasted apples are replaced.
	///
	/// Nothing happens once the game is over.
	pub fn single_turn(&mut self, direction: Option<Direction>) -> Result<()> {
		if let Some(reason) = self.game_over {
			debug!("turn requested after the game is over: {}", reason);
			return Ok(());
		}
		self.turn += 1;
		let turn = self.turn;

		let snake = self.snake_mut()?;
		if let Some(direction) = direction {
			if !snake.change_direction(direction) {
				trace!("can't turn {} while heading {}", direction, snake.direction());
			}
		}
		snake.mv();
		debug!("turn {}: snake head at {}", turn, snake.head());

		if self.check_death()? {
			return Ok(());
		}
		self.check_apples()?;
		self.detonate_bombs()
	}

	/// End the game if the snake died and return whether it did.
	fn check_death(&mut self) -> Result<bool> {
		match self.cause_of_death()? {
			Some(reason) => {
				self.finish(reason);
				Ok(true)
			}
			None => Ok(false),
		}
	}

	fn cause_of_death(&self) -> Result<Option<GameOver>> {
		let snake = self.snake()?;
		if snake.bumped() {
			return Ok(Some(GameOver::Bumped));
		}
		if snake.parts().iter().any(|c| !self.board.is_cell_in_board(*c)) {
			return Ok(Some(GameOver::HitWall));
		}

		let body: HashSet<Coordinates> = snake.parts().iter().copied().collect();
		for &id in &self.bombs {
			if self.bomb(id)?.coords().iter().any(|c| body.contains(c)) {
				return Ok(Some(GameOver::Exploded));
			}
		}
		Ok(None)
	}

	/// Let the snake eat the apple under its head, if there's one.
	fn check_apples(&mut self) -> Result<()> {
		let head = self.snake()?.head();

		let mut eaten = None;
		for &id in &self.apples {
			let apple = self.apple(id)?;
			if apple.location() == head {
				eaten = Some((id, apple.score()));
				break;
			}
		}

		if let Some((id, score)) = eaten {
			self.score += score;
			self.snake_mut()?.eat_apple();
			info!("apple at {} eaten for {} points, score {}", head, score, self.score);
			self.replace_apples(&[id])?;
		}
		Ok(())
	}

	/// Move every bomb, then replace faded bombs and apples caught by the
	/// ripples unless the snake got caught as well.
	fn detonate_bombs(&mut self) -> Result<()> {
		let mut faded = Vec::new();
		let mut blasted: Vec<EntityId> = Vec::new();

		for &id in &self.bombs {
			let bomb = self
				.board
				.get_mut(id)
				.and_then(Entity::as_bomb_mut)
				.ok_or(GameError::EntityNotFound(id))?;
			bomb.mv();
			let ripples: HashSet<Coordinates> = bomb.coords().into_iter().collect();
			let over = bomb.attack_is_over();

			let mut caught = Vec::new();
			for &apple in &self.apples {
				let location = match self.board.get(apple).and_then(Entity::as_apple) {
					Some(a) => a.location(),
					None => return Err(Box::new(GameError::EntityNotFound(apple))),
				};
				if ripples.contains(&location) {
					caught.push(apple);
				}
			}
			match self.settings.blast_policy {
				BlastPolicy::LastBomb => blasted = caught,
				BlastPolicy::Accumulate => {
					for apple in caught {
						if !blasted.contains(&apple) {
							blasted.push(apple);
						}
					}
				}
			}

			if over {
				faded.push(id);
			}
		}

		if self.check_death()? {
			return Ok(());
		}

		self.replace_bombs(&faded)?;
		self.replace_apples(&blasted)
	}

	/// Take apples off the game and create the same amount of new ones.
	fn replace_apples(&mut self, apples: &[EntityId]) -> Result<()> {
		for id in apples {
			self.apples.retain(|a| a != id);
			self.board.remove(*id);
			self.create_apple()?;
		}
		Ok(())
	}

	/// Take bombs off the game and create the same amount of new ones.
	fn replace_bombs(&mut self, bombs: &[EntityId]) -> Result<()> {
		for id in bombs {
			self.bombs.retain(|b| b != id);
			self.board.remove(*id);
			info!("bomb {} faded away", id);
			self.create_bomb()?;
		}
		Ok(())
	}

	/// Place a new apple where the spawner says. If the board is already
	/// full, the game ends instead.
	///
	/// Return false if no candidate fitted the board in
	/// [`placement_attempts`](Settings::placement_attempts) tries.
	pub fn create_apple(&mut self) -> Result<bool> {
		if self.board.is_full() {
			self.finish(GameOver::BoardFull);
			return Ok(false);
		}

		for _ in 0..self.settings.placement_attempts {
			let data = match self.spawner.apple() {
				Some(data) => data,
				None => break,
			};
			if let Some(id) = self.board.add(Apple::new(data.coords, data.score)) {
				trace!("apple {} placed at {}", id, data.coords);
				self.apples.push(id);
				return Ok(true);
			}
		}

		warn!("couldn't place a new apple, {} apples left", self.apples.len());
		Ok(false)
	}

	/// Place a new bomb where the spawner says.
	///
	/// Return false if no candidate fitted the board in
	/// [`placement_attempts`](Settings::placement_attempts) tries. Candidates
	/// which can't make a valid bomb count as failed tries.
	pub fn create_bomb(&mut self) -> Result<bool> {
		for _ in 0..self.settings.placement_attempts {
			let data = match self.spawner.bomb() {
				Some(data) => data,
				None => break,
			};
			let bomb = match Bomb::new(data.coords, data.radius, data.countdown) {
				Ok(bomb) => bomb,
				Err(e) => {
					warn!("bomb candidate at {} skipped: {}", data.coords, e);
					continue;
				}
			};
			if let Some(id) = self.board.add(bomb) {
				debug!(
					"bomb {} placed at {}, radius {}, countdown {}",
					id, data.coords, data.radius, data.countdown
				);
				self.bombs.push(id);
				return Ok(true);
			}
		}

		warn!("couldn't place a new bomb, {} bombs left", self.bombs.len());
		Ok(false)
	}

	/// End the game. The first reason sticks.
	fn finish(&mut self, reason: GameOver) {
		if self.game_over.is_some() {
			return;
		}
		info!("game over after {} turns: {}, score {}", self.turn, reason, self.score);
		self.game_over = Some(reason);
	}

	/// Return a snapshot of the current state.
	pub fn frame(&mut self) -> Frame {
		let mut cells: Vec<FrameCell> = self
			.board
			.cells()
			.iter()
			.map(|(coordinates, paint)| FrameCell {
				coordinates: *coordinates,
				paint: *paint,
			})
			.collect();
		cells.sort_by_key(|c| c.coordinates);
		Frame {
			turn: self.turn,
			score: self.score,
			playing: self.is_playing(),
			cells,
		}
	}

	pub fn snake(&self) -> Result<&Snake> {
		match self.board.get(self.snake).and_then(Entity::as_snake) {
			Some(snake) => Ok(snake),
			None => Err(Box::new(GameError::EntityNotFound(self.snake))),
		}
	}

	fn snake_mut(&mut self) -> Result<&mut Snake> {
		let id = self.snake;
		match self.board.get_mut(id).and_then(Entity::as_snake_mut) {
			Some(snake) => Ok(snake),
			None => Err(Box::new(GameError::EntityNotFound(id))),
		}
	}

	fn apple(&self, id: EntityId) -> Result<&Apple> {
		match self.board.get(id).and_then(Entity::as_apple) {
			Some(apple) => Ok(apple),
			None => Err(Box::new(GameError::EntityNotFound(id))),
		}
	}

	fn bomb(&self, id: EntityId) -> Result<&Bomb> {
		match self.board.get(id).and_then(Entity::as_bomb) {
			Some(bomb) => Ok(bomb),
			None => Err(Box::new(GameError::EntityNotFound(id))),
		}
	}

	/// Return apples currently in the game.
	pub fn apples(&self) -> impl Iterator<Item = &Apple> + '_ {
		self.apples
			.iter()
			.filter_map(move |id| self.board.get(*id).and_then(Entity::as_apple))
	}

	/// Return bombs currently in the game.
	pub fn bombs(&self) -> impl Iterator<Item = &Bomb> + '_ {
		self.bombs
			.iter()
			.filter_map(move |id| self.board.get(*id).and_then(Entity::as_bomb))
	}

	pub fn board(&self) -> &Board {
		&self.board
	}

	/// Return the board for reading its occupancy.
	pub fn board_mut(&mut self) -> &mut Board {
		&mut self.board
	}

	pub fn score(&self) -> u32 {
		self.score
	}

	/// Number of turns played.
	pub fn turn(&self) -> u64 {
		self.turn
	}

	pub fn is_playing(&self) -> bool {
		self.game_over.is_none()
	}

	/// Return why the game is over, `None` while it's still on.
	pub fn game_over(&self) -> Option<GameOver> {
		self.game_over
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}
}

impl fmt::Debug for Game {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Game")
			.field("board", &self.board)
			.field("settings", &self.settings)
			.field("score", &self.score)
			.field("turn", &self.turn)
			.field("game_over", &self.game_over)
			.finish()
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use aux::Paint;
	use spawner::{AppleData, BombData, Scripted};

	fn settings(size: (usize, usize)) -> Settings {
		Settings {
			board_size: size,
			apples_amount: 0,
			bombs_amount: 0,
			placement_attempts: 50,
			..Default::default()
		}
	}

	fn scripted(size: (usize, usize), apples: Vec<AppleData>, bombs: Vec<BombData>) -> Game {
		Game::new(settings(size), Box::new(Scripted::new(apples, bombs))).unwrap()
	}

	#[test]
	fn starts_with_configured_entities() -> crate::Result<()> {
		let spawner = Scripted::new(
			vec![
				AppleData::new((0, 0), 1),
				AppleData::new((1, 0), 2),
				AppleData::new((2, 0), 3),
			],
			vec![BombData::new((8, 8), 2, 5)],
		);
		let game = Game::new(
			Settings {
				board_size: (10, 10),
				..Default::default()
			},
			Box::new(spawner),
		)?;

		assert_eq!(game.apples().count(), 3);
		assert_eq!(game.bombs().count(), 1);
		assert_eq!(game.snake()?.head(), Coordinates::new(5, 5));
		assert!(game.is_playing());
		assert_eq!(game.score(), 0);
		Ok(())
	}

	#[test]
	fn snake_must_fit() {
		let result = Game::new(settings((4, 1)), Box::new(Scripted::default()));
		assert!(result.is_err());
	}

	#[test]
	fn reversal_is_ignored() -> crate::Result<()> {
		let mut game = scripted((10, 10), vec![], vec![]);
		game.single_turn(Some(Direction::Down))?;
		assert!(game.is_playing());
		assert_eq!(game.snake()?.head(), Coordinates::new(5, 6));
		assert_eq!(game.snake()?.direction(), Direction::Up);
		Ok(())
	}

	#[test]
	fn hits_the_wall() -> crate::Result<()> {
		let mut game = scripted((10, 10), vec![], vec![]);
		for _ in 0..4 {
			game.single_turn(None)?;
		}
		assert!(game.is_playing());
		game.single_turn(None)?;
		assert_eq!(game.game_over(), Some(GameOver::HitWall));

		// nothing moves anymore
		let head = game.snake()?.head();
		game.single_turn(Some(Direction::Left))?;
		assert_eq!(game.snake()?.head(), head);
		assert_eq!(game.turn(), 5);
		Ok(())
	}

	#[test]
	fn eats_apple() -> crate::Result<()> {
		let mut game = scripted(
			(10, 10),
			vec![AppleData::new((5, 7), 4), AppleData::new((0, 9), 1)],
			vec![],
		);
		game.create_apple()?;

		game.single_turn(None)?;
		assert_eq!(game.score(), 0);
		game.single_turn(None)?;
		assert_eq!(game.score(), 4);
		assert_eq!(game.snake()?.growth(), Snake::GROWTH);

		let apples: Vec<_> = game.apples().map(|a| a.location()).collect();
		assert_eq!(apples, [Coordinates::new(0, 9)]);
		assert_eq!(game.board_mut().cell((5, 7).into()), Some(Paint::Snake));
		Ok(())
	}

	#[test]
	fn full_board_ends_game() -> crate::Result<()> {
		let apples = vec![AppleData::new((0, 0), 1), AppleData::new((0, 1), 1)];
		let mut game = scripted((1, 5), apples, vec![]);
		// snake occupies (0, 0), (0, 1), (0, 2)
		assert!(!game.create_apple()?);
		assert!(game.is_playing());

		let mut game = scripted((1, 4), vec![AppleData::new((0, 3), 1)], vec![]);
		assert!(game.create_apple()?);
		assert!(game.board_mut().is_full());
		assert!(!game.create_apple()?);
		assert_eq!(game.game_over(), Some(GameOver::BoardFull));
		Ok(())
	}

	#[test]
	fn invalid_bomb_data_is_skipped() -> crate::Result<()> {
		let mut game = scripted(
			(10, 10),
			vec![],
			vec![BombData::new((1, 1), 0, 5), BombData::new((2, 2), 2, 1)],
		);
		assert!(!game.create_bomb()?);
		assert_eq!(game.bombs().count(), 0);

		let mut game = scripted(
			(10, 10),
			vec![],
			vec![BombData::new((1, 1), 0, 5), BombData::new((8, 8), 2, 5)],
		);
		assert!(game.create_bomb()?);
		let bombs: Vec<_> = game.bombs().map(|b| b.location()).collect();
		assert_eq!(bombs, [Coordinates::new(8, 8)]);
		Ok(())
	}

	#[test]
	fn first_game_over_reason_sticks() {
		let mut game = scripted((10, 10), vec![], vec![]);
		game.finish(GameOver::BoardFull);
		game.finish(GameOver::Exploded);
		assert_eq!(game.game_over(), Some(GameOver::BoardFull));
	}

	#[test]
	fn frame_round_trip() -> crate::Result<()> {
		let mut game = scripted((10, 10), vec![AppleData::new((2, 2), 1)], vec![]);
		game.create_apple()?;
		game.single_turn(Some(Direction::Right))?;

		let frame = game.frame();
		assert_eq!(frame.turn, 1);
		assert_eq!(frame.cells.len(), 4);
		assert_eq!(frame.paint_at((6, 5).into()), Some(Paint::Snake));
		assert_eq!(frame.paint_at((2, 2).into()), Some(Paint::Apple));

		let bytes = frame.as_bytes()?;
		let parsed = Frame::from_string(String::from_utf8(bytes)?)?;
		assert_eq!(parsed, frame);
		Ok(())
	}
}
