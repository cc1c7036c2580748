//! Game board abstractions.
//!
//! The board is `length` columns by `height` rows, (0, 0) is the bottom left
//! cell. It keeps placed entities and evaluates which [`Paint`] is shown on
//! each cell when several entities overlap.

use crate::{
	aux::{Coordinates, Paint},
	entity::{Entity, EntityId, Printable},
	error::GameError,
	Result,
};
use itertools::iproduct;
use log::trace;
use std::collections::HashMap;

/// Display precedences of paints. A stronger paint hides weaker ones
/// sharing the same cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Strengths(HashMap<Paint, i32>);

impl Strengths {
	/// Return a new [`Strengths`] table.
	pub fn new(table: impl IntoIterator<Item = (Paint, i32)>) -> Self {
		Self(table.into_iter().collect())
	}

	/// Return precedence of `paint`. Paints missing from the table are
	/// always overridden by the configured ones.
	pub fn of(&self, paint: Paint) -> i32 {
		match self.0.get(&paint) {
			Some(strength) => *strength,
			None => self.weakest() - 1,
		}
	}

	fn weakest(&self) -> i32 {
		self.0.values().copied().min().unwrap_or(0)
	}
}

impl Default for Strengths {
	/// Apples are drawn under the snake, the snake under bombs and bombs under
	/// their own shock-wave.
	fn default() -> Self {
		Self::new([
			(Paint::Apple, 0),
			(Paint::Snake, 1),
			(Paint::Bomb, 2),
			(Paint::Shockwave, 3),
		])
	}
}

/// Why [`Board::add`] refused an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Rejection {
	Duplicate,
	OutOfBounds(Coordinates),
	Occupied(Coordinates),
}

/// Entity placed on the board.
#[derive(Debug, Clone)]
struct Placed {
	id: EntityId,
	entity: Entity,
}

/// Game board.
#[derive(Debug, Clone)]
pub struct Board {
	size: (usize, usize),
	strengths: Strengths,

	/// Entities in the order they were placed.
	placed: Vec<Placed>,
	next_id: u64,

	/// Occupied cells and their paints. Valid only while `dirty` is false.
	occupied: HashMap<Coordinates, Paint>,
	dirty: bool,
}

impl Board {
	/// Return a new empty [`Board`] of `size` (length, height).
	pub fn new(size: (usize, usize), strengths: Strengths) -> Result<Self> {
		if size.0 == 0 || size.1 == 0 {
			return Err(Box::new(GameError::InvalidBoardSize(size)));
		}
		Ok(Self {
			size,
			strengths,
			placed: Vec::new(),
			next_id: 0,
			occupied: HashMap::with_capacity(size.0 * size.1),
			dirty: false,
		})
	}

	/// Place an entity on the board and return its id.
	///
	/// Nothing is placed and `None` is returned if an equal entity is
	/// already on the board, or any of its cells is outside the board or
	/// already occupied.
	pub fn add(&mut self, entity: impl Into<Entity>) -> Option<EntityId> {
		let entity = entity.into();
		if let Err(reason) = self.check_placement(&entity) {
			trace!("{:?} rejected: {:?}", entity.paint(), reason);
			return None;
		}

		let id = EntityId(self.next_id);
		self.next_id += 1;
		self.placed.push(Placed { id, entity });
		self.dirty = true;
		Some(id)
	}

	fn check_placement(&mut self, entity: &Entity) -> std::result::Result<(), Rejection> {
		self.update();

		if self.contains(entity) {
			return Err(Rejection::Duplicate);
		}
		let cells = entity.coords();
		if let Some(cell) = cells.iter().find(|c| !self.is_cell_in_board(**c)) {
			return Err(Rejection::OutOfBounds(*cell));
		}
		if let Some(cell) = cells.iter().find(|c| self.occupied.contains_key(*c)) {
			return Err(Rejection::Occupied(*cell));
		}
		Ok(())
	}

	/// Take an entity off the board. Unknown ids are ignored.
	pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
		let index = self.placed.iter().position(|p| p.id == id)?;
		self.dirty = true;
		Some(self.placed.remove(index).entity)
	}

	/// Return true if an entity equal to `entity` is on the board.
	pub fn contains(&self, entity: &Entity) -> bool {
		self.placed.iter().any(|p| &p.entity == entity)
	}

	pub fn get(&self, id: EntityId) -> Option<&Entity> {
		self.placed.iter().find(|p| p.id == id).map(|p| &p.entity)
	}

	/// Return a mutable reference to an entity. The occupancy is
	/// re-evaluated on the next read since the entity may change.
	pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
		let placed = self.placed.iter_mut().find(|p| p.id == id)?;
		self.dirty = true;
		Some(&mut placed.entity)
	}

	/// Iterate over placed entities in placement order.
	pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
		self.placed.iter().map(|p| (p.id, &p.entity))
	}

	/// Evaluate paints of all cells, indexed as `[column][row]`.
	///
	/// Entity cells outside of the board are skipped. When two entities of
	/// equal strength share a cell, the one placed later is shown.
	pub fn render(&self) -> Vec<Vec<Option<Paint>>> {
		let mut board = vec![vec![None; self.size.1]; self.size.0];

		for placed in &self.placed {
			let paint = placed.entity.paint();
			for cell in placed.entity.coords() {
				if !self.is_cell_in_board(cell) {
					continue;
				}
				let slot = &mut board[cell.x as usize][cell.y as usize];
				*slot = Some(match *slot {
					Some(current) => self.determine_paint(current, paint),
					None => paint,
				});
			}
		}

		board
	}

	/// Return the paint shown when `candidate` is drawn over `current`.
	pub fn determine_paint(&self, current: Paint, candidate: Paint) -> Paint {
		if self.strengths.of(candidate) >= self.strengths.of(current) {
			candidate
		} else {
			current
		}
	}

	/// Re-evaluate the occupied cells.
	pub fn update(&mut self) {
		let board = self.render();
		self.occupied.clear();
		for cell in self.coordinates() {
			if let Some(paint) = board[cell.x as usize][cell.y as usize] {
				self.occupied.insert(cell, paint);
			}
		}
		self.dirty = false;
	}

	fn refresh(&mut self) {
		if self.dirty {
			self.update();
		}
	}

	/// Return occupied cells with their paints.
	pub fn cells(&mut self) -> &HashMap<Coordinates, Paint> {
		self.refresh();
		&self.occupied
	}

	/// Return paint of a cell, `None` if it's empty or outside the board.
	pub fn cell(&mut self, cell: Coordinates) -> Option<Paint> {
		self.cells().get(&cell).copied()
	}

	pub fn cell_is_empty(&mut self, cell: Coordinates) -> bool {
		self.cell(cell).is_none()
	}

	/// Return true if there are no empty cells on the board.
	pub fn is_full(&mut self) -> bool {
		let total = self.size.0 * self.size.1;
		self.cells().len() == total
	}

	pub fn is_cell_in_board(&self, cell: Coordinates) -> bool {
		(0..self.size.0 as i32).contains(&cell.x) && (0..self.size.1 as i32).contains(&cell.y)
	}

	/// Iterate over coordinates of every board cell.
	pub fn coordinates(&self) -> impl Iterator<Item = Coordinates> {
		iproduct!(0..self.size.0 as i32, 0..self.size.1 as i32).map(Coordinates::from)
	}

	pub fn length(&self) -> usize {
		self.size.0
	}

	pub fn height(&self) -> usize {
		self.size.1
	}

	/// Return (length, height) of the board.
	pub fn size(&self) -> (usize, usize) {
		self.size
	}

	pub fn strengths(&self) -> &Strengths {
		&self.strengths
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{apple::Apple, bomb::Bomb, entity::Moving, snake::Snake};

	fn board(size: (usize, usize)) -> Board {
		Board::new(size, Strengths::default()).unwrap()
	}

	#[test]
	fn invalid_size() {
		assert!(Board::new((0, 5), Strengths::default()).is_err());
		assert!(Board::new((5, 0), Strengths::default()).is_err());
		assert!(Board::new((1, 1), Strengths::default()).is_ok());
	}

	#[test]
	fn add_rejections() {
		let mut board = board((10, 10));

		assert!(board.add(Apple::new((2, 2).into(), 1)).is_some());
		// same apple again
		assert!(board.add(Apple::new((2, 2).into(), 7)).is_none());
		// outside
		assert!(board.add(Apple::new((10, 2).into(), 1)).is_none());
		assert!(board.add(Apple::new((-1, 0).into(), 1)).is_none());
		// snake body below the board
		assert!(board.add(Snake::new((4, 1).into())).is_none());
		// occupied by an apple
		assert!(board.add(Snake::new((2, 4).into())).is_none());
		assert!(board.add(Snake::new((3, 4).into())).is_some());

		assert_eq!(board.entities().count(), 2);
	}

	#[test]
	fn remove_and_add_again() {
		let mut board = board((10, 10));
		let snake = board.add(Snake::new((5, 5).into())).unwrap();
		let apple = board.add(Apple::new((1, 1).into(), 3)).unwrap();

		let removed = board.remove(apple).unwrap();
		assert!(board.remove(apple).is_none());
		assert!(board.cell_is_empty((1, 1).into()));
		assert!(board.add(removed).is_some());

		let removed = board.remove(snake).unwrap();
		assert!(board.add(removed).is_some());
		assert_eq!(board.cell((5, 4).into()), Some(Paint::Snake));
	}

	#[test]
	fn stronger_paint_wins() {
		let mut board = board((10, 10));
		let snake = board.add(Snake::new((5, 5).into())).unwrap();
		board.add(Apple::new((5, 6).into(), 1)).unwrap();

		board.get_mut(snake).and_then(Entity::as_snake_mut).unwrap().mv();

		let rendered = board.render();
		assert_eq!(rendered[5][6], Some(Paint::Snake));
		assert_eq!(rendered[5][3], None);
		assert_eq!(board.cell((5, 6).into()), Some(Paint::Snake));
	}

	#[test]
	fn unknown_paint_is_weakest() {
		let strengths = Strengths::new([(Paint::Snake, 5), (Paint::Bomb, 7)]);
		assert_eq!(strengths.of(Paint::Apple), 4);
		assert_eq!(strengths.of(Paint::Shockwave), 4);

		let board = Board::new((3, 3), strengths).unwrap();
		assert_eq!(board.determine_paint(Paint::Snake, Paint::Apple), Paint::Snake);
		assert_eq!(board.determine_paint(Paint::Apple, Paint::Snake), Paint::Snake);
		// equal strengths, the later one wins
		assert_eq!(board.determine_paint(Paint::Apple, Paint::Shockwave), Paint::Shockwave);

		assert_eq!(Strengths::new([]).of(Paint::Bomb), -1);
	}

	#[test]
	fn out_of_board_cells_are_not_rendered() -> crate::Result<()> {
		let mut board = board((3, 3));
		let id = board.add(Bomb::new((0, 0).into(), 2, 2)?).unwrap();
		for _ in 0..3 {
			board.get_mut(id).and_then(Entity::as_bomb_mut).unwrap().mv();
		}

		let cells = board.cells().clone();
		let expected: HashMap<Coordinates, Paint> = [
			(Coordinates::new(1, 0), Paint::Shockwave),
			(Coordinates::new(0, 1), Paint::Shockwave),
		]
		.into_iter()
		.collect();
		assert_eq!(cells, expected);
		Ok(())
	}

	#[test]
	fn cache_agrees_with_render() {
		let mut board = board((6, 4));
		board.add(Snake::new((2, 2).into())).unwrap();
		board.add(Apple::new((4, 3).into(), 1)).unwrap();

		let rendered = board.render();
		board.update();
		let cells = board.cells().clone();
		for cell in board.coordinates() {
			assert_eq!(cells.get(&cell).copied(), rendered[cell.x as usize][cell.y as usize]);
		}
	}

	#[test]
	fn fills_up() {
		let mut board = board((2, 2));
		assert!(!board.is_full());
		for cell in board.coordinates().collect::<Vec<_>>() {
			assert!(board.add(Apple::new(cell, 0)).is_some());
		}
		assert!(board.is_full());
		assert_eq!(board.coordinates().count(), 4);
	}
}
