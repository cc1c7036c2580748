//! Snake abstractions.

use crate::{
    aux::*,
    entity::{Moving, Printable},
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Snake abstraction structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Snake {
    /// Body cells from the tail to the head.
    parts: Vec<Coordinates>,

    /// Direction of snake's head.
    direction: Direction,

    /// How many of the following moves keep the tail in place.
    growth: usize,
}

impl Snake {
    /// Number of parts the snake grows by after eating an apple.
    pub const GROWTH: usize = 3;

    /// Length of a new snake.
    pub const INITIAL_LENGTH: usize = 3;

    /// Return a vertical [`Snake`] heading up with its head at `head` and the
    /// rest of the body below it.
    pub fn new(head: Coordinates) -> Self {
        let parts = (0..Self::INITIAL_LENGTH as i32)
            .rev()
            .map(|i| Coordinates::new(head.x, head.y - i))
            .collect();
        Self {
            parts,
            direction: Direction::Up,
            growth: 0,
        }
    }

    /// Return a [`Snake`] with its head in the center of a board of `size`
    /// (length, height).
    pub fn centered(size: (usize, usize)) -> Self {
        Self::new(Coordinates::new((size.0 / 2) as i32, (size.1 / 2) as i32))
    }

    /// Change snake's direction. Turning back is the only forbidden move, in
    /// that case `false` is returned and the direction stays as it was.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.direction == -direction {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Make the snake grow on the next [`GROWTH`](Self::GROWTH) moves.
    pub fn eat_apple(&mut self) {
        self.growth += Self::GROWTH;
    }

    /// Return true if some cell is occupied by two snake parts.
    pub fn bumped(&self) -> bool {
        !self.parts.iter().all_unique()
    }

    /// Return the snake head.
    pub fn head(&self) -> Coordinates {
        // never empty: parts only grow or shift
        self.parts[self.parts.len() - 1]
    }

    /// Return body cells from the tail to the head.
    pub fn parts(&self) -> &[Coordinates] {
        &self.parts
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Pending growth.
    pub fn growth(&self) -> usize {
        self.growth
    }

    /// Return snake's length (amount of parts).
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false, a snake can't lose its parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Printable for Snake {
    fn coords(&self) -> Vec<Coordinates> {
        self.parts.clone()
    }

    fn paint(&self) -> Paint {
        Paint::Snake
    }
}

impl Moving for Snake {
    fn mv(&mut self) {
        if self.growth == 0 {
            self.parts.remove(0);
        } else {
            self.growth -= 1;
        }
        let head = self.head() + self.direction.offset();
        self.parts.push(head);
    }
}

#[cfg(test)]
pub(crate) fn bump_parts(snake: &mut Snake) {
    let head = snake.head();
    snake.parts.insert(0, head);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(v: &[(i32, i32)]) -> Vec<Coordinates> {
        v.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn spawns_in_center() {
        let snake = Snake::centered((10, 10));
        assert_eq!(snake.parts(), cells(&[(5, 3), (5, 4), (5, 5)]));
        assert_eq!(snake.head(), Coordinates::new(5, 5));
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.growth(), 0);
    }

    #[test]
    fn single_move() {
        let mut snake = Snake::centered((10, 10));
        snake.mv();
        assert_eq!(snake.parts(), cells(&[(5, 4), (5, 5), (5, 6)]));
        assert_eq!(snake.head(), Coordinates::new(5, 6));
    }

    #[test]
    fn only_reversal_is_rejected() {
        for current in Direction::ALL {
            for requested in Direction::ALL {
                let mut snake = Snake {
                    direction: current,
                    ..Snake::new((5, 5).into())
                };
                let accepted = snake.change_direction(requested);
                assert_eq!(accepted, requested != -current, "{} -> {}", current, requested);
                let expected = if accepted { requested } else { current };
                assert_eq!(snake.direction(), expected);
            }
        }
    }

    #[test]
    fn turning_down_from_up_is_ignored() {
        let mut snake = Snake::new((5, 5).into());
        assert!(!snake.change_direction(Direction::Down));
        snake.mv();
        assert_eq!(snake.head(), Coordinates::new(5, 6));
    }

    #[test]
    fn grows_for_three_moves() {
        let mut snake = Snake::new((5, 5).into());
        snake.eat_apple();
        assert_eq!(snake.growth(), 3);

        let tail = snake.parts()[0];
        for expected_len in 4..=6 {
            snake.mv();
            assert_eq!(snake.len(), expected_len);
            assert_eq!(snake.parts()[0], tail);
        }

        snake.mv();
        assert_eq!(snake.len(), 6);
        assert_ne!(snake.parts()[0], tail);
        assert_eq!(snake.growth(), 0);
    }

    #[test]
    fn turning_moves_head() {
        let mut snake = Snake::new((5, 5).into());
        snake.change_direction(Direction::Right);
        snake.mv();
        assert_eq!(snake.head(), Coordinates::new(6, 5));
        snake.change_direction(Direction::Down);
        snake.mv();
        assert_eq!(snake.parts(), cells(&[(5, 5), (6, 5), (6, 4)]));
    }

    #[test]
    fn bumped_into_itself() {
        let mut snake = Snake::new((5, 5).into());
        snake.eat_apple();
        use Direction::*;
        for dir in [Right, Right, Right, Down, Left] {
            snake.change_direction(dir);
            snake.mv();
        }
        assert!(!snake.bumped());

        snake.change_direction(Up);
        snake.mv();
        assert!(snake.bumped());
        assert_eq!(snake.head(), Coordinates::new(7, 5));

        let mut snake = Snake::new((1, 1).into());
        bump_parts(&mut snake);
        assert!(snake.bumped());
    }
}
