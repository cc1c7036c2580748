//! Things which can be placed on the [`Board`](crate::board::Board).

use crate::{
    apple::Apple,
    aux::{Coordinates, Paint},
    bomb::Bomb,
    snake::Snake,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

/// Something that occupies board cells and paints them.
pub trait Printable {
    /// Cells occupied by the object.
    fn coords(&self) -> Vec<Coordinates>;

    /// Paint used to draw the object.
    fn paint(&self) -> Paint;
}

/// A printable object which changes each turn.
pub trait Moving: Printable {
    /// Make a single move.
    fn mv(&mut self);
}

/// Handle of an entity placed on a board. Ids are never reused by the board
/// which issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub(crate) u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Any entity of the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    /// The snake.
    Snake(Snake),

    /// An apple.
    Apple(Apple),

    /// A bomb.
    Bomb(Bomb),
}

impl Entity {
    pub fn as_snake(&self) -> Option<&Snake> {
        match self {
            Self::Snake(snake) => Some(snake),
            _ => None,
        }
    }

    pub fn as_snake_mut(&mut self) -> Option<&mut Snake> {
        match self {
            Self::Snake(snake) => Some(snake),
            _ => None,
        }
    }

    pub fn as_apple(&self) -> Option<&Apple> {
        match self {
            Self::Apple(apple) => Some(apple),
            _ => None,
        }
    }

    pub fn as_bomb(&self) -> Option<&Bomb> {
        match self {
            Self::Bomb(bomb) => Some(bomb),
            _ => None,
        }
    }

    pub fn as_bomb_mut(&mut self) -> Option<&mut Bomb> {
        match self {
            Self::Bomb(bomb) => Some(bomb),
            _ => None,
        }
    }

    fn cell_set(&self) -> BTreeSet<Coordinates> {
        self.coords().into_iter().collect()
    }
}

impl Printable for Entity {
    fn coords(&self) -> Vec<Coordinates> {
        match self {
            Self::Snake(snake) => snake.coords(),
            Self::Apple(apple) => apple.coords(),
            Self::Bomb(bomb) => bomb.coords(),
        }
    }

    fn paint(&self) -> Paint {
        match self {
            Self::Snake(snake) => snake.paint(),
            Self::Apple(apple) => apple.paint(),
            Self::Bomb(bomb) => bomb.paint(),
        }
    }
}

/// Entities are equal when they paint the same set of cells with the same
/// paint, whatever their kind-specific state is.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.paint() == other.paint() && self.cell_set() == other.cell_set()
    }
}

impl From<Snake> for Entity {
    fn from(snake: Snake) -> Self {
        Self::Snake(snake)
    }
}

impl From<Apple> for Entity {
    fn from(apple: Apple) -> Self {
        Self::Apple(apple)
    }
}

impl From<Bomb> for Entity {
    fn from(bomb: Bomb) -> Self {
        Self::Bomb(bomb)
    }
}
