//! Apple abstractions.

use crate::{
    aux::{Coordinates, Paint},
    entity::Printable,
};
use serde::{Deserialize, Serialize};

/// Apple which is going to be eaten by a snake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Apple {
    coords: Coordinates,
    score: u32,
}

impl Apple {
    /// Return a new [`Apple`] worth `score` points.
    pub fn new(coords: Coordinates, score: u32) -> Self {
        Self { coords, score }
    }

    /// Return apple's location.
    pub fn location(&self) -> Coordinates {
        self.coords
    }

    /// Points added to the player's score once the apple is eaten.
    pub fn score(&self) -> u32 {
        self.score
    }
}

impl Printable for Apple {
    fn coords(&self) -> Vec<Coordinates> {
        vec![self.coords]
    }

    fn paint(&self) -> Paint {
        Paint::Apple
    }
}
