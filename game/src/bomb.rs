//! Bomb abstractions.

use crate::{
    aux::{Coordinates, Paint},
    entity::{Moving, Printable},
    error::GameError,
    Result,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Where a bomb is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BombState {
    /// Counting down, occupies its location only.
    Armed,

    /// Exploded on the last move, ripples haven't spread yet.
    JustDetonated,

    /// Shock-wave ripples are spreading.
    Expanding,

    /// Ripples went past the blast radius.
    Spent,
}

/// A bomb which counts down, explodes and sends a diamond shaped shock-wave
/// across the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Bomb {
    location: Coordinates,
    max_radius: i32,
    countdown: i32,
    detonated: bool,
    radius: i32,
}

impl Bomb {
    /// Smallest allowed blast radius.
    pub const MIN_RADIUS: i32 = 1;

    /// Countdown value at which the next move detonates the bomb.
    pub const EXPLOSION_THRESHOLD: i32 = 1;

    /// Return a new armed [`Bomb`] which detonates on its `countdown`-th
    /// move and whose ripples fade after reaching `radius`.
    pub fn new(location: Coordinates, radius: i32, countdown: i32) -> Result<Self> {
        if radius < Self::MIN_RADIUS {
            return Err(Box::new(GameError::InvalidRadius(radius)));
        }
        if countdown <= Self::EXPLOSION_THRESHOLD {
            return Err(Box::new(GameError::InvalidCountdown(countdown)));
        }
        Ok(Self {
            location,
            max_radius: radius,
            countdown,
            detonated: false,
            radius: 0,
        })
    }

    /// Return true once the shock-wave has faded away.
    pub fn attack_is_over(&self) -> bool {
        self.radius > self.max_radius
    }

    pub fn state(&self) -> BombState {
        if !self.detonated {
            BombState::Armed
        } else if self.attack_is_over() {
            BombState::Spent
        } else if self.radius == 0 {
            BombState::JustDetonated
        } else {
            BombState::Expanding
        }
    }

    /// Cells on the outline of a diamond of `radius` around the bomb, i.e.
    /// every cell whose manhattan distance to the bomb is exactly `radius`.
    pub fn ripples(&self, radius: i32) -> Vec<Coordinates> {
        let mut points = BTreeSet::new();
        for k in 0..=radius {
            let (dx, dy) = (k, radius - k);
            for (sx, sy) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
                points.insert(self.location + Coordinates::new(sx * dx, sy * dy));
            }
        }
        points.into_iter().collect()
    }

    pub fn location(&self) -> Coordinates {
        self.location
    }

    /// Blast radius.
    pub fn max_radius(&self) -> i32 {
        self.max_radius
    }

    /// Current ripple radius.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn countdown(&self) -> i32 {
        self.countdown
    }

    pub fn detonated(&self) -> bool {
        self.detonated
    }
}

impl Printable for Bomb {
    fn coords(&self) -> Vec<Coordinates> {
        if self.detonated {
            self.ripples(self.radius)
        } else {
            self.ripples(0)
        }
    }

    fn paint(&self) -> Paint {
        match self.detonated {
            false => Paint::Bomb,
            true => Paint::Shockwave,
        }
    }
}

impl Moving for Bomb {
    /// Count down if the bomb is still armed, detonate it when the countdown
    /// reaches the threshold, and advance the ripples afterwards.
    fn mv(&mut self) {
        if self.countdown > Self::EXPLOSION_THRESHOLD {
            self.countdown -= 1;
        } else if !self.detonated {
            self.detonated = true;
            self.radius = 0;
        } else {
            self.radius += 1;
        }
    }
}
