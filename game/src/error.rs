//! Errors returned by functions related to this crate.

use crate::entity::EntityId;
use std::{error, fmt};

/// Error type returned by crate's functions.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Board with the size specified in variant argument can't exist because
    /// one of its dimensions is zero.
    InvalidBoardSize((usize, usize)),

    /// Bomb blast radius specified in variant argument is less than
    /// [`Bomb::MIN_RADIUS`](crate::bomb::Bomb::MIN_RADIUS).
    InvalidRadius(i32),

    /// Bomb countdown specified in variant argument would detonate the bomb
    /// without counting down at least once.
    InvalidCountdown(i32),

    /// Snake can't be placed on a board with the size specified in variant
    /// argument.
    SnakeDoesNotFit((usize, usize)),

    /// Entity with id specified in variant argument isn't on the board or
    /// isn't of the expected kind.
    EntityNotFound(EntityId),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBoardSize((l, h)) => write!(f,
                "board size {}x{} is invalid, length and height must be greater than zero", l, h),
            Self::InvalidRadius(radius) => write!(f, "radius {} must be greater than 0", radius),
            Self::InvalidCountdown(turns) => write!(f,
                "turns until explosion must be greater than 1, got {}", turns),
            Self::SnakeDoesNotFit((l, h)) => write!(f,
                "can't place the snake in the center of {}x{} board", l, h),
            Self::EntityNotFound(id) => write!(f, "entity {} not found on the board", id),
        }
    }
}

impl error::Error for GameError {}

/// Error returned if can't parse [`Direction`](crate::aux::Direction) from a
/// string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
"can't parse Direction from {:?}, expected \"up\", \"down\", \"left\", \"right\" or their first letter", self.0)
    }
}

impl error::Error for ParseDirectionError {}
