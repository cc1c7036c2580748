//! Headless bomb snake driver.
//!
//! The engine lives in the [`game`] crate. This crate feeds it with moves
//! from a script or an autopilot and draws the board as text.

#![warn(missing_docs)]

pub mod replay;
pub mod script;
pub mod term;
