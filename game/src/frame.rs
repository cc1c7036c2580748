//! Snapshots of the game which are handed to renderers and viewers.

use crate::{
	aux::{Coordinates, Paint},
	Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One painted cell of a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FrameCell {
	pub coordinates: Coordinates,
	pub paint: Paint,
}

/// State of the game after a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Frame {
	/// Number of turns played so far.
	pub turn: u64,
	pub score: u32,
	pub playing: bool,

	/// Occupied cells sorted by coordinates.
	pub cells: Vec<FrameCell>,
}

impl Frame {
	/// Convert [`Frame`] to binary json.
	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		Ok(serde_json::to_string(self)?.as_bytes().to_vec())
	}

	/// Convert json string to [`Frame`].
	pub fn from_string<T: AsRef<str>>(string: T) -> Result<Self> {
		Ok(serde_json::from_str(string.as_ref())?)
	}

	/// Return paint of a cell.
	pub fn paint_at(&self, coordinates: Coordinates) -> Option<Paint> {
		self.cells
			.binary_search_by_key(&coordinates, |c| c.coordinates)
			.ok()
			.map(|i| self.cells[i].paint)
	}
}

impl fmt::Display for Frame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "turn {}, score {}, playing: {}", self.turn, self.score, self.playing)?;
		for cell in &self.cells {
			writeln!(f, "{} at {}", cell.paint, cell.coordinates)?;
		}
		Ok(())
	}
}
