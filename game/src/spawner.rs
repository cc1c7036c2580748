//! Sources of new apples and bombs.
//!
//! The game doesn't decide where new entities appear, it asks a [`Spawner`]
//! for candidates and keeps asking while the board refuses them.

use crate::aux::Coordinates;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Data of a new apple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppleData {
	pub coords: Coordinates,
	pub score: u32,
}

impl AppleData {
	pub fn new(coords: impl Into<Coordinates>, score: u32) -> Self {
		Self {
			coords: coords.into(),
			score,
		}
	}
}

/// Data of a new bomb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BombData {
	pub coords: Coordinates,
	pub radius: i32,
	pub countdown: i32,
}

impl BombData {
	pub fn new(coords: impl Into<Coordinates>, radius: i32, countdown: i32) -> Self {
		Self {
			coords: coords.into(),
			radius,
			countdown,
		}
	}
}

/// Source of apple and bomb candidates. Returning `None` means the source
/// has nothing more to offer.
pub trait Spawner {
	fn apple(&mut self) -> Option<AppleData>;

	fn bomb(&mut self) -> Option<BombData>;
}

/// Spawner producing uniformly distributed candidates.
#[derive(Debug, Clone)]
pub struct RandomSpawner {
	rng: StdRng,
	size: (usize, usize),

	/// Apple scores.
	pub scores: RangeInclusive<u32>,

	/// Bomb blast radiuses.
	pub radiuses: RangeInclusive<i32>,

	/// Turns until bomb explosion.
	pub countdowns: RangeInclusive<i32>,
}

impl RandomSpawner {
	pub const SCORES: RangeInclusive<u32> = 1..=9;
	pub const RADIUSES: RangeInclusive<i32> = 2..=4;
	pub const COUNTDOWNS: RangeInclusive<i32> = 5..=9;

	/// Return a spawner for a board of `size` seeded from the OS entropy.
	pub fn new(size: (usize, usize)) -> Self {
		Self::with_rng(size, StdRng::from_entropy())
	}

	/// Return a spawner which produces the same candidates for the same
	/// `seed`.
	pub fn seeded(size: (usize, usize), seed: u64) -> Self {
		Self::with_rng(size, StdRng::seed_from_u64(seed))
	}

	fn with_rng(size: (usize, usize), rng: StdRng) -> Self {
		Self {
			rng,
			size,
			scores: Self::SCORES,
			radiuses: Self::RADIUSES,
			countdowns: Self::COUNTDOWNS,
		}
	}

	/// Generate random coordinates framed by the board.
	fn random_coords(&mut self) -> Coordinates {
		Coordinates::new(
			self.rng.gen_range(0..self.size.0.max(1)) as i32,
			self.rng.gen_range(0..self.size.1.max(1)) as i32,
		)
	}
}

impl Spawner for RandomSpawner {
	fn apple(&mut self) -> Option<AppleData> {
		let coords = self.random_coords();
		let score = self.rng.gen_range(self.scores.clone());
		Some(AppleData { coords, score })
	}

	fn bomb(&mut self) -> Option<BombData> {
		let coords = self.random_coords();
		let radius = self.rng.gen_range(self.radiuses.clone());
		let countdown = self.rng.gen_range(self.countdowns.clone());
		Some(BombData {
			coords,
			radius,
			countdown,
		})
	}
}

/// Spawner replaying fixed candidates in order, starting over when it runs
/// out of them. An empty list yields nothing.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
	apples: Vec<AppleData>,
	bombs: Vec<BombData>,
	next_apple: usize,
	next_bomb: usize,
}

impl Scripted {
	pub fn new(apples: Vec<AppleData>, bombs: Vec<BombData>) -> Self {
		Self {
			apples,
			bombs,
			next_apple: 0,
			next_bomb: 0,
		}
	}
}

fn cycle<T: Copy>(items: &[T], next: &mut usize) -> Option<T> {
	let item = *items.get(*next % items.len().max(1))?;
	*next += 1;
	Some(item)
}

impl Spawner for Scripted {
	fn apple(&mut self) -> Option<AppleData> {
		cycle(&self.apples, &mut self.next_apple)
	}

	fn bomb(&mut self) -> Option<BombData> {
		cycle(&self.bombs, &mut self.next_bomb)
	}
}
