use std::ops::Range;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Both coordinates of a sampled position fall in this half-open range.
pub const COORDINATE_RANGE: Range<f32> = 0.0..10.0;

/// A simulated player location. Goes over the wire as a JSON array `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position(pub f32, pub f32);

impl Position {
    /// Sample each coordinate independently and uniformly from `COORDINATE_RANGE`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Position {
        Position(
            rng.random_range(COORDINATE_RANGE),
            rng.random_range(COORDINATE_RANGE),
        )
    }

    /// `[x, y]`, one space after the comma.
    pub fn to_json(&self) -> serde_json::Result<String> {
        Ok(format!(
            "[{}, {}]",
            serde_json::to_string(&self.0)?,
            serde_json::to_string(&self.1)?
        ))
    }

    pub fn from_json(text: &str) -> serde_json::Result<Position> {
        serde_json::from_str(text)
    }
}
