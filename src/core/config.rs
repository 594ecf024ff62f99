//! Game configuration.
//!
//! A `GameConfig` describes the guessing range and, optionally, the seed
//! for the random secret. It is plain serde data so embedding applications
//! can load it from whatever format they already use.

use serde::{Deserialize, Serialize};

use super::error::{InvalidArgument, Result};
use super::rng::GameRng;
use crate::secret::RandomSource;

/// Default lower bound of the guessing range.
pub const DEFAULT_MIN: i32 = 1;

/// Default upper bound of the guessing range.
pub const DEFAULT_MAX: i32 = 100;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Inclusive lower bound.
    pub min: i32,

    /// Inclusive upper bound. Must be greater than `min`.
    pub max: i32,

    /// Seed for the random secret.
    /// `None` draws a fresh seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom bounds.
    #[must_use]
    pub fn with_bounds(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the bounds describe a non-empty range with `min < max`.
    pub fn validate(&self) -> Result<()> {
        if self.min >= self.max {
            return Err(InvalidArgument::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Build the random secret source this config describes.
    #[must_use]
    pub fn secret_source(&self) -> RandomSource {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        RandomSource::new(rng)
    }
}
