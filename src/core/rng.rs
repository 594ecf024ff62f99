//! Deterministic random number generation for secret selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Replayable**: The seed is kept, even when drawn from entropy
//!
//! ## Usage
//!
//! ```
//! use number_guess::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//!
//! // Same seed, same draws
//! assert_eq!(rng.gen_range_inclusive(1, 100), again.gen_range_inclusive(1, 100));
//!
//! // Draws never leave the closed range
//! let v = rng.gen_range_inclusive(-5, 5);
//! assert!((-5..=5).contains(&v));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG backing the random secret source.
///
/// Uses ChaCha8 for speed while keeping statistically sound output.
/// The seed is retained so a game can be reproduced from its logs.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is kept, so `seed()` still reports something replayable.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw uniformly from `min..=max`.
    ///
    /// Callers must ensure `min <= max`; the secret sources check this
    /// before drawing.
    pub fn gen_range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        self.inner.gen_range(min..=max)
    }
}
