//! # number-guess
//!
//! A single-player number-guessing game engine.
//!
//! A secret integer is chosen in a bounded range and the player guesses
//! until it is found, getting directional feedback after every in-range
//! guess. Input handling and rendering belong to the caller; this crate
//! is the game state only.
//!
//! ## Example
//!
//! ```
//! use number_guess::{GuessingGame, Outcome};
//!
//! let mut game = GuessingGame::with_fixed_secret(1, 100, 42).unwrap();
//!
//! assert_eq!(game.guess(10), Outcome::TooLow);
//! assert_eq!(game.guess(90), Outcome::TooHigh);
//! assert_eq!(game.guess(0), Outcome::OutOfRange);
//! assert_eq!(game.attempts(), 2);
//!
//! assert_eq!(game.guess(42), Outcome::Correct);
//! assert!(game.is_finished());
//! assert_eq!(game.attempts(), 3);
//! ```
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `secret`: Secret sources (random, fixed, closure)
//! - `game`: The engine, outcomes and status

pub mod core;
pub mod game;
pub mod secret;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng,
    InvalidArgument, Result,
    DEFAULT_MAX, DEFAULT_MIN,
};

pub use crate::game::{GameStatus, GuessingGame, Outcome};

pub use crate::secret::{from_fn, FixedSource, FnSource, RandomSource, SecretSource};
