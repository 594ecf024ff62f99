//! Core engine types: RNG, configuration, errors.
//!
//! These are shared by the secret sources and the game engine and carry
//! no game rules of their own.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_MAX, DEFAULT_MIN};
pub use error::{InvalidArgument, Result};
pub use rng::GameRng;
