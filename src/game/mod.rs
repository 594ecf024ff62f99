//! The guessing game itself.
//!
//! A `GuessingGame` has two states, `Active` and `Won`:
//! - Out-of-range guesses return `OutOfRange` and cost nothing
//! - In-range guesses count as attempts and return `TooLow`, `TooHigh`
//!   or `Correct`
//! - `Correct` moves the game to `Won`, which absorbs every later guess

mod engine;
mod outcome;

pub use engine::GuessingGame;
pub use outcome::{GameStatus, Outcome};
