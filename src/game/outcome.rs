//! Guess outcomes and game status.

use serde::{Deserialize, Serialize};

/// Result of a single guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// In range, below the secret.
    TooLow,
    /// In range, above the secret.
    TooHigh,
    /// The secret, or any guess once the game is won.
    Correct,
    /// Outside `[min, max]`. Not counted as an attempt.
    OutOfRange,
}

impl Outcome {
    /// Whether a guess with this outcome is counted as an attempt
    /// while the game is active.
    #[must_use]
    pub const fn counts_as_attempt(self) -> bool {
        !matches!(self, Outcome::OutOfRange)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Outcome::TooLow => "too low",
            Outcome::TooHigh => "too high",
            Outcome::Correct => "correct",
            Outcome::OutOfRange => "out of range",
        };
        f.write_str(s)
    }
}

/// Lifecycle state of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Accepting guesses.
    #[default]
    Active,
    /// Secret found. Terminal and absorbing.
    Won,
}

impl GameStatus {
    /// Check if no further state change is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won)
    }
}
