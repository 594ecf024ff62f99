//! The guessing game engine.

use std::ops::RangeInclusive;

use tracing::{debug, info, trace};

use crate::core::{GameConfig, InvalidArgument, Result, DEFAULT_MAX, DEFAULT_MIN};
use crate::secret::{FixedSource, RandomSource, SecretSource};

use super::outcome::{GameStatus, Outcome};

/// A single game: bounds, secret, attempt count, status.
///
/// Built fully or not at all; every constructor returns `Result`.
/// Mutated only through [`GuessingGame::guess`].
///
/// Not synchronized. Callers sharing a game across threads must serialize
/// `guess` calls themselves, e.g. behind one `Mutex<GuessingGame>`.
#[derive(Clone)]
pub struct GuessingGame {
    min: i32,
    max: i32,
    secret: i32,
    attempts: u32,
    status: GameStatus,
}

impl GuessingGame {
    /// Create a game over `min..=max`, asking `source` once for the secret.
    ///
    /// Fails when `min >= max`, when the source fails, or when the source
    /// returns a value outside the bounds.
    pub fn new<S: SecretSource>(min: i32, max: i32, mut source: S) -> Result<Self> {
        if min >= max {
            return Err(InvalidArgument::EmptyRange { min, max });
        }

        let secret = source.next_secret(min, max)?;
        if !(min..=max).contains(&secret) {
            return Err(InvalidArgument::SecretOutOfRange { secret, min, max });
        }

        debug!(min, max, "new guessing game");
        Ok(Self {
            min,
            max,
            secret,
            attempts: 0,
            status: GameStatus::Active,
        })
    }

    /// Default bounds `[1, 100]` with an entropy-seeded random secret.
    pub fn random() -> Result<Self> {
        let source = RandomSource::from_entropy();
        debug!(seed = source.seed(), "seeded random secret");
        Self::with_source(source)
    }

    /// Default bounds `[1, 100]` with a caller-supplied source.
    pub fn with_source<S: SecretSource>(source: S) -> Result<Self> {
        Self::new(DEFAULT_MIN, DEFAULT_MAX, source)
    }

    /// Game with a predetermined secret.
    ///
    /// Fails iff `min >= max` or `fixed` lies outside `[min, max]`.
    pub fn with_fixed_secret(min: i32, max: i32, fixed: i32) -> Result<Self> {
        if min >= max {
            return Err(InvalidArgument::EmptyRange { min, max });
        }
        if fixed < min || fixed > max {
            return Err(InvalidArgument::SecretOutOfRange { secret: fixed, min, max });
        }
        Self::new(min, max, FixedSource::new(fixed))
    }

    /// Game described by a `GameConfig`.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let source = config.secret_source();
        debug!(seed = source.seed(), "seeded random secret");
        Self::new(config.min, config.max, source)
    }

    /// Apply a guess and return the outcome.
    ///
    /// Once won, every call returns `Correct` without touching state,
    /// including guesses outside the bounds.
    pub fn guess(&mut self, value: i32) -> Outcome {
        if self.status.is_terminal() {
            return Outcome::Correct;
        }

        let outcome = if !self.contains(value) {
            Outcome::OutOfRange
        } else {
            match value.cmp(&self.secret) {
                std::cmp::Ordering::Less => Outcome::TooLow,
                std::cmp::Ordering::Greater => Outcome::TooHigh,
                std::cmp::Ordering::Equal => Outcome::Correct,
            }
        };

        // Saturating: `guess` must not panic at u32::MAX attempts.
        if outcome.counts_as_attempt() {
            self.attempts = self.attempts.saturating_add(1);
        }
        if outcome == Outcome::Correct {
            self.status = GameStatus::Won;
            info!(attempts = self.attempts, "secret found");
        }
        trace!(value, %outcome, attempts = self.attempts, "guess");
        outcome
    }

    /// Number of in-range guesses so far.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the secret has been found.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Lower bound of the range.
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound of the range.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// The guessing range as `min..=max`.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Check if `value` lies within the bounds.
    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// For diagnostics and tests only.
    #[cfg(test)]
    pub(crate) const fn secret(&self) -> i32 {
        self.secret
    }
}

// Hand-written so the secret never ends up in logs.
impl std::fmt::Debug for GuessingGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuessingGame")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("attempts", &self.attempts)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
