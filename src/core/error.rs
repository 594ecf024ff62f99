//! Construction-time errors.
//!
//! The engine has exactly one failure kind, `InvalidArgument`, and it only
//! surfaces while a game is being built. Guessing never fails.

use thiserror::Error;

/// Rejected constructor or secret-source argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// Game bounds where `min >= max`.
    #[error("min must be < max (got min={min}, max={max})")]
    EmptyRange {
        /// Requested lower bound
        min: i32,
        /// Requested upper bound
        max: i32,
    },

    /// A secret source was asked to draw from `min > max`.
    #[error("secret source range is inverted (min={min} > max={max})")]
    InvertedRange {
        /// Requested lower bound
        min: i32,
        /// Requested upper bound
        max: i32,
    },

    /// A secret that does not lie in `[min, max]`.
    #[error("secret {secret} out of range [{min}, {max}]")]
    SecretOutOfRange {
        /// The offending secret
        secret: i32,
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },
}

/// Result alias for fallible construction.
pub type Result<T> = std::result::Result<T, InvalidArgument>;
