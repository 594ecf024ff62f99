//! Secret sources.
//!
//! A game asks its source for a secret once, at construction. Sources are
//! swappable:
//! - `RandomSource`: uniform draw from a seedable `GameRng`
//! - `FixedSource`: a predetermined value, for deterministic tests
//! - `FnSource`: any closure `(min, max) -> secret`

mod source;

pub use source::{from_fn, FixedSource, FnSource, RandomSource, SecretSource};
