//! Secret source trait and its implementations.

use tracing::trace;

use crate::core::{GameRng, InvalidArgument, Result};

/// Supplies the secret for a new game.
///
/// The engine calls `next_secret` exactly once, while it is being built.
///
/// ## Contract
///
/// - Returns `v` with `min <= v <= max`
/// - Fails with `InvalidArgument::InvertedRange` when `min > max`
///
/// The engine re-checks the returned value, so a misbehaving source
/// produces a construction error rather than an unwinnable game.
pub trait SecretSource {
    /// Produce a secret in `min..=max`.
    fn next_secret(&mut self, min: i32, max: i32) -> Result<i32>;
}

impl<S: SecretSource + ?Sized> SecretSource for &mut S {
    fn next_secret(&mut self, min: i32, max: i32) -> Result<i32> {
        (**self).next_secret(min, max)
    }
}

impl<S: SecretSource + ?Sized> SecretSource for Box<S> {
    fn next_secret(&mut self, min: i32, max: i32) -> Result<i32> {
        (**self).next_secret(min, max)
    }
}

fn check_order(min: i32, max: i32) -> Result<()> {
    if min > max {
        return Err(InvalidArgument::InvertedRange { min, max });
    }
    Ok(())
}

/// Uniform random secrets drawn from a seedable `GameRng`.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: GameRng,
}

impl RandomSource {
    /// Draw secrets from the given RNG.
    #[must_use]
    pub const fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Deterministic source for tests and replays.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SecretSource for RandomSource {
    fn next_secret(&mut self, min: i32, max: i32) -> Result<i32> {
        check_order(min, max)?;
        trace!(min, max, seed = self.rng.seed(), "drawing random secret");
        Ok(self.rng.gen_range_inclusive(min, max))
    }
}

/// Always yields the same predetermined value.
///
/// The value is not checked against the bounds here; whoever builds the
/// game with it is responsible for that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSource(pub i32);

impl FixedSource {
    /// Create a source that always yields `value`.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// The predetermined value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl SecretSource for FixedSource {
    fn next_secret(&mut self, min: i32, max: i32) -> Result<i32> {
        check_order(min, max)?;
        Ok(self.0)
    }
}

/// Adapter turning a closure into a `SecretSource`.
///
/// ```
/// use number_guess::secret::{from_fn, SecretSource};
///
/// let mut midpoint = from_fn(|min, max| min + (max - min) / 2);
/// assert_eq!(midpoint.next_secret(1, 100).unwrap(), 50);
/// ```
#[derive(Clone, Debug)]
pub struct FnSource<F>(F);

/// Wrap a closure `(min, max) -> secret` as a `SecretSource`.
pub fn from_fn<F>(f: F) -> FnSource<F>
where
    F: FnMut(i32, i32) -> i32,
{
    FnSource(f)
}

impl<F> SecretSource for FnSource<F>
where
    F: FnMut(i32, i32) -> i32,
{
    fn next_secret(&mut self, min: i32, max: i32) -> Result<i32> {
        check_order(min, max)?;
        Ok((self.0)(min, max))
    }
}
