//! Deterministic simulation-level RNG.
//!
//! # Determinism strategy
//!
//! A run owns exactly one `SimRng`, seeded from `SimConfig::seed`.  Arrival
//! generation draws from it first, then the balking policy draws from it in
//! main-loop order.  Nothing else touches it, so a (seed, config) pair fully
//! determines the roster.
//!
//! Runs never share RNG state: a batch of seeds is a batch of independent
//! `SimRng`s, one per `Simulation`, with no ordering dependency between them.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Per-run deterministic RNG.
///
/// Deliberately `!Clone`: duplicating the stream would let two consumers see
/// the same draws.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand`/`rand_distr`
    /// distribution types (`dist.sample(rng.inner())`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    ///
    /// For `f64` this is uniform in `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
