//! Uniform random input generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fills buffers with values drawn uniformly from `[-1, 1]`.
///
/// Owns its generator, so two fillers never share state. Real runs seed from
/// the OS entropy source; tests use [`RandomFiller::seeded`] for repeatable
/// inputs.
#[derive(Debug, Clone)]
pub struct RandomFiller {
    rng: StdRng,
}

impl RandomFiller {
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Overwrites every element of `buf`. An empty slice is a no-op.
    pub fn fill(&mut self, buf: &mut [f64]) {
        for v in buf.iter_mut() {
            *v = self.rng.random_range(-1.0..=1.0);
        }
    }
}
