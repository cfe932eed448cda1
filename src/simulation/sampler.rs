/*!
 * Parameter Sampler
 * Seeded random source for workload generation
 */

use crate::process::ProcessPriority;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Numeric and priority sampling used to build workloads
#[cfg_attr(test, mockall::automock)]
pub trait ParameterSampler {
    /// Uniform value in `[min, max]`; returns `min` when the range is a point
    fn sample(&mut self, min: u64, max: u64) -> u64;

    /// Uniform choice among the priority levels
    fn sample_priority(&mut self) -> ProcessPriority;
}

/// Deterministic sampler; the same seed yields the same sequence for the
/// same call order
#[derive(Debug, Clone)]
pub struct SeededSampler {
    rng: StdRng,
    seed: u64,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    #[inline(always)]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restart the sequence from a new seed
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

impl ParameterSampler for SeededSampler {
    fn sample(&mut self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn sample_priority(&mut self) -> ProcessPriority {
        ProcessPriority::ALL[self.rng.gen_range(0..ProcessPriority::ALL.len())]
    }
}
