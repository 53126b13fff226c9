//! Seeded production randomness source.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use angler_core::rng::RandomSource;

/// ChaCha8-backed randomness. Same seed, same encounter.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }
}
