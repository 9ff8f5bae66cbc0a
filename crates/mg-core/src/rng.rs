//! Random number generation for maze layouts
//!
//! Uses a seeded ChaCha RNG so a seed reproduces the whole pipeline.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Maze random number generator
///
/// Wraps ChaCha8Rng. Every stage of the pipeline draws from one instance in a
/// fixed order, so two generators built from the same seed produce identical
/// layouts.
#[derive(Debug, Clone)]
pub struct MazeRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl MazeRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw from `lo..=hi`.
    ///
    /// Returns `None` without consuming any randomness when the range is empty.
    pub fn range_inclusive(&mut self, lo: usize, hi: usize) -> Option<usize> {
        if lo > hi {
            return None;
        }
        Some(self.rng.gen_range(lo..=hi))
    }

    /// Fair coin
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

impl Default for MazeRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
