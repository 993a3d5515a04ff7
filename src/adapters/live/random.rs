//! Live randomness backed by the thread-local `rand` generator.

use crate::ports::random::RandomSource;

/// Live random source drawing from `rand::rng()`.
pub struct LiveRandom;

impl RandomSource for LiveRandom {
    fn below(&self, bound: u64) -> u64 {
        rand::random_range(0..bound)
    }
}
