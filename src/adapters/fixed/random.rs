//! Deterministic random sources.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::random::RandomSource;

/// Uniform random source reproducible from a seed.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl RandomSource for SeededRandom {
    fn below(&self, bound: u64) -> u64 {
        self.rng.lock().expect("rng lock poisoned").random_range(0..bound)
    }
}

/// Serves a pre-arranged sequence of values, one per draw.
///
/// Used to pin the exact digits a generator sees. Panics when the script is
/// exhausted or a value does not fit the requested bound.
pub struct ScriptedRandom {
    values: Mutex<VecDeque<u64>>,
}

impl ScriptedRandom {
    /// Creates a source that yields `values` in order.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self { values: Mutex::new(values.into_iter().collect()) }
    }

    /// Returns how many scripted values have not been drawn yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.lock().expect("script lock poisoned").len()
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&self, bound: u64) -> u64 {
        let value = self
            .values
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .expect("random script exhausted");
        assert!(value < bound, "scripted value {value} out of range 0..{bound}");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let a = SeededRandom::new(7);
        let b = SeededRandom::new(7);
        let left: Vec<u64> = (0..32).map(|_| a.below(16)).collect();
        let right: Vec<u64> = (0..32).map(|_| b.below(16)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn scripted_values_in_order() {
        let random = ScriptedRandom::new([3, 1, 4]);
        assert_eq!(random.below(10), 3);
        assert_eq!(random.below(10), 1);
        assert_eq!(random.remaining(), 1);
        assert_eq!(random.below(10), 4);
        assert_eq!(random.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "random script exhausted")]
    fn scripted_panics_when_exhausted() {
        let random = ScriptedRandom::new([]);
        random.below(10);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn scripted_rejects_values_outside_bound() {
        let random = ScriptedRandom::new([12]);
        random.below(10);
    }
}
