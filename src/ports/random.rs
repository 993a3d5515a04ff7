//! Randomness port used by every generator.

/// Supplies uniformly distributed integers.
///
/// Generators draw digits, hex nibbles, clock sequences and node ids through
/// this single method. Cryptographic strength is not required.
pub trait RandomSource: Send + Sync {
    /// Returns an integer drawn uniformly from `0..bound`.
    ///
    /// `bound` is always non-zero; callers pass alphabet sizes or bit-width
    /// limits such as `10`, `16`, `1 << 14` and `1 << 48`.
    fn below(&self, bound: u64) -> u64;
}
