//! Decimal digit sequences and generation options.

use std::fmt;

use crate::ports::RandomSource;

/// Whether taxpayer numbers are rendered with punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Apply the fixed punctuation mask to the digits.
    pub formatted: bool,
}

impl GenerationRequest {
    /// Request for punctuated output, e.g. `123.456.789-09`.
    #[must_use]
    pub const fn formatted() -> Self {
        Self { formatted: true }
    }

    /// Request for bare digits, e.g. `12345678909`.
    #[must_use]
    pub const fn raw() -> Self {
        Self { formatted: false }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::formatted()
    }
}

/// An ordered run of decimal digits, each in `0..=9`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// Draws `len` independent uniform digits.
    #[must_use]
    pub fn random(random: &dyn RandomSource, len: usize) -> Self {
        Self((0..len).map(|_| draw_digit(random)).collect())
    }

    /// Builds a sequence from existing digits; `None` if any exceeds 9.
    #[must_use]
    pub fn from_digits(digits: &[u8]) -> Option<Self> {
        digits.iter().all(|d| *d <= 9).then(|| Self(digits.to_vec()))
    }

    /// Appends a check digit.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not a decimal digit.
    pub fn push(&mut self, digit: u8) {
        assert!(digit <= 9, "not a decimal digit: {digit}");
        self.0.push(digit);
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the sequence holds no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The digits as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Sum of each digit times the weight at the same position.
    ///
    /// Extra weights or extra digits beyond the shorter side are ignored.
    pub fn weighted_sum(&self, weights: impl IntoIterator<Item = u32>) -> u32 {
        self.0.iter().zip(weights).map(|(d, w)| u32::from(*d) * w).sum()
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

fn draw_digit(random: &dyn RandomSource) -> u8 {
    // below(10) < 10, so the conversion cannot truncate.
    u8::try_from(random.below(10)).unwrap_or(0)
}
