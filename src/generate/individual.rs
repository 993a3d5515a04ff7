//! Individual taxpayer numbers (CPF).
//!
//! Nine random base digits followed by two mod-11 check digits. Each check
//! digit weights the preceding digits from `len + 1` down to 2.

use tracing::debug;

use super::digits::{DigitSequence, GenerationRequest};
use super::format::{apply_mask, INDIVIDUAL_MASK};
use crate::ports::RandomSource;

/// Number of random base digits.
pub const BASE_LEN: usize = 9;

/// Generates a checksum-valid individual taxpayer number.
#[must_use]
pub fn generate(random: &dyn RandomSource, request: GenerationRequest) -> String {
    let digits = complete(DigitSequence::random(random, BASE_LEN));
    debug!(formatted = request.formatted, "generated individual taxpayer number");
    render(&digits, request)
}

/// Appends both check digits to a sequence of base digits.
#[must_use]
pub fn complete(mut digits: DigitSequence) -> DigitSequence {
    let first = check_digit(&digits);
    digits.push(first);
    let second = check_digit(&digits);
    digits.push(second);
    digits
}

/// Computes the check digit for `digits`.
///
/// `S = Σ (len + 1 − i)·dᵢ`, result `(S·10 mod 11) mod 10`.
#[must_use]
pub fn check_digit(digits: &DigitSequence) -> u8 {
    let top = u32::try_from(digits.len()).unwrap_or(u32::MAX - 1) + 1;
    let sum = digits.weighted_sum((2..=top).rev());
    // Always < 10.
    u8::try_from(sum * 10 % 11 % 10).unwrap_or(0)
}

fn render(digits: &DigitSequence, request: GenerationRequest) -> String {
    let raw = digits.to_string();
    if request.formatted {
        apply_mask(&raw, INDIVIDUAL_MASK)
    } else {
        raw
    }
}
