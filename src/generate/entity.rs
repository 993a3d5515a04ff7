//! Entity taxpayer numbers (CNPJ).

use tracing::debug;

use super::digits::{DigitSequence, GenerationRequest};
use super::format::{apply_mask, ENTITY_MASK};
use crate::ports::RandomSource;

/// Number of random base digits.
pub const BASE_LEN: usize = 12;

/// Weights for the first check digit, aligned to the 12 base digits.
pub const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, aligned to 13 digits.
pub const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Generates a checksum-valid entity taxpayer number.
#[must_use]
pub fn generate(random: &dyn RandomSource, request: GenerationRequest) -> String {
    let digits = complete(DigitSequence::random(random, BASE_LEN));
    debug!(formatted = request.formatted, "generated entity taxpayer number");
    let raw = digits.to_string();
    if request.formatted {
        apply_mask(&raw, ENTITY_MASK)
    } else {
        raw
    }
}

/// Appends both check digits to 12 base digits.
#[must_use]
pub fn complete(mut digits: DigitSequence) -> DigitSequence {
    let first = check_digit(&digits, &FIRST_WEIGHTS);
    digits.push(first);
    let second = check_digit(&digits, &SECOND_WEIGHTS);
    digits.push(second);
    digits
}

/// Computes `11 − (Σ wᵢ·dᵢ mod 11)`, with 10 and 11 clamped to 0.
#[must_use]
pub fn check_digit(digits: &DigitSequence, weights: &[u32]) -> u8 {
    let remainder = digits.weighted_sum(weights.iter().copied()) % 11;
    match 11 - remainder {
        // Always 1..=9 here.
        digit @ 1..=9 => u8::try_from(digit).unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;
    use crate::adapters::fixed::{ScriptedRandom, SeededRandom};
    use crate::generate::stats::chi_square;

    fn seq(digits: &[u8]) -> DigitSequence {
        DigitSequence::from_digits(digits).unwrap()
    }

    #[test]
    fn completes_known_number() {
        let base = seq(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]);
        assert_eq!(complete(base).to_string(), "11222333000181");
    }

    #[test]
    fn remainder_zero_clamps_to_zero() {
        let base = seq(&[0; 12]);
        assert_eq!(base.weighted_sum(FIRST_WEIGHTS) % 11, 0);
        assert_eq!(check_digit(&base, &FIRST_WEIGHTS), 0);
    }

    #[test]
    fn remainder_one_clamps_to_zero() {
        // 5 × 9 = 45 ≡ 1 (mod 11)
        let base = seq(&[0, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(base.weighted_sum(FIRST_WEIGHTS) % 11, 1);
        assert_eq!(check_digit(&base, &FIRST_WEIGHTS), 0);
    }

    #[test]
    fn remainder_two_gives_nine() {
        // 1 × 2 = 2
        let base = seq(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(check_digit(&base, &FIRST_WEIGHTS), 9);
    }

    #[test]
    fn formats_scripted_digits() {
        let random = ScriptedRandom::new([1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]);
        assert_eq!(generate(&random, GenerationRequest::formatted()), "11.222.333/0001-81");
        assert_eq!(random.remaining(), 0);
    }

    #[test]
    fn output_shapes() {
        let random = SeededRandom::new(21);
        let raw = Regex::new(r"^\d{14}$").unwrap();
        let formatted = Regex::new(r"^\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}$").unwrap();
        for _ in 0..500 {
            assert!(raw.is_match(&generate(&random, GenerationRequest::raw())));
            assert!(formatted.is_match(&generate(&random, GenerationRequest::formatted())));
        }
    }

    #[test]
    fn generated_numbers_verify() {
        let random = SeededRandom::new(22);
        for _ in 0..500 {
            let raw = generate(&random, GenerationRequest::raw());
            let digits: Vec<u8> = raw.bytes().map(|b| b - b'0').collect();
            assert_eq!(complete(seq(&digits[..BASE_LEN])).as_slice(), digits.as_slice());
        }
    }

    #[test]
    fn base_digits_are_uniform() {
        let random = SeededRandom::new(4048);
        let mut counts = [[0u32; 10]; BASE_LEN];
        for _ in 0..10_000 {
            let raw = generate(&random, GenerationRequest::raw());
            for (pos, b) in raw.bytes().take(BASE_LEN).enumerate() {
                counts[pos][usize::from(b - b'0')] += 1;
            }
        }
        for position in &counts {
            assert!(chi_square(position) < 33.7, "{position:?}");
        }
    }
}
