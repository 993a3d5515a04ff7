//! Random (version 4 layout) identifiers.
//!
//! 32 uniform hex characters in 8-4-4-4-12 groups, with the first character
//! of the third group replaced by the version marker `4`. The fourth group is
//! left fully random: the RFC 4122 variant bits are not forced.

use tracing::debug;

use super::format::{apply_mask, UUID_MASK};
use crate::ports::RandomSource;

const HEX_LEN: usize = 32;
const VERSION_INDEX: usize = 12;

/// Generates a 36-character random identifier.
#[must_use]
pub fn generate(random: &dyn RandomSource) -> String {
    let mut hex: Vec<char> = (0..HEX_LEN).map(|_| hex_char(random.below(16))).collect();
    hex[VERSION_INDEX] = '4';
    let raw: String = hex.into_iter().collect();
    debug!("generated random identifier");
    apply_mask(&raw, UUID_MASK)
}

fn hex_char(nibble: u64) -> char {
    u32::try_from(nibble)
        .ok()
        .and_then(|n| char::from_digit(n, 16))
        .unwrap_or('0')
}
