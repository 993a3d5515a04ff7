//! Time-ordered (version 6 layout) identifiers.
//!
//! Layout, as 32 hex characters before hyphenation:
//!
//! ```text
//! tttttttt tttt 6ttt ssss nnnnnnnnnnnn
//! ```
//!
//! `t` is the microsecond Unix timestamp as 15 hex digits, `6` the version,
//! `s` a 14-bit random clock sequence OR'd with `0x8000` (variant `10`), `n`
//! a 48-bit random node.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::format::{apply_mask, UUID_MASK};
use crate::ports::{Clock, RandomSource};

const TIMESTAMP_BITS: u32 = 60;
const TIMESTAMP_MASK: u64 = (1 << TIMESTAMP_BITS) - 1;
const CLOCK_SEQ_RANGE: u64 = 1 << 14;
const NODE_RANGE: u64 = 1 << 48;
const VARIANT_BITS: u64 = 0x8000;

/// Generates a 36-character time-ordered identifier.
#[must_use]
pub fn generate(clock: &dyn Clock, random: &dyn RandomSource) -> String {
    let timestamp = format!("{:015x}", timestamp_micros(clock.now()));
    let clock_seq = random.below(CLOCK_SEQ_RANGE);
    let node = random.below(NODE_RANGE);

    let raw = format!(
        "{}6{}{:04x}{:012x}",
        &timestamp[..12],
        &timestamp[12..],
        clock_seq | VARIANT_BITS,
        node,
    );
    debug!(%timestamp, "generated time-ordered identifier");
    apply_mask(&raw, UUID_MASK)
}

/// Microseconds since the Unix epoch, reduced to 60 bits.
///
/// Pre-epoch instants map to zero. Counts wider than 60 bits keep only their
/// low 60 bits, so ordering wraps around in the year 38 500 or so.
#[must_use]
pub fn timestamp_micros(now: DateTime<Utc>) -> u64 {
    let Ok(micros) = u64::try_from(now.timestamp_micros()) else {
        warn!(%now, "clock reads before the Unix epoch; using a zero timestamp");
        return 0;
    };
    if micros > TIMESTAMP_MASK {
        warn!(micros, "timestamp exceeds 60 bits and is truncated");
    }
    micros & TIMESTAMP_MASK
}
