//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the current wall-clock time.
///
/// The time-ordered generator reads the clock exactly once per identifier,
/// so a fixed or stepping clock yields fully predictable timestamps.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
