//! Identifier generators.
//!
//! Four independent, stateless generators. Each takes its randomness (and,
//! for the time-ordered one, its clock) as an explicit port so the output is
//! a pure function of what those ports return.

pub mod digits;
pub mod entity;
pub mod format;
pub mod individual;
pub mod random_id;
pub mod time_ordered;

pub use digits::{DigitSequence, GenerationRequest};
