//! Live adapters for real external interactions.

pub mod clipboard;
pub mod clock;
pub mod filesystem;
pub mod privileges;
pub mod prompt;
pub mod random;
