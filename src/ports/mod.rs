//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generators and the outside
//! world (time, randomness, clipboard, filesystem, privileges, the operator).
//! Implementations live in `src/adapters/`.

pub mod clipboard;
pub mod clock;
pub mod filesystem;
pub mod privileges;
pub mod prompt;
pub mod random;

pub use clipboard::Clipboard;
pub use clock::Clock;
pub use filesystem::FileSystem;
pub use privileges::Privileges;
pub use prompt::Prompt;
pub use random::RandomSource;
