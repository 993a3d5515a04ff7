//! Deterministic adapters for tests and reproducible output.

pub mod clipboard;
pub mod clock;
pub mod filesystem;
pub mod privileges;
pub mod prompt;
pub mod random;

pub use clipboard::{MemoryClipboard, UnavailableClipboard};
pub use clock::{FixedClock, SteppingClock};
pub use filesystem::MemoryFileSystem;
pub use privileges::FixedPrivileges;
pub use prompt::ScriptedPrompt;
pub use random::{ScriptedRandom, SeededRandom};
