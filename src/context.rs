//! Service context bundling all port trait objects.

use crate::ports::{Clipboard, Clock, FileSystem, Privileges, Prompt, RandomSource};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. [`ServiceContext::live`]
/// wires the real adapters; tests build the struct directly from
/// `adapters::fixed`.
pub struct ServiceContext {
    /// Clock for time-ordered identifiers.
    pub clock: Box<dyn Clock>,
    /// Source of uniform random digits and nibbles.
    pub random: Box<dyn RandomSource>,
    /// Destination for generated values outside `--print-only`.
    pub clipboard: Box<dyn Clipboard>,
    /// Filesystem for the uninstall command.
    pub fs: Box<dyn FileSystem>,
    /// Privilege check for the uninstall command.
    pub privileges: Box<dyn Privileges>,
    /// Operator confirmation for the uninstall command.
    pub prompt: Box<dyn Prompt>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for every port.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::clipboard::LiveClipboard;
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::live::privileges::LivePrivileges;
        use crate::adapters::live::prompt::LivePrompt;
        use crate::adapters::live::random::LiveRandom;

        Self {
            clock: Box::new(LiveClock),
            random: Box::new(LiveRandom),
            clipboard: Box::new(LiveClipboard),
            fs: Box::new(LiveFileSystem),
            privileges: Box::new(LivePrivileges),
            prompt: Box::new(LivePrompt),
        }
    }
}
