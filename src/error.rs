//! Errors surfaced by the command layer.
//!
//! Generation itself cannot fail; everything here comes from a collaborator
//! (clipboard, prompt, filesystem, stdout) or from a refused precondition.

use std::path::PathBuf;

/// Boxed error returned by port traits.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// A failed command.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The clipboard rejected the value.
    #[error("could not copy to clipboard: {0}")]
    Clipboard(#[source] PortError),

    /// A privileged command was run without elevated privilege.
    #[error("Please run this command as root (use sudo).")]
    NotPrivileged,

    /// The operator declined a confirmation.
    #[error("Aborted!")]
    Aborted,

    /// The confirmation answer could not be read.
    #[error("could not read confirmation: {0}")]
    Prompt(#[source] PortError),

    /// An installed path could not be removed.
    #[error("could not remove {}: {source}", .path.display())]
    Remove {
        /// Path that was being removed.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: PortError,
    },

    /// Writing to standard output failed.
    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}
