//! Filesystem port used by the uninstall command.

use std::path::Path;

/// Inspects and removes installed files.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Removes a file, or a directory together with everything below it.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be removed (permissions, busy
    /// file, path vanished between check and removal).
    fn remove_all(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
