//! Privilege port for commands that modify system locations.

/// Reports whether the process runs with elevated privilege.
pub trait Privileges: Send + Sync {
    /// Returns `true` when running as root (or the platform equivalent).
    fn is_elevated(&self) -> bool;
}
