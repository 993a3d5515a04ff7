//! Clipboard port for handing a generated value to the desktop.

/// Places text on a clipboard.
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard is reachable (headless session,
    /// missing display server) or the write is rejected.
    fn copy(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
