//! In-memory clipboards.

use std::sync::Mutex;

use crate::ports::clipboard::Clipboard;

/// Clipboard that keeps the last copied text in memory.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last copied text, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().expect("clipboard lock poisoned").clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *self.contents.lock().expect("clipboard lock poisoned") = Some(text.to_owned());
        Ok(())
    }
}

/// Clipboard that always fails, as on a headless machine.
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn copy(&self, _text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err("no clipboard available".into())
    }
}
