//! Live clipboard adapter using `arboard`.

use crate::ports::clipboard::Clipboard;

/// Live clipboard writing to the desktop clipboard.
///
/// A fresh `arboard::Clipboard` handle is opened per copy; the CLI copies at
/// most once per process.
pub struct LiveClipboard;

impl Clipboard for LiveClipboard {
    fn copy(&self, text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_owned())?;
        Ok(())
    }
}
