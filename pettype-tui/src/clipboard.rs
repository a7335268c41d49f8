//! System clipboard access for sharing results.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to copy to clipboard: {0}")]
    Copy(#[source] arboard::Error),
}

/// Copy `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard.set_text(text).map_err(ClipboardError::Copy)
}
