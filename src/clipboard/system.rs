//! System clipboard via arboard

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

/// Fails with `SystemUnavailable` when no display server is reachable
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}
