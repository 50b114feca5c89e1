//! Clipboard backend selection and error types

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard is not available")]
    SystemUnavailable,
    #[error("failed to write to clipboard")]
    WriteError,
}

/// Copy text to the clipboard using the configured backend
///
/// `Auto` tries the system clipboard first and falls back to OSC 52.
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|err| {
            log::debug!("system clipboard failed ({err}), using OSC 52");
            osc52::copy(text)
        }),
    }
}
