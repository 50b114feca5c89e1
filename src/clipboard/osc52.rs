use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    let mut stdout = io::stdout();
    stdout
        .write_all(encode_osc52(text).as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    stdout.flush().map_err(|_| ClipboardError::WriteError)
}

/// Wrap `text` in an OSC 52 "set clipboard" escape sequence
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
