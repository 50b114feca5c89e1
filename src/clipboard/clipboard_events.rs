use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::copy_to_clipboard;
use crate::app::App;

/// Handle Ctrl+Y: copy the current entry
///
/// Returns true when the key was consumed, whether or not the copy worked.
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code != KeyCode::Char('y') || !key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    copy_entry(app);
    true
}

fn copy_entry(app: &mut App) {
    if app.calculator().is_error() {
        app.notification.show("Nothing to copy");
        return;
    }

    let entry = app.calculator().entry().to_string();
    match copy_to_clipboard(&entry, app.config.clipboard.backend) {
        Ok(()) => app.notification.show("Copied result!"),
        Err(err) => {
            log::debug!("copy failed: {err}");
            app.notification.show("Copy failed");
        }
    }
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;
