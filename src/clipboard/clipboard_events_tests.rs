//! Tests for clipboard_events

use super::*;
use crate::config::{ClipboardBackend, Config};
use crate::test_utils::test_helpers::{key, key_with_mods, type_keys};

fn osc52_app() -> App {
    let mut config = Config::default();
    config.clipboard.backend = ClipboardBackend::Osc52;
    App::new(&config)
}

#[test]
fn test_plain_y_is_not_consumed() {
    let mut app = osc52_app();
    assert!(!handle_clipboard_key(&mut app, key(KeyCode::Char('y'))));
    assert!(app.notification.current().is_none());
}

#[test]
fn test_ctrl_y_copies_entry() {
    let mut app = osc52_app();
    type_keys(&mut app, "12+2=");

    let consumed = handle_clipboard_key(
        &mut app,
        key_with_mods(KeyCode::Char('y'), KeyModifiers::CONTROL),
    );

    assert!(consumed);
    assert_eq!(
        app.notification.current().map(|n| n.message.as_str()),
        Some("Copied result!")
    );
}

#[test]
fn test_ctrl_y_on_error_copies_nothing() {
    let mut app = osc52_app();
    type_keys(&mut app, "1/0=");
    assert!(app.calculator().is_error());

    assert!(handle_clipboard_key(
        &mut app,
        key_with_mods(KeyCode::Char('y'), KeyModifiers::CONTROL),
    ));
    assert_eq!(
        app.notification.current().map(|n| n.message.as_str()),
        Some("Nothing to copy")
    );
}
