//! Keyboard bindings for calculator actions

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::calculator::{Action, Digit, Operator};
use crate::config::KeysConfig;

/// Calculator action bound to a key press, if any
///
/// Keys combined with Ctrl or Alt are never calculator input.
pub fn action_for_key(key: KeyEvent, keys: &KeysConfig) -> Option<Action> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Enter => Some(Action::Compute),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Esc | KeyCode::Delete => Some(Action::Clear),
        KeyCode::Char(ch) => action_for_char(ch, keys),
        _ => None,
    }
}

/// Calculator action bound to a typed character
pub fn action_for_char(ch: char, keys: &KeysConfig) -> Option<Action> {
    if let Some(digit) = Digit::from_char(ch) {
        return Some(Action::Digit(digit));
    }
    if let Some(op) = Operator::from_char(ch) {
        return Some(Action::Operator(op));
    }

    match ch {
        '=' => Some(Action::Compute),
        '%' => Some(Action::Percent),
        '(' => Some(Action::OpenParen),
        ')' => Some(Action::CloseParen),
        _ if ch.eq_ignore_ascii_case(&keys.square_root) => Some(Action::SquareRoot),
        _ if ch.eq_ignore_ascii_case(&keys.square) => Some(Action::Square),
        _ if ch.eq_ignore_ascii_case(&keys.toggle_sign) => Some(Action::ToggleSign),
        _ => None,
    }
}

/// Key label shown in help for an action
pub fn key_label(action: Action, keys: &KeysConfig) -> String {
    match action {
        Action::SquareRoot => keys.square_root.to_string(),
        Action::Square => keys.square.to_string(),
        Action::ToggleSign => keys.toggle_sign.to_string(),
        Action::Compute => "Enter or =".to_string(),
        Action::Backspace => "Backspace".to_string(),
        Action::Clear => "Esc".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "keymap_tests.rs"]
mod keymap_tests;
