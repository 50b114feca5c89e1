//! Tests for app/app_events

use ratatui::crossterm::event::{
    KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::calculator::Action;
use crate::config::{Config, KeysConfig};
use crate::test_utils::test_helpers::{key, key_with_mods, test_app, type_keys};

use super::App;

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_typed_expression_computes() {
    let mut app = test_app();
    type_keys(&mut app, "2(3+4)=");
    assert_eq!(app.display().entry, "14");
    assert_eq!(app.display().expression, "");
}

#[test]
fn test_enter_computes() {
    let mut app = test_app();
    type_keys(&mut app, "6*7");
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.display().entry, "42");
}

#[test]
fn test_backspace_and_esc() {
    let mut app = test_app();
    type_keys(&mut app, "123");
    app.handle_key_event(key(KeyCode::Backspace));
    assert_eq!(app.display().entry, "12");

    type_keys(&mut app, "+");
    app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(app.display().expression, "");
    assert_eq!(app.display().entry, "0");
}

#[test]
fn test_function_keys_use_config() {
    let mut app = test_app();
    type_keys(&mut app, "9r");
    assert_eq!(app.display().entry, "3");

    let config = Config {
        keys: KeysConfig {
            square_root: 'v',
            ..KeysConfig::default()
        },
        ..Config::default()
    };
    let mut app = App::new(&config);
    type_keys(&mut app, "16r");
    assert_eq!(app.display().entry, "16");
    type_keys(&mut app, "V");
    assert_eq!(app.display().entry, "4");
}

#[test]
fn test_q_quits() {
    let mut app = test_app();
    type_keys(&mut app, "q");
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_quits_even_with_help_open() {
    let mut app = test_app();
    app.help.visible = true;
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_help_toggles_with_f1_and_question_mark() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.help.visible);
    app.handle_key_event(key(KeyCode::F(1)));
    assert!(!app.help.visible);

    type_keys(&mut app, "?");
    assert!(app.help.visible);
    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.help.visible);
}

#[test]
fn test_help_blocks_calculator_keys() {
    let mut app = test_app();
    type_keys(&mut app, "?5+");
    assert_eq!(app.display().entry, "0");
    assert_eq!(app.display().expression, "");
    assert!(app.help.visible);
}

#[test]
fn test_q_closes_help_instead_of_quitting() {
    let mut app = test_app();
    type_keys(&mut app, "?q");
    assert!(!app.help.visible);
    assert!(!app.should_quit());
}

#[test]
fn test_ctrl_modified_digit_is_ignored() {
    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('5'), KeyModifiers::CONTROL));
    assert_eq!(app.display().entry, "0");
    assert!(app.last_action.is_none());
}

#[test]
fn test_click_on_button_dispatches() {
    let mut app = test_app();
    app.layout_regions
        .add_button(Rect::new(0, 10, 6, 3), Action::Clear);
    app.layout_regions
        .add_button(Rect::new(6, 10, 6, 3), Action::SquareRoot);

    type_keys(&mut app, "25");
    app.handle_mouse_event(left_click(8, 11));
    assert_eq!(app.display().entry, "5");

    app.handle_mouse_event(left_click(0, 10));
    assert_eq!(app.display().entry, "0");
    assert_eq!(app.last_action, Some(Action::Clear));
}

#[test]
fn test_non_left_clicks_are_ignored() {
    let mut app = test_app();
    app.layout_regions
        .add_button(Rect::new(0, 0, 6, 3), Action::Clear);
    type_keys(&mut app, "7");

    let mut mouse = left_click(1, 1);
    mouse.kind = MouseEventKind::Down(MouseButton::Right);
    app.handle_mouse_event(mouse);
    mouse.kind = MouseEventKind::Moved;
    app.handle_mouse_event(mouse);

    assert_eq!(app.display().entry, "7");
}

#[test]
fn test_click_closes_help() {
    let mut app = test_app();
    app.layout_regions
        .add_button(Rect::new(0, 0, 6, 3), Action::Clear);
    type_keys(&mut app, "7?");

    app.handle_mouse_event(left_click(1, 1));

    assert!(!app.help.visible);
    assert_eq!(app.display().entry, "7");
}
