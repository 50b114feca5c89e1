use crate::calculator::Action;
use crate::config::KeysConfig;
use crate::keymap::key_label;

pub const HELP_FOOTER: &str = "Esc, F1 or ? to close | j/k to scroll";

pub struct HelpSection {
    pub title: &'static str,
    pub entries: Vec<(String, &'static str)>,
}

fn entry(key: &str, description: &'static str) -> (String, &'static str) {
    (key.to_string(), description)
}

/// Help table for the active key bindings
///
/// The function keys come from config, so the table is built per call.
pub fn help_sections(keys: &KeysConfig) -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "ENTRY",
            entries: vec![
                entry("0-9 .", "Type a number"),
                entry("+ - * / ^", "Add, subtract, multiply, divide, power"),
                entry("( )", "Open or close a group"),
                entry(&key_label(Action::Compute, keys), "Compute the result"),
            ],
        },
        HelpSection {
            title: "FUNCTIONS",
            entries: vec![
                entry(&key_label(Action::SquareRoot, keys), "Square root"),
                entry(&key_label(Action::Square, keys), "Square"),
                entry(&key_label(Action::ToggleSign, keys), "Toggle sign"),
                entry("%", "Divide the entry by 100"),
            ],
        },
        HelpSection {
            title: "EDITING",
            entries: vec![
                entry(&key_label(Action::Backspace, keys), "Delete last character"),
                entry(&key_label(Action::Clear, keys), "Clear everything"),
            ],
        },
        HelpSection {
            title: "GLOBAL",
            entries: vec![
                entry("F1 or ?", "Toggle this help"),
                entry("Ctrl+Y", "Copy the entry to the clipboard"),
                entry("Mouse", "Click a keypad button"),
                entry("q or Ctrl+C", "Quit"),
            ],
        },
    ]
}
