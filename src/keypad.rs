//! On-screen keypad
//!
//! Five rows of five buttons. Clicking a button dispatches the same action
//! as its keyboard binding.

mod keypad_render;

pub use keypad_render::render_keypad;

use crate::calculator::{Action, Digit, Operator};

/// A keypad button: label on screen and the action it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    pub action: Action,
}

/// Visual group used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Number,
    Operator,
    Function,
    Control,
    Compute,
}

impl KeypadButton {
    const fn new(label: &'static str, action: Action) -> Self {
        Self { label, action }
    }

    pub fn kind(&self) -> ButtonKind {
        match self.action {
            Action::Digit(_) | Action::ToggleSign => ButtonKind::Number,
            Action::Operator(_) => ButtonKind::Operator,
            Action::OpenParen
            | Action::CloseParen
            | Action::SquareRoot
            | Action::Square
            | Action::Percent => ButtonKind::Function,
            Action::Clear | Action::Backspace => ButtonKind::Control,
            Action::Compute => ButtonKind::Compute,
        }
    }
}

const fn num(label: &'static str, d: u8) -> KeypadButton {
    KeypadButton::new(label, Action::Digit(Digit::Num(d)))
}

const fn op(label: &'static str, operator: Operator) -> KeypadButton {
    KeypadButton::new(label, Action::Operator(operator))
}

pub const KEYPAD_COLUMNS: usize = 5;

pub const KEYPAD_ROWS: [[KeypadButton; KEYPAD_COLUMNS]; 5] = [
    [
        KeypadButton::new("C", Action::Clear),
        KeypadButton::new("(", Action::OpenParen),
        KeypadButton::new(")", Action::CloseParen),
        KeypadButton::new("⌫", Action::Backspace),
        op("÷", Operator::Divide),
    ],
    [
        num("7", 7),
        num("8", 8),
        num("9", 9),
        KeypadButton::new("√", Action::SquareRoot),
        op("×", Operator::Multiply),
    ],
    [
        num("4", 4),
        num("5", 5),
        num("6", 6),
        KeypadButton::new("x²", Action::Square),
        op("−", Operator::Subtract),
    ],
    [
        num("1", 1),
        num("2", 2),
        num("3", 3),
        op("xʸ", Operator::Power),
        op("+", Operator::Add),
    ],
    [
        KeypadButton::new("±", Action::ToggleSign),
        num("0", 0),
        KeypadButton::new(".", Action::Digit(Digit::Point)),
        KeypadButton::new("%", Action::Percent),
        KeypadButton::new("=", Action::Compute),
    ],
];

/// Every keypad button in row order
pub fn buttons() -> impl Iterator<Item = &'static KeypadButton> {
    KEYPAD_ROWS.iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_action_has_a_button() {
        let mut expected: Vec<Action> = (0..=9).map(|d| Action::Digit(Digit::Num(d))).collect();
        expected.push(Action::Digit(Digit::Point));
        expected.extend(Operator::ALL.iter().map(|op| Action::Operator(*op)));
        expected.extend([
            Action::OpenParen,
            Action::CloseParen,
            Action::SquareRoot,
            Action::Square,
            Action::ToggleSign,
            Action::Percent,
            Action::Backspace,
            Action::Clear,
            Action::Compute,
        ]);

        for action in expected {
            assert!(
                buttons().any(|button| button.action == action),
                "no button for {action}"
            );
        }
    }

    #[test]
    fn test_buttons_are_unique() {
        let actions: Vec<Action> = buttons().map(|button| button.action).collect();
        for (i, action) in actions.iter().enumerate() {
            assert!(!actions[i + 1..].contains(action), "duplicate {action}");
        }
        assert_eq!(actions.len(), 25);
    }

    #[test]
    fn test_button_kinds() {
        assert_eq!(KEYPAD_ROWS[0][0].kind(), ButtonKind::Control);
        assert_eq!(KEYPAD_ROWS[1][0].kind(), ButtonKind::Number);
        assert_eq!(KEYPAD_ROWS[1][4].kind(), ButtonKind::Operator);
        assert_eq!(KEYPAD_ROWS[2][3].kind(), ButtonKind::Function);
        assert_eq!(KEYPAD_ROWS[4][4].kind(), ButtonKind::Compute);
    }
}
