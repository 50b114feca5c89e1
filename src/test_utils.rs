#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::calculator::{Action, Calculator, Digit, Operator};
    use crate::config::Config;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Shorthand used by calculator tests:
    /// digits, `.`, operators, `(`, `)`, `=`, `r` square root, `s` square,
    /// `n` toggle sign, `%` percent, `b` backspace, `c` clear
    pub fn action_for(ch: char) -> Action {
        if let Some(digit) = Digit::from_char(ch) {
            return Action::Digit(digit);
        }
        if let Some(op) = Operator::from_char(ch) {
            return Action::Operator(op);
        }
        match ch {
            '(' => Action::OpenParen,
            ')' => Action::CloseParen,
            '=' => Action::Compute,
            'r' => Action::SquareRoot,
            's' => Action::Square,
            'n' => Action::ToggleSign,
            '%' => Action::Percent,
            'b' => Action::Backspace,
            'c' => Action::Clear,
            other => panic!("no test action for {other:?}"),
        }
    }

    pub fn press_keys(calc: &mut Calculator, keys: &str) {
        for ch in keys.chars() {
            calc.apply(action_for(ch));
        }
    }

    pub fn calculator_after(keys: &str) -> Calculator {
        let mut calc = Calculator::new();
        press_keys(&mut calc, keys);
        calc
    }

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Feed each character to the app as a plain key press
    pub fn type_keys(app: &mut App, keys: &str) {
        for ch in keys.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }
}
