use std::mem;

use super::action::{Action, Digit, Operator};
use super::number_format::{format_entry, format_number};
use super::operand::{is_single_group, split_trailing_operand, trailing_operand_start};
use super::rewrite::to_evaluable;
use super::session::Display;
use super::{ERROR_MARKER, SQRT_MARKER, SQUARE_MARKER};
use crate::error::EvalError;
use crate::eval;

const DEFAULT_ENTRY: &str = "0";

/// Calculator state: expression prefix, entry buffer and new-entry flag
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    expression: String,
    entry: String,
    new_entry: bool,
    last_error: Option<EvalError>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            expression: String::new(),
            entry: DEFAULT_ENTRY.to_string(),
            new_entry: false,
            last_error: None,
        }
    }

    /// Committed part of the formula
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Number being typed, the last result, or the error marker
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Whether the next digit replaces the entry instead of extending it
    pub fn is_new_entry(&self) -> bool {
        self.new_entry
    }

    pub fn is_error(&self) -> bool {
        self.entry == ERROR_MARKER
    }

    /// Cause of the most recent failure
    ///
    /// Cleared by `clear` and by the next successful compute, square root or
    /// square.
    pub fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }

    pub fn display(&self) -> Display<'_> {
        Display {
            expression: &self.expression,
            entry: &self.entry,
        }
    }

    /// Run the operation bound to an input event
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Digit(digit) => self.digit_entry(digit),
            Action::Operator(op) => self.operator_entry(op),
            Action::OpenParen => self.open_paren(),
            Action::CloseParen => self.close_paren(),
            Action::SquareRoot => self.square_root(),
            Action::Square => self.square(),
            Action::ToggleSign => self.toggle_sign(),
            Action::Percent => self.percent(),
            Action::Backspace => self.backspace(),
            Action::Clear => self.clear(),
            Action::Compute => self.compute(),
        }
    }

    pub fn digit_entry(&mut self, digit: Digit) {
        if self.new_entry {
            self.entry = match digit {
                Digit::Point => "0.".to_string(),
                Digit::Num(_) => digit.as_char().to_string(),
            };
            self.new_entry = false;
            return;
        }

        match digit {
            Digit::Point if self.entry.contains('.') => {}
            Digit::Num(_) if self.entry == DEFAULT_ENTRY => {
                self.entry = digit.as_char().to_string();
            }
            _ => self.entry.push(digit.as_char()),
        }
    }

    pub fn operator_entry(&mut self, op: Operator) {
        self.commit();

        if self.expression.is_empty() && op == Operator::Subtract {
            self.expression.push_str("0-");
        } else {
            if ends_with_operator(&self.expression) {
                self.expression.pop();
            }
            self.expression.push(op.symbol());
        }

        self.new_entry = true;
    }

    pub fn open_paren(&mut self) {
        if self.is_typing() {
            self.commit();
            // 2(3+4) means 2*(3+4)
            self.expression.push_str("*(");
        } else {
            self.expression.push('(');
        }
        self.new_entry = true;
    }

    pub fn close_paren(&mut self) {
        self.commit();
        self.expression.push(')');
        self.new_entry = true;
    }

    pub fn square_root(&mut self) {
        if self.is_typing() {
            self.apply_to_entry(|value| (value >= 0.0).then(|| value.sqrt()));
        } else if let Some((head, operand)) = split_trailing_operand(&self.expression) {
            let wrapped = if is_single_group(operand) {
                format!("{head}{SQRT_MARKER}{operand}")
            } else {
                format!("{head}{SQRT_MARKER}({operand})")
            };
            self.expression = wrapped;
        }
        self.new_entry = true;
    }

    pub fn square(&mut self) {
        if self.is_typing() {
            self.apply_to_entry(|value| Some(value * value));
        } else if !self.expression.ends_with(SQUARE_MARKER)
            && trailing_operand_start(&self.expression).is_some()
        {
            self.expression.push(SQUARE_MARKER);
        }
        self.new_entry = true;
    }

    pub fn toggle_sign(&mut self) {
        if self.is_error() {
            return;
        }
        if let Ok(value) = self.entry.parse::<f64>() {
            self.entry = format_entry(-value);
        }
    }

    pub fn percent(&mut self) {
        if self.is_error() {
            return;
        }
        if let Ok(value) = self.entry.parse::<f64>() {
            self.entry = format_entry(value / 100.0);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_error() {
            self.clear();
            return;
        }

        if self.is_typing() {
            self.entry.pop();
            if self.entry.is_empty() || self.entry == "-" {
                self.entry = DEFAULT_ENTRY.to_string();
            }
        } else if self.expression.pop() == Some('(') && self.expression.ends_with(SQRT_MARKER) {
            // √( is inserted as one unit
            self.expression.pop();
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Evaluate the expression plus any pending entry
    ///
    /// The entry receives the formatted result or the error marker; the
    /// expression is emptied either way.
    pub fn compute(&mut self) {
        let mut source = self.expression.clone();
        if self.has_pending_entry() {
            push_operand(&mut source, &self.entry);
        }

        let evaluable = to_evaluable(&source);
        match eval::evaluate(&evaluable) {
            Ok(value) => {
                log::debug!("computed {evaluable} = {value}");
                self.entry = format_number(value);
                self.last_error = None;
            }
            Err(err) => {
                log::debug!("failed to evaluate {evaluable:?}: {err}");
                self.entry = ERROR_MARKER.to_string();
                self.last_error = Some(err);
            }
        }

        self.expression.clear();
        self.new_entry = true;
    }

    /// A number is being typed right now
    fn is_typing(&self) -> bool {
        !self.new_entry && self.entry != DEFAULT_ENTRY && !self.is_error()
    }

    /// The entry holds a value not yet folded into the expression: one
    /// being typed, a result, or the lone default zero
    fn has_pending_entry(&self) -> bool {
        !self.is_error()
            && (!self.new_entry || self.entry != DEFAULT_ENTRY || self.expression.is_empty())
    }

    /// Fold the entry into the expression and reset it
    ///
    /// A default zero is only folded into an empty expression; an error
    /// marker counts as zero.
    fn commit(&mut self) {
        if self.is_error() {
            self.entry = DEFAULT_ENTRY.to_string();
        }
        if self.entry == DEFAULT_ENTRY && !self.expression.is_empty() {
            return;
        }
        let entry = mem::replace(&mut self.entry, DEFAULT_ENTRY.to_string());
        push_operand(&mut self.expression, &entry);
    }

    fn apply_to_entry(&mut self, f: impl Fn(f64) -> Option<f64>) {
        let result = self
            .entry
            .parse::<f64>()
            .ok()
            .and_then(f)
            .filter(|value| value.is_finite());

        match result {
            Some(value) => {
                self.entry = format_number(value);
                self.last_error = None;
            }
            None => {
                self.entry = ERROR_MARKER.to_string();
                self.last_error = Some(EvalError::NonFinite);
            }
        }
    }
}

fn ends_with_operator(text: &str) -> bool {
    text.chars().last().is_some_and(Operator::is_operator_char)
}

/// Append a number, parenthesising negatives so `3*` + `-5` stays `3*(-5)`
fn push_operand(expression: &mut String, number: &str) {
    if number.starts_with('-') && !expression.is_empty() {
        expression.push('(');
        expression.push_str(number);
        expression.push(')');
    } else {
        expression.push_str(number);
    }
}

#[cfg(test)]
#[path = "calculator_state_tests.rs"]
mod calculator_state_tests;
