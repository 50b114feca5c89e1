//! Keypad calculator for the terminal
//!
//! Input events drive a small expression-building state machine; computing
//! hands the expression to a restricted arithmetic evaluator.

pub mod app;
pub mod calculator;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod eval;
pub mod help;
pub mod keymap;
pub mod keypad;
pub mod layout;
pub mod logging;
pub mod notification;
pub mod widgets;

#[cfg(test)]
mod test_utils;
