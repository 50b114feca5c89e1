//! Expression-building state machine
//!
//! The calculator keeps a committed expression prefix, the number currently
//! being typed, and a flag telling whether the next digit starts a fresh
//! number. Every user action is a method on [`Calculator`]; a [`Session`]
//! wraps one and notifies a [`RenderSink`] after each action.

mod action;
mod calculator_state;
pub mod number_format;
pub mod operand;
pub mod rewrite;
mod session;

pub use action::{Action, Digit, Operator};
pub use calculator_state::Calculator;
pub use number_format::format_number;
pub use session::{Display, DisplayBuffer, RenderSink, Session};

/// Entry display text after a failed computation
pub const ERROR_MARKER: &str = "Error";

/// Shown in front of a parenthesised operand to mark a deferred square root
pub const SQRT_MARKER: char = '√';

/// Shown after an operand to mark a deferred square
pub const SQUARE_MARKER: char = '²';
