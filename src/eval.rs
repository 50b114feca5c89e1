//! Restricted arithmetic evaluator
//!
//! Evaluates the strings assembled by the calculator. Only numbers, the
//! operators `+ - * / % ^` (with `**` accepted as `^`), parentheses, unary
//! minus and the two functions `sqrt` and `sqr` are understood. Anything
//! else is rejected before evaluation starts.

mod lexer;
mod parser;

pub use lexer::{Token, tokenize};

use crate::error::EvalError;

/// Functions callable from an expression
pub const FUNCTIONS: &[&str] = &["sqrt", "sqr"];

/// Evaluate an arithmetic expression
///
/// # Returns
/// * `Ok(f64)` - A finite result
/// * `Err(EvalError)` - The input was rejected or did not produce a finite number
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    lexer::check_operator_sequence(&tokens)?;

    let value = parser::Parser::new(&tokens).parse()?;
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }

    Ok(value)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
