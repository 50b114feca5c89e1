//! Turning the displayed expression into evaluator input
//!
//! The display uses `√(x)` for a deferred square root and `x²` for a
//! deferred square. The evaluator only knows `sqrt(x)` and `sqr(x)`.

use super::operand::trailing_operand_start;
use super::{SQRT_MARKER, SQUARE_MARKER};

/// Evaluator spelling of the square-root marker
pub const SQRT_CALL: &str = "sqrt";

/// Evaluator function applied to an operand carrying the square marker
pub const SQUARE_CALL: &str = "sqr";

/// Rewrite display markers into evaluator calls
///
/// Each square marker wraps the operand that precedes it in the text
/// rewritten so far, so `(2²)²` becomes `sqr((sqr(2)))`. A square marker
/// with no operand in front is left alone for the evaluator to reject.
pub fn to_evaluable(display: &str) -> String {
    let mut out = String::with_capacity(display.len() + 8);

    for ch in display.chars() {
        match ch {
            SQRT_MARKER => out.push_str(SQRT_CALL),
            SQUARE_MARKER => match trailing_operand_start(&out) {
                Some(start) => {
                    let operand = out.split_off(start);
                    out.push_str(SQUARE_CALL);
                    out.push('(');
                    out.push_str(&operand);
                    out.push(')');
                }
                None => out.push(ch),
            },
            _ => out.push(ch),
        }
    }

    out
}
