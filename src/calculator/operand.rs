//! Backward scanning for the operand at the end of an expression
//!
//! An operand is either a run of digits and decimal points, or a balanced
//! parenthesised group optionally preceded by a function name or the
//! square-root marker. Either form may carry one trailing square marker.

use super::{SQRT_MARKER, SQUARE_MARKER};

/// Byte offset where the trailing operand of `text` starts
///
/// Returns `None` when `text` does not end in an operand: it is empty, ends
/// in an operator or `(`, or ends in an unmatched `)`.
pub fn trailing_operand_start(text: &str) -> Option<usize> {
    let body = text.strip_suffix(SQUARE_MARKER).unwrap_or(text);

    if body.ends_with(')') {
        let open = matching_open_paren(body)?;
        Some(function_name_start(body, open))
    } else {
        number_start(body)
    }
}

/// Split `text` into everything before the trailing operand and the operand
pub fn split_trailing_operand(text: &str) -> Option<(&str, &str)> {
    trailing_operand_start(text).map(|start| text.split_at(start))
}

/// True when `operand` is a single parenthesised group, e.g. `(4+1)` but
/// not `(1)+(2)` or `sqrt(4)`
pub fn is_single_group(operand: &str) -> bool {
    operand.starts_with('(') && operand.ends_with(')') && matching_open_paren(operand) == Some(0)
}

fn number_start(text: &str) -> Option<usize> {
    let start = text
        .char_indices()
        .rev()
        .take_while(|(_, ch)| ch.is_ascii_digit() || *ch == '.')
        .last()
        .map(|(i, _)| i)?;

    text[start..]
        .contains(|ch: char| ch.is_ascii_digit())
        .then_some(start)
}

/// Position of the `(` matching the final `)` of `text`
fn matching_open_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in text.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn function_name_start(text: &str, open: usize) -> usize {
    text[..open]
        .char_indices()
        .rev()
        .take_while(|(_, ch)| ch.is_ascii_alphabetic() || *ch == '_' || *ch == SQRT_MARKER)
        .last()
        .map_or(open, |(i, _)| i)
}

#[cfg(test)]
#[path = "operand_tests.rs"]
mod operand_tests;
