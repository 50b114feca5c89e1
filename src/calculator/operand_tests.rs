//! Tests for trailing operand scanning

use super::*;

fn operand(text: &str) -> Option<&str> {
    split_trailing_operand(text).map(|(_, operand)| operand)
}

#[test]
fn test_trailing_integer() {
    assert_eq!(operand("3+45"), Some("45"));
    assert_eq!(operand("9"), Some("9"));
}

#[test]
fn test_trailing_decimal() {
    assert_eq!(operand("2*3.25"), Some("3.25"));
    assert_eq!(operand("1-.5"), Some(".5"));
}

#[test]
fn test_lone_point_is_not_an_operand() {
    assert_eq!(operand("2+."), None);
}

#[test]
fn test_trailing_group() {
    assert_eq!(operand("2*(4+1)"), Some("(4+1)"));
}

#[test]
fn test_nested_group_is_matched_whole() {
    assert_eq!(operand("1+((2+3)*(4-1))"), Some("((2+3)*(4-1))"));
}

#[test]
fn test_group_with_function_name() {
    assert_eq!(operand("2+sqrt(9)"), Some("sqrt(9)"));
    assert_eq!(operand("2+√(9)"), Some("√(9)"));
    assert_eq!(operand("sqr((1+2))"), Some("sqr((1+2))"));
}

#[test]
fn test_square_marker_is_included() {
    assert_eq!(operand("3+4²"), Some("4²"));
    assert_eq!(operand("(1+2)²"), Some("(1+2)²"));
}

#[test]
fn test_no_operand_after_operator_or_open_paren() {
    assert_eq!(operand(""), None);
    assert_eq!(operand("3+"), None);
    assert_eq!(operand("2*("), None);
}

#[test]
fn test_unbalanced_group_is_not_an_operand() {
    assert_eq!(operand("4+1)"), None);
}

#[test]
fn test_start_offset_accounts_for_multibyte_markers() {
    let text = "√(4)+√(9)";
    let start = trailing_operand_start(text).unwrap();
    assert_eq!(&text[start..], "√(9)");
}

#[test]
fn test_is_single_group() {
    assert!(is_single_group("(4+1)"));
    assert!(is_single_group("((2))"));
    assert!(!is_single_group("(1)+(2)"));
    assert!(!is_single_group("sqrt(4)"));
    assert!(!is_single_group("(4)²"));
    assert!(!is_single_group("12"));
}
