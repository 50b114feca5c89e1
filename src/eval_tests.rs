//! Tests for the restricted evaluator entry point

use super::*;
use proptest::prelude::*;

#[test]
fn test_evaluate_basic_arithmetic() {
    assert_eq!(evaluate("2+3"), Ok(5.0));
    assert_eq!(evaluate("2*(3+4)"), Ok(14.0));
    assert_eq!(evaluate("2^10"), Ok(1024.0));
    assert_eq!(evaluate("2**10"), Ok(1024.0));
}

#[test]
fn test_evaluate_empty_input() {
    assert_eq!(evaluate(""), Err(EvalError::Empty));
    assert_eq!(evaluate("   "), Err(EvalError::Empty));
}

#[test]
fn test_division_by_zero_is_non_finite() {
    assert_eq!(evaluate("12/0"), Err(EvalError::NonFinite));
    assert_eq!(evaluate("0/0"), Err(EvalError::NonFinite));
    assert_eq!(evaluate("5%0"), Err(EvalError::NonFinite));
}

#[test]
fn test_square_root_of_negative_is_non_finite() {
    assert_eq!(evaluate("sqrt(0-4)"), Err(EvalError::NonFinite));
}

#[test]
fn test_overflow_is_non_finite() {
    assert_eq!(evaluate("10^400"), Err(EvalError::NonFinite));
}

#[test]
fn test_rejects_code_like_input() {
    assert!(evaluate("process.exit(1)").is_err());
    assert!(evaluate("alert('x')").is_err());
    assert!(evaluate("a=1").is_err());
}

#[test]
fn test_power_operator_pairs_are_rejected_after_normalization() {
    assert!(matches!(
        evaluate("2**/3"),
        Err(EvalError::ConsecutiveOperators(_))
    ));
    assert!(matches!(
        evaluate("2^*3"),
        Err(EvalError::ConsecutiveOperators(_))
    ));
}

#[test]
fn test_injected_functions_are_listed() {
    assert_eq!(FUNCTIONS, &["sqrt", "sqr"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_integer_sum_matches_native(a in 0u32..100_000, b in 0u32..100_000) {
        let result = evaluate(&format!("{a}+{b}"));
        prop_assert_eq!(result, Ok(f64::from(a) + f64::from(b)));
    }

    #[test]
    fn prop_product_matches_native(a in 0u32..10_000, b in 0u32..10_000) {
        let result = evaluate(&format!("{a} * {b}"));
        prop_assert_eq!(result, Ok(f64::from(a) * f64::from(b)));
    }

    #[test]
    fn prop_never_panics(input in "[0-9+*/^%().a-z -]{0,24}") {
        let _ = evaluate(&input);
    }

    #[test]
    fn prop_results_are_finite(input in "[0-9+*/^().-]{1,16}") {
        if let Ok(value) = evaluate(&input) {
            prop_assert!(value.is_finite());
        }
    }
}
