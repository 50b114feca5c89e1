/// Significant digits kept for non-integral results
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Format a finite result for the entry display
///
/// Integral values print without a decimal point. Anything else is rounded
/// to [`SIGNIFICANT_DIGITS`] and printed in its shortest form, which drops
/// the trailing zeros left by the rounding.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        // Collapses -0 to 0
        if value == 0.0 {
            return "0".to_string();
        }
        return format!("{value}");
    }

    let rounded = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse::<f64>()
        .unwrap_or(value);
    format!("{rounded}")
}

/// Format a value derived directly from the typed entry
///
/// Keeps every digit the value carries, in the shortest form that reads back
/// to the same number. Negative zero prints as `0`.
pub fn format_entry(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_integral_values_have_no_point() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(1024.0), "1024");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_rounds_to_twelve_significant_digits() {
        assert_snapshot!(format_number(1.0 / 3.0), @"0.333333333333");
        assert_snapshot!(format_number(2.0_f64.sqrt()), @"1.41421356237");
    }

    #[test]
    fn test_strips_float_artifacts() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(0.07 * 100.0 / 100.0), "0.07");
    }

    #[test]
    fn test_rounding_can_produce_integer() {
        assert_eq!(format_number(2.9999999999999996), "3");
    }

    #[test]
    fn test_small_fraction() {
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn test_format_entry_keeps_all_digits() {
        assert_eq!(format_entry(-0.1234567890123456), "-0.1234567890123456");
        assert_eq!(format_entry(12345678901234.56), "12345678901234.56");
        assert_eq!(format_entry(-0.0), "0");
        assert_eq!(format_entry(0.5), "0.5");
    }
}
