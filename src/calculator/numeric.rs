//! Conversion between raw user-entered text and decimal values
//!
//! Display strings use comma grouping and at most [`FRACTION_DIGITS`]
//! fractional digits with trailing zeros trimmed, so `parse(format(v))`
//! recovers `v` within one formatting-precision unit.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Fractional precision used for all displayed amounts
pub const FRACTION_DIGITS: u32 = 2;

/// Grouping separator accepted on input and produced on output
pub const GROUP_SEPARATOR: char = ',';

/// Parse raw field text into a decimal value
///
/// Strips grouping separators and surrounding whitespace first. Returns
/// `None` for empty, non-numeric or negative input; invalidity is a normal
/// outcome while the user is typing, not an error.
pub fn parse(text: &str) -> Option<Decimal> {
    let cleaned = text.trim().replace(GROUP_SEPARATOR, "");
    if cleaned.is_empty() {
        return None;
    }
    let value = Decimal::from_str(&cleaned).ok()?;
    if value.is_sign_negative() {
        return None;
    }
    Some(value)
}

/// Render a value as display text with grouping separators
///
/// Rounds to [`FRACTION_DIGITS`] decimal places and trims trailing
/// fractional zeros: `50000` formats as `"50,000"`, `2.50` as `"2.5"`.
pub fn format(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() {
        grouped.push('-');
    }
    let digits = integer.len();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse("10000"), Some(dec!(10000)));
        assert_eq!(parse("2.5"), Some(dec!(2.5)));
        assert_eq!(parse("0"), Some(dec!(0)));
    }

    #[test]
    fn test_parse_grouped_number() {
        assert_eq!(parse("50,000"), Some(dec!(50000)));
        assert_eq!(parse("1,234,567.89"), Some(dec!(1234567.89)));
    }

    #[test]
    fn test_parse_whitespace() {
        assert_eq!(parse("  42 "), Some(dec!(42)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("abc"), None);
        assert_eq!(parse("12a"), None);
        assert_eq!(parse("-5"), None);
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(format(dec!(50000)), "50,000");
        assert_eq!(format(dec!(1234567.89)), "1,234,567.89");
        assert_eq!(format(dec!(999)), "999");
        assert_eq!(format(dec!(1000)), "1,000");
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(format(dec!(5)), "5");
        assert_eq!(format(dec!(2.50)), "2.5");
        assert_eq!(format(dec!(0.00)), "0");
    }

    #[test]
    fn test_format_rounds_to_precision() {
        assert_eq!(format(dec!(3.14159)), "3.14");
        assert_eq!(format(dec!(0.005)), "0.01");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format(dec!(-4000)), "-4,000");
        assert_eq!(format(dec!(-0.5)), "-0.5");
    }

    #[test]
    fn test_round_trip() {
        for value in [dec!(1), dec!(12345.67), dec!(0.01), dec!(999999)] {
            assert_eq!(parse(&format(value)), Some(value));
        }
    }
}
