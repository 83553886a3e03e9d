//! Direct textual conversions with no extra validation.

use serde_yaml::Value;

use super::{text_of, Parser};

/// Accepts any non-null value as its textual form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringParser;

impl Parser for StringParser {
    type Output = String;

    fn parse(&self, raw: &Value) -> Option<String> {
        text_of(raw).map(|text| text.into_owned())
    }

    fn render(&self, value: &String) -> String {
        value.clone()
    }
}

/// Base-10 signed 32-bit integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerParser;

impl Parser for IntegerParser {
    type Output = i32;

    fn parse(&self, raw: &Value) -> Option<i32> {
        text_of(raw)?.parse().ok()
    }

    fn render(&self, value: &i32) -> String {
        value.to_string()
    }
}

/// Floating-point literals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleParser;

impl Parser for DoubleParser {
    type Output = f64;

    fn parse(&self, raw: &Value) -> Option<f64> {
        text_of(raw)?.parse().ok()
    }

    fn render(&self, value: &f64) -> String {
        value.to_string()
    }
}

/// Booleans spelled `1`/`t`/`true` or `0`/`f`/`false`, in any case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanParser;

impl Parser for BooleanParser {
    type Output = bool;

    fn parse(&self, raw: &Value) -> Option<bool> {
        match text_of(raw)?.to_ascii_lowercase().as_str() {
            "1" | "t" | "true" => Some(true),
            "0" | "f" | "false" => Some(false),
            _ => None,
        }
    }

    fn render(&self, value: &bool) -> String {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_accepts_anything_but_null() {
        assert_eq!(StringParser.parse_str("hello world"), Some("hello world".to_string()));
        assert_eq!(StringParser.parse(&Value::from(12)), Some("12".to_string()));
        assert_eq!(StringParser.parse(&Value::Null), None);
    }

    #[test]
    fn test_integer_text_and_native() {
        assert_eq!(IntegerParser.parse_str("42"), Some(42));
        assert_eq!(IntegerParser.parse_str("-17"), Some(-17));
        assert_eq!(IntegerParser.parse_str("+5"), Some(5));
        assert_eq!(IntegerParser.parse(&Value::from(9)), Some(9));
    }

    #[test]
    fn test_integer_rejects_malformed() {
        assert_eq!(IntegerParser.parse_str("4.2"), None);
        assert_eq!(IntegerParser.parse_str("0x10"), None);
        assert_eq!(IntegerParser.parse_str(" 1"), None);
        assert_eq!(IntegerParser.parse_str(""), None);
        assert_eq!(IntegerParser.parse_str("2147483648"), None);
        assert_eq!(IntegerParser.parse(&Value::from(true)), None);
    }

    #[test]
    fn test_integer_round_trip_extremes() {
        for n in [i32::MIN, -1, 0, 1, i32::MAX] {
            assert_eq!(IntegerParser.parse_str(&IntegerParser.render(&n)), Some(n));
        }
    }

    #[test]
    fn test_double() {
        assert_eq!(DoubleParser.parse_str("1.5"), Some(1.5));
        assert_eq!(DoubleParser.parse_str("-2e3"), Some(-2000.0));
        assert_eq!(DoubleParser.parse(&Value::from(0.25)), Some(0.25));
        assert_eq!(DoubleParser.parse_str("1.5.2"), None);
        assert_eq!(DoubleParser.parse_str("abc"), None);
        assert_eq!(DoubleParser.render(&0.1), "0.1");
    }

    #[test]
    fn test_double_out_of_range_saturates() {
        assert_eq!(DoubleParser.parse_str("1e400"), Some(f64::INFINITY));
        assert_eq!(DoubleParser.parse_str("-1e400"), Some(f64::NEG_INFINITY));
        assert_eq!(DoubleParser.render(&f64::INFINITY), "inf");
        assert_eq!(DoubleParser.parse_str("inf"), Some(f64::INFINITY));
    }

    #[test]
    fn test_boolean_tokens() {
        for token in ["TRUE", "t", "1", "True", "T"] {
            assert_eq!(BooleanParser.parse_str(token), Some(true), "{token}");
        }
        for token in ["false", "F", "0", "fAlSe"] {
            assert_eq!(BooleanParser.parse_str(token), Some(false), "{token}");
        }
        assert_eq!(BooleanParser.parse_str("yes"), None);
        assert_eq!(BooleanParser.parse_str("2"), None);
        assert_eq!(BooleanParser.parse(&Value::from(false)), Some(false));
        assert_eq!(BooleanParser.parse(&Value::from(1)), Some(true));
    }
}
