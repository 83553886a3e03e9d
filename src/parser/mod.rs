//! Typed parsers for configuration values.
//!
//! Every value kind a configuration file can hold has a parser that turns
//! a raw, loosely-typed YAML value into a typed value, and renders a typed
//! value back into its canonical text.
//!
//! # Contract
//!
//! - `parse` never fails loudly: malformed input yields `None`.
//! - `render` is total, and `parse(render(v))` gives back `v` for any `v`
//!   produced by a successful parse.
//! - Parsers hold only fixed construction-time parameters, so a single
//!   instance can be shared freely.
//!
//! # Usage
//!
//! ```
//! use cfgval::parser::{IntegerParser, Parser, ParserExt};
//!
//! let ports = IntegerParser.in_range(1..=65535).list();
//! assert_eq!(ports.parse_str("[80, 443]"), Some(vec![80, 443]));
//! assert_eq!(ports.parse_str("[80, 0]"), None);
//! ```

mod enumeration;
mod list;
mod location;
mod primitive;
mod validating;

use std::borrow::Cow;
use std::ops::RangeInclusive;

use serde_yaml::Value;

pub use enumeration::{EnumParser, Named};
pub use list::ListParser;
pub use location::LocationParser;
pub use primitive::{BooleanParser, DoubleParser, IntegerParser, StringParser};
pub use validating::{LocaleParser, NonNegativeIntegerParser, PercentageParser, RangeParser};

/// A converter between raw configuration values and one typed value kind.
pub trait Parser {
    /// The typed value produced by a successful parse.
    type Output;

    /// Parse a raw value, returning `None` if it is malformed or invalid.
    fn parse(&self, raw: &Value) -> Option<Self::Output>;

    /// Render a value in the canonical form accepted by [`Parser::parse`].
    fn render(&self, value: &Self::Output) -> String;

    /// Parse free text, as if it had been read as a YAML string.
    fn parse_str(&self, text: &str) -> Option<Self::Output> {
        self.parse(&Value::String(text.to_string()))
    }
}

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    fn parse(&self, raw: &Value) -> Option<Self::Output> {
        (**self).parse(raw)
    }

    fn render(&self, value: &Self::Output) -> String {
        (**self).render(value)
    }
}

/// Combinators available on every parser.
pub trait ParserExt: Parser + Sized {
    /// Reject parsed values outside `bounds` (inclusive on both ends).
    fn in_range(self, bounds: RangeInclusive<Self::Output>) -> RangeParser<Self, Self::Output>
    where
        Self::Output: PartialOrd,
    {
        RangeParser::new(self, bounds)
    }

    /// Parse a homogeneous list whose elements are handled by this parser.
    fn list(self) -> ListParser<Self> {
        ListParser::new(self)
    }
}

impl<P: Parser> ParserExt for P {}

/// The textual form of a raw value.
///
/// Strings are returned as-is, numbers and booleans in their natural
/// spelling, and sequences as `[a, b, c]`. Null has no textual form.
pub fn text_of(raw: &Value) -> Option<Cow<'_, str>> {
    match raw {
        Value::Null => None,
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Sequence(items) => {
            let parts: Vec<Cow<'_, str>> = items
                .iter()
                .map(|item| text_of(item).unwrap_or(Cow::Borrowed("null")))
                .collect();
            Some(Cow::Owned(format!("[{}]", parts.join(", "))))
        }
        Value::Mapping(_) | Value::Tagged(_) => serde_yaml::to_string(raw)
            .ok()
            .map(|s| Cow::Owned(s.trim_end().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_of_scalars() {
        assert_eq!(text_of(&Value::from("abc")).as_deref(), Some("abc"));
        assert_eq!(text_of(&Value::from(42)).as_deref(), Some("42"));
        assert_eq!(text_of(&Value::from(-7)).as_deref(), Some("-7"));
        assert_eq!(text_of(&Value::from(true)).as_deref(), Some("true"));
        assert_eq!(text_of(&Value::Null), None);
    }

    #[test]
    fn test_text_of_sequence() {
        let seq = Value::Sequence(vec![Value::from(1), Value::from("x"), Value::Null]);
        assert_eq!(text_of(&seq).as_deref(), Some("[1, x, null]"));
    }

    #[test]
    fn test_shared_reference_is_a_parser() {
        let shared = &IntegerParser;
        let list = ListParser::new(shared);
        assert_eq!(list.parse_str("1 2"), Some(vec![1, 2]));
    }

    #[test]
    fn test_combinators_compose() {
        let parser = IntegerParser.in_range(0..=9).list();
        assert_eq!(parser.parse_str("[3, 4]"), Some(vec![3, 4]));
        assert_eq!(parser.parse_str("[3, 40]"), None);
    }
}
