//! Homogeneous lists parsed element by element.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;

use super::{text_of, Parser};

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\s]+").expect("separator pattern is valid"));

/// Parses a list by handing every element to an inner parser.
///
/// A YAML sequence is parsed element by element. Text is unwrapped from
/// optional `[` `]` delimiters and split on runs of commas and whitespace.
/// One bad element rejects the whole list.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListParser<P> {
    inner: P,
}

impl<P> ListParser<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Parser> Parser for ListParser<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, raw: &Value) -> Option<Vec<P::Output>> {
        if let Value::Sequence(items) = raw {
            return items.iter().map(|item| self.inner.parse(item)).collect();
        }

        let text = text_of(raw)?;
        let body = text.trim();
        let body = body.strip_prefix('[').unwrap_or(body);
        let body = body.strip_suffix(']').unwrap_or(body);

        SEPARATORS
            .split(body)
            .filter(|token| !token.is_empty())
            .map(|token| self.inner.parse_str(token))
            .collect()
    }

    fn render(&self, value: &Vec<P::Output>) -> String {
        let parts: Vec<String> = value.iter().map(|v| self.inner.render(v)).collect();
        format!("[{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{BooleanParser, IntegerParser, StringParser};

    #[test]
    fn test_bracketed_text() {
        let parser = ListParser::new(IntegerParser);
        assert_eq!(parser.parse_str("[1, 2, 3]"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_bare_text_and_mixed_separators() {
        let parser = ListParser::new(IntegerParser);
        assert_eq!(parser.parse_str("1,2 ,, 3\t4"), Some(vec![1, 2, 3, 4]));
        assert_eq!(parser.parse_str("7"), Some(vec![7]));
    }

    #[test]
    fn test_fail_fast() {
        let parser = ListParser::new(IntegerParser);
        assert_eq!(parser.parse_str("[1, x, 3]"), None);
    }

    #[test]
    fn test_empty_list() {
        let parser = ListParser::new(IntegerParser);
        assert_eq!(parser.parse_str("[]"), Some(vec![]));
        assert_eq!(parser.parse_str(""), Some(vec![]));
        assert_eq!(parser.parse(&Value::Sequence(vec![])), Some(vec![]));
    }

    #[test]
    fn test_native_sequence() {
        let parser = ListParser::new(BooleanParser);
        let raw = Value::Sequence(vec![Value::from(true), Value::from("f"), Value::from(1)]);
        assert_eq!(parser.parse(&raw), Some(vec![true, false, true]));

        let bad = Value::Sequence(vec![Value::from(true), Value::from("maybe")]);
        assert_eq!(parser.parse(&bad), None);
    }

    #[test]
    fn test_native_sequence_keeps_element_text() {
        let parser = ListParser::new(StringParser);
        let raw = Value::Sequence(vec![Value::from("two words"), Value::from("x")]);
        assert_eq!(
            parser.parse(&raw),
            Some(vec!["two words".to_string(), "x".to_string()])
        );
    }

    #[test]
    fn test_null_is_rejected() {
        let parser = ListParser::new(IntegerParser);
        assert_eq!(parser.parse(&Value::Null), None);
    }

    #[test]
    fn test_render_round_trip() {
        let parser = ListParser::new(IntegerParser);
        let rendered = parser.render(&vec![1, -2, 3]);
        assert_eq!(rendered, "[1, -2, 3]");
        assert_eq!(parser.parse_str(&rendered), Some(vec![1, -2, 3]));
        assert_eq!(parser.render(&vec![]), "[]");
    }
}
