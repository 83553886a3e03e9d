//! Kind-tagged parsing for callers that only know a value's declared kind.
//!
//! Configuration loaders and command handlers describe each setting by a
//! [`ValueKind`] tag such as `percentage` or `list<range(0..64)>`, and
//! exchange values as [`TypedValue`]s. Tags have a small text grammar so
//! they can be written in schemas or passed on the command line.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_yaml::Value;

use crate::error::{ConfigError, Result};
use crate::parser::{
    text_of, BooleanParser, DoubleParser, EnumParser, IntegerParser, ListParser, LocaleParser,
    LocationParser, NonNegativeIntegerParser, Parser, PercentageParser, RangeParser,
    StringParser,
};
use crate::types::{LanguageTag, Location};

/// Tag syntax for every kind, with a short description.
pub const KIND_SYNTAX: &[(&str, &str)] = &[
    ("string", "any text"),
    ("integer", "base-10 32-bit integer"),
    ("non-negative", "integer >= 0"),
    ("range(LO..HI)", "integer between LO and HI inclusive"),
    ("double", "floating-point number"),
    ("boolean", "1/t/true or 0/f/false, any case"),
    ("percentage", "digits with optional fraction and a trailing %"),
    ("locale", "language tag, leniently normalized"),
    ("location", "WORLD@XXXXXXXXYYYYYYYYZZZZZZZZ"),
    ("enum(A|B|...)", "one of the listed names, any case"),
    ("list<KIND>", "bracketed or comma/space separated list"),
];

/// The declared kind of a configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    String,
    Integer,
    NonNegative,
    Range(RangeParser<IntegerParser, i32>),
    Double,
    Boolean,
    Percentage,
    Locale,
    Location,
    Enum(EnumParser<String>),
    List(Box<ValueKind>),
}

impl ValueKind {
    /// Bounded integer kind.
    pub fn range(min: i32, max: i32) -> Self {
        ValueKind::Range(RangeParser::integer(min..=max))
    }

    /// Enumeration kind over the given names.
    pub fn one_of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueKind::Enum(EnumParser::owned(names.into_iter().map(Into::into).collect()))
    }

    /// List kind whose elements are of `element` kind.
    pub fn list(element: ValueKind) -> Self {
        ValueKind::List(Box::new(element))
    }

    /// A parser producing [`TypedValue`]s of this kind.
    pub fn parser(&self) -> KindParser<'_> {
        KindParser { kind: self }
    }
}

impl FromStr for ValueKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();

        if let Some(element) = strip_parameters(tag, "list", '<', '>') {
            return Ok(ValueKind::list(element.parse()?));
        }

        if let Some(bounds) = strip_parameters(tag, "range", '(', ')') {
            return parse_range_tag(bounds);
        }

        if let Some(names) = strip_parameters(tag, "enum", '(', ')') {
            return parse_enum_tag(names);
        }

        let lower = tag.to_ascii_lowercase();
        match lower.as_str() {
            "string" => Ok(ValueKind::String),
            "integer" => Ok(ValueKind::Integer),
            "non-negative" => Ok(ValueKind::NonNegative),
            "double" => Ok(ValueKind::Double),
            "boolean" => Ok(ValueKind::Boolean),
            "percentage" => Ok(ValueKind::Percentage),
            "locale" => Ok(ValueKind::Locale),
            "location" => Ok(ValueKind::Location),
            _ => Err(ConfigError::Kind {
                message: format!("unknown kind '{}'", s.trim()),
                help: Some("Run `cfgval kinds` to list the supported kinds".to_string()),
            }),
        }
    }
}

/// The trimmed text between `open` and `close` in `keyword<open>...<close>`.
fn strip_parameters<'a>(tag: &'a str, keyword: &str, open: char, close: char) -> Option<&'a str> {
    let head = tag.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let inner = tag[keyword.len()..]
        .trim_start()
        .strip_prefix(open)?
        .strip_suffix(close)?;
    Some(inner.trim())
}

fn parse_range_tag(bounds: &str) -> Result<ValueKind> {
    let invalid = || ConfigError::Kind {
        message: format!("invalid range bounds '{}'", bounds),
        help: Some("Use range(LO..HI) with integer bounds, e.g. range(0..100)".to_string()),
    };

    let (lo, hi) = bounds.split_once("..").ok_or_else(invalid)?;
    let min = lo.trim().parse().map_err(|_| invalid())?;
    let max = hi.trim().parse().map_err(|_| invalid())?;
    Ok(ValueKind::range(min, max))
}

fn parse_enum_tag(names: &str) -> Result<ValueKind> {
    let names: Vec<&str> = names.split('|').map(str::trim).collect();
    if names.iter().any(|name| name.is_empty()) {
        return Err(ConfigError::Kind {
            message: "enum names cannot be empty".to_string(),
            help: Some("Use enum(A|B|C)".to_string()),
        });
    }
    Ok(ValueKind::one_of(names))
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::String => write!(f, "string"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::NonNegative => write!(f, "non-negative"),
            ValueKind::Range(parser) => {
                write!(f, "range({}..{})", parser.bounds().start(), parser.bounds().end())
            }
            ValueKind::Double => write!(f, "double"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Percentage => write!(f, "percentage"),
            ValueKind::Locale => write!(f, "locale"),
            ValueKind::Location => write!(f, "location"),
            ValueKind::Enum(parser) => {
                write!(f, "enum({})", parser.names().collect::<Vec<_>>().join("|"))
            }
            ValueKind::List(element) => write!(f, "list<{}>", element),
        }
    }
}

/// A parsed configuration value of any kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TypedValue {
    String(String),
    Integer(i32),
    Double(f64),
    Boolean(bool),
    /// A ratio, where `1.0` is 100%.
    Percentage(f64),
    Locale(LanguageTag),
    Location(Location),
    /// The declared spelling of the matched enumeration name.
    Choice(String),
    List(Vec<TypedValue>),
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::String(s) | TypedValue::Choice(s) => f.write_str(s),
            TypedValue::Integer(n) => write!(f, "{}", n),
            TypedValue::Double(d) => write!(f, "{}", d),
            TypedValue::Boolean(b) => write!(f, "{}", b),
            TypedValue::Percentage(r) => f.write_str(&PercentageParser.render(r)),
            TypedValue::Locale(tag) => write!(f, "{}", tag),
            TypedValue::Location(loc) => write!(f, "{}", loc),
            TypedValue::List(items) => {
                let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

/// Adapts a [`ValueKind`] to the [`Parser`] contract.
#[derive(Debug, Clone, Copy)]
pub struct KindParser<'a> {
    kind: &'a ValueKind,
}

impl Parser for KindParser<'_> {
    type Output = TypedValue;

    fn parse(&self, raw: &Value) -> Option<TypedValue> {
        match self.kind {
            ValueKind::String => StringParser.parse(raw).map(TypedValue::String),
            ValueKind::Integer => IntegerParser.parse(raw).map(TypedValue::Integer),
            ValueKind::NonNegative => NonNegativeIntegerParser.parse(raw).map(TypedValue::Integer),
            ValueKind::Range(parser) => parser.parse(raw).map(TypedValue::Integer),
            ValueKind::Double => DoubleParser.parse(raw).map(TypedValue::Double),
            ValueKind::Boolean => BooleanParser.parse(raw).map(TypedValue::Boolean),
            ValueKind::Percentage => PercentageParser.parse(raw).map(TypedValue::Percentage),
            ValueKind::Locale => LocaleParser.parse(raw).map(TypedValue::Locale),
            ValueKind::Location => LocationParser.parse(raw).map(TypedValue::Location),
            ValueKind::Enum(parser) => parser.parse(raw).map(TypedValue::Choice),
            ValueKind::List(element) => ListParser::new(element.parser())
                .parse(raw)
                .map(TypedValue::List),
        }
    }

    fn render(&self, value: &TypedValue) -> String {
        render_as(self.kind, value).unwrap_or_else(|| value.to_string())
    }
}

/// Render `value` through the parser of `kind`, if the value is of that kind.
fn render_as(kind: &ValueKind, value: &TypedValue) -> Option<String> {
    let rendered = match (kind, value) {
        (ValueKind::String, TypedValue::String(s)) => StringParser.render(s),
        (ValueKind::Integer, TypedValue::Integer(n)) => IntegerParser.render(n),
        (ValueKind::NonNegative, TypedValue::Integer(n)) => NonNegativeIntegerParser.render(n),
        (ValueKind::Range(parser), TypedValue::Integer(n)) => parser.render(n),
        (ValueKind::Double, TypedValue::Double(d)) => DoubleParser.render(d),
        (ValueKind::Boolean, TypedValue::Boolean(b)) => BooleanParser.render(b),
        (ValueKind::Percentage, TypedValue::Percentage(r)) => PercentageParser.render(r),
        (ValueKind::Locale, TypedValue::Locale(tag)) => LocaleParser.render(tag),
        (ValueKind::Location, TypedValue::Location(loc)) => LocationParser.render(loc),
        (ValueKind::Enum(parser), TypedValue::Choice(name)) => parser.render(name),
        (ValueKind::List(element), TypedValue::List(items)) => {
            let parts = items
                .iter()
                .map(|item| render_as(element, item))
                .collect::<Option<Vec<_>>>()?;
            format!("[{}]", parts.join(", "))
        }
        _ => return None,
    };
    Some(rendered)
}

/// Parse a raw value of the declared kind.
pub fn parse(kind: &ValueKind, raw: &Value) -> Option<TypedValue> {
    let parsed = kind.parser().parse(raw);
    match &parsed {
        Some(value) => tracing::trace!(%kind, %value, "parsed configuration value"),
        None => tracing::debug!(%kind, raw = ?text_of(raw), "rejected configuration value"),
    }
    parsed
}

/// Render a value in the canonical text form of the declared kind.
///
/// Returns `None` if the value does not belong to `kind`.
pub fn render(kind: &ValueKind, value: &TypedValue) -> Option<String> {
    let rendered = render_as(kind, value);
    if rendered.is_none() {
        tracing::debug!(%kind, ?value, "value does not match declared kind");
    }
    rendered
}

/// Like [`parse`], but reports a rejected value as an error.
pub fn parse_or_error(kind: &ValueKind, raw: &Value) -> Result<TypedValue> {
    parse(kind, raw).ok_or_else(|| ConfigError::Value {
        kind: kind.to_string(),
        raw: text_of(raw).map_or_else(|| "null".to_string(), |text| text.into_owned()),
        help: Some(format!("Expected a value of kind {}", kind)),
    })
}
