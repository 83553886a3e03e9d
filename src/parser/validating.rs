//! Parsers that layer a validity check or format constraint on a value.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;

use super::{text_of, IntegerParser, Parser};
use crate::types::LanguageTag;

static PERCENTAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?%$").expect("percentage pattern is valid"));

/// Integers that are zero or greater.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegativeIntegerParser;

impl Parser for NonNegativeIntegerParser {
    type Output = i32;

    fn parse(&self, raw: &Value) -> Option<i32> {
        IntegerParser.parse(raw).filter(|n| *n >= 0)
    }

    fn render(&self, value: &i32) -> String {
        IntegerParser.render(value)
    }
}

/// Wraps another parser and rejects values outside a closed range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeParser<P, T> {
    inner: P,
    bounds: RangeInclusive<T>,
}

impl<P, T> RangeParser<P, T> {
    pub fn new(inner: P, bounds: RangeInclusive<T>) -> Self {
        Self { inner, bounds }
    }

    pub fn bounds(&self) -> &RangeInclusive<T> {
        &self.bounds
    }
}

impl RangeParser<IntegerParser, i32> {
    /// Bounded integers, inclusive on both ends.
    pub fn integer(bounds: RangeInclusive<i32>) -> Self {
        Self::new(IntegerParser, bounds)
    }
}

impl<P, T> Parser for RangeParser<P, T>
where
    P: Parser<Output = T>,
    T: PartialOrd,
{
    type Output = T;

    fn parse(&self, raw: &Value) -> Option<T> {
        self.inner.parse(raw).filter(|v| self.bounds.contains(v))
    }

    fn render(&self, value: &T) -> String {
        self.inner.render(value)
    }
}

/// Percentages such as `42.5%`, parsed into the ratio `0.425`.
///
/// The numeric part must be plain digits with an optional fraction, so
/// signs, exponents and a missing `%` are all rejected. Digit strings too
/// long to hold as a finite `f64` are rejected too.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentageParser;

impl Parser for PercentageParser {
    type Output = f64;

    fn parse(&self, raw: &Value) -> Option<f64> {
        let text = text_of(raw)?;
        if !PERCENTAGE.is_match(&text) {
            return None;
        }
        let number: f64 = text[..text.len() - 1].parse().ok()?;
        Some(number / 100.0).filter(|ratio| ratio.is_finite())
    }

    /// Renders the shortest percentage that parses back to exactly `value`.
    fn render(&self, value: &f64) -> String {
        let percent = value * 100.0;
        let rounded = (0..17)
            .filter_map(|digits| format!("{:.*e}", digits, percent).parse::<f64>().ok());
        // `value * 100.0` can land a couple of ulps away from the parsed number.
        let bits = percent.to_bits();
        let neighbours = (1..=2u64).flat_map(|step| {
            [
                f64::from_bits(bits.wrapping_add(step)),
                f64::from_bits(bits.wrapping_sub(step)),
            ]
        });

        rounded
            .chain(neighbours)
            .find(|candidate| candidate / 100.0 == *value)
            .map_or_else(|| format!("{}%", percent), |candidate| format!("{}%", candidate))
    }
}

/// Language tags. Any non-null value is accepted and normalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleParser;

impl Parser for LocaleParser {
    type Output = LanguageTag;

    fn parse(&self, raw: &Value) -> Option<LanguageTag> {
        text_of(raw).map(|text| LanguageTag::normalize(&text))
    }

    fn render(&self, value: &LanguageTag) -> String {
        value.to_string()
    }
}
