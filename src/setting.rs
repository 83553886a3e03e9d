//! Keyed settings that fall back to a default when a value is unusable.

use serde_yaml::{Mapping, Value};

use crate::parser::{text_of, Parser};

/// Where a resolved setting value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Parsed from the configuration.
    Configured,
    /// Key absent or null; default used.
    Missing,
    /// Present but rejected by the parser; default used.
    Rejected,
}

/// A setting value together with its [`Source`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub value: T,
    pub source: Source,
}

/// A named configuration entry with a parser and a default value.
///
/// ```
/// use cfgval::parser::PercentageParser;
/// use cfgval::Setting;
///
/// let chance = Setting::new("drop-chance", 0.05, PercentageParser);
/// let section = serde_yaml::from_str("drop-chance: 12.5%").unwrap();
/// assert_eq!(chance.resolve(&section), 0.125);
/// ```
#[derive(Debug, Clone)]
pub struct Setting<T, P> {
    key: String,
    default: T,
    parser: P,
}

impl<T, P> Setting<T, P>
where
    T: Clone,
    P: Parser<Output = T>,
{
    pub fn new(key: impl Into<String>, default: T, parser: P) -> Self {
        Self {
            key: key.into(),
            default,
            parser,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Look the setting up in `section`, using the default if needed.
    pub fn resolve(&self, section: &Mapping) -> T {
        self.resolve_with(section).value
    }

    /// Look the setting up in `section` and report where the value came from.
    ///
    /// A rejected value is logged at warn level before falling back.
    pub fn resolve_with(&self, section: &Mapping) -> Resolved<T> {
        let raw = match section.get(self.key.as_str()) {
            None | Some(Value::Null) => {
                return Resolved {
                    value: self.default.clone(),
                    source: Source::Missing,
                };
            }
            Some(raw) => raw,
        };

        match self.parser.parse(raw) {
            Some(value) => Resolved {
                value,
                source: Source::Configured,
            },
            None => {
                tracing::warn!(
                    key = %self.key,
                    raw = ?text_of(raw),
                    default = %self.parser.render(&self.default),
                    "invalid configuration value, using default"
                );
                Resolved {
                    value: self.default.clone(),
                    source: Source::Rejected,
                }
            }
        }
    }

    /// Render a value of this setting in canonical form.
    pub fn render(&self, value: &T) -> String {
        self.parser.render(value)
    }
}
