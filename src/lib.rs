//! cfgval - Typed configuration value parsing
//!
//! A small set of composable parsers that turn loosely-typed configuration
//! input into strongly-typed values, and render those values back into a
//! canonical text form.

pub mod cli;
pub mod error;
pub mod kind;
pub mod output;
pub mod parser;
pub mod setting;
pub mod types;

pub use error::{ConfigError, Result};
pub use kind::{parse, parse_or_error, render, KindParser, TypedValue, ValueKind};
pub use parser::{
    BooleanParser, DoubleParser, EnumParser, IntegerParser, ListParser, LocaleParser,
    LocationParser, Named, NonNegativeIntegerParser, Parser, ParserExt, PercentageParser,
    RangeParser, StringParser,
};
pub use setting::{Resolved, Setting, Source};
pub use types::{LanguageTag, Location};
