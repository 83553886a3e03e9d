//! Domain value types produced by the structured parsers.
//!
//! - `Location` - a block position in a named world, with its hex code
//! - `LanguageTag` - a leniently normalized language tag

mod locale;
mod location;

pub use locale::LanguageTag;
pub use location::Location;
