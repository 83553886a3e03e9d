//! Block locations in the `WORLD@XXXXXXXXYYYYYYYYZZZZZZZZ` form.

use serde_yaml::Value;

use super::{text_of, Parser};
use crate::types::Location;

/// Parses and renders [`Location`] codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationParser;

impl Parser for LocationParser {
    type Output = Location;

    fn parse(&self, raw: &Value) -> Option<Location> {
        Location::from_code(&text_of(raw)?).ok()
    }

    fn render(&self, value: &Location) -> String {
        value.to_code()
    }
}
