//! Block locations and their compact hex encoding.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// `WORLD@XXXXXXXXYYYYYYYYZZZZZZZZ`, hex digits in either case.
static LOCATION_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^([A-Za-z0-9_]+)@([0-9A-F]{8})([0-9A-F]{8})([0-9A-F]{8})$")
        .expect("location pattern is valid")
});

/// A block position inside a named world.
///
/// The world name is an opaque token. Only names made of ASCII letters,
/// digits and `_` survive the text encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub world: String,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Location {
    pub fn new(world: impl Into<String>, x: i32, y: i32, z: i32) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }

    /// Decode a location from its compact text form.
    ///
    /// The form is the world name, `@`, then x, y and z as exactly eight
    /// hex digits each, holding the two's-complement bits of the
    /// coordinate. No separator sits between the three hex groups.
    pub fn from_code(s: &str) -> Result<Self> {
        let caps = LOCATION_CODE.captures(s).ok_or_else(|| ConfigError::Value {
            kind: "location".to_string(),
            raw: s.to_string(),
            help: Some("Use WORLD@XXXXXXXXYYYYYYYYZZZZZZZZ (three 8-digit hex groups)".to_string()),
        })?;

        Ok(Self {
            world: caps[1].to_string(),
            x: decode_coordinate(&caps[2])?,
            y: decode_coordinate(&caps[3])?,
            z: decode_coordinate(&caps[4])?,
        })
    }

    /// Encode this location in its compact text form.
    pub fn to_code(&self) -> String {
        format!(
            "{}@{:08X}{:08X}{:08X}",
            self.world, self.x as u32, self.y as u32, self.z as u32
        )
    }

    /// The block coordinates as an `(x, y, z)` triple.
    pub fn coordinates(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }
}

/// Reinterpret eight hex digits as a signed 32-bit coordinate.
fn decode_coordinate(hex: &str) -> Result<i32> {
    u32::from_str_radix(hex, 16)
        .map(|bits| bits as i32)
        .map_err(|_| ConfigError::Value {
            kind: "coordinate".to_string(),
            raw: hex.to_string(),
            help: None,
        })
}

impl FromStr for Location {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_code())
    }
}
