//! Case-insensitive lookup of enumeration variants by name.

use std::borrow::Cow;

use serde_yaml::Value;

use super::{text_of, Parser};

/// A value that is identified by a fixed name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

/// Matches input against a closed set of named variants, ignoring case.
///
/// The variant set is usually a `&'static` slice of an enum's values, but
/// an owned list works too when the names are only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumParser<E: Clone + 'static> {
    variants: Cow<'static, [E]>,
}

impl<E: Named + Clone + 'static> EnumParser<E> {
    /// Parser over a fixed, statically known variant set.
    pub const fn of(variants: &'static [E]) -> Self {
        Self {
            variants: Cow::Borrowed(variants),
        }
    }

    /// Parser over a variant set built at runtime.
    pub fn owned(variants: Vec<E>) -> Self {
        Self {
            variants: Cow::Owned(variants),
        }
    }

    pub fn variants(&self) -> &[E] {
        &self.variants
    }

    /// Names of all variants, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(Named::name)
    }
}

impl<E: Named + Clone + 'static> Parser for EnumParser<E> {
    type Output = E;

    fn parse(&self, raw: &Value) -> Option<E> {
        let text = text_of(raw)?;
        self.variants
            .iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(&text))
            .cloned()
    }

    fn render(&self, value: &E) -> String {
        value.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Facing {
        North,
        South,
    }

    impl Facing {
        const ALL: &'static [Facing] = &[Facing::North, Facing::South];
    }

    impl Named for Facing {
        fn name(&self) -> &str {
            match self {
                Facing::North => "NORTH",
                Facing::South => "SOUTH",
            }
        }
    }

    const FACING: EnumParser<Facing> = EnumParser::of(Facing::ALL);

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(FACING.parse_str("north"), Some(Facing::North));
        assert_eq!(FACING.parse_str("NORTH"), Some(Facing::North));
        assert_eq!(FACING.parse_str("SoUtH"), Some(Facing::South));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(FACING.parse_str("west"), None);
        assert_eq!(FACING.parse_str("nort"), None);
        assert_eq!(FACING.parse_str(""), None);
        assert_eq!(FACING.parse(&Value::Null), None);
    }

    #[test]
    fn test_render_uses_declared_name() {
        assert_eq!(FACING.render(&Facing::South), "SOUTH");
        assert_eq!(FACING.parse_str(&FACING.render(&Facing::North)), Some(Facing::North));
    }

    #[test]
    fn test_owned_names() {
        let parser = EnumParser::owned(vec!["Easy".to_string(), "Hard".to_string()]);
        assert_eq!(parser.parse_str("hard"), Some("Hard".to_string()));
        assert_eq!(parser.names().collect::<Vec<_>>(), vec!["Easy", "Hard"]);
    }
}
