//! Language tags with lenient normalization.

use std::fmt;

use serde::{Serialize, Serializer};

/// A BCP 47 style language tag (`language[-Script][-REGION][-variant...]`).
///
/// Tags are built with [`LanguageTag::normalize`], which never fails: it
/// keeps the well-formed prefix of the input and drops everything after
/// the first subtag it cannot place. An input with no usable language
/// becomes the undetermined tag `und`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LanguageTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
    variants: Vec<String>,
}

impl LanguageTag {
    /// Normalize free text into a language tag.
    ///
    /// Subtags may be separated by `-` or `_`. Case is canonicalized:
    /// lowercase language, titlecase script, uppercase region.
    pub fn normalize(text: &str) -> Self {
        let mut tag = Self::default();
        let mut subtags = text.trim().split(['-', '_']).peekable();

        match subtags.next() {
            Some(first) if is_language(first) => {
                let language = first.to_ascii_lowercase();
                if language != "und" {
                    tag.language = language;
                }
            }
            _ => return tag,
        }

        if let Some(script) = subtags.next_if(|s| is_script(s)) {
            tag.script = Some(titlecase(script));
        }

        if let Some(region) = subtags.next_if(|s| is_region(s)) {
            tag.region = Some(region.to_ascii_uppercase());
        }

        while let Some(variant) = subtags.next_if(|s| is_variant(s)) {
            tag.variants.push(variant.to_ascii_lowercase());
        }

        tag
    }

    /// The primary language, or `None` when undetermined.
    pub fn language(&self) -> Option<&str> {
        if self.language.is_empty() {
            None
        } else {
            Some(&self.language)
        }
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Check if no language could be recovered from the input.
    pub fn is_undetermined(&self) -> bool {
        self.language.is_empty()
    }
}

fn is_language(s: &str) -> bool {
    matches!(s.len(), 2..=3 | 5..=8) && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_script(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_region(s: &str) -> bool {
    (s.len() == 2 && s.bytes().all(|b| b.is_ascii_alphabetic()))
        || (s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()))
}

fn is_variant(s: &str) -> bool {
    let alnum = s.bytes().all(|b| b.is_ascii_alphanumeric());
    match s.len() {
        5..=8 => alnum,
        4 => alnum && s.as_bytes()[0].is_ascii_digit(),
        _ => false,
    }
}

fn titlecase(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.language().unwrap_or("und"))?;
        if let Some(script) = &self.script {
            write!(f, "-{}", script)?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{}", region)?;
        }
        for variant in &self.variants {
            write!(f, "-{}", variant)?;
        }
        Ok(())
    }
}

impl Serialize for LanguageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
