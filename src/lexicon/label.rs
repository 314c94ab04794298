//! Language labels assigned to individual words.
//!
//! A `Label` has two spellings on the wire: the lowercase code used as a
//! `language_stats` key (`"hindi"`) and the title-cased display name used for
//! `main_language` (`"Hindi"`). Clients rely on both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language label for a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Hindi,
    Marathi,
    English,
    /// Unclassified: digits, symbols, non-Latin script, emoji.
    Other,
}

impl Label {
    /// The labels that count as languages, in lexicon priority order.
    pub const LANGUAGES: [Label; 3] = [Label::Hindi, Label::Marathi, Label::English];

    /// Lowercase code (e.g., "hindi").
    pub fn code(&self) -> &'static str {
        match self {
            Label::Hindi => "hindi",
            Label::Marathi => "marathi",
            Label::English => "english",
            Label::Other => "other",
        }
    }

    /// Title-cased name (e.g., "Hindi").
    pub fn display_name(&self) -> &'static str {
        match self {
            Label::Hindi => "Hindi",
            Label::Marathi => "Marathi",
            Label::English => "English",
            Label::Other => "Other",
        }
    }

    /// Parse either spelling, case-insensitively.
    pub fn from_name(name: &str) -> Option<Label> {
        match name.trim().to_ascii_lowercase().as_str() {
            "hindi" => Some(Label::Hindi),
            "marathi" => Some(Label::Marathi),
            "english" => Some(Label::English),
            "other" => Some(Label::Other),
            _ => None,
        }
    }

    /// `false` only for `Other`.
    pub fn is_language(&self) -> bool {
        !matches!(self, Label::Other)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Serde adapter that writes a `Label` as its title-cased display name.
///
/// Use with `#[serde(with = "crate::lexicon::title_case")]`.
pub mod title_case {
    use super::Label;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(label: &Label, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(label.display_name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Label, D::Error> {
        let name = String::deserialize(deserializer)?;
        Label::from_name(&name).ok_or_else(|| D::Error::custom(format!("unknown language: {name}")))
    }
}
