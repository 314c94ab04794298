//! Lexicon registry: the word tables every classification reads from.
//!
//! The process-wide instance is built once (from the built-in lists, plus an
//! optional JSON extension file) and never mutated afterwards, so request
//! handlers share it through a `&'static` reference without locking.

use super::data::{
    ENGLISH_WORDS, HINDI_ENGLISH, HINDI_MARATHI, HINDI_WORDS, MARATHI_ENGLISH, MARATHI_WORDS,
};
use super::Label;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info};

/// Global lexicon instance (initialized lazily or by `Lexicon::install`)
static LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// Word tables for the three languages plus conversion mappings between them.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    hindi: HashSet<String>,
    marathi: HashSet<String>,
    english: HashSet<String>,
    /// `(from, to)` -> lowercase source word -> replacement
    conversions: HashMap<(Label, Label), HashMap<String, String>>,
}

/// Extra entries loaded from a JSON file at startup.
///
/// ```json
/// {
///   "hindi": ["sapna"],
///   "conversions": [{ "from": "hindi", "to": "english", "word": "sapna", "replacement": "dream" }]
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct LexiconExtension {
    #[serde(default)]
    pub hindi: Vec<String>,
    #[serde(default)]
    pub marathi: Vec<String>,
    #[serde(default)]
    pub english: Vec<String>,
    #[serde(default)]
    pub conversions: Vec<ConversionEntry>,
}

/// One directed conversion mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionEntry {
    pub from: Label,
    pub to: Label,
    pub word: String,
    pub replacement: String,
}

impl Lexicon {
    /// Build the lexicon from the built-in word lists.
    pub fn builtin() -> Self {
        let mut lexicon = Lexicon {
            hindi: HINDI_WORDS.iter().map(|w| w.to_string()).collect(),
            marathi: MARATHI_WORDS.iter().map(|w| w.to_string()).collect(),
            english: ENGLISH_WORDS.iter().map(|w| w.to_string()).collect(),
            conversions: HashMap::new(),
        };

        lexicon.add_pairs(Label::Hindi, Label::English, HINDI_ENGLISH);
        lexicon.add_pairs(Label::Marathi, Label::English, MARATHI_ENGLISH);
        lexicon.add_pairs(Label::Hindi, Label::Marathi, HINDI_MARATHI);

        lexicon
    }

    /// Built-in lexicon merged with the extension file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let extension: LexiconExtension = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse lexicon file {}", path.display()))?;

        let mut lexicon = Self::builtin();
        lexicon.extend(extension)?;
        info!(
            "Loaded lexicon extension from {} ({} hindi, {} marathi, {} english words total)",
            path.display(),
            lexicon.word_count(Label::Hindi),
            lexicon.word_count(Label::Marathi),
            lexicon.word_count(Label::English)
        );
        Ok(lexicon)
    }

    /// Get the global lexicon, falling back to the built-in tables if
    /// nothing was installed.
    pub fn global() -> &'static Lexicon {
        LEXICON.get_or_init(Lexicon::builtin)
    }

    /// Install `lexicon` as the global instance. Fails if the global lexicon
    /// has already been initialized.
    pub fn install(lexicon: Lexicon) -> Result<&'static Lexicon> {
        if LEXICON.set(lexicon).is_err() {
            bail!("Lexicon has already been initialized");
        }
        Ok(Self::global())
    }

    /// Merge extension entries. Words are lowercased; conversions into or
    /// out of `Other` are rejected.
    pub fn extend(&mut self, extension: LexiconExtension) -> Result<()> {
        self.hindi.extend(extension.hindi.iter().map(|w| normalize(w)));
        self.marathi.extend(extension.marathi.iter().map(|w| normalize(w)));
        self.english.extend(extension.english.iter().map(|w| normalize(w)));

        for entry in extension.conversions {
            if !entry.from.is_language() || !entry.to.is_language() || entry.from == entry.to {
                bail!(
                    "Invalid conversion {} -> {} for '{}'",
                    entry.from.code(),
                    entry.to.code(),
                    entry.word
                );
            }
            debug!(
                "Conversion override {}:{} -> {}:{}",
                entry.from.code(),
                entry.word,
                entry.to.code(),
                entry.replacement
            );
            self.conversions
                .entry((entry.from, entry.to))
                .or_default()
                .insert(normalize(&entry.word), entry.replacement);
        }

        Ok(())
    }

    /// Whether `word` (any case) is listed for `label`. Always `false` for
    /// `Other`.
    pub fn contains(&self, label: Label, word: &str) -> bool {
        let word = normalize(word);
        match label {
            Label::Hindi => self.hindi.contains(&word),
            Label::Marathi => self.marathi.contains(&word),
            Label::English => self.english.contains(&word),
            Label::Other => false,
        }
    }

    /// Replacement for `word` when converting from `from` to `to`.
    pub fn translate(&self, from: Label, to: Label, word: &str) -> Option<&str> {
        self.conversions
            .get(&(from, to))?
            .get(&normalize(word))
            .map(String::as_str)
    }

    /// Number of words listed for `label`.
    pub fn word_count(&self, label: Label) -> usize {
        match label {
            Label::Hindi => self.hindi.len(),
            Label::Marathi => self.marathi.len(),
            Label::English => self.english.len(),
            Label::Other => 0,
        }
    }

    /// Register `pairs` in both directions. Forward entries overwrite;
    /// reverse entries keep the first pair seen for each target word.
    fn add_pairs(&mut self, a: Label, b: Label, pairs: &[(&str, &str)]) {
        for (left, right) in pairs {
            self.conversions
                .entry((a, b))
                .or_default()
                .insert(normalize(left), right.to_string());
            self.conversions
                .entry((b, a))
                .or_default()
                .entry(normalize(right))
                .or_insert_with(|| left.to_string());
        }
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
