//! Result assembly: runs the tokenize → classify → aggregate → convert
//! pipeline and packages the outcome into the response contract.

use crate::aggregator::{main_language, LanguageStats};
use crate::classifier::{classify, ClassifiedToken, LEXICON_CONFIDENCE};
use crate::converter::convert;
use crate::error::InvalidInput;
use crate::lexicon::{title_case, Label, Lexicon};
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default maximum input length, in characters after trimming.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 500;

/// Sample Hinglish sentences.
pub const HINGLISH_EXAMPLES: &[&str] = &[
    "Mera friend aaj party de raha hai",
    "Yeh movie bahut amazing thi!",
    "Tum kahan ho? I am waiting for you",
    "Aaj weather bahut beautiful hai",
    "Mera naam John hai aur main engineer hun",
    "Why are you late? Mujhe wait kar raha tha",
    "Woh restaurant mein delicious khana milta hai",
];

/// Sample Marathlish sentences.
pub const MARATHLISH_EXAMPLES: &[&str] = &[
    "Aaj office la meeting aahe, please time var ya",
    "Kal function la food khup tasty hota, great service",
    "Tu kuthe ahes? I am waiting outside",
    "Apan plan udya karu, meeting schedule tight aahe",
    "Mala coffee pahije, strong one please",
];

/// Full analysis of one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub original_text: String,
    #[serde(with = "title_case")]
    pub main_language: Label,
    pub word_count: usize,
    pub language_stats: LanguageStats,
    pub hindi_words: Vec<String>,
    pub marathi_words: Vec<String>,
    pub english_words: Vec<String>,
    pub converted_text: String,
}

/// Stateless text processor over a shared lexicon.
#[derive(Debug, Clone, Copy)]
pub struct Processor<'a> {
    lexicon: &'a Lexicon,
    max_chars: usize,
}

impl<'a> Processor<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            max_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }

    /// Set the maximum accepted input length in characters.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Analyze `text`. The input is trimmed first; empty or over-long input
    /// is rejected.
    pub fn process(&self, text: &str) -> Result<AnalysisResult, InvalidInput> {
        let text = text.trim();
        if text.is_empty() {
            return Err(InvalidInput::EmptyText);
        }
        if text.chars().count() > self.max_chars {
            return Err(InvalidInput::TextTooLong {
                max: self.max_chars,
            });
        }

        let tokens = classify(self.lexicon, &tokenize(text));
        for token in &tokens {
            if let Some(confidence) = token.confidence.filter(|c| *c < LEXICON_CONFIDENCE) {
                debug!(
                    "Guessed {} for {:?} (confidence {:.1})",
                    token.label,
                    token.text(),
                    confidence
                );
            }
        }
        let stats = LanguageStats::from_tokens(&tokens);
        let main = main_language(&tokens, &stats);
        let converted_text = convert(self.lexicon, text, &tokens, main);

        debug!(
            "Processed {} words: hindi={} marathi={} english={} other={} -> {}",
            tokens.len(),
            stats.hindi,
            stats.marathi,
            stats.english,
            stats.other,
            main
        );

        Ok(AnalysisResult {
            original_text: text.to_string(),
            main_language: main,
            word_count: tokens.len(),
            language_stats: stats,
            hindi_words: words_with_label(&tokens, Label::Hindi),
            marathi_words: words_with_label(&tokens, Label::Marathi),
            english_words: words_with_label(&tokens, Label::English),
            converted_text,
        })
    }
}

fn words_with_label(tokens: &[ClassifiedToken], label: Label) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| t.label == label)
        .map(|t| t.text().to_string())
        .collect()
}
