//! Per-word language classifier.
//!
//! Lookups are checked in a fixed priority order: Hindi lexicon, Marathi
//! lexicon, English dictionary, then the alphabetic fallback. A word listed in
//! both Indic lexicons is labelled Hindi with reduced confidence. Anything
//! that is not a plain Latin-alphabet word ends up as `Other`.

use crate::lexicon::{Label, Lexicon};
use crate::tokenizer::Token;

/// Confidence for a direct lexicon or dictionary hit.
pub const LEXICON_CONFIDENCE: f32 = 1.0;
/// Confidence for a word found in both the Hindi and Marathi lexicons.
pub const AMBIGUOUS_CONFIDENCE: f32 = 0.5;
/// Confidence for an unlisted alphabetic word assumed to be English.
pub const FALLBACK_CONFIDENCE: f32 = 0.6;

/// A token with its language label.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedToken {
    pub token: Token,
    pub label: Label,
    /// `None` for `Other`
    pub confidence: Option<f32>,
}

impl ClassifiedToken {
    pub fn text(&self) -> &str {
        &self.token.text
    }
}

/// Label a single word. Case-insensitive and side-effect free.
pub fn classify_word(lexicon: &Lexicon, word: &str) -> (Label, Option<f32>) {
    let in_hindi = lexicon.contains(Label::Hindi, word);
    let in_marathi = lexicon.contains(Label::Marathi, word);

    match (in_hindi, in_marathi) {
        (true, true) => return (Label::Hindi, Some(AMBIGUOUS_CONFIDENCE)),
        (true, false) => return (Label::Hindi, Some(LEXICON_CONFIDENCE)),
        (false, true) => return (Label::Marathi, Some(LEXICON_CONFIDENCE)),
        (false, false) => {}
    }

    if lexicon.contains(Label::English, word) {
        return (Label::English, Some(LEXICON_CONFIDENCE));
    }

    if is_latin_word(word) {
        return (Label::English, Some(FALLBACK_CONFIDENCE));
    }

    (Label::Other, None)
}

/// Classify one token.
pub fn classify_token(lexicon: &Lexicon, token: &Token) -> ClassifiedToken {
    let (label, confidence) = classify_word(lexicon, &token.text);
    ClassifiedToken {
        token: token.clone(),
        label,
        confidence,
    }
}

/// Classify every token, preserving order.
pub fn classify(lexicon: &Lexicon, tokens: &[Token]) -> Vec<ClassifiedToken> {
    tokens.iter().map(|t| classify_token(lexicon, t)).collect()
}

/// ASCII letters with optional internal apostrophes or hyphens.
fn is_latin_word(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_alphabetic())
        && word.ends_with(|c: char| c.is_ascii_alphabetic())
        && word
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '\'' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn label_of(word: &str) -> Label {
        classify_word(&Lexicon::builtin(), word).0
    }

    // ==================== Lexicon Hits ====================

    #[test]
    fn test_hindi_words() {
        for word in ["mera", "naam", "hai", "bahut", "kahan", "khana"] {
            assert_eq!(label_of(word), Label::Hindi, "{word}");
        }
    }

    #[test]
    fn test_marathi_words() {
        for word in ["aahe", "khup", "la", "var", "kuthe", "mala", "pahije"] {
            assert_eq!(label_of(word), Label::Marathi, "{word}");
        }
    }

    #[test]
    fn test_english_dictionary_words() {
        let lexicon = Lexicon::builtin();
        for word in ["meeting", "office", "going", "home", "now"] {
            assert_eq!(
                classify_word(&lexicon, word),
                (Label::English, Some(LEXICON_CONFIDENCE)),
                "{word}"
            );
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(label_of("MERA"), Label::Hindi);
        assert_eq!(label_of("Aahe"), Label::Marathi);
        assert_eq!(label_of("Meeting"), Label::English);
    }

    // ==================== Priority ====================

    #[test]
    fn test_shared_indic_word_resolves_to_hindi() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.contains(Label::Marathi, "aaj"));
        assert_eq!(
            classify_word(&lexicon, "aaj"),
            (Label::Hindi, Some(AMBIGUOUS_CONFIDENCE))
        );
    }

    #[test]
    fn test_indic_lexicon_beats_english_dictionary() {
        // "main" is both a Hindi pronoun and an English word
        let mut lexicon = Lexicon::builtin();
        let extension = serde_json::from_str(r#"{ "english": ["main"] }"#).unwrap();
        lexicon.extend(extension).unwrap();
        assert_eq!(classify_word(&lexicon, "main").0, Label::Hindi);
    }

    // ==================== Fallbacks ====================

    #[test]
    fn test_unlisted_latin_word_is_english() {
        assert_eq!(
            classify_word(&Lexicon::builtin(), "John"),
            (Label::English, Some(FALLBACK_CONFIDENCE))
        );
        assert_eq!(label_of("well-known"), Label::English);
        assert_eq!(label_of("o'clock"), Label::English);
    }

    #[test]
    fn test_other_words() {
        for word in ["123", "abc123", "नमस्ते", "café", "🙂"] {
            assert_eq!(
                classify_word(&Lexicon::builtin(), word),
                (Label::Other, None),
                "{word}"
            );
        }
    }

    #[test]
    fn test_decomposed_accent_matches_precomposed() {
        let lexicon = Lexicon::builtin();
        let tokens = tokenize("cafe\u{301} café");
        let classified = classify(&lexicon, &tokens);

        assert_eq!(classified[0].text(), "cafe\u{301}");
        assert_eq!(classified[0].label, Label::Other);
        assert_eq!(classified[0].label, classified[1].label);
    }

    // ==================== Token Classification ====================

    #[test]
    fn test_classify_preserves_order_and_text() {
        let tokens = tokenize("Mera naam John hai");
        let classified = classify(&Lexicon::builtin(), &tokens);

        let labels: Vec<Label> = classified.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec![Label::Hindi, Label::Hindi, Label::English, Label::Hindi]
        );
        assert_eq!(classified[2].text(), "John");
        assert_eq!(classified[2].token.position, 2);
    }

    #[test]
    fn test_classification_is_pure() {
        let lexicon = Lexicon::builtin();
        let tokens = tokenize("Aaj office la meeting aahe");
        assert_eq!(classify(&lexicon, &tokens), classify(&lexicon, &tokens));
    }
}
