//! Word-level conversion into the dominant language.
//!
//! Every Hindi, Marathi or English token that is not already in the target
//! language is looked up in the lexicon's conversion table and replaced in
//! place. Tokens without a mapping, tokens labelled `Other` and tokens
//! already in the target language are copied through unchanged, as is every
//! byte between tokens (spacing and punctuation). Words are never reordered,
//! so the output is a best-effort rewrite rather than a grammatical
//! translation.

use crate::classifier::ClassifiedToken;
use crate::lexicon::{Label, Lexicon};
use tracing::debug;

/// Rewrite `text` into `target`.
///
/// `tokens` must come from tokenizing `text`; their spans index into it.
pub fn convert(lexicon: &Lexicon, text: &str, tokens: &[ClassifiedToken], target: Label) -> String {
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut gaps = 0usize;

    for classified in tokens {
        let span = &classified.token.span;
        output.push_str(&text[cursor..span.start]);
        cursor = span.end;

        let word = classified.text();
        if !classified.label.is_language() || classified.label == target {
            output.push_str(word);
            continue;
        }

        match lexicon.translate(classified.label, target, word) {
            Some(replacement) => output.push_str(&match_case(word, replacement)),
            None => {
                gaps += 1;
                output.push_str(word);
            }
        }
    }
    output.push_str(&text[cursor..]);

    if gaps > 0 {
        debug!("{} word(s) had no {} mapping and were kept", gaps, target.code());
    }

    output
}

/// Carry the capitalisation of `original` over to `replacement`.
///
/// All-caps words (longer than one letter) stay all-caps; a capitalised
/// first letter is kept; otherwise the replacement is used as listed, which
/// keeps entries like "I" intact.
fn match_case(original: &str, replacement: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    let all_caps = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());

    if all_caps {
        return replacement.to_uppercase();
    }

    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = replacement.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }

    replacement.to_string()
}
