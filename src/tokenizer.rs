//! Whitespace tokenizer.
//!
//! Input is split on whitespace. Leading and trailing punctuation (`?`, `!`,
//! `.`, `,`, quotes, brackets, ...) is stripped from each chunk before
//! classification; apostrophes and hyphens inside a word are kept, and so are
//! combining marks following the last letter. Sentence punctuation glued
//! between two words ("ho?I", "hello,world") splits them. Each token
//! remembers the byte span of its word inside the original text, so the
//! converter can rewrite words while leaving the punctuation and spacing
//! around them untouched. Chunks that are nothing but punctuation produce no
//! token.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

static CHUNK_REGEX: OnceLock<Regex> = OnceLock::new();
static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
static MARK_REGEX: OnceLock<Regex> = OnceLock::new();

/// Punctuation that ends a word even when no space follows it.
const SEPARATORS: &[char] = &['?', '!', ',', '.'];

fn chunk_regex() -> &'static Regex {
    CHUNK_REGEX.get_or_init(|| Regex::new(r"\S+").expect("Invalid chunk regex"))
}

/// First letter or digit through the last one, plus any combining marks on it.
fn word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| {
        Regex::new(r"[\p{Alphabetic}\p{N}](?:.*[\p{Alphabetic}\p{N}])?\p{M}*")
            .expect("Invalid word regex")
    })
}

fn is_mark(c: char) -> bool {
    !c.is_ascii()
        && MARK_REGEX
            .get_or_init(|| Regex::new(r"^\p{M}$").expect("Invalid mark regex"))
            .is_match(c.encode_utf8(&mut [0; 4]))
}

/// A single word of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word with boundary punctuation stripped, case preserved
    pub text: String,
    /// Index in the token sequence
    pub position: usize,
    /// Byte range of `text` inside the original input
    pub span: Range<usize>,
}

/// Split `text` into tokens in input order.
pub fn tokenize(text: &str) -> Vec<Token> {
    chunk_regex()
        .find_iter(text)
        .flat_map(|chunk| {
            let offset = chunk.start();
            let chunk = chunk.as_str();
            split_glued(chunk).into_iter().filter_map(move |piece| {
                let word = word_regex().find(&chunk[piece.clone()])?;
                let start = offset + piece.start + word.start();
                Some(start..offset + piece.start + word.end())
            })
        })
        .enumerate()
        .map(|(position, span)| Token {
            text: text[span.clone()].to_string(),
            position,
            span,
        })
        .collect()
}

/// Cut `chunk` where a run of [`SEPARATORS`] sits between a word and a
/// following letter. The separators stay on the left piece.
fn split_glued(chunk: &str) -> Vec<Range<usize>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut after_word = false;
    let mut after_separator = false;

    for (index, c) in chunk.char_indices() {
        if SEPARATORS.contains(&c) {
            after_separator |= after_word;
            after_word = false;
            continue;
        }
        if after_separator && c.is_alphabetic() {
            pieces.push(start..index);
            start = index;
        }
        after_separator = false;
        after_word = c.is_alphanumeric() || (after_word && is_mark(c));
    }

    pieces.push(start..chunk.len());
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_splits_on_whitespace() {
        let tokens = tokenize("Mera naam John hai");
        assert_eq!(texts(&tokens), vec!["Mera", "naam", "John", "hai"]);
    }

    #[test]
    fn test_positions_are_sequential() {
        let tokens = tokenize("a  b\tc\nd");
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_strips_trailing_punctuation() {
        let tokens = tokenize("Tum kahan ho? I am waiting, okay. Wow!");
        assert_eq!(
            texts(&tokens),
            vec!["Tum", "kahan", "ho", "I", "am", "waiting", "okay", "Wow"]
        );
    }

    #[test]
    fn test_strips_leading_punctuation() {
        let tokens = tokenize("\"Hello\" (yaar)");
        assert_eq!(texts(&tokens), vec!["Hello", "yaar"]);
    }

    #[test]
    fn test_keeps_internal_apostrophe_and_hyphen() {
        let tokens = tokenize("don't well-known");
        assert_eq!(texts(&tokens), vec!["don't", "well-known"]);
    }

    #[test]
    fn test_punctuation_only_chunks_are_dropped() {
        let tokens = tokenize("hai ... - kya ?!");
        assert_eq!(texts(&tokens), vec!["hai", "kya"]);
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_span_points_into_original() {
        let text = "Tum kahan ho? I am";
        let tokens = tokenize(text);
        for token in &tokens {
            assert_eq!(&text[token.span.clone()], token.text);
        }
        assert_eq!(tokens[2].span, 10..12);
    }

    #[test]
    fn test_multibyte_characters() {
        let text = "नमस्ते, café!";
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "café");
        assert_eq!(&text[tokens[1].span.clone()], "café");
    }

    #[test]
    fn test_trailing_combining_mark_stays_on_word() {
        let text = "cafe\u{301}, hai";
        let tokens = tokenize(text);
        assert_eq!(texts(&tokens), vec!["cafe\u{301}", "hai"]);
        assert_eq!(&text[tokens[0].span.clone()], "cafe\u{301}");
    }

    #[test]
    fn test_glued_punctuation_splits_words() {
        assert_eq!(texts(&tokenize("hello,world hai")), vec!["hello", "world", "hai"]);
        assert_eq!(
            texts(&tokenize("Tum kahan ho?I am")),
            vec!["Tum", "kahan", "ho", "I", "am"]
        );
        assert_eq!(texts(&tokenize("wait...what?!")), vec!["wait", "what"]);
    }

    #[test]
    fn test_glued_split_keeps_spans() {
        let text = "ho?I";
        let tokens = tokenize(text);
        assert_eq!(tokens[0].span, 0..2);
        assert_eq!(tokens[1].span, 3..4);
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_numbers_and_internal_marks_are_not_split() {
        assert_eq!(texts(&tokenize("3.14 don't well-known")), vec!["3.14", "don't", "well-known"]);
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }
}
