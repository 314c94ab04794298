//! Label counting and dominant-language selection.

use crate::classifier::ClassifiedToken;
use crate::lexicon::Label;
use serde::{Deserialize, Serialize};

/// Per-label token counts.
///
/// Only the three language counts are serialized; `other` is kept so that
/// the four counts always sum to the token count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub hindi: usize,
    pub marathi: usize,
    pub english: usize,
    #[serde(skip)]
    pub other: usize,
}

impl LanguageStats {
    /// Count labels over `tokens`.
    pub fn from_tokens(tokens: &[ClassifiedToken]) -> Self {
        let mut stats = Self::default();
        for token in tokens {
            *stats.count_mut(token.label) += 1;
        }
        stats
    }

    pub fn count(&self, label: Label) -> usize {
        match label {
            Label::Hindi => self.hindi,
            Label::Marathi => self.marathi,
            Label::English => self.english,
            Label::Other => self.other,
        }
    }

    fn count_mut(&mut self, label: Label) -> &mut usize {
        match label {
            Label::Hindi => &mut self.hindi,
            Label::Marathi => &mut self.marathi,
            Label::English => &mut self.english,
            Label::Other => &mut self.other,
        }
    }

    /// Tokens carrying one of the three language labels.
    pub fn classified(&self) -> usize {
        self.hindi + self.marathi + self.english
    }

    /// All tokens, `other` included.
    pub fn total(&self) -> usize {
        self.classified() + self.other
    }
}

/// Pick the dominant language of `tokens`.
///
/// The label with the highest count among Hindi, Marathi and English wins.
/// On a tie, the tied label that appears first in the input wins. With no
/// language tokens at all, English is returned.
pub fn main_language(tokens: &[ClassifiedToken], stats: &LanguageStats) -> Label {
    let max = Label::LANGUAGES
        .iter()
        .map(|label| stats.count(*label))
        .max()
        .unwrap_or(0);

    if max == 0 {
        return Label::English;
    }

    let tied: Vec<Label> = Label::LANGUAGES
        .into_iter()
        .filter(|label| stats.count(*label) == max)
        .collect();

    if let [only] = tied.as_slice() {
        return *only;
    }

    tokens
        .iter()
        .map(|t| t.label)
        .find(|label| tied.contains(label))
        .unwrap_or(Label::English)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::lexicon::Lexicon;
    use crate::tokenizer::tokenize;

    fn analyze(text: &str) -> (Vec<ClassifiedToken>, LanguageStats) {
        let tokens = classify(&Lexicon::builtin(), &tokenize(text));
        let stats = LanguageStats::from_tokens(&tokens);
        (tokens, stats)
    }

    #[test]
    fn test_counts_sum_to_token_count() {
        let (tokens, stats) = analyze("Mera naam John hai 123 नमस्ते");
        assert_eq!(stats.total(), tokens.len());
        assert_eq!(stats.hindi, 3);
        assert_eq!(stats.english, 1);
        assert_eq!(stats.other, 2);
        assert_eq!(stats.classified(), 4);
    }

    #[test]
    fn test_clear_majority() {
        let (tokens, stats) = analyze("Mera naam John hai");
        assert_eq!(main_language(&tokens, &stats), Label::Hindi);
    }

    #[test]
    fn test_all_english() {
        let (tokens, stats) = analyze("I am going home now");
        assert_eq!(
            stats,
            LanguageStats {
                hindi: 0,
                marathi: 0,
                english: 5,
                other: 0
            }
        );
        assert_eq!(main_language(&tokens, &stats), Label::English);
    }

    #[test]
    fn test_tie_first_occurrence_wins() {
        // 2 marathi, 2 english; marathi appears first
        let (tokens, stats) = analyze("khup office aahe meeting");
        assert_eq!(stats.marathi, 2);
        assert_eq!(stats.english, 2);
        assert_eq!(main_language(&tokens, &stats), Label::Marathi);

        // Same counts, english first
        let (tokens, stats) = analyze("office khup meeting aahe");
        assert_eq!(main_language(&tokens, &stats), Label::English);
    }

    #[test]
    fn test_tie_ignores_non_tied_labels() {
        // hindi 1 appears first but only marathi and english are tied at 2
        let (tokens, stats) = analyze("bahut office khup meeting aahe");
        assert_eq!(stats.hindi, 1);
        assert_eq!(main_language(&tokens, &stats), Label::English);
    }

    #[test]
    fn test_other_excluded_from_dominance() {
        let (tokens, stats) = analyze("123 456 789 hai");
        assert_eq!(stats.other, 3);
        assert_eq!(main_language(&tokens, &stats), Label::Hindi);
    }

    #[test]
    fn test_no_language_tokens_falls_back_to_english() {
        let (tokens, stats) = analyze("123 456 नमस्ते");
        assert_eq!(stats.classified(), 0);
        assert_eq!(main_language(&tokens, &stats), Label::English);
        assert_eq!(main_language(&[], &LanguageStats::default()), Label::English);
    }

    #[test]
    fn test_stats_serialize_without_other() {
        let stats = LanguageStats {
            hindi: 1,
            marathi: 2,
            english: 3,
            other: 4,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "hindi": 1, "marathi": 2, "english": 3 })
        );
    }
}
