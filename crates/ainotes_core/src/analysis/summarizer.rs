//! Extractive frequency-based summarizer.
//!
//! # Responsibility
//! - Pick the highest-scoring sentences of a text and return them in
//!   narrative order.
//!
//! # Invariants
//! - Texts with at most `max_sentences` sentences pass through verbatim.
//! - Output sentences keep their original relative order.
//! - Equal scores keep original order (stable sort, no secondary key).

use crate::analysis::backend::{LinguisticBackend, SentenceSpan};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Words must be longer than this many characters to count for scoring.
const MIN_SCORING_WORD_CHARS: usize = 3;

/// Sentence candidate with its frequency score.
#[derive(Debug, Clone, PartialEq)]
struct ScoredSentence<'a> {
    text: &'a str,
    score: f64,
    index: usize,
}

/// Summarizes `text` down to at most `max_sentences` sentences.
///
/// A `max_sentences` of zero is treated as one.
pub fn summarize<B: LinguisticBackend + ?Sized>(
    backend: &B,
    text: &str,
    max_sentences: usize,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    let max_sentences = max_sentences.max(1);
    let sentences = backend.sentences(text).collect::<Vec<_>>();
    if sentences.len() <= max_sentences {
        return text.to_string();
    }

    let mut ranked = rank_sentences(&sentences);
    ranked.sort_by(|left, right| right.score.total_cmp(&left.score));
    ranked.truncate(max_sentences);
    ranked.sort_by_key(|sentence| sentence.index);

    ranked
        .iter()
        .map(|sentence| sentence.text)
        .collect::<Vec<_>>()
        .join(" ")
}

fn rank_sentences<'a>(sentences: &[SentenceSpan<'a>]) -> Vec<ScoredSentence<'a>> {
    let words_per_sentence = sentences
        .iter()
        .map(|sentence| scoring_words(sentence.text))
        .collect::<Vec<_>>();

    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    for word in words_per_sentence.iter().flatten() {
        *frequencies.entry(word.as_str()).or_insert(0) += 1;
    }

    sentences
        .iter()
        .zip(&words_per_sentence)
        .map(|(sentence, words)| {
            let sum = words
                .iter()
                .map(|word| frequencies.get(word.as_str()).copied().unwrap_or(0))
                .sum::<usize>();
            ScoredSentence {
                text: sentence.text,
                score: sum as f64 / words.len().max(1) as f64,
                index: sentence.index,
            }
        })
        .collect()
}

/// Case-folded whitespace-separated words longer than three characters.
///
/// Punctuation stays attached; `note.` and `note` count as different words.
fn scoring_words(sentence: &str) -> Vec<String> {
    sentence
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.graphemes(true).count() > MIN_SCORING_WORD_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{rank_sentences, scoring_words, summarize};
    use crate::analysis::backend::{LinguisticBackend, RuleBasedBackend};

    #[test]
    fn scoring_words_filter_short_tokens_and_keep_punctuation() {
        assert_eq!(
            scoring_words("The Rust team ships often."),
            vec!["rust", "team", "ships", "often."]
        );
    }

    #[test]
    fn sentence_without_long_words_scores_zero() {
        let text = "It is so. Rust rust rust.";
        let spans = RuleBasedBackend.sentences(text).collect::<Vec<_>>();
        let ranked = rank_sentences(&spans);
        assert_eq!(ranked[0].score, 0.0);
        assert!(ranked[1].score > 0.0);
    }

    #[test]
    fn picks_frequent_sentences_in_original_order() {
        let text = "Budget review happens monday. Lunch was fine. \
                    Budget numbers need review. Weather is cold. \
                    Review budget before monday.";
        let summary = summarize(&RuleBasedBackend, text, 2);
        assert_eq!(
            summary,
            "Budget review happens monday. Review budget before monday."
        );
    }

    #[test]
    fn equal_scores_keep_first_sentences() {
        let text = "Alpha beta. Gamma delta. Epsilon zeta. Theta iota.";
        assert_eq!(summarize(&RuleBasedBackend, text, 2), "Alpha beta. Gamma delta.");
    }

    #[test]
    fn zero_limit_behaves_like_one() {
        let text = "One sentence here. Another sentence here.";
        let summary = summarize(&RuleBasedBackend, text, 0);
        assert_eq!(RuleBasedBackend.sentences(&summary).count(), 1);
    }
}
