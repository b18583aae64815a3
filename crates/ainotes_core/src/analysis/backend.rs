//! Linguistic capability interface and the default rule-based backend.
//!
//! # Responsibility
//! - Define the `{sentence-split, word-tag, sentiment-score}` capability the
//!   analysis algorithms depend on.
//! - Provide `RuleBasedBackend`, built on UAX #29 segmentation plus the
//!   lexicon tagger and scorer in this module tree.
//!
//! # Invariants
//! - Every call returns a fresh iterator, so sequences restart by calling
//!   again on the same input.
//! - Results are stable for identical input.
//! - Sentence spans are trimmed and never empty.

use crate::analysis::{lexicon, sentiment, tagger};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Part-of-speech classes distinguished by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    /// Function words, numerals and anything else not worth tagging finer.
    Other,
}

impl PartOfSpeech {
    /// Returns whether words of this class are keyword candidates.
    pub fn is_keyword_class(self) -> bool {
        matches!(self, Self::Noun | Self::Verb)
    }
}

/// One sentence of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSpan<'a> {
    /// Zero-based position among the yielded sentences.
    pub index: usize,
    /// Sentence text with surrounding whitespace removed.
    pub text: &'a str,
    /// Byte range of `text` inside the source.
    pub range: Range<usize>,
}

/// One word token of the source text with its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord<'a> {
    /// Word exactly as written in the source.
    pub text: &'a str,
    /// Byte range of `text` inside the source.
    pub range: Range<usize>,
    pub tag: PartOfSpeech,
}

pub type SentenceIter<'a> = Box<dyn Iterator<Item = SentenceSpan<'a>> + 'a>;
pub type TaggedWordIter<'a> = Box<dyn Iterator<Item = TaggedWord<'a>> + 'a>;

/// Capability interface behind every analysis operation.
///
/// Implementations must be pure: no interior mutability observable across
/// calls, so one backend can serve concurrent callers.
pub trait LinguisticBackend: Send + Sync {
    /// Splits `text` into sentence spans in original order.
    fn sentences<'a>(&self, text: &'a str) -> SentenceIter<'a>;

    /// Splits `text` into tagged words, omitting whitespace and punctuation.
    fn tagged_words<'a>(&self, text: &'a str) -> TaggedWordIter<'a>;

    /// Scores paragraph sentiment in `[-1.0, 1.0]`.
    ///
    /// Returns `None` when the text carries nothing to score.
    fn sentiment_score(&self, text: &str) -> Option<f64>;
}

/// Default backend: Unicode segmentation + English lexicon rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleBasedBackend;

impl LinguisticBackend for RuleBasedBackend {
    fn sentences<'a>(&self, text: &'a str) -> SentenceIter<'a> {
        Box::new(split_sentences(text))
    }

    fn tagged_words<'a>(&self, text: &'a str) -> TaggedWordIter<'a> {
        let mut previous: Option<(String, PartOfSpeech)> = None;
        Box::new(text.unicode_word_indices().map(move |(start, word)| {
            let lower = lexicon::fold_word(word);
            let tag = tagger::tag_word(
                lower.as_str(),
                previous.as_ref().map(|(prev, tag)| (prev.as_str(), *tag)),
            );
            previous = Some((lower, tag));
            TaggedWord {
                text: word,
                range: start..start + word.len(),
                tag,
            }
        }))
    }

    fn sentiment_score(&self, text: &str) -> Option<f64> {
        sentiment::lexicon_score(text)
    }
}

/// Splits text on UAX #29 sentence boundaries, trimming each span and
/// skipping whitespace-only ones.
pub fn split_sentences(text: &str) -> impl Iterator<Item = SentenceSpan<'_>> + '_ {
    text.split_sentence_bound_indices()
        .filter_map(|(start, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return None;
            }
            let begin = start + (raw.len() - raw.trim_start().len());
            Some((begin..begin + trimmed.len(), trimmed))
        })
        .enumerate()
        .map(|(index, (range, text))| SentenceSpan { index, text, range })
}
