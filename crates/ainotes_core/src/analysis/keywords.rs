//! Noun/verb frequency keyword extraction.
//!
//! # Invariants
//! - Only words tagged `Noun` or `Verb` are tallied.
//! - Keywords are lowercase and longer than three characters.
//! - Equal counts are ordered by first occurrence.

use crate::analysis::backend::LinguisticBackend;
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

const MIN_KEYWORD_CHARS: usize = 3;

#[derive(Debug)]
struct KeywordCount {
    word: String,
    count: usize,
}

/// Returns up to `limit` keywords of `text`, most frequent first.
pub fn extract_keywords<B: LinguisticBackend + ?Sized>(
    backend: &B,
    text: &str,
    limit: usize,
) -> Vec<String> {
    if text.is_empty() || limit == 0 {
        return Vec::new();
    }

    // Tally slots are appended in first-occurrence order.
    let mut tally: Vec<KeywordCount> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    for word in backend
        .tagged_words(text)
        .filter(|word| word.tag.is_keyword_class())
    {
        let normalized = word.text.to_lowercase();
        if normalized.graphemes(true).count() <= MIN_KEYWORD_CHARS {
            continue;
        }
        match slots.get(&normalized) {
            Some(&slot) => tally[slot].count += 1,
            None => {
                slots.insert(normalized.clone(), tally.len());
                tally.push(KeywordCount {
                    word: normalized,
                    count: 1,
                });
            }
        }
    }

    tally.sort_by(|left, right| right.count.cmp(&left.count));
    tally
        .into_iter()
        .take(limit)
        .map(|entry| entry.word)
        .collect()
}
