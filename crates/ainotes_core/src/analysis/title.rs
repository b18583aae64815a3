//! First-sentence title generation.

use crate::analysis::backend::LinguisticBackend;
use crate::model::note::DEFAULT_NOTE_TITLE;
use unicode_segmentation::UnicodeSegmentation;

const TRUNCATION_SUFFIX: &str = "...";

/// Generates a note title from the first sentence of `text`.
///
/// Titles longer than `max_chars` characters are cut and suffixed with
/// `"..."`; empty input yields [`DEFAULT_NOTE_TITLE`].
pub fn generate_title<B: LinguisticBackend + ?Sized>(
    backend: &B,
    text: &str,
    max_chars: usize,
) -> String {
    if text.is_empty() {
        return DEFAULT_NOTE_TITLE.to_string();
    }

    let first = backend
        .sentences(text)
        .next()
        .map(|sentence| sentence.text.trim())
        .unwrap_or_default();
    if first.is_empty() {
        return DEFAULT_NOTE_TITLE.to_string();
    }

    truncate_chars(first, max_chars)
}

/// Cuts `value` to `max_chars` grapheme clusters, appending `"..."` when cut.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.grapheme_indices(true).nth(max_chars) {
        Some((cut, _)) => format!("{}{TRUNCATION_SUFFIX}", &value[..cut]),
        None => value.to_string(),
    }
}
