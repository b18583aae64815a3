//! User-tunable analysis limits.
//!
//! # Responsibility
//! - Hold summary/keyword/title limits and sentiment thresholds.
//! - Normalize caller-provided values into a usable configuration.
//!
//! # Invariants
//! - Normalized limits are never zero.
//! - Normalized thresholds are finite and `negative <= positive`.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_SUMMARY_SENTENCES: usize = 3;
pub const DEFAULT_KEYWORD_LIMIT: usize = 5;
pub const DEFAULT_TITLE_MAX_CHARS: usize = 50;
pub const DEFAULT_POSITIVE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_NEGATIVE_THRESHOLD: f64 = -0.3;

/// Options consumed by `TextAnalyzer`.
///
/// Missing fields deserialize to their defaults, so partial JSON documents
/// such as `{"keyword_limit": 8}` are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Maximum sentences kept by the summarizer.
    pub max_summary_sentences: usize,
    /// Maximum keywords returned by the extractor.
    pub keyword_limit: usize,
    /// Title length in characters before the `...` suffix.
    pub title_max_chars: usize,
    /// Scores strictly above this are `Positive`.
    pub positive_threshold: f64,
    /// Scores strictly below this are `Negative`.
    pub negative_threshold: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_summary_sentences: DEFAULT_MAX_SUMMARY_SENTENCES,
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            positive_threshold: DEFAULT_POSITIVE_THRESHOLD,
            negative_threshold: DEFAULT_NEGATIVE_THRESHOLD,
        }
    }
}

impl AnalysisOptions {
    /// Returns a copy with zero limits and invalid thresholds reset to
    /// defaults.
    pub fn normalized(&self) -> Self {
        let (positive_threshold, negative_threshold) =
            normalize_thresholds(self.positive_threshold, self.negative_threshold);
        Self {
            max_summary_sentences: normalize_limit(
                self.max_summary_sentences,
                DEFAULT_MAX_SUMMARY_SENTENCES,
            ),
            keyword_limit: normalize_limit(self.keyword_limit, DEFAULT_KEYWORD_LIMIT),
            title_max_chars: normalize_limit(self.title_max_chars, DEFAULT_TITLE_MAX_CHARS),
            positive_threshold,
            negative_threshold,
        }
    }
}

/// Maps a zero limit to `default`.
pub fn normalize_limit(value: usize, default: usize) -> usize {
    match value {
        0 => default,
        value => value,
    }
}

fn normalize_thresholds(positive: f64, negative: f64) -> (f64, f64) {
    let in_range = |value: f64| value.is_finite() && (-1.0..=1.0).contains(&value);
    if in_range(positive) && in_range(negative) && negative <= positive {
        (positive, negative)
    } else {
        (DEFAULT_POSITIVE_THRESHOLD, DEFAULT_NEGATIVE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_limit, AnalysisOptions};

    #[test]
    fn normalize_limit_maps_zero_to_default() {
        assert_eq!(normalize_limit(0, 3), 3);
        assert_eq!(normalize_limit(7, 3), 7);
    }

    #[test]
    fn normalized_resets_inverted_thresholds() {
        let options = AnalysisOptions {
            positive_threshold: -0.5,
            negative_threshold: 0.5,
            ..AnalysisOptions::default()
        };
        let normalized = options.normalized();
        assert_eq!(normalized.positive_threshold, 0.3);
        assert_eq!(normalized.negative_threshold, -0.3);
    }

    #[test]
    fn normalized_keeps_valid_values() {
        let options = AnalysisOptions {
            max_summary_sentences: 2,
            keyword_limit: 0,
            title_max_chars: 40,
            positive_threshold: 0.1,
            negative_threshold: -0.2,
        };
        let normalized = options.normalized();
        assert_eq!(normalized.max_summary_sentences, 2);
        assert_eq!(normalized.keyword_limit, 5);
        assert_eq!(normalized.title_max_chars, 40);
        assert_eq!(normalized.positive_threshold, 0.1);
    }
}
