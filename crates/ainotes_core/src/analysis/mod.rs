//! On-device text analysis engine.
//!
//! # Responsibility
//! - Turn raw note text into a title, an extractive summary, keyword tags
//!   and a sentiment label.
//! - Keep the algorithms independent of the linguistic backend behind
//!   [`LinguisticBackend`].
//!
//! # Invariants
//! - Every operation is total: degenerate input yields a default result.
//! - Operations are pure; identical input gives identical output.
//! - Nothing here performs I/O or holds mutable state between calls.

pub mod backend;
pub mod keywords;
pub mod lexicon;
pub mod sentiment;
pub mod summarizer;
pub mod tagger;
pub mod title;

pub use backend::{
    LinguisticBackend, PartOfSpeech, RuleBasedBackend, SentenceSpan, TaggedWord,
};
pub use sentiment::Sentiment;

use crate::config::{
    AnalysisOptions, DEFAULT_KEYWORD_LIMIT, DEFAULT_MAX_SUMMARY_SENTENCES, DEFAULT_TITLE_MAX_CHARS,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Derived fields for one note body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteInsights {
    pub title: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub sentiment: Sentiment,
}

/// Analysis facade binding a backend to a set of options.
#[derive(Debug, Clone, Default)]
pub struct TextAnalyzer<B: LinguisticBackend = RuleBasedBackend> {
    backend: B,
    options: AnalysisOptions,
}

impl TextAnalyzer {
    /// Creates an analyzer with the rule-based backend and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with the rule-based backend and custom options.
    pub fn with_options(options: AnalysisOptions) -> Self {
        Self::with_backend(RuleBasedBackend, options)
    }
}

impl<B: LinguisticBackend> TextAnalyzer<B> {
    /// Creates an analyzer over a custom backend.
    ///
    /// Options are normalized on construction.
    pub fn with_backend(backend: B, options: AnalysisOptions) -> Self {
        Self {
            backend,
            options: options.normalized(),
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Summarizes with the configured sentence limit.
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_with_limit(text, self.options.max_summary_sentences)
    }

    pub fn summarize_with_limit(&self, text: &str, max_sentences: usize) -> String {
        summarizer::summarize(&self.backend, text, max_sentences)
    }

    /// Extracts keywords with the configured limit.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extract_keywords_with_limit(text, self.options.keyword_limit)
    }

    pub fn extract_keywords_with_limit(&self, text: &str, limit: usize) -> Vec<String> {
        keywords::extract_keywords(&self.backend, text, limit)
    }

    pub fn generate_title(&self, text: &str) -> String {
        title::generate_title(&self.backend, text, self.options.title_max_chars)
    }

    pub fn analyze_sentiment(&self, text: &str) -> Sentiment {
        sentiment::analyze_sentiment(&self.backend, text, &self.options)
    }

    /// Runs all four operations over `text`.
    pub fn analyze(&self, text: &str) -> NoteInsights {
        let started_at = Instant::now();
        let insights = NoteInsights {
            title: self.generate_title(text),
            summary: self.summarize(text),
            keywords: self.extract_keywords(text),
            sentiment: self.analyze_sentiment(text),
        };
        debug!(
            "event=note_analyze module=analysis status=ok input_chars={} summary_chars={} keywords={} sentiment={} duration_ms={}",
            text.chars().count(),
            insights.summary.chars().count(),
            insights.keywords.len(),
            insights.sentiment,
            started_at.elapsed().as_millis()
        );
        insights
    }
}

/// Summarizes `text` with the rule-based backend.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    summarizer::summarize(&RuleBasedBackend, text, max_sentences)
}

/// Summarizes `text` keeping the default three sentences.
pub fn summarize_default(text: &str) -> String {
    summarize(text, DEFAULT_MAX_SUMMARY_SENTENCES)
}

/// Extracts keywords of `text` with the rule-based backend.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<String> {
    keywords::extract_keywords(&RuleBasedBackend, text, limit)
}

/// Extracts the default five keywords of `text`.
pub fn extract_keywords_default(text: &str) -> Vec<String> {
    extract_keywords(text, DEFAULT_KEYWORD_LIMIT)
}

/// Generates a title of at most 50 characters plus `...`.
pub fn generate_title(text: &str) -> String {
    title::generate_title(&RuleBasedBackend, text, DEFAULT_TITLE_MAX_CHARS)
}

/// Classifies sentiment with default thresholds.
pub fn analyze_sentiment(text: &str) -> Sentiment {
    sentiment::analyze_sentiment(&RuleBasedBackend, text, &AnalysisOptions::default())
}
