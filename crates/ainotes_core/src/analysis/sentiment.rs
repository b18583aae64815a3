//! Sentiment classification.
//!
//! # Responsibility
//! - Score paragraph sentiment from word polarity (`lexicon_score`).
//! - Map a continuous score onto three fixed labels.
//!
//! # Invariants
//! - Scores are always within `[-1.0, 1.0]`.
//! - Empty input, missing or non-finite scores classify as `Neutral`.

use crate::analysis::backend::LinguisticBackend;
use crate::analysis::lexicon;
use crate::config::AnalysisOptions;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use unicode_segmentation::UnicodeSegmentation;

/// Normalization constant for `s / sqrt(s^2 + alpha)`.
const NORMALIZATION_ALPHA: f64 = 15.0;
const NEGATION_SCALAR: f64 = -0.74;
const NEGATION_WINDOW: usize = 3;
const BEFORE_BUT_WEIGHT: f64 = 0.5;
const AFTER_BUT_WEIGHT: f64 = 1.5;
const EXCLAMATION_EMPHASIS: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Stable label string.
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// Decorative emoji shown next to the label in the app.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Positive => "\u{1F60A}",
            Self::Negative => "\u{1F614}",
            Self::Neutral => "\u{1F610}",
        }
    }

    /// Classifies a score with the configured thresholds.
    ///
    /// `score > positive` is positive, `score < negative` is negative and
    /// everything else, including a missing score, is neutral.
    pub fn from_score(score: Option<f64>, options: &AnalysisOptions) -> Self {
        match score.filter(|value| value.is_finite()) {
            Some(value) if value > options.positive_threshold => Self::Positive,
            Some(value) if value < options.negative_threshold => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies the sentiment of `text` through `backend`.
pub fn analyze_sentiment<B: LinguisticBackend + ?Sized>(
    backend: &B,
    text: &str,
    options: &AnalysisOptions,
) -> Sentiment {
    if text.is_empty() {
        return Sentiment::Neutral;
    }
    Sentiment::from_score(backend.sentiment_score(text), options)
}

/// Lexicon-based paragraph score.
///
/// Rules applied per valenced word:
/// - a booster/dampener right before it shifts its magnitude;
/// - a negator in the three preceding words flips and damps it;
/// - words before the first `but` weigh half, words after it weigh 1.5x.
///
/// Trailing `!` marks add emphasis to a non-zero sum. Returns `None` when the
/// text contains no words.
pub fn lexicon_score(text: &str) -> Option<f64> {
    let words = text
        .unicode_words()
        .map(lexicon::fold_word)
        .collect::<Vec<_>>();
    if words.is_empty() {
        return None;
    }

    let but_index = words.iter().position(|word| word == "but");
    let mut total = 0.0;
    for (index, word) in words.iter().enumerate() {
        let Some(base) = lexicon::valence(word) else {
            continue;
        };

        let mut value = base;
        if let Some(shift) = index
            .checked_sub(1)
            .and_then(|prev| lexicon::booster(&words[prev]))
        {
            value += shift * value.signum();
        }
        let window_start = index.saturating_sub(NEGATION_WINDOW);
        if words[window_start..index]
            .iter()
            .any(|prev| lexicon::is_negator(prev))
        {
            value *= NEGATION_SCALAR;
        }
        if let Some(but) = but_index {
            if index < but {
                value *= BEFORE_BUT_WEIGHT;
            } else if index > but {
                value *= AFTER_BUT_WEIGHT;
            }
        }
        total += value;
    }

    if total != 0.0 {
        let exclamations = text
            .trim_end()
            .chars()
            .rev()
            .take_while(|c| *c == '!')
            .count()
            .min(MAX_EXCLAMATIONS);
        total += total.signum() * EXCLAMATION_EMPHASIS * exclamations as f64;
    }

    Some(normalize(total))
}

fn normalize(total: f64) -> f64 {
    (total / (total * total + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::{lexicon_score, Sentiment};
    use crate::config::AnalysisOptions;

    #[test]
    fn empty_and_punctuation_only_text_has_no_score() {
        assert_eq!(lexicon_score(""), None);
        assert_eq!(lexicon_score(" ... !!"), None);
    }

    #[test]
    fn polarity_follows_lexicon() {
        assert!(lexicon_score("What a great day!").unwrap() > 0.3);
        assert!(lexicon_score("This is terrible and I hate it.").unwrap() < -0.3);
        assert_eq!(lexicon_score("The meeting is at noon."), Some(0.0));
    }

    #[test]
    fn negation_flips_polarity() {
        let plain = lexicon_score("The demo was good.").unwrap();
        let negated = lexicon_score("The demo was not good.").unwrap();
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn clause_after_but_dominates() {
        let score = lexicon_score("The hotel was nice but the service was awful.").unwrap();
        assert!(score < 0.0);
    }

    #[test]
    fn only_trailing_exclamations_add_emphasis() {
        let plain = lexicon_score("Great, see you then").unwrap();
        let interior = lexicon_score("Great! see you then").unwrap();
        let trailing = lexicon_score("Great, see you then!").unwrap();
        assert_eq!(interior, plain);
        assert!(trailing > plain);
    }

    #[test]
    fn boosters_increase_magnitude() {
        let plain = lexicon_score("It was good.").unwrap();
        let boosted = lexicon_score("It was very good.").unwrap();
        assert!(boosted > plain);
    }

    #[test]
    fn scores_stay_in_closed_range() {
        let gushing = "love love love amazing perfect wonderful best great!!!!!!";
        let score = lexicon_score(gushing).unwrap();
        assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn from_score_applies_thresholds() {
        let options = AnalysisOptions::default();
        assert_eq!(Sentiment::from_score(Some(0.31), &options), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(Some(0.3), &options), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(Some(-0.3), &options), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(Some(-0.31), &options), Sentiment::Negative);
        assert_eq!(Sentiment::from_score(None, &options), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(Some(f64::NAN), &options), Sentiment::Neutral);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(Sentiment::Positive.to_string(), "Positive");
        assert_eq!(Sentiment::Negative.label(), "Negative");
        assert_eq!(Sentiment::Neutral.label(), "Neutral");
    }
}
