//! Rule-based part-of-speech tagger.
//!
//! # Responsibility
//! - Classify one case-folded word given the previous word as context.
//!
//! # Invariants
//! - Tagging is a pure function of `(word, previous)`.
//! - Unknown alphabetic words default to `Noun`.

use crate::analysis::backend::PartOfSpeech;
use crate::analysis::lexicon;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9][0-9.,:/'_-]*(st|nd|rd|th|am|pm|s)?$").expect("valid numeric regex")
});

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];
const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify"];

/// Tags one lowercase word.
///
/// `previous` carries the preceding lowercase word and the tag assigned to it.
pub fn tag_word(word: &str, previous: Option<(&str, PartOfSpeech)>) -> PartOfSpeech {
    if NUMERIC_TOKEN_RE.is_match(word) || lexicon::is_closed_class(word) {
        return PartOfSpeech::Other;
    }

    let after_determiner = previous.is_some_and(|(prev, tag)| {
        lexicon::is_determiner(prev) || tag == PartOfSpeech::Adjective
    });
    let after_trigger = previous.is_some_and(|(prev, _)| lexicon::is_verb_trigger(prev));

    if lexicon::is_known_verb(word) {
        // "the call", "my plan", "a review"
        return if after_determiner {
            PartOfSpeech::Noun
        } else {
            PartOfSpeech::Verb
        };
    }
    if lexicon::is_adjective(word) {
        return PartOfSpeech::Adjective;
    }
    if lexicon::is_adverb(word) || is_ly_adverb(word) {
        return PartOfSpeech::Adverb;
    }
    if after_trigger && !after_determiner {
        return PartOfSpeech::Verb;
    }

    let length = word.chars().count();
    if length > 5 && word.ends_with("ing") {
        return if after_determiner {
            PartOfSpeech::Noun
        } else {
            PartOfSpeech::Verb
        };
    }
    if length > 4 && word.ends_with("ed") {
        return if after_determiner {
            PartOfSpeech::Adjective
        } else {
            PartOfSpeech::Verb
        };
    }
    if length > 4 && VERB_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        return PartOfSpeech::Verb;
    }
    if length > 5 && ADJECTIVE_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        return PartOfSpeech::Adjective;
    }

    PartOfSpeech::Noun
}

fn is_ly_adverb(word: &str) -> bool {
    word.chars().count() > 4 && word.ends_with("ly") && !lexicon::is_ly_noun(word)
}

#[cfg(test)]
mod tests {
    use super::tag_word;
    use crate::analysis::backend::PartOfSpeech;

    #[test]
    fn function_words_and_numbers_are_other() {
        assert_eq!(tag_word("the", None), PartOfSpeech::Other);
        assert_eq!(tag_word("would", None), PartOfSpeech::Other);
        assert_eq!(tag_word("2024", None), PartOfSpeech::Other);
        assert_eq!(tag_word("3pm", None), PartOfSpeech::Other);
    }

    #[test]
    fn determiner_context_turns_verbs_into_nouns() {
        assert_eq!(tag_word("call", None), PartOfSpeech::Verb);
        assert_eq!(
            tag_word("call", Some(("the", PartOfSpeech::Other))),
            PartOfSpeech::Noun
        );
        assert_eq!(
            tag_word("meeting", Some(("weekly", PartOfSpeech::Adjective))),
            PartOfSpeech::Noun
        );
    }

    #[test]
    fn modal_context_marks_unknown_words_as_verbs() {
        assert_eq!(
            tag_word("refactor", Some(("should", PartOfSpeech::Other))),
            PartOfSpeech::Verb
        );
        assert_eq!(tag_word("refactor", None), PartOfSpeech::Noun);
    }

    #[test]
    fn suffix_rules_cover_open_class_words() {
        assert_eq!(tag_word("quickly", None), PartOfSpeech::Adverb);
        assert_eq!(tag_word("family", None), PartOfSpeech::Noun);
        assert_eq!(tag_word("wonderful", None), PartOfSpeech::Adjective);
        assert_eq!(tag_word("prioritize", None), PartOfSpeech::Verb);
        assert_eq!(tag_word("budget", None), PartOfSpeech::Noun);
    }
}
