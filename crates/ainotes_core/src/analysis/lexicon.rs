//! Word lists backing the rule-based tagger and sentiment scorer.
//!
//! # Responsibility
//! - Hold closed-class words, a small open-class lexicon and polarity
//!   valences for English note text.
//!
//! # Invariants
//! - All entries are lowercase with ASCII apostrophes; callers must pass
//!   words through `fold_word` before lookup.
//! - Valences stay within `-3.0..=3.0`.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "each", "every", "no", "another", "such", "what", "which", "whose",
    "all", "both", "either", "neither", "much", "many", "few", "several", "more", "most", "less",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "themselves", "mine", "yours", "hers", "ours",
    "theirs", "who", "whom", "someone", "somebody", "something", "anyone", "anybody", "anything",
    "everyone", "everybody", "everything", "nobody", "nothing", "one",
];

const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "despite", "down",
    "during", "except", "for", "from", "in", "inside", "into", "near", "of", "off", "on", "onto",
    "out", "outside", "over", "past", "since", "through", "throughout", "till", "to", "toward",
    "towards", "under", "underneath", "until", "up", "upon", "via", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "because", "although", "though", "while", "whereas",
    "unless", "if", "than", "whether", "when", "where", "why", "how", "then", "also",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "ought", "won't", "wouldn't", "can't", "cannot", "couldn't", "shouldn't", "don't",
    "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't", "hadn't",
    "i'm", "i've", "i'll", "i'd", "you're", "we're", "they're", "it's", "that's", "there's",
    "let's",
];

const PARTICLES: &[&str] = &[
    "not", "there", "here", "yes", "yeah", "ok", "oh", "hey", "hi", "hello", "please", "thanks",
    "like", "just", "very", "really", "too", "quite", "only", "even", "still", "already", "again",
    "ever", "never", "always", "often", "sometimes", "soon", "now", "today", "tomorrow",
    "yesterday", "tonight", "maybe", "perhaps", "well", "etc",
];

/// Words that make the following word likely a verb.
const VERB_TRIGGERS: &[&str] = &[
    "to", "will", "would", "shall", "should", "can", "could", "may", "might", "must", "i", "you",
    "we", "they", "he", "she", "it", "don't", "didn't", "doesn't", "won't", "can't", "cannot",
    "please", "let's", "i'll", "we'll", "you'll", "they'll",
];

const COMMON_VERBS: &[&str] = &[
    "ask", "begin", "book", "bring", "build", "buy", "call", "cancel", "change", "check", "clean",
    "close", "come", "complete", "cook", "create", "decide", "deliver", "discuss", "drive",
    "email", "explain", "feel", "fill", "find", "finish", "fix", "follow", "forget", "get", "give",
    "go", "grab", "help", "hire", "hold", "improve", "include", "keep", "know", "learn", "leave",
    "let", "make", "meet", "move", "need", "open", "order", "organize", "pack", "pay", "pick",
    "plan", "prepare", "present", "print", "publish", "push", "put", "read", "record", "reply",
    "remember", "remind", "review", "run", "say", "schedule", "see", "sell", "send", "share",
    "ship", "sign", "start", "stop", "study", "submit", "take", "talk", "teach", "tell", "test",
    "think", "try", "update", "upload", "use", "visit", "wait", "want", "watch", "work", "write",
    "love", "hate", "enjoy", "worry", "hope", "miss", "fail", "win", "lose", "thank",
];

const COMMON_ADJECTIVES: &[&str] = &[
    "able", "bad", "beautiful", "best", "better", "big", "busy", "calm", "cheap", "clear", "cold",
    "cool", "difficult", "early", "easy", "excellent", "expensive", "fast", "fine", "free",
    "full", "good", "great", "happy", "hard", "high", "hot", "huge", "important", "large", "late",
    "little", "long", "low", "main", "new", "next", "nice", "old", "open", "other", "perfect",
    "possible", "quick", "ready", "recent", "right", "sad", "safe", "same", "short", "sick",
    "slow", "small", "strong", "sure", "terrible", "tired", "true", "urgent", "weekly", "whole",
    "wrong", "young", "awful", "amazing", "angry", "upset", "glad", "proud",
];

const COMMON_ADVERBS: &[&str] = &[
    "almost", "also", "away", "back", "else", "enough", "far", "fast", "instead", "later",
    "least", "maybe", "once", "otherwise", "rather", "together", "twice",
];

/// Nouns ending in `-ly` that the adverb suffix rule must skip.
const LY_NOUNS: &[&str] = &[
    "ally", "anomaly", "assembly", "belly", "bully", "butterfly", "family", "fly", "italy",
    "jelly", "july", "monopoly", "rally", "reply", "supply", "tally",
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "without",
    "cannot", "hardly", "barely", "rarely",
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("deeply", 0.293),
    ("especially", 0.293),
    ("extremely", 0.293),
    ("highly", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("so", 0.293),
    ("super", 0.293),
    ("totally", 0.293),
    ("truly", 0.293),
    ("very", 0.293),
    ("kinda", -0.293),
    ("barely", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("sorta", -0.293),
    ("marginally", -0.293),
];

const VALENCES: &[(&str, f64)] = &[
    ("amazing", 3.0),
    ("awesome", 3.0),
    ("beautiful", 3.0),
    ("best", 3.0),
    ("brilliant", 3.0),
    ("delighted", 3.0),
    ("excellent", 3.0),
    ("fantastic", 3.0),
    ("great", 3.0),
    ("love", 3.0),
    ("loved", 3.0),
    ("perfect", 3.0),
    ("wonderful", 3.0),
    ("excited", 2.5),
    ("grateful", 2.5),
    ("happy", 2.5),
    ("thrilled", 2.5),
    ("enjoy", 2.0),
    ("enjoyed", 2.0),
    ("fun", 2.0),
    ("glad", 2.0),
    ("good", 2.0),
    ("helpful", 2.0),
    ("hopeful", 2.0),
    ("nice", 2.0),
    ("pleased", 2.0),
    ("positive", 2.0),
    ("productive", 2.0),
    ("proud", 2.0),
    ("success", 2.0),
    ("successful", 2.0),
    ("thank", 2.0),
    ("thanks", 2.0),
    ("win", 2.0),
    ("won", 2.0),
    ("better", 1.5),
    ("calm", 1.5),
    ("cool", 1.5),
    ("easy", 1.5),
    ("hope", 1.5),
    ("progress", 1.5),
    ("relaxed", 1.5),
    ("fine", 1.0),
    ("okay", 1.0),
    ("ok", 1.0),
    ("late", -1.0),
    ("miss", -1.0),
    ("sorry", -1.0),
    ("boring", -1.5),
    ("delayed", -1.5),
    ("difficult", -1.5),
    ("lost", -1.5),
    ("mess", -1.5),
    ("problem", -1.5),
    ("problems", -1.5),
    ("tired", -1.5),
    ("worry", -1.5),
    ("afraid", -2.0),
    ("annoyed", -2.0),
    ("annoying", -2.0),
    ("anxious", -2.0),
    ("broken", -2.0),
    ("fail", -2.0),
    ("failed", -2.0),
    ("hurt", -2.0),
    ("lonely", -2.0),
    ("negative", -2.0),
    ("pain", -2.0),
    ("poor", -2.0),
    ("sad", -2.0),
    ("sick", -2.0),
    ("stress", -2.0),
    ("stressed", -2.0),
    ("stressful", -2.0),
    ("unfortunately", -2.0),
    ("upset", -2.0),
    ("worried", -2.0),
    ("wrong", -2.0),
    ("angry", -2.5),
    ("bad", -2.5),
    ("disappointed", -2.5),
    ("disappointing", -2.5),
    ("failure", -2.5),
    ("fear", -2.5),
    ("frustrated", -2.5),
    ("frustrating", -2.5),
    ("painful", -2.5),
    ("ugly", -2.5),
    ("worse", -2.5),
    ("awful", -3.0),
    ("hate", -3.0),
    ("hated", -3.0),
    ("horrible", -3.0),
    ("miserable", -3.0),
    ("terrible", -3.0),
    ("worst", -3.0),
];

static CLOSED_CLASS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    DETERMINERS
        .iter()
        .chain(PRONOUNS)
        .chain(PREPOSITIONS)
        .chain(CONJUNCTIONS)
        .chain(AUXILIARIES)
        .chain(PARTICLES)
        .copied()
        .collect()
});
static DETERMINER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DETERMINERS.iter().copied().collect());
static VERB_TRIGGER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| VERB_TRIGGERS.iter().copied().collect());
static VERB_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| COMMON_VERBS.iter().copied().collect());
static ADJECTIVE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COMMON_ADJECTIVES.iter().copied().collect());
static ADVERB_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COMMON_ADVERBS.iter().copied().collect());
static LY_NOUN_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| LY_NOUNS.iter().copied().collect());
static NEGATOR_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| NEGATORS.iter().copied().collect());
static BOOSTER_MAP: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| BOOSTERS.iter().copied().collect());
static VALENCE_MAP: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| VALENCES.iter().copied().collect());

/// Lowercases `word` and maps typographic apostrophes (U+2019, U+02BC) to `'`.
pub fn fold_word(word: &str) -> String {
    word.to_lowercase()
        .replace(|c| c == '\u{2019}' || c == '\u{02BC}', "'")
}

/// Returns whether `word` is a function word (determiner, pronoun, etc.).
pub fn is_closed_class(word: &str) -> bool {
    CLOSED_CLASS.contains(word)
}

pub fn is_determiner(word: &str) -> bool {
    DETERMINER_SET.contains(word)
}

pub fn is_verb_trigger(word: &str) -> bool {
    VERB_TRIGGER_SET.contains(word)
}

pub fn is_adjective(word: &str) -> bool {
    ADJECTIVE_SET.contains(word)
}

pub fn is_adverb(word: &str) -> bool {
    ADVERB_SET.contains(word)
}

pub fn is_ly_noun(word: &str) -> bool {
    LY_NOUN_SET.contains(word)
}

/// Returns whether `word` or one of its inflected stems is a known verb.
///
/// Handles `-s`, `-es`, `-ed`, `-d` and `-ing` inflections, including the
/// dropped final `e` (`writing` -> `write`).
pub fn is_known_verb(word: &str) -> bool {
    if VERB_SET.contains(word) {
        return true;
    }

    let stems = [
        word.strip_suffix("es"),
        word.strip_suffix('s'),
        word.strip_suffix("ed"),
        word.strip_suffix('d'),
        word.strip_suffix("ing"),
    ];
    if stems
        .iter()
        .flatten()
        .any(|stem| !stem.is_empty() && VERB_SET.contains(stem))
    {
        return true;
    }

    // writing -> write, planned -> plan, shipping -> ship
    if let Some(stem) = word.strip_suffix("ing") {
        if VERB_SET.contains(format!("{stem}e").as_str()) || undouble(stem) {
            return true;
        }
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if undouble(stem) {
            return true;
        }
    }
    false
}

fn undouble(stem: &str) -> bool {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(last), Some(before)) if last == before => {
            VERB_SET.contains(&stem[..stem.len() - last.len_utf8()])
        }
        _ => false,
    }
}

/// Returns whether `word` negates the polarity of nearby words.
pub fn is_negator(word: &str) -> bool {
    NEGATOR_SET.contains(word) || word.ends_with("n't")
}

/// Returns the intensity shift applied by a booster/dampener word.
pub fn booster(word: &str) -> Option<f64> {
    BOOSTER_MAP.get(word).copied()
}

/// Returns the polarity valence of `word`, when known.
pub fn valence(word: &str) -> Option<f64> {
    VALENCE_MAP.get(word).copied()
}
