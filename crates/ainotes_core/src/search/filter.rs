//! Case-insensitive substring search over note listings.
//!
//! # Invariants
//! - A blank query matches every note.
//! - Result order is the input order.

use crate::model::note::Note;

/// Returns whether `note` contains `query` in its title, content or any tag.
///
/// Matching is case-insensitive; the query is trimmed first.
pub fn note_matches_query(note: &Note, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contains_lowercase(&note.title, &needle)
        || contains_lowercase(&note.content, &needle)
        || note.tags.iter().any(|tag| contains_lowercase(tag, &needle))
}

/// Keeps the notes matching `query`, preserving order.
pub fn filter_notes(notes: Vec<Note>, query: &str) -> Vec<Note> {
    let needle = query.trim();
    if needle.is_empty() {
        return notes;
    }
    notes
        .into_iter()
        .filter(|note| note_matches_query(note, needle))
        .collect()
}

fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::{filter_notes, note_matches_query};
    use crate::model::note::Note;

    fn note(title: &str, content: &str, tags: &[&str]) -> Note {
        Note {
            title: title.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            ..Note::new(content)
        }
    }

    #[test]
    fn matches_title_content_and_tags_ignoring_case() {
        let sample = note("Sprint Review", "Discuss velocity", &["Planning"]);
        assert!(note_matches_query(&sample, "sprint"));
        assert!(note_matches_query(&sample, "VELOCITY"));
        assert!(note_matches_query(&sample, "plan"));
        assert!(!note_matches_query(&sample, "budget"));
    }

    #[test]
    fn blank_query_keeps_everything_in_order() {
        let notes = vec![note("b", "two", &[]), note("a", "one", &[])];
        let filtered = filter_notes(notes.clone(), "   ");
        assert_eq!(filtered, notes);
    }

    #[test]
    fn query_is_trimmed() {
        let notes = vec![note("Groceries", "milk", &[]), note("Work", "deploy", &[])];
        let filtered = filter_notes(notes, "  milk ");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Groceries");
    }
}
