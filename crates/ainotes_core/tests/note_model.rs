use ainotes_core::{Note, NoteId, NoteValidationError, DEFAULT_NOTE_TITLE};
use serde_json::{json, Value};

fn owned(content: &str) -> Note {
    Note {
        user_id: "user-1".to_string(),
        ..Note::new(content)
    }
}

#[test]
fn new_note_starts_with_placeholder_title() {
    let note = Note::new("body");
    assert_eq!(note.title, DEFAULT_NOTE_TITLE);
    assert!(note.has_placeholder_title());
    assert!(note.id.is_none());
    assert!(!note.is_recorded);
    assert_eq!(note.created_at, note.updated_at);
}

#[test]
fn blank_title_counts_as_placeholder() {
    let mut note = Note::new("body");
    note.title = "   ".to_string();
    assert!(note.has_placeholder_title());
    note.title = "Groceries".to_string();
    assert!(!note.has_placeholder_title());
}

#[test]
fn recorded_note_keeps_audio_reference() {
    let note = Note::recorded("dictated words", Some("file:///tmp/a.m4a".to_string()));
    assert!(note.is_recorded);
    assert_eq!(note.audio_url.as_deref(), Some("file:///tmp/a.m4a"));
    assert_eq!(note.content, "dictated words");
}

#[test]
fn preview_truncates_after_one_hundred_chars() {
    let short = Note::new("short body");
    assert_eq!(short.preview(), "short body");

    let exact = Note::new("x".repeat(100));
    assert_eq!(exact.preview(), "x".repeat(100));

    let long = Note::new("é".repeat(120));
    let preview = long.preview();
    assert_eq!(preview.chars().count(), 103);
    assert!(preview.ends_with("..."));
}

#[test]
fn validate_rejects_broken_invariants() {
    assert!(owned("body").validate().is_ok());

    let mut nil = owned("body");
    nil.id = Some(NoteId::nil());
    assert_eq!(nil.validate(), Err(NoteValidationError::NilId));

    let ownerless = Note::new("body");
    assert_eq!(ownerless.validate(), Err(NoteValidationError::BlankUserId));

    let mut backwards = owned("body");
    backwards.updated_at = backwards.created_at - 1;
    assert!(matches!(
        backwards.validate(),
        Err(NoteValidationError::InvalidTimeline { .. })
    ));
}

#[test]
fn touch_never_moves_before_creation() {
    let mut note = owned("body");
    note.created_at = i64::MAX - 1;
    note.updated_at = i64::MAX - 1;
    note.touch();
    assert_eq!(note.updated_at, i64::MAX - 1);
}

#[test]
fn serializes_with_document_field_names() {
    let mut note = owned("body");
    note.id = Some(NoteId::new_v4());
    note.audio_url = Some("file:///tmp/a.m4a".to_string());
    note.tags = vec!["rust".to_string()];

    let value = serde_json::to_value(&note).unwrap();
    for key in [
        "id",
        "title",
        "content",
        "summary",
        "createdAt",
        "updatedAt",
        "isRecorded",
        "audioURL",
        "tags",
        "userId",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert!(value.get("audio_url").is_none());
}

#[test]
fn unsaved_note_omits_id_and_missing_fields_default() {
    let value = serde_json::to_value(Note::new("body")).unwrap();
    assert!(value.get("id").is_none());
    assert!(value.get("audioURL").is_none());

    let parsed: Note = serde_json::from_value(json!({
        "title": "Groceries",
        "content": "milk",
        "createdAt": 10,
        "updatedAt": 20,
        "userId": "user-1"
    }))
    .unwrap();
    assert_eq!(parsed.summary, "");
    assert!(parsed.tags.is_empty());
    assert!(!parsed.is_recorded);
    assert!(parsed.validate().is_ok());

    let round_trip: Value = serde_json::to_value(&parsed).unwrap();
    assert_eq!(round_trip["createdAt"], 10);
}
