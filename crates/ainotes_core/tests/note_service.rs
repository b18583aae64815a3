use ainotes_core::db::open_db_in_memory;
use ainotes_core::{
    Note, NoteId, NoteService, NoteServiceError, Sentiment, SqliteNoteRepository,
    DEFAULT_NOTE_TITLE,
};
use std::thread::sleep;
use std::time::Duration;

const USER: &str = "user-1";

#[test]
fn save_creates_note_with_generated_title() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    let saved = service
        .save_note(USER, Note::new("Pick up the dry cleaning. Then call the bank."))
        .unwrap();

    assert!(saved.id.is_some());
    assert_eq!(saved.title, "Pick up the dry cleaning.");
    assert_eq!(saved.user_id, USER);
    assert_eq!(saved.created_at, saved.updated_at);
    assert_eq!(service.get_note(saved.id.unwrap()).unwrap(), saved);
}

#[test]
fn save_keeps_written_title() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    let note = Note {
        title: "Errands".to_string(),
        ..Note::new("Pick up the dry cleaning.")
    };
    assert_eq!(service.save_note(USER, note).unwrap().title, "Errands");
}

#[test]
fn save_rejects_blank_content() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    let result = service.save_note(USER, Note::new(" \n\t "));
    assert!(matches!(result, Err(NoteServiceError::EmptyContent)));
    assert!(service.list_notes(USER).unwrap().is_empty());
}

#[test]
fn update_preserves_owner_and_creation_time() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    let created = service.save_note(USER, Note::new("first draft")).unwrap();
    sleep(Duration::from_millis(5));

    let edit = Note {
        content: "second draft".to_string(),
        created_at: 0,
        updated_at: 0,
        user_id: "someone-else".to_string(),
        ..created.clone()
    };
    let updated = service.save_note(USER, edit).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.user_id, USER);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.content, "second draft");
}

#[test]
fn update_of_foreign_or_missing_note_is_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    let created = service.save_note(USER, Note::new("mine")).unwrap();
    let hijack = service.save_note("user-2", created.clone());
    assert!(matches!(hijack, Err(NoteServiceError::NoteNotFound(_))));

    let ghost = Note {
        id: Some(NoteId::new_v4()),
        ..Note::new("ghost")
    };
    assert!(matches!(
        service.save_note(USER, ghost),
        Err(NoteServiceError::NoteNotFound(_))
    ));
}

#[test]
fn recorded_note_gets_generated_insights() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    let transcript = "Project deadline moved. The project needs a new deadline. \
                      Ship the project on Friday. Budget review happens later.";
    let saved = service
        .create_recorded_note(USER, transcript, Some("file:///tmp/memo.m4a".to_string()))
        .unwrap();

    assert!(saved.is_recorded);
    assert_eq!(saved.audio_url.as_deref(), Some("file:///tmp/memo.m4a"));
    assert_eq!(saved.title, "Project deadline moved.");
    assert!(!saved.summary.is_empty());
    assert_ne!(saved.summary, transcript);
    assert_eq!(saved.tags.first().map(String::as_str), Some("project"));
    assert!(saved.tags.len() <= 5);
}

#[test]
fn recorded_note_rejects_blank_transcript() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    let result = service.create_recorded_note(USER, "   ", None);
    assert!(matches!(result, Err(NoteServiceError::EmptyContent)));
}

#[test]
fn regenerate_insights_refreshes_summary_and_tags() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    let note = Note {
        title: "Kept title".to_string(),
        ..Note::new("What a great launch. The launch team did great work.")
    };
    let saved = service.save_note(USER, note).unwrap();
    assert!(saved.summary.is_empty());

    let (refreshed, insights) = service.regenerate_insights(saved.id.unwrap()).unwrap();
    assert_eq!(refreshed.title, "Kept title");
    assert_eq!(refreshed.summary, insights.summary);
    assert_eq!(refreshed.tags, insights.keywords);
    assert_eq!(insights.sentiment, Sentiment::Positive);
    assert!(refreshed.tags.contains(&"launch".to_string()));
}

#[test]
fn delete_removes_note() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    let saved = service.save_note(USER, Note::new("to be removed")).unwrap();
    let id = saved.id.unwrap();
    service.delete_note(id).unwrap();

    assert!(matches!(
        service.get_note(id),
        Err(NoteServiceError::NoteNotFound(_))
    ));
    assert!(matches!(
        service.delete_note(id),
        Err(NoteServiceError::NoteNotFound(_))
    ));
}

#[test]
fn search_matches_title_content_and_tags_for_one_user() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    service
        .save_note(
            USER,
            Note {
                title: "Groceries".to_string(),
                ..Note::new("milk and eggs")
            },
        )
        .unwrap();
    service
        .save_note(
            USER,
            Note {
                tags: vec!["Work".to_string()],
                ..Note::new("deploy the release")
            },
        )
        .unwrap();
    service
        .save_note("user-2", Note::new("milk for the other user"))
        .unwrap();

    let by_title = service.search_notes(USER, "GROCER").unwrap();
    assert_eq!(by_title.len(), 1);
    let by_content = service.search_notes(USER, "milk").unwrap();
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].user_id, USER);
    let by_tag = service.search_notes(USER, "work").unwrap();
    assert_eq!(by_tag[0].content, "deploy the release");
    assert_eq!(service.search_notes(USER, "").unwrap().len(), 2);
    assert!(service.search_notes(USER, "absent").unwrap().is_empty());
}

#[test]
fn list_orders_recently_updated_first() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    let first = service.save_note(USER, Note::new("first")).unwrap();
    sleep(Duration::from_millis(5));
    let second = service.save_note(USER, Note::new("second")).unwrap();
    sleep(Duration::from_millis(5));
    service
        .save_note(
            USER,
            Note {
                content: "first, edited".to_string(),
                ..first.clone()
            },
        )
        .unwrap();

    let ids = service
        .list_notes(USER)
        .unwrap()
        .into_iter()
        .map(|note| note.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn placeholder_title_is_regenerated_on_update() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::try_new(&mut conn).unwrap();
    let mut service = NoteService::new(repo);

    let created = service.save_note(USER, Note::new("Alpha. Beta.")).unwrap();
    let edit = Note {
        title: DEFAULT_NOTE_TITLE.to_string(),
        content: "Gamma. Delta.".to_string(),
        ..created
    };
    assert_eq!(service.save_note(USER, edit).unwrap().title, "Gamma.");
}
