//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose note analysis and note store use-cases to Dart via FRB.
//! - Flatten core types into bridge-friendly records and envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Store failures are reported in envelopes, never thrown.
//! - `summarize` and `analyze_note` run on the bridge worker pool; the
//!   remaining analysis calls are cheap and `sync`.

use ainotes_core::config::{DEFAULT_KEYWORD_LIMIT, DEFAULT_MAX_SUMMARY_SENTENCES};
use ainotes_core::db::open_db;
use ainotes_core::{
    analyze_sentiment as analyze_sentiment_inner, core_version as core_version_inner,
    extract_keywords as extract_keywords_inner, generate_title as generate_title_inner,
    init_logging as init_logging_inner, ping as ping_inner, summarize as summarize_inner, Note,
    NoteId, NoteService, NoteServiceResult, SqliteNoteRepository, TextAnalyzer,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

const NOTES_DB_FILE_NAME: &str = "ainotes.sqlite3";
static NOTES_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Extractive summary of `text`.
///
/// `None` keeps the default of three sentences; `Some(0)` keeps one.
///
/// # FFI contract
/// - Async on the Dart side; runs off the UI thread.
pub fn summarize(text: String, max_sentences: Option<u32>) -> String {
    summarize_inner(
        &text,
        limit_or_default(max_sentences, DEFAULT_MAX_SUMMARY_SENTENCES),
    )
}

/// Most frequent noun/verb keywords of `text`, lowercased.
///
/// `None` keeps the default of five keywords; `Some(0)` returns none.
#[flutter_rust_bridge::frb(sync)]
pub fn extract_keywords(text: String, limit: Option<u32>) -> Vec<String> {
    extract_keywords_inner(&text, limit_or_default(limit, DEFAULT_KEYWORD_LIMIT))
}

/// Title derived from the first sentence of `text`.
#[flutter_rust_bridge::frb(sync)]
pub fn generate_title(text: String) -> String {
    generate_title_inner(&text)
}

/// Sentiment label of `text`: `Positive`, `Negative` or `Neutral`.
#[flutter_rust_bridge::frb(sync)]
pub fn analyze_sentiment(text: String) -> String {
    analyze_sentiment_inner(&text).label().to_string()
}

/// All derived fields for one note body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInsightsResponse {
    pub title: String,
    pub summary: String,
    pub keywords: Vec<String>,
    /// `Positive`, `Negative` or `Neutral`.
    pub sentiment: String,
    /// Decorative emoji for `sentiment`.
    pub sentiment_emoji: String,
}

/// Runs title, summary, keyword and sentiment analysis in one call.
///
/// # FFI contract
/// - Async on the Dart side; runs off the UI thread.
pub fn analyze_note(text: String) -> NoteInsightsResponse {
    let insights = TextAnalyzer::new().analyze(&text);
    NoteInsightsResponse {
        title: insights.title,
        summary: insights.summary,
        keywords: insights.keywords,
        sentiment: insights.sentiment.label().to_string(),
        sentiment_emoji: insights.sentiment.emoji().to_string(),
    }
}

/// Bridge projection of one stored note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    /// First 100 characters of content for list rows.
    pub preview: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub is_recorded: bool,
    pub audio_url: Option<String>,
    pub tags: Vec<String>,
}

/// Single-note action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Stored note after the action; `None` on failure and for deletes.
    pub note: Option<NoteItem>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note: Option<NoteItem>) -> Self {
        Self {
            ok: true,
            note,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note: None,
            message: message.into(),
        }
    }
}

/// List/search response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResponse {
    /// Whether the query succeeded.
    pub ok: bool,
    /// Notes ordered by `updated_at DESC`.
    pub items: Vec<NoteItem>,
    pub message: String,
}

impl NotesListResponse {
    fn from_result(op: &str, result: Result<Vec<Note>, String>) -> Self {
        match result {
            Ok(notes) => {
                let items = notes.iter().filter_map(to_note_item).collect::<Vec<_>>();
                let message = if items.is_empty() {
                    "No notes.".to_string()
                } else {
                    format!("Found {} note(s).", items.len())
                };
                Self {
                    ok: true,
                    items,
                    message,
                }
            }
            Err(err) => Self {
                ok: false,
                items: Vec::new(),
                message: format!("{op} failed: {err}"),
            },
        }
    }
}

/// Creates or updates one note for `user_id`.
///
/// Input semantics:
/// - `note_id`: `None` creates; `Some(id)` updates the user's existing note.
/// - `title`: empty or `New Note` is replaced by a generated title.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; empty content is rejected in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn note_save(
    user_id: String,
    note_id: Option<String>,
    title: String,
    content: String,
    tags: Vec<String>,
) -> NoteActionResponse {
    let result = parse_optional_note_id(note_id.as_deref()).and_then(|note_id| {
        with_note_service(|service| {
            let note = match note_id {
                Some(id) => Note {
                    title,
                    content,
                    tags,
                    ..service.get_note(id)?
                },
                None => Note {
                    title,
                    tags,
                    ..Note::new(content)
                },
            };
            service.save_note(user_id.trim(), note)
        })
    });
    match result {
        Ok(note) => NoteActionResponse::success("Note saved.", to_note_item(&note)),
        Err(err) => action_failure("note_save", err),
    }
}

/// Creates a dictated note with generated title, summary and tags.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; blank transcripts are rejected in the envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn note_create_recorded(
    user_id: String,
    transcript: String,
    audio_url: Option<String>,
) -> NoteActionResponse {
    let audio_url = audio_url.filter(|value| !value.trim().is_empty());
    match with_note_service(|service| {
        service.create_recorded_note(user_id.trim(), &transcript, audio_url)
    }) {
        Ok(note) => NoteActionResponse::success("Recorded note created.", to_note_item(&note)),
        Err(err) => action_failure("note_create_recorded", err),
    }
}

/// Recomputes summary and keyword tags of one stored note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_regenerate_insights(note_id: String) -> NoteActionResponse {
    let result = parse_note_id(&note_id).and_then(|id| {
        with_note_service(|service| service.regenerate_insights(id).map(|(note, _)| note))
    });
    match result {
        Ok(note) => NoteActionResponse::success("Insights updated.", to_note_item(&note)),
        Err(err) => action_failure("note_regenerate_insights", err),
    }
}

/// Permanently deletes one note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(note_id: String) -> NoteActionResponse {
    let result = parse_note_id(&note_id)
        .and_then(|id| with_note_service(|service| service.delete_note(id)));
    match result {
        Ok(()) => NoteActionResponse::success("Note deleted.", None),
        Err(err) => action_failure("note_delete", err),
    }
}

/// Lists the user's notes, most recently updated first.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list(user_id: String) -> NotesListResponse {
    let result = with_note_service(|service| service.list_notes(user_id.trim()));
    NotesListResponse::from_result("notes_list", result)
}

/// Case-insensitive search over the user's titles, contents and tags.
///
/// A blank query returns the full listing.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_search(user_id: String, query: String) -> NotesListResponse {
    let result = with_note_service(|service| service.search_notes(user_id.trim(), &query));
    NotesListResponse::from_result("notes_search", result)
}

fn limit_or_default(value: Option<u32>, default: usize) -> usize {
    value.map_or(default, |value| {
        usize::try_from(value).unwrap_or(usize::MAX)
    })
}

fn resolve_notes_db_path() -> PathBuf {
    NOTES_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("AINOTES_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(NOTES_DB_FILE_NAME)
        })
        .clone()
}

fn with_note_service<T>(
    f: impl FnOnce(&mut NoteService<SqliteNoteRepository<'_>>) -> NoteServiceResult<T>,
) -> Result<T, String> {
    let db_path = resolve_notes_db_path();
    let mut conn = open_db(&db_path).map_err(|err| format!("notes DB open failed: {err}"))?;
    let repo = SqliteNoteRepository::try_new(&mut conn)
        .map_err(|err| format!("notes repo init failed: {err}"))?;
    let mut service = NoteService::new(repo);
    f(&mut service).map_err(|err| err.to_string())
}

fn parse_note_id(raw: &str) -> Result<NoteId, String> {
    NoteId::parse_str(raw.trim()).map_err(|_| format!("invalid note id `{}`", raw.trim()))
}

fn parse_optional_note_id(raw: Option<&str>) -> Result<Option<NoteId>, String> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => parse_note_id(value).map(Some),
        None => Ok(None),
    }
}

fn action_failure(op: &str, err: String) -> NoteActionResponse {
    warn!("event=ffi_call module=ffi status=error op={op} error={err}");
    NoteActionResponse::failure(format!("{op} failed: {err}"))
}

fn to_note_item(note: &Note) -> Option<NoteItem> {
    Some(NoteItem {
        id: note.id?.to_string(),
        user_id: note.user_id.clone(),
        title: note.title.clone(),
        content: note.content.clone(),
        summary: note.summary.clone(),
        preview: note.preview(),
        created_at: note.created_at,
        updated_at: note.updated_at,
        is_recorded: note.is_recorded,
        audio_url: note.audio_url.clone(),
        tags: note.tags.clone(),
    })
}
