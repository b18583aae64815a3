//! Core domain logic for AI Notes.
//! On-device note analysis plus the note store, search and live feeds built
//! on top of it.

pub mod analysis;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod sync;

pub use analysis::{
    analyze_sentiment, extract_keywords, extract_keywords_default, generate_title, summarize,
    summarize_default, LinguisticBackend, NoteInsights, PartOfSpeech, RuleBasedBackend, Sentiment,
    TextAnalyzer,
};
pub use config::AnalysisOptions;
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, NoteValidationError, DEFAULT_NOTE_TITLE};
pub use repo::note_repo::{NoteRepository, SqliteNoteRepository};
pub use repo::{RepoError, RepoResult};
pub use search::{filter_notes, note_matches_query};
pub use service::note_service::{NoteService, NoteServiceError, NoteServiceResult};
pub use sync::{NoteFeed, NoteSnapshot, NoteSubscription};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
