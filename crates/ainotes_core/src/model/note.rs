//! Note record.
//!
//! # Responsibility
//! - Define the canonical note shape shared by store, services and FFI.
//! - Validate persistence invariants before writes and after reads.
//!
//! # Invariants
//! - `id` is `None` until the note is persisted, and never the nil UUID.
//! - Persisted notes carry a non-blank `user_id`.
//! - `updated_at >= created_at`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier of a persisted note.
pub type NoteId = Uuid;

/// Title used until one is written or generated.
pub const DEFAULT_NOTE_TITLE: &str = "New Note";

const PREVIEW_MAX_CHARS: usize = 100;

/// Note validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// `id` was set to the nil UUID.
    NilId,
    /// Persisted notes must belong to a user.
    BlankUserId,
    /// `updated_at` is earlier than `created_at`.
    InvalidTimeline { created_at: i64, updated_at: i64 },
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "note id must not be nil"),
            Self::BlankUserId => write!(f, "note user_id must not be blank"),
            Self::InvalidTimeline {
                created_at,
                updated_at,
            } => write!(
                f,
                "updated_at ({updated_at}) must be >= created_at ({created_at})"
            ),
        }
    }
}

impl Error for NoteValidationError {}

/// One user note.
///
/// Serialized field names match the document store schema
/// (`createdAt`, `isRecorded`, `audioURL`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NoteId>,
    pub title: String,
    /// Raw body text, typed or transcribed.
    pub content: String,
    /// Derived extractive summary; empty until generated.
    #[serde(default)]
    pub summary: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
    /// `true` when the note came from voice dictation.
    #[serde(default)]
    pub is_recorded: bool,
    #[serde(rename = "audioURL", default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Ordered tags; duplicates are kept as given.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Owning user identifier.
    pub user_id: String,
}

impl Default for Note {
    fn default() -> Self {
        let now = now_epoch_ms();
        Self {
            id: None,
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: String::new(),
            summary: String::new(),
            created_at: now,
            updated_at: now,
            is_recorded: false,
            audio_url: None,
            tags: Vec::new(),
            user_id: String::new(),
        }
    }
}

impl Note {
    /// Creates an unsaved typed note.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Creates an unsaved voice note from a final transcript.
    pub fn recorded(transcript: impl Into<String>, audio_url: Option<String>) -> Self {
        Self {
            content: transcript.into(),
            is_recorded: true,
            audio_url,
            ..Self::default()
        }
    }

    /// Returns whether the title still needs to be generated.
    pub fn has_placeholder_title(&self) -> bool {
        let title = self.title.trim();
        title.is_empty() || title == DEFAULT_NOTE_TITLE
    }

    /// Returns the first 100 characters of content, suffixed with `...`
    /// when cut.
    pub fn preview(&self) -> String {
        let mut preview = self
            .content
            .chars()
            .take(PREVIEW_MAX_CHARS)
            .collect::<String>();
        if self.content.chars().count() > PREVIEW_MAX_CHARS {
            preview.push_str("...");
        }
        preview
    }

    /// Moves `updated_at` to now, never before `created_at`.
    pub fn touch(&mut self) {
        self.updated_at = now_epoch_ms().max(self.created_at);
    }

    /// Validates invariants required for persistence.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.id.is_some_and(|id| id.is_nil()) {
            return Err(NoteValidationError::NilId);
        }
        if self.user_id.trim().is_empty() {
            return Err(NoteValidationError::BlankUserId);
        }
        if self.updated_at < self.created_at {
            return Err(NoteValidationError::InvalidTimeline {
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
