//! Note use-case service.
//!
//! # Responsibility
//! - Save typed and dictated notes with generated titles and insights.
//! - Scope every listing, search and subscription to one user.
//! - Publish a fresh listing snapshot after each successful mutation.
//!
//! # Invariants
//! - Notes with blank content are never persisted.
//! - Owner and `created_at` of an existing note never change on save.
//! - A failed snapshot refresh never fails the mutation that caused it.

use crate::analysis::{LinguisticBackend, NoteInsights, RuleBasedBackend, TextAnalyzer};
use crate::model::note::{now_epoch_ms, Note, NoteId};
use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoError;
use crate::search::filter_notes;
use crate::sync::{NoteFeed, NoteSnapshot, NoteSubscription};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Content or transcript is empty after trimming.
    EmptyContent,
    /// Operation requires a persisted note id.
    MissingNoteId,
    /// Target note does not exist or belongs to another user.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content must not be empty"),
            Self::MissingNoteId => write!(f, "note has no id"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            RepoError::MissingId => Self::MissingNoteId,
            other => Self::Repo(other),
        }
    }
}

pub type NoteServiceResult<T> = Result<T, NoteServiceError>;

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository, B: LinguisticBackend = RuleBasedBackend> {
    repo: R,
    analyzer: TextAnalyzer<B>,
    feed: NoteFeed,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service with the rule-based analyzer and default options.
    pub fn new(repo: R) -> Self {
        Self::with_analyzer(repo, TextAnalyzer::new())
    }
}

impl<R: NoteRepository, B: LinguisticBackend> NoteService<R, B> {
    /// Creates a service using a caller-configured analyzer.
    pub fn with_analyzer(repo: R, analyzer: TextAnalyzer<B>) -> Self {
        Self {
            repo,
            analyzer,
            feed: NoteFeed::new(),
        }
    }

    pub fn analyzer(&self) -> &TextAnalyzer<B> {
        &self.analyzer
    }

    /// Creates or updates `note` on behalf of `user_id`.
    ///
    /// A placeholder title is replaced by one generated from the content.
    /// Notes without an id are created with owner and timestamps set; notes
    /// with an id must already belong to `user_id`.
    ///
    /// # Errors
    /// - `EmptyContent` when the content is blank.
    /// - `NoteNotFound` when updating a missing or foreign note.
    pub fn save_note(&mut self, user_id: &str, mut note: Note) -> NoteServiceResult<Note> {
        if note.content.trim().is_empty() {
            return Err(NoteServiceError::EmptyContent);
        }
        if note.has_placeholder_title() {
            note.title = self.analyzer.generate_title(&note.content);
        }

        let saved = match note.id {
            None => {
                note.user_id = user_id.to_string();
                let now = now_epoch_ms();
                note.created_at = now;
                note.updated_at = now;
                self.insert(note)?
            }
            Some(id) => {
                let existing = self.owned_note(user_id, id)?;
                note.user_id = existing.user_id;
                note.created_at = existing.created_at;
                note.touch();
                self.replace(note)?
            }
        };

        info!(
            "event=note_save module=service status=ok note_id={} content_chars={} tags={}",
            display_id(&saved),
            saved.content.chars().count(),
            saved.tags.len()
        );
        self.refresh(&saved.user_id);
        Ok(saved)
    }

    /// Creates a dictated note with generated title, summary and tags.
    ///
    /// # Errors
    /// - `EmptyContent` when the transcript is blank.
    pub fn create_recorded_note(
        &mut self,
        user_id: &str,
        transcript: &str,
        audio_url: Option<String>,
    ) -> NoteServiceResult<Note> {
        if transcript.trim().is_empty() {
            return Err(NoteServiceError::EmptyContent);
        }

        let mut note = Note::recorded(transcript, audio_url);
        note.title = self.analyzer.generate_title(transcript);
        note.summary = self.analyzer.summarize(transcript);
        note.tags = self.analyzer.extract_keywords(transcript);
        note.user_id = user_id.to_string();

        let saved = self.insert(note)?;
        info!(
            "event=note_record module=service status=ok note_id={} transcript_chars={} tags={}",
            display_id(&saved),
            transcript.chars().count(),
            saved.tags.len()
        );
        self.refresh(&saved.user_id);
        Ok(saved)
    }

    /// Recomputes summary and keyword tags from the stored content.
    ///
    /// A placeholder title is regenerated as well; a written title is kept.
    pub fn regenerate_insights(&mut self, id: NoteId) -> NoteServiceResult<(Note, NoteInsights)> {
        let mut note = self
            .repo
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))?;

        let insights = self.analyzer.analyze(&note.content);
        note.summary = insights.summary.clone();
        note.tags = insights.keywords.clone();
        if note.has_placeholder_title() {
            note.title = insights.title.clone();
        }
        note.touch();

        let saved = self.replace(note)?;
        info!(
            "event=note_insights module=service status=ok note_id={} sentiment={} tags={}",
            id,
            insights.sentiment,
            saved.tags.len()
        );
        self.refresh(&saved.user_id);
        Ok((saved, insights))
    }

    /// Permanently removes one note and its tags.
    pub fn delete_note(&mut self, id: NoteId) -> NoteServiceResult<()> {
        let existing = self
            .repo
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))?;
        self.repo.delete_note(id)?;

        info!("event=note_delete module=service status=ok note_id={id}");
        self.refresh(&existing.user_id);
        Ok(())
    }

    /// Gets one note by id.
    pub fn get_note(&self, id: NoteId) -> NoteServiceResult<Note> {
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))
    }

    /// Lists `user_id`'s notes, most recently updated first.
    pub fn list_notes(&self, user_id: &str) -> NoteServiceResult<Vec<Note>> {
        Ok(self.repo.list_notes_for_user(user_id)?)
    }

    /// Searches `user_id`'s notes by title, content and tags.
    ///
    /// A blank query returns the full listing.
    pub fn search_notes(&self, user_id: &str, query: &str) -> NoteServiceResult<Vec<Note>> {
        let notes = self.list_notes(user_id)?;
        let total = notes.len();
        let matched = filter_notes(notes, query);
        info!(
            "event=note_search module=service status=ok query_chars={} total={} matched={}",
            query.chars().count(),
            total,
            matched.len()
        );
        Ok(matched)
    }

    /// Subscribes to `user_id`'s listing.
    ///
    /// The subscription holds the current snapshot immediately and receives
    /// a new one after every mutation of that user's notes.
    pub fn subscribe(&self, user_id: &str) -> NoteServiceResult<NoteSubscription> {
        let snapshot = NoteSnapshot {
            user_id: user_id.to_string(),
            notes: self.list_notes(user_id)?,
        };
        Ok(self.feed.subscribe_with(snapshot))
    }

    /// Returns the feed backing subscriptions.
    pub fn feed(&self) -> &NoteFeed {
        &self.feed
    }

    fn owned_note(&self, user_id: &str, id: NoteId) -> NoteServiceResult<Note> {
        self.repo
            .get_note(id)?
            .filter(|note| note.user_id == user_id)
            .ok_or(NoteServiceError::NoteNotFound(id))
    }

    fn insert(&mut self, note: Note) -> NoteServiceResult<Note> {
        let id = self.repo.create_note(&note)?;
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "created note not found in read-back",
            ))
    }

    fn replace(&mut self, note: Note) -> NoteServiceResult<Note> {
        let id = note.id.ok_or(NoteServiceError::MissingNoteId)?;
        self.repo.update_note(&note)?;
        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "updated note not found in read-back",
            ))
    }

    fn refresh(&self, user_id: &str) {
        if !self.feed.has_subscribers(user_id) {
            return;
        }
        match self.repo.list_notes_for_user(user_id) {
            Ok(notes) => {
                self.feed.publish(&NoteSnapshot {
                    user_id: user_id.to_string(),
                    notes,
                });
            }
            Err(err) => warn!(
                "event=feed_refresh module=service status=error error_code=list_failed error={err}"
            ),
        }
    }
}

fn display_id(note: &Note) -> String {
    note.id.map_or_else(|| "none".to_string(), |id| id.to_string())
}
