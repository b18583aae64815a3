//! Note domain model.
//!
//! # Responsibility
//! - Define the note record stored per user and exchanged with the host app.
//!
//! # Invariants
//! - `content` is the source of truth; `title`, `summary` and `tags` are
//!   derived and may be regenerated at any time.
//! - A persisted note is identified by a stable, non-nil `NoteId`.

pub mod note;
