//! Note/tag repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist notes and their ordered tag lists.
//! - Serve per-user listings ordered by most recent update.
//!
//! # Invariants
//! - A note row and its tag rows are written in one transaction.
//! - Tag order is preserved through the `position` column.
//! - Deleting a note removes its tags via `ON DELETE CASCADE`.

use crate::model::note::{Note, NoteId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use uuid::Uuid;

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    user_id,
    title,
    content,
    summary,
    is_recorded,
    audio_url,
    created_at,
    updated_at
FROM notes";

/// Repository interface for note operations.
pub trait NoteRepository {
    /// Inserts a note and returns its id.
    ///
    /// A fresh id is assigned when `note.id` is `None`.
    fn create_note(&mut self, note: &Note) -> RepoResult<NoteId>;
    /// Replaces every stored field and the tag list of an existing note.
    fn update_note(&mut self, note: &Note) -> RepoResult<()>;
    /// Removes one note and its tags.
    fn delete_note(&mut self, id: NoteId) -> RepoResult<()>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists notes owned by `user_id`, most recently updated first.
    fn list_notes_for_user(&self, user_id: &str) -> RepoResult<Vec<Note>>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema is
    ///   not the one produced by `open_db`.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_note_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create_note(&mut self, note: &Note) -> RepoResult<NoteId> {
        let id = note.id.unwrap_or_else(Uuid::new_v4);
        let stored = Note {
            id: Some(id),
            ..note.clone()
        };
        stored.validate()?;

        let id_text = id.to_string();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(
            "INSERT INTO notes (
                id,
                user_id,
                title,
                content,
                summary,
                is_recorded,
                audio_url,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                id_text,
                stored.user_id,
                stored.title,
                stored.content,
                stored.summary,
                bool_to_int(stored.is_recorded),
                stored.audio_url,
                stored.created_at,
                stored.updated_at,
            ],
        )?;
        insert_tags(&tx, &id_text, &stored.tags)?;
        tx.commit()?;

        Ok(id)
    }

    fn update_note(&mut self, note: &Note) -> RepoResult<()> {
        let id = note.id.ok_or(RepoError::MissingId)?;
        note.validate()?;

        let id_text = id.to_string();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE notes
             SET
                user_id = ?2,
                title = ?3,
                content = ?4,
                summary = ?5,
                is_recorded = ?6,
                audio_url = ?7,
                created_at = ?8,
                updated_at = ?9
             WHERE id = ?1;",
            params![
                id_text,
                note.user_id,
                note.title,
                note.content,
                note.summary,
                bool_to_int(note.is_recorded),
                note.audio_url,
                note.created_at,
                note.updated_at,
            ],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        tx.execute("DELETE FROM note_tags WHERE note_id = ?1;", [&id_text])?;
        insert_tags(&tx, &id_text, &note.tags)?;
        tx.commit()?;

        Ok(())
    }

    fn delete_note(&mut self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id.to_string()])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(self.conn, row)?));
        }
        Ok(None)
    }

    fn list_notes_for_user(&self, user_id: &str) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL}
             WHERE user_id = ?1
             ORDER BY updated_at DESC, id ASC;"
        ))?;
        let mut rows = stmt.query([user_id])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(self.conn, row)?);
        }
        Ok(notes)
    }
}

fn insert_tags(tx: &Transaction<'_>, note_id: &str, tags: &[String]) -> RepoResult<()> {
    let mut stmt =
        tx.prepare("INSERT INTO note_tags (note_id, position, tag) VALUES (?1, ?2, ?3);")?;
    for (position, tag) in tags.iter().enumerate() {
        let position = i64::try_from(position)
            .map_err(|_| RepoError::InvalidData(format!("tag position {position} overflows")))?;
        stmt.execute(params![note_id, position, tag])?;
    }
    Ok(())
}

fn load_tags_for_note(conn: &Connection, note_id: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT tag
         FROM note_tags
         WHERE note_id = ?1
         ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([note_id])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        tags.push(row.get(0)?);
    }
    Ok(tags)
}

fn parse_note_row(conn: &Connection, row: &Row<'_>) -> RepoResult<Note> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{id_text}` in notes.id")))?;
    let is_recorded_raw: i64 = row.get("is_recorded")?;

    let note = Note {
        id: Some(id),
        title: row.get("title")?,
        content: row.get("content")?,
        summary: row.get("summary")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        is_recorded: int_to_bool(is_recorded_raw, "is_recorded")?,
        audio_url: row.get("audio_url")?,
        tags: load_tags_for_note(conn, &id_text)?,
        user_id: row.get("user_id")?,
    };
    note.validate()?;
    Ok(note)
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}

fn int_to_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in notes.{column}"
        ))),
    }
}

fn ensure_note_connection_ready(conn: &Connection) -> RepoResult<()> {
    for table in ["notes", "note_tags"] {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    for column in [
        "id",
        "user_id",
        "title",
        "content",
        "summary",
        "is_recorded",
        "audio_url",
        "created_at",
        "updated_at",
    ] {
        if !table_has_column(conn, "notes", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "notes",
                column,
            });
        }
    }

    for column in ["note_id", "position", "tag"] {
        if !table_has_column(conn, "note_tags", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "note_tags",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
