//! Note search entry points.
//!
//! # Responsibility
//! - Match notes against free-text queries without touching storage.

pub mod filter;

pub use filter::{filter_notes, note_matches_query};
