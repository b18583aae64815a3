//! In-process change notification for note listings.
//!
//! # Responsibility
//! - Push a fresh per-user note snapshot to every live subscriber after a
//!   mutation.
//!
//! # Invariants
//! - Subscribers only ever receive snapshots for their own user.
//! - Dropped subscriptions are pruned on the next publish.

pub mod live_query;

pub use live_query::{NoteFeed, NoteSnapshot, NoteSubscription};
