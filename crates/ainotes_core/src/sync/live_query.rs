//! Per-user live note listings over std channels.

use crate::model::note::Note;
use log::debug;
use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Full ordered listing of one user's notes at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSnapshot {
    pub user_id: String,
    /// Notes ordered by `updated_at DESC`.
    pub notes: Vec<Note>,
}

/// Registry of live subscribers keyed by user id.
#[derive(Debug, Default)]
pub struct NoteFeed {
    subscribers: Mutex<BTreeMap<String, Vec<Sender<NoteSnapshot>>>>,
}

impl NoteFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber for `user_id` with nothing queued.
    pub fn subscribe(&self, user_id: &str) -> NoteSubscription {
        let (sender, receiver) = mpsc::channel();
        self.register(user_id, sender);
        NoteSubscription {
            user_id: user_id.to_string(),
            receiver,
        }
    }

    /// Registers a subscriber whose first message is `initial`.
    ///
    /// Other subscribers of the same user do not receive `initial`.
    pub fn subscribe_with(&self, initial: NoteSnapshot) -> NoteSubscription {
        let (sender, receiver) = mpsc::channel();
        let user_id = initial.user_id.clone();
        // The receiver is alive, so this send cannot fail.
        let _ = sender.send(initial);
        self.register(&user_id, sender);
        NoteSubscription { user_id, receiver }
    }

    /// Sends `snapshot` to every live subscriber of its user.
    ///
    /// Returns the number of subscribers that received it.
    pub fn publish(&self, snapshot: &NoteSnapshot) -> usize {
        let mut subscribers = self.lock();
        let Some(senders) = subscribers.get_mut(&snapshot.user_id) else {
            return 0;
        };

        senders.retain(|sender| sender.send(snapshot.clone()).is_ok());
        let delivered = senders.len();
        if senders.is_empty() {
            subscribers.remove(&snapshot.user_id);
        }

        debug!(
            "event=feed_publish module=sync status=ok notes={} delivered={}",
            snapshot.notes.len(),
            delivered
        );
        delivered
    }

    /// Returns whether anyone currently listens for `user_id`.
    pub fn has_subscribers(&self, user_id: &str) -> bool {
        self.lock().contains_key(user_id)
    }

    /// Returns the number of registered subscribers for `user_id`.
    ///
    /// Dropped subscriptions are counted until the next publish.
    pub fn subscriber_count(&self, user_id: &str) -> usize {
        self.lock().get(user_id).map_or(0, Vec::len)
    }

    fn register(&self, user_id: &str, sender: Sender<NoteSnapshot>) {
        self.lock()
            .entry(user_id.to_string())
            .or_default()
            .push(sender);
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Vec<Sender<NoteSnapshot>>>> {
        // Every mutation of the map completes before the guard drops.
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Receiving end of a per-user listing.
///
/// Dropping the subscription unsubscribes it.
#[derive(Debug)]
pub struct NoteSubscription {
    user_id: String,
    receiver: Receiver<NoteSnapshot>,
}

impl NoteSubscription {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the next pending snapshot without blocking.
    pub fn try_next(&self) -> Option<NoteSnapshot> {
        match self.receiver.try_recv() {
            Ok(snapshot) => Some(snapshot),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Waits up to `timeout` for the next snapshot.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<NoteSnapshot> {
        match self.receiver.recv_timeout(timeout) {
            Ok(snapshot) => Some(snapshot),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Drains pending snapshots and returns the most recent one.
    pub fn latest(&self) -> Option<NoteSnapshot> {
        self.receiver.try_iter().last()
    }
}
