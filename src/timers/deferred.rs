//! Deferred mismatch hides.
//!
//! A mismatched pair stays face-up for the configured delay and is then
//! turned back down. The hide is not a closure over card positions: it is a
//! plain record naming the session and the two card ids, validated against
//! whatever session is live when it fires.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardId, SessionId};

/// A scheduled hide of one mismatched pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredHide {
    /// Session the mismatch happened in.
    pub session: SessionId,

    /// The two mismatched cards (first selection, second selection).
    pub cards: [CardId; 2],

    /// Reveal stamps of both cards at scheduling time.
    /// A card revealed again since then carries a newer stamp.
    pub stamps: [u64; 2],

    /// Logical time at which the hide fires.
    pub due: Duration,
}

/// Queue of pending hides ordered by deadline.
///
/// Hides with equal deadlines fire in scheduling order. Nothing is ever
/// cancelled; stale entries are filtered when they fire.
#[derive(Clone, Debug, Default)]
pub struct HideScheduler {
    /// Sorted by `due`, earliest first.
    queue: SmallVec<[DeferredHide; 2]>,
}

impl HideScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a hide.
    pub fn schedule(&mut self, hide: DeferredHide) {
        // Insert after every entry due no later, keeping ties in FIFO order
        let pos = self.queue.partition_point(|h| h.due <= hide.due);
        self.queue.insert(pos, hide);
    }

    /// Remove and return the earliest hide due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<DeferredHide> {
        match self.queue.first() {
            Some(h) if h.due <= now => Some(self.queue.remove(0)),
            _ => None,
        }
    }

    /// Deadline of the earliest pending hide.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.first().map(|h| h.due)
    }

    /// Deadline of the latest pending hide.
    #[must_use]
    pub fn last_deadline(&self) -> Option<Duration> {
        self.queue.last().map(|h| h.due)
    }

    /// Number of pending hides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
