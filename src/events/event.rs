//! Game event types.
//!
//! Events describe what changed in a session so a renderer can animate it
//! without diffing snapshots. The engine appends them to an [`EventLog`];
//! the renderer drains the log after each call.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardId, SessionId};

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new session replaced the previous one.
    GameStarted {
        session: SessionId,
        card_count: usize,
    },

    /// A card was turned face-up by a selection.
    CardRevealed { card: CardId },

    /// The second card of a turn paired with the first.
    PairMatched {
        first: CardId,
        second: CardId,
        turn: u32,
    },

    /// The second card of a turn did not pair; both hide at `hide_at`.
    PairMismatched {
        first: CardId,
        second: CardId,
        turn: u32,
        hide_at: Duration,
    },

    /// Cards were turned face-down (deferred hide or stale cleanup).
    CardsConcealed { cards: SmallVec<[CardId; 2]> },

    /// Every card in the deck is matched.
    GameWon { turns: u32 },
}

impl GameEvent {
    /// Is this the terminal event of a session?
    #[must_use]
    pub fn is_game_won(&self) -> bool {
        matches!(self, GameEvent::GameWon { .. })
    }
}

/// Ordered buffer of events awaiting the renderer.
///
/// A log built with recording off drops every event, for hosts that poll
/// snapshots and never drain.
#[derive(Clone, Debug)]
pub struct EventLog {
    events: Vec<GameEvent>,
    recording: bool,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_recording(true)
    }
}

impl EventLog {
    /// Create an empty, recording log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log that records only if `recording` is set.
    #[must_use]
    pub fn with_recording(recording: bool) -> Self {
        Self {
            events: Vec::new(),
            recording,
        }
    }

    /// Append an event. Dropped when recording is off.
    pub fn push(&mut self, event: GameEvent) {
        if self.recording {
            self.events.push(event);
        }
    }

    /// Number of undrained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if there are no undrained events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events not yet drained, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all events, oldest first, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Discard every undrained event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_log_preserves_order() {
        let mut log = EventLog::new();

        log.push(GameEvent::CardRevealed { card: CardId(1) });
        log.push(GameEvent::CardRevealed { card: CardId(2) });

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.pending()[0],
            GameEvent::CardRevealed { card: CardId(1) }
        );
    }

    #[test]
    fn test_drain_empties_log() {
        let mut log = EventLog::new();
        log.push(GameEvent::GameWon { turns: 3 });

        let drained = log.drain();

        assert_eq!(drained.len(), 1);
        assert!(drained[0].is_game_won());
        assert!(log.is_empty());
        assert!(log.drain().is_empty());
    }

    #[test]
    fn test_disabled_log_drops_events() {
        let mut log = EventLog::with_recording(false);

        log.push(GameEvent::CardRevealed { card: CardId(1) });

        assert!(log.is_empty());
        assert!(log.drain().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut log = EventLog::new();
        log.push(GameEvent::GameWon { turns: 1 });

        log.clear();

        assert!(log.pending().is_empty());
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::CardsConcealed {
            cards: smallvec![CardId(4), CardId(9)],
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}
