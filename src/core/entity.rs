//! Identifier types.
//!
//! Every card instance has a `CardId`; every pair of cards shares a `MatchId`;
//! every game session has a `SessionId`.
//!
//! ## Allocation
//!
//! All three are allocated from monotonic counters owned by the engine
//! (see [`IdAllocator`]). Session ids are 64-bit and never repeat. Card and
//! match ids are 32-bit and wrap after `u32::MAX` allocations; deferred
//! hides are keyed by session as well as card, so a wrapped card id can
//! never be touched by a hide from an older session.
//!
//! ```
//! use memory_match::core::{CardId, IdAllocator};
//!
//! let mut ids = IdAllocator::default();
//! let a = ids.card();
//! let b = ids.card();
//! assert_ne!(a, b);
//! assert_eq!(b, CardId(1));
//! ```

use serde::{Deserialize, Serialize};

/// Identity of a single card instance.
///
/// Two cards with the same content still have different `CardId`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Pairing key shared by exactly two cards of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchId(pub u32);

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match({})", self.0)
    }
}

/// Identity of one game session.
///
/// Deferred actions carry the session they were scheduled in and do nothing
/// once a newer session has replaced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Monotonic allocator for all engine identifiers.
///
/// Card and match counters wrap around instead of overflowing. Ids stay
/// distinct within any deck of fewer than `u32::MAX` cards.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    next_card: u32,
    next_match: u32,
    next_session: u64,
}

impl IdAllocator {
    /// Allocate a fresh card ID.
    pub fn card(&mut self) -> CardId {
        let id = CardId(self.next_card);
        self.next_card = self.next_card.wrapping_add(1);
        id
    }

    /// Allocate a fresh match ID.
    pub fn match_id(&mut self) -> MatchId {
        let id = MatchId(self.next_match);
        self.next_match = self.next_match.wrapping_add(1);
        id
    }

    /// Allocate a fresh session ID.
    pub fn session(&mut self) -> SessionId {
        let id = SessionId(self.next_session);
        self.next_session = self.next_session.wrapping_add(1);
        id
    }
}
