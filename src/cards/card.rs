//! Card instances - runtime card state.
//!
//! A `Card` couples an opaque payload with the two flags the rules care
//! about. The engine never looks at `content`; pairing is decided by
//! `match_id` alone.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, MatchId};

/// A card in a deck.
///
/// ## Flag invariants
///
/// - `is_matched` implies `is_face_up`, and both stay true for the rest of
///   the session.
/// - Only the rules in [`crate::rules`] flip the flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card<C> {
    /// Unique identity of this instance.
    pub id: CardId,

    /// Pairing key shared with exactly one other card.
    pub match_id: MatchId,

    /// Payload shown when face-up (image, symbol, ...).
    pub content: C,

    /// Is the content currently visible?
    pub is_face_up: bool,

    /// Has this card been paired?
    pub is_matched: bool,

    /// Flip sequence number of the reveal that turned this card face-up.
    /// Zero while the card has never been revealed.
    #[serde(skip)]
    pub(crate) reveal_stamp: u64,
}

impl<C> Card<C> {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, match_id: MatchId, content: C) -> Self {
        Self {
            id,
            match_id,
            content,
            is_face_up: false,
            is_matched: false,
            reveal_stamp: 0,
        }
    }

    /// Can this card be selected? (face-down and not yet paired)
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_face_up && !self.is_matched
    }

    /// Does this card pair with `other`?
    ///
    /// A card never pairs with itself.
    #[must_use]
    pub fn matches(&self, other: &Card<C>) -> bool {
        self.id != other.id && self.match_id == other.match_id
    }

    pub(crate) fn reveal(&mut self, stamp: u64) {
        self.is_face_up = true;
        self.reveal_stamp = stamp;
    }

    pub(crate) fn conceal(&mut self) {
        self.is_face_up = false;
    }
}

// The reveal stamp is bookkeeping for deferred hides, not observable state.
impl<C: PartialEq> PartialEq for Card<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.match_id == other.match_id
            && self.content == other.content
            && self.is_face_up == other.is_face_up
            && self.is_matched == other.is_matched
    }
}

impl<C: Eq> Eq for Card<C> {}
