//! Published game state.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{CardId, SessionId};

/// Everything a renderer needs to draw one frame.
///
/// Cloning the deck is O(1) thanks to `im`, so taking a snapshot per frame
/// is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot<C: Clone> {
    /// Session the snapshot was taken from.
    pub session: SessionId,

    /// Deck in display order.
    pub cards: Vector<Card<C>>,

    /// Completed turns.
    pub turn_count: u32,

    /// True once every card is matched.
    pub is_game_over: bool,

    /// Card awaiting the second selection.
    pub first_selected: Option<CardId>,

    /// Logical engine time.
    pub now: Duration,
}

impl<C: Clone> GameSnapshot<C> {
    /// Cards currently showing their content.
    pub fn face_up(&self) -> impl Iterator<Item = &Card<C>> {
        self.cards.iter().filter(|c| c.is_face_up)
    }
}
