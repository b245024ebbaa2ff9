//! Results of a selection.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Why a selection changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The id does not name a card of the live session.
    UnknownCard,
    /// The card is already showing.
    AlreadyFaceUp,
    /// The card belongs to a resolved pair.
    AlreadyMatched,
}

/// What a call to `select` did.
///
/// Purely informational: all effects are already applied to the session
/// when this is returned, so callers are free to discard it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// No state changed.
    Ignored(IgnoreReason),

    /// The card became the pending first selection of a turn.
    FirstRevealed { card: CardId },

    /// The card completed a turn and paired with the first selection.
    Matched {
        first: CardId,
        second: CardId,
        game_over: bool,
    },

    /// The card completed a turn without pairing; both cards hide at `hide_at`.
    Mismatched {
        first: CardId,
        second: CardId,
        hide_at: Duration,
    },
}

impl SelectOutcome {
    /// Did the selection change any state?
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }

    /// Did the selection complete a turn?
    #[must_use]
    pub fn completes_turn(&self) -> bool {
        matches!(
            self,
            SelectOutcome::Matched { .. } | SelectOutcome::Mismatched { .. }
        )
    }
}
