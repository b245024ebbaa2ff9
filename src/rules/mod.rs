//! Game rules: dealing decks and resolving selections.
//!
//! - `build_deck`: one pair per content item, shuffled
//! - `GameSession`: the selection state machine for one deal
//! - `SelectOutcome`: what a selection did
//!
//! The rules never inspect card content. Two cards pair when they share a
//! `MatchId`.

pub mod deck;
pub mod outcome;
pub mod session;

pub use deck::build_deck;
pub use outcome::{IgnoreReason, SelectOutcome};
pub use session::GameSession;
