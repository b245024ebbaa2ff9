//! Error types.
//!
//! Gameplay itself never fails: invalid selections are ignored. Errors only
//! arise while building an engine or a session, or loading configuration.

use thiserror::Error;

use super::entity::{CardId, MatchId};

/// Errors raised while configuring an engine or building a session.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("default content set is empty; at least one pair is required")]
    EmptyDefaults,
    #[error("deck is empty")]
    EmptyDeck,
    #[error("{0} appears more than once in the deck")]
    DuplicateCard(CardId),
    #[error("{match_id} is on {count} card(s); every pair needs exactly two")]
    UnpairedMatch { match_id: MatchId, count: usize },
    #[error("invalid engine configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
