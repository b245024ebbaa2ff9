//! # memory-match
//!
//! Engine for a memory-matching ("concentration") card game.
//!
//! ## Design Principles
//!
//! 1. **Content-Agnostic**: Cards carry an opaque payload `C` (photo,
//!    symbol, path). Pairing is decided by `MatchId` alone.
//!
//! 2. **Explicit Sessions**: Every deal is a fresh `GameSession` swapped in
//!    whole. Nothing is reset in place.
//!
//! 3. **Logical Time**: Mismatched pairs hide after a configurable delay on a
//!    clock the host advances. Deferred hides name their session and cards
//!    and do nothing once either is stale.
//!
//! ## Modules
//!
//! - `core`: Identifiers, RNG, configuration, errors
//! - `cards`: Card type and default content
//! - `rules`: Deck dealing and the selection state machine
//! - `timers`: Deferred mismatch hides
//! - `events`: Event log for renderers
//! - `engine`: `GameEngine` and `GameSnapshot`
//!
//! ## Example
//!
//! ```
//! use memory_match::{EngineConfig, GameEngine};
//!
//! let mut engine = GameEngine::with_default_symbols(EngineConfig::default().with_seed(7)).unwrap();
//! engine.start_new_game(Some(vec!["beach.jpg".to_string(), "park.jpg".to_string()]));
//!
//! let first = engine.cards()[0].id;
//! engine.select(first);
//! assert_eq!(engine.first_selected(), Some(first));
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod timers;
pub mod events;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardId, MatchId, SessionId,
    GameRng,
    EngineConfig, ConfigError,
};

pub use crate::cards::Card;

pub use crate::rules::{GameSession, SelectOutcome, IgnoreReason};

pub use crate::timers::{DeferredHide, HideScheduler};

pub use crate::events::{EventLog, GameEvent};

pub use crate::engine::{GameEngine, GameSnapshot};
