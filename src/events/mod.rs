//! Event system.
//!
//! The engine records a [`GameEvent`] for every visible change: reveals,
//! matches, mismatches, hides, the win. A renderer that prefers pushing
//! updates over polling snapshots drains the log after each engine call:
//!
//! ```
//! use memory_match::{EngineConfig, GameEngine, GameEvent};
//!
//! let mut engine = GameEngine::with_default_symbols(EngineConfig::default().with_seed(1)).unwrap();
//! let events = engine.drain_events();
//! assert!(matches!(events[0], GameEvent::GameStarted { card_count: 6, .. }));
//! ```

mod event;

pub use event::{EventLog, GameEvent};
