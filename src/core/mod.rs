//! Core engine types: identifiers, RNG, configuration, errors.
//!
//! This module contains the building blocks that know nothing about card
//! content or the selection rules.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{CardId, MatchId, SessionId, IdAllocator};
pub use rng::GameRng;
pub use config::{EngineConfig, DEFAULT_MISMATCH_DELAY_MS};
pub use error::ConfigError;
