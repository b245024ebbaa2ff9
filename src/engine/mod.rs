//! Game engine and its published snapshot.
//!
//! The engine is the only entry point a UI needs: it deals games, accepts
//! selections, runs deferred hides on a logical clock, and publishes state
//! through accessors, [`GameSnapshot`]s and the event log.

mod game_engine;
mod snapshot;

pub use game_engine::GameEngine;
pub use snapshot::GameSnapshot;
