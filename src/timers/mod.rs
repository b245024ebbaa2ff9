//! Deferred actions on a logical clock.
//!
//! The engine never sleeps or spawns. The host advances a logical clock
//! (`GameEngine::advance`) from its frame loop or timer callback; hides
//! whose deadline has passed fire inside that call, on the caller's thread.

mod deferred;

pub use deferred::{DeferredHide, HideScheduler};
