//! Engine bindings for Python.

use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CardId, EngineConfig};
use crate::engine::GameEngine;

/// Python wrapper for `GameEngine<String>`.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    engine: GameEngine<String>,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a game dealt from the default pet symbols.
    ///
    /// # Arguments
    /// - seed: RNG seed for reproducible deals (random if omitted)
    /// - mismatch_delay_ms: How long a mismatched pair stays visible
    /// - record_events: Keep events for `drain_events` (turn off when polling)
    #[new]
    #[pyo3(signature = (seed = None, mismatch_delay_ms = 1000, record_events = true))]
    fn new(seed: Option<u64>, mismatch_delay_ms: u64, record_events: bool) -> PyResult<Self> {
        let mut config = EngineConfig::default()
            .with_mismatch_delay(Duration::from_millis(mismatch_delay_ms))
            .with_event_recording(record_events);
        config.seed = seed;
        let engine = GameEngine::with_default_symbols(config)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Deal a new game. Empty or missing payloads use the default symbols.
    #[pyo3(signature = (payloads = None))]
    fn start_new_game(&mut self, payloads: Option<Vec<String>>) {
        self.engine.start_new_game(payloads);
    }

    /// Select a card. Returns False if the selection was ignored.
    fn select(&mut self, card_id: u32) -> bool {
        !self.engine.select(CardId::new(card_id)).is_ignored()
    }

    /// Advance the clock by `ms` milliseconds. Returns the number of pairs hidden.
    fn advance(&mut self, ms: u64) -> usize {
        self.engine.advance(Duration::from_millis(ms))
    }

    /// Fire every pending hide immediately.
    fn flush_pending(&mut self) -> usize {
        self.engine.flush_pending()
    }

    /// Take the events recorded since the last call, each as a JSON string.
    fn drain_events(&mut self) -> PyResult<Vec<String>> {
        self.engine
            .drain_events()
            .iter()
            .map(|event| serde_json::to_string(event).map_err(|e| PyValueError::new_err(e.to_string())))
            .collect()
    }

    /// Cards in display order as `(id, content, face_up, matched)` tuples.
    #[getter]
    fn cards(&self) -> Vec<(u32, String, bool, bool)> {
        self.engine
            .cards()
            .iter()
            .map(|c| (c.id.raw(), c.content.clone(), c.is_face_up, c.is_matched))
            .collect()
    }

    #[getter]
    fn session_id(&self) -> u64 {
        self.engine.session_id().raw()
    }

    #[getter]
    fn turn_count(&self) -> u32 {
        self.engine.turn_count()
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// Distinct payloads, one per pair.
    #[getter]
    fn unique_contents(&self) -> Vec<String> {
        self.engine.unique_contents().into_iter().cloned().collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "MemoryGame(turns={}, pairs={}/{}, over={})",
            self.engine.turn_count(),
            self.engine.matched_pairs(),
            self.engine.total_pairs(),
            self.engine.is_game_over()
        )
    }
}
