//! Python bindings for the memory-match engine.
//!
//! Payloads are strings on the Python side (symbols, file paths, URLs).
//!
//! # Quick Start
//!
//! ```python
//! import memory_match as mm
//!
//! game = mm.MemoryGame(seed=42)
//! game.start_new_game(["cat.jpg", "dog.jpg"])
//!
//! card_id, content, face_up, matched = game.cards[0]
//! game.select(card_id)
//! game.advance(1000)
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// memory_match: engine for a memory-matching card game.
#[pymodule]
fn memory_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemoryGame>()?;

    Ok(())
}
