//! Card system: card instances and the default content set.
//!
//! ## Key Types
//!
//! - `Card<C>`: One card with an opaque payload `C`
//! - `PET_SYMBOLS`: Content dealt when no payloads are supplied

pub mod card;
pub mod content;

pub use card::Card;
pub use content::{pet_symbols, PET_SYMBOLS};
