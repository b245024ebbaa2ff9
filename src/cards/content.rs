//! Built-in content used when no payloads are supplied.

/// Pet symbols dealt when the player has not picked any photos.
///
/// Each symbol becomes one pair, so the default deck has six cards.
pub const PET_SYMBOLS: [&str; 3] = ["🐱", "🐶", "🐰"];

/// The default content set as owned strings.
#[must_use]
pub fn pet_symbols() -> Vec<String> {
    PET_SYMBOLS.iter().map(|s| (*s).to_string()).collect()
}
