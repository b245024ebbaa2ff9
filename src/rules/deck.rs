//! Deck construction.
//!
//! Every content item becomes exactly one pair: two cards with fresh card
//! ids sharing a fresh match id. The pairs are then shuffled together.

use crate::cards::Card;
use crate::core::{GameRng, IdAllocator};

/// Build a shuffled deck with one pair per content item.
///
/// The returned deck always has `2 * contents.len()` cards.
pub fn build_deck<C: Clone>(
    contents: Vec<C>,
    ids: &mut IdAllocator,
    rng: &mut GameRng,
) -> Vec<Card<C>> {
    let mut cards = Vec::with_capacity(contents.len() * 2);

    for content in contents {
        let match_id = ids.match_id();
        cards.push(Card::new(ids.card(), match_id, content.clone()));
        cards.push(Card::new(ids.card(), match_id, content));
    }

    rng.shuffle(&mut cards);
    cards
}
