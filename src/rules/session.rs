//! Game session: one deal of the deck and its selection state.
//!
//! ## Selection rules
//!
//! A turn is two selections. The first reveals a card and remembers it;
//! the second reveals another card, completes the turn, and either pairs
//! both cards for good or leaves them visible until a deferred hide turns
//! them back down.
//!
//! Selecting an unknown, face-up, or matched card does nothing.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::cards::Card;
//! use memory_match::core::{CardId, MatchId, SessionId};
//! use memory_match::events::EventLog;
//! use memory_match::rules::{GameSession, SelectOutcome};
//!
//! let cards = vec![
//!     Card::new(CardId(0), MatchId(0), "cat"),
//!     Card::new(CardId(1), MatchId(0), "cat"),
//! ];
//! let mut session = GameSession::new(SessionId(0), cards).unwrap();
//! let mut events = EventLog::new();
//! let now = Duration::ZERO;
//! let delay = Duration::from_secs(1);
//!
//! session.select(CardId(0), now, delay, &mut events);
//! let outcome = session.select(CardId(1), now, delay, &mut events);
//!
//! assert!(matches!(outcome, SelectOutcome::Matched { game_over: true, .. }));
//! assert!(session.is_game_over());
//! ```

use std::time::Duration;

use im::Vector;
use log::{debug, info, trace, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::outcome::{IgnoreReason, SelectOutcome};
use crate::cards::Card;
use crate::core::{CardId, ConfigError, MatchId, SessionId};
use crate::events::{EventLog, GameEvent};
use crate::timers::DeferredHide;

/// State of one game, from deal to win.
///
/// Uses an `im` persistent vector for the deck so snapshots handed to a
/// renderer clone in O(1).
#[derive(Clone, Debug)]
pub struct GameSession<C: Clone> {
    id: SessionId,

    /// Deck in display order. Never reordered after the deal.
    cards: Vector<Card<C>>,

    /// Card id to deck position.
    index: FxHashMap<CardId, usize>,

    /// Card waiting for the second selection of a turn.
    first_selected: Option<CardId>,

    /// Completed two-card comparisons.
    turn_count: u32,

    is_game_over: bool,

    /// Last reveal stamp handed out.
    flip_seq: u64,
}

impl<C: Clone> GameSession<C> {
    /// Create a session over a caller-built deck.
    ///
    /// The deck must be non-empty, card ids must be distinct, and every
    /// match id must sit on exactly two cards.
    pub fn new(id: SessionId, cards: Vec<Card<C>>) -> Result<Self, ConfigError> {
        if cards.is_empty() {
            return Err(ConfigError::EmptyDeck);
        }

        let mut seen = FxHashSet::default();
        let mut pairs: FxHashMap<MatchId, usize> = FxHashMap::default();
        for card in &cards {
            if !seen.insert(card.id) {
                return Err(ConfigError::DuplicateCard(card.id));
            }
            *pairs.entry(card.match_id).or_default() += 1;
        }
        if let Some((&match_id, &count)) = pairs.iter().find(|(_, &n)| n != 2) {
            return Err(ConfigError::UnpairedMatch { match_id, count });
        }

        Ok(Self::dealt(id, cards))
    }

    /// Create a session over a deck from [`build_deck`](super::build_deck),
    /// which satisfies the deck invariants by construction.
    pub(crate) fn dealt(id: SessionId, cards: Vec<Card<C>>) -> Self {
        let index = cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.id, pos))
            .collect();

        Self {
            id,
            cards: cards.into_iter().collect(),
            index,
            first_selected: None,
            turn_count: 0,
            is_game_over: false,
            flip_seq: 0,
        }
    }

    // === Accessors ===

    /// Session identity.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The deck in display order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card<C>> {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.index.get(&id).and_then(|&pos| self.cards.get(pos))
    }

    /// Card awaiting the second selection of the current turn.
    #[must_use]
    pub fn first_selected(&self) -> Option<CardId> {
        self.first_selected
    }

    /// Number of completed turns.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// True once every card is matched.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Distinct payloads, one per match id, in first-occurrence deck order.
    #[must_use]
    pub fn unique_contents(&self) -> Vec<&C> {
        let mut seen = FxHashSet::default();
        self.cards
            .iter()
            .filter(|card| seen.insert(card.match_id))
            .map(|card| &card.content)
            .collect()
    }

    // === Selection ===

    /// Select a card.
    ///
    /// `now` is the current logical time and `delay` the mismatch delay;
    /// a mismatch reports `hide_at = now + delay` and the caller schedules
    /// the hide (see [`GameSession::deferred_hide`]).
    pub fn select(
        &mut self,
        card_id: CardId,
        now: Duration,
        delay: Duration,
        events: &mut EventLog,
    ) -> SelectOutcome {
        let Some(&pos) = self.index.get(&card_id) else {
            trace!("{}: ignoring unknown {}", self.id, card_id);
            return SelectOutcome::Ignored(IgnoreReason::UnknownCard);
        };
        let card = &self.cards[pos];
        if card.is_matched {
            trace!("{}: ignoring matched {}", self.id, card_id);
            return SelectOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if card.is_face_up {
            trace!("{}: ignoring face-up {}", self.id, card_id);
            return SelectOutcome::Ignored(IgnoreReason::AlreadyFaceUp);
        }

        let first = self
            .first_selected
            .and_then(|id| self.index.get(&id).map(|&p| (id, p)));
        if self.first_selected.is_some() && first.is_none() {
            warn!("{}: pending selection no longer in deck, starting a new turn", self.id);
        }

        let outcome = match first {
            None => self.reveal_first(pos, events),
            Some((first_id, first_pos)) => {
                self.resolve_second(first_id, first_pos, pos, now, delay, events)
            }
        };

        if !self.is_game_over && self.all_matched() {
            self.is_game_over = true;
            info!("{}: all {} pairs found in {} turns", self.id, self.total_pairs(), self.turn_count);
            events.push(GameEvent::GameWon { turns: self.turn_count });
        }

        outcome
    }

    fn reveal_first(&mut self, pos: usize, events: &mut EventLog) -> SelectOutcome {
        // Clear anything left showing from an abandoned mismatch
        let mut concealed: SmallVec<[CardId; 2]> = SmallVec::new();
        for card in self.cards.iter_mut() {
            if card.is_face_up && !card.is_matched {
                card.conceal();
                concealed.push(card.id);
            }
        }
        if !concealed.is_empty() {
            debug!("{}: concealing {} stale card(s)", self.id, concealed.len());
            events.push(GameEvent::CardsConcealed { cards: concealed });
        }

        let card_id = self.reveal(pos);
        self.first_selected = Some(card_id);
        trace!("{}: first selection {}", self.id, card_id);
        events.push(GameEvent::CardRevealed { card: card_id });

        SelectOutcome::FirstRevealed { card: card_id }
    }

    fn resolve_second(
        &mut self,
        first_id: CardId,
        first_pos: usize,
        pos: usize,
        now: Duration,
        delay: Duration,
        events: &mut EventLog,
    ) -> SelectOutcome {
        let second_id = self.reveal(pos);
        events.push(GameEvent::CardRevealed { card: second_id });
        self.first_selected = None;
        self.turn_count += 1;
        let turn = self.turn_count;

        if self.cards[first_pos].matches(&self.cards[pos]) {
            self.cards[first_pos].is_matched = true;
            self.cards[pos].is_matched = true;
            debug!("{}: turn {} matched {} and {}", self.id, turn, first_id, second_id);
            events.push(GameEvent::PairMatched {
                first: first_id,
                second: second_id,
                turn,
            });

            SelectOutcome::Matched {
                first: first_id,
                second: second_id,
                game_over: self.all_matched(),
            }
        } else {
            let hide_at = now.saturating_add(delay);
            debug!(
                "{}: turn {} mismatched {} and {}, hiding at {:?}",
                self.id, turn, first_id, second_id, hide_at
            );
            events.push(GameEvent::PairMismatched {
                first: first_id,
                second: second_id,
                turn,
                hide_at,
            });

            SelectOutcome::Mismatched {
                first: first_id,
                second: second_id,
                hide_at,
            }
        }
    }

    fn reveal(&mut self, pos: usize) -> CardId {
        self.flip_seq += 1;
        let stamp = self.flip_seq;
        let card = &mut self.cards[pos];
        card.reveal(stamp);
        card.id
    }

    fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched)
    }

    // === Deferred hides ===

    /// Build the hide record for a mismatched pair as the cards stand now.
    ///
    /// Returns `None` if either id is not in this session.
    #[must_use]
    pub fn deferred_hide(&self, first: CardId, second: CardId, due: Duration) -> Option<DeferredHide> {
        let a = self.card(first)?;
        let b = self.card(second)?;
        Some(DeferredHide {
            session: self.id,
            cards: [first, second],
            stamps: [a.reveal_stamp, b.reveal_stamp],
            due,
        })
    }

    /// Turn a mismatched pair back face-down.
    ///
    /// Does nothing (and returns false) unless the hide belongs to this
    /// session and both cards are still face-up, unmatched, and showing
    /// from the same reveal the hide was scheduled for.
    pub fn apply_hide(&mut self, hide: &DeferredHide, events: &mut EventLog) -> bool {
        if hide.session != self.id {
            trace!("{}: skipping hide from {}", self.id, hide.session);
            return false;
        }

        let mut positions = [0usize; 2];
        for (slot, (&card_id, &stamp)) in hide.cards.iter().zip(&hide.stamps).enumerate() {
            let live = self
                .index
                .get(&card_id)
                .map(|&pos| (pos, &self.cards[pos]))
                .filter(|(_, c)| c.is_face_up && !c.is_matched && c.reveal_stamp == stamp);
            match live {
                Some((pos, _)) => positions[slot] = pos,
                None => {
                    trace!("{}: {} changed since mismatch, skipping hide", self.id, card_id);
                    return false;
                }
            }
        }

        for pos in positions {
            self.cards[pos].conceal();
        }
        debug!("{}: hid {} and {}", self.id, hide.cards[0], hide.cards[1]);
        events.push(GameEvent::CardsConcealed {
            cards: SmallVec::from_slice(&hide.cards),
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_secs(1);

    /// Deck `[A1, B1, A2, B2]` with ids 0..4.
    fn session() -> GameSession<&'static str> {
        let cards = vec![
            Card::new(CardId(0), MatchId(0), "A"),
            Card::new(CardId(1), MatchId(1), "B"),
            Card::new(CardId(2), MatchId(0), "A"),
            Card::new(CardId(3), MatchId(1), "B"),
        ];
        GameSession::new(SessionId(0), cards).unwrap()
    }

    fn pick(s: &mut GameSession<&'static str>, id: u32, events: &mut EventLog) -> SelectOutcome {
        s.select(CardId(id), Duration::ZERO, DELAY, events)
    }

    #[test]
    fn test_new_session() {
        let s = session();

        assert_eq!(s.turn_count(), 0);
        assert!(!s.is_game_over());
        assert_eq!(s.first_selected(), None);
        assert_eq!(s.total_pairs(), 2);
        assert_eq!(s.matched_pairs(), 0);
    }

    #[test]
    fn test_first_selection() {
        let mut s = session();
        let mut events = EventLog::new();

        let outcome = pick(&mut s, 0, &mut events);

        assert_eq!(outcome, SelectOutcome::FirstRevealed { card: CardId(0) });
        assert!(s.card(CardId(0)).unwrap().is_face_up);
        assert_eq!(s.first_selected(), Some(CardId(0)));
        assert_eq!(s.turn_count(), 0);
    }

    #[test]
    fn test_match() {
        let mut s = session();
        let mut events = EventLog::new();

        pick(&mut s, 0, &mut events);
        let outcome = pick(&mut s, 2, &mut events);

        assert_eq!(
            outcome,
            SelectOutcome::Matched {
                first: CardId(0),
                second: CardId(2),
                game_over: false
            }
        );
        assert_eq!(s.turn_count(), 1);
        assert_eq!(s.matched_pairs(), 1);
        for id in [0, 2] {
            let c = s.card(CardId(id)).unwrap();
            assert!(c.is_matched && c.is_face_up);
        }
    }

    #[test]
    fn test_mismatch_reports_hide_time() {
        let mut s = session();
        let mut events = EventLog::new();

        pick(&mut s, 0, &mut events);
        let outcome = s.select(CardId(1), Duration::from_millis(300), DELAY, &mut events);

        assert_eq!(
            outcome,
            SelectOutcome::Mismatched {
                first: CardId(0),
                second: CardId(1),
                hide_at: Duration::from_millis(1300)
            }
        );
        assert!(s.card(CardId(0)).unwrap().is_face_up);
        assert!(s.card(CardId(1)).unwrap().is_face_up);
        assert_eq!(s.first_selected(), None);
    }

    #[test]
    fn test_ignored_selections() {
        let mut s = session();
        let mut events = EventLog::new();

        assert_eq!(
            pick(&mut s, 99, &mut events),
            SelectOutcome::Ignored(IgnoreReason::UnknownCard)
        );

        pick(&mut s, 0, &mut events);
        assert_eq!(
            pick(&mut s, 0, &mut events),
            SelectOutcome::Ignored(IgnoreReason::AlreadyFaceUp)
        );

        pick(&mut s, 2, &mut events);
        assert_eq!(
            pick(&mut s, 2, &mut events),
            SelectOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
        assert_eq!(s.turn_count(), 1);
    }

    #[test]
    fn test_hide_conceals_pair() {
        let mut s = session();
        let mut events = EventLog::new();

        pick(&mut s, 0, &mut events);
        pick(&mut s, 1, &mut events);
        let hide = s.deferred_hide(CardId(0), CardId(1), DELAY).unwrap();

        assert!(s.apply_hide(&hide, &mut events));
        assert!(!s.card(CardId(0)).unwrap().is_face_up);
        assert!(!s.card(CardId(1)).unwrap().is_face_up);
        assert!(!s.card(CardId(0)).unwrap().is_matched);
    }

    #[test]
    fn test_hide_from_other_session_is_ignored() {
        let mut s = session();
        let mut events = EventLog::new();

        pick(&mut s, 0, &mut events);
        pick(&mut s, 1, &mut events);
        let mut hide = s.deferred_hide(CardId(0), CardId(1), DELAY).unwrap();
        hide.session = SessionId(5);

        assert!(!s.apply_hide(&hide, &mut events));
        assert!(s.card(CardId(0)).unwrap().is_face_up);
    }

    #[test]
    fn test_hide_skips_re_revealed_card() {
        let mut s = session();
        let mut events = EventLog::new();

        // Mismatch 0/1, then abandon it by starting a new turn on 3
        pick(&mut s, 0, &mut events);
        pick(&mut s, 1, &mut events);
        let hide = s.deferred_hide(CardId(0), CardId(1), DELAY).unwrap();
        pick(&mut s, 3, &mut events);

        // Stale cleanup already hid 0 and 1
        assert!(!s.card(CardId(0)).unwrap().is_face_up);
        assert!(!s.apply_hide(&hide, &mut events));

        // 1 pairs with 3, then 0 is revealed again by a newer turn
        pick(&mut s, 1, &mut events);
        pick(&mut s, 0, &mut events);
        assert!(!s.apply_hide(&hide, &mut events));
        assert!(s.card(CardId(0)).unwrap().is_face_up);
    }

    #[test]
    fn test_first_selection_conceals_stale_cards() {
        let mut s = session();
        let mut events = EventLog::new();

        pick(&mut s, 0, &mut events);
        pick(&mut s, 1, &mut events);
        events.drain();

        pick(&mut s, 2, &mut events);

        assert!(!s.card(CardId(0)).unwrap().is_face_up);
        assert!(!s.card(CardId(1)).unwrap().is_face_up);
        assert_eq!(
            events.drain(),
            vec![
                GameEvent::CardsConcealed {
                    cards: SmallVec::from_slice(&[CardId(0), CardId(1)])
                },
                GameEvent::CardRevealed { card: CardId(2) },
            ]
        );
    }

    #[test]
    fn test_unique_contents() {
        let s = session();
        assert_eq!(s.unique_contents(), vec![&"A", &"B"]);
    }

    #[test]
    fn test_game_won_once() {
        let mut s = session();
        let mut events = EventLog::new();

        for id in [0, 2, 1, 3] {
            pick(&mut s, id, &mut events);
        }

        assert!(s.is_game_over());
        assert_eq!(s.turn_count(), 2);
        let wins = events.drain().into_iter().filter(GameEvent::is_game_won).count();
        assert_eq!(wins, 1);

        // Nothing left to select
        assert!(pick(&mut s, 1, &mut events).is_ignored());
        assert!(events.is_empty());
    }

    #[test]
    fn test_new_rejects_duplicate_card_ids() {
        let cards = vec![
            Card::new(CardId(0), MatchId(0), "A"),
            Card::new(CardId(0), MatchId(0), "A"),
        ];

        let err = GameSession::new(SessionId(0), cards).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateCard(CardId(0))));
    }

    #[test]
    fn test_new_rejects_unpaired_match_ids() {
        let odd = vec![
            Card::new(CardId(0), MatchId(0), "A"),
            Card::new(CardId(1), MatchId(0), "A"),
            Card::new(CardId(2), MatchId(1), "B"),
        ];
        let err = GameSession::new(SessionId(0), odd).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnpairedMatch { match_id: MatchId(1), count: 1 }
        ));

        let triple = vec![
            Card::new(CardId(0), MatchId(0), "A"),
            Card::new(CardId(1), MatchId(0), "A"),
            Card::new(CardId(2), MatchId(0), "A"),
            Card::new(CardId(3), MatchId(1), "B"),
        ];
        let err = GameSession::new(SessionId(0), triple).unwrap_err();
        assert!(matches!(err, ConfigError::UnpairedMatch { .. }));
    }

    #[test]
    fn test_new_rejects_empty_deck() {
        let err = GameSession::<&str>::new(SessionId(0), Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDeck));
    }
}
