//! The game engine: owner of the live session, the clock and the hide queue.

use std::time::Duration;

use im::Vector;
use log::{debug, trace};

use super::snapshot::GameSnapshot;
use crate::cards::{pet_symbols, Card};
use crate::core::{CardId, ConfigError, EngineConfig, GameRng, IdAllocator, SessionId};
use crate::events::{EventLog, GameEvent};
use crate::rules::{build_deck, GameSession, SelectOutcome};
use crate::timers::HideScheduler;

/// Memory game engine.
///
/// Owns exactly one live [`GameSession`]. `start_new_game` builds a complete
/// replacement session before swapping it in, so observers never see a
/// half-dealt deck.
///
/// ## Time
///
/// The engine keeps a logical clock. Mismatched pairs are hidden when the
/// host advances the clock past their deadline:
///
/// ```
/// use std::time::Duration;
/// use memory_match::{EngineConfig, GameEngine, SelectOutcome};
///
/// let mut engine = GameEngine::new(EngineConfig::default().with_seed(5), vec!["a", "b"]).unwrap();
/// let a = engine.cards().iter().find(|c| c.content == "a").unwrap().id;
/// let b = engine.cards().iter().find(|c| c.content == "b").unwrap().id;
///
/// engine.select(a);
/// let outcome = engine.select(b);
/// assert!(matches!(outcome, SelectOutcome::Mismatched { .. }));
///
/// engine.advance(Duration::from_millis(999));
/// assert!(engine.card(a).unwrap().is_face_up);
///
/// engine.advance(Duration::from_millis(1));
/// assert!(!engine.card(a).unwrap().is_face_up);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<C: Clone> {
    config: EngineConfig,
    rng: GameRng,
    ids: IdAllocator,
    default_contents: Vec<C>,
    session: GameSession<C>,
    scheduler: HideScheduler,
    events: EventLog,
    now: Duration,
}

impl<C: Clone> GameEngine<C> {
    /// Create an engine and deal a first game from `default_contents`.
    ///
    /// Fails if `default_contents` is empty: the default deck must hold at
    /// least one pair.
    pub fn new(config: EngineConfig, default_contents: Vec<C>) -> Result<Self, ConfigError> {
        if default_contents.is_empty() {
            return Err(ConfigError::EmptyDefaults);
        }

        let mut rng = GameRng::from_seed_or_entropy(config.seed);
        let mut ids = IdAllocator::default();
        debug!(
            "creating engine (seed {}, mismatch delay {:?})",
            rng.seed(),
            config.mismatch_delay()
        );

        let session_id = ids.session();
        let deck = build_deck(default_contents.clone(), &mut ids, &mut rng);
        let mut events = EventLog::with_recording(config.record_events);
        events.push(GameEvent::GameStarted {
            session: session_id,
            card_count: deck.len(),
        });

        Ok(Self {
            config,
            rng,
            ids,
            default_contents,
            session: GameSession::dealt(session_id, deck),
            scheduler: HideScheduler::new(),
            events,
            now: Duration::ZERO,
        })
    }

    // === Operations ===

    /// Deal a new game, discarding the current one.
    ///
    /// `payloads` that are `None` or empty fall back to the default content
    /// set. Hides still pending from the old session stay queued and do
    /// nothing when they fire. Undrained events of the old session are
    /// discarded.
    pub fn start_new_game(&mut self, payloads: Option<Vec<C>>) {
        let contents = match payloads {
            Some(p) if !p.is_empty() => p,
            _ => self.default_contents.clone(),
        };

        let session_id = self.ids.session();
        let deck = build_deck(contents, &mut self.ids, &mut self.rng);
        debug!(
            "{}: dealt {} cards, {} stale hide(s) pending",
            session_id,
            deck.len(),
            self.scheduler.len()
        );
        let card_count = deck.len();

        self.session = GameSession::dealt(session_id, deck);
        self.events.clear();
        self.events.push(GameEvent::GameStarted {
            session: session_id,
            card_count,
        });
    }

    /// Select a card. Invalid selections are ignored.
    pub fn select(&mut self, card_id: CardId) -> SelectOutcome {
        let outcome = self.session.select(
            card_id,
            self.now,
            self.config.mismatch_delay(),
            &mut self.events,
        );

        if let SelectOutcome::Mismatched {
            first,
            second,
            hide_at,
        } = outcome
        {
            if let Some(hide) = self.session.deferred_hide(first, second, hide_at) {
                self.scheduler.schedule(hide);
            }
        }

        outcome
    }

    /// Advance the logical clock, firing every hide that falls due.
    ///
    /// Returns the number of hides that changed the live session.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.now = self.now.saturating_add(elapsed);

        let mut applied = 0;
        while let Some(hide) = self.scheduler.pop_due(self.now) {
            if hide.session != self.session.id() {
                trace!("dropping hide from superseded {}", hide.session);
                continue;
            }
            if self.session.apply_hide(&hide, &mut self.events) {
                applied += 1;
            }
        }
        applied
    }

    /// Advance the clock to the last pending deadline, firing every hide.
    pub fn flush_pending(&mut self) -> usize {
        match self.scheduler.last_deadline() {
            Some(due) => self.advance(due.saturating_sub(self.now)),
            None => 0,
        }
    }

    /// Take all events recorded since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Events recorded since the last drain, without taking them.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    // === Published state ===

    /// The deck in display order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card<C>> {
        self.session.cards()
    }

    /// Look up a card of the live session.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.session.card(id)
    }

    /// Completed turns in the live session.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.session.turn_count()
    }

    /// True once every card of the live session is matched.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Card awaiting the second selection.
    #[must_use]
    pub fn first_selected(&self) -> Option<CardId> {
        self.session.first_selected()
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session.id()
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.session.matched_pairs()
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.session.total_pairs()
    }

    /// Distinct payloads of the deck, one per pair, in first-occurrence order.
    ///
    /// Meant for summary views such as an end-of-game collage.
    #[must_use]
    pub fn unique_contents(&self) -> Vec<&C> {
        self.session.unique_contents()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deadline of the next pending hide, for hosts that sleep between frames.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Number of queued hides, including stale ones from old sessions.
    #[must_use]
    pub fn pending_hides(&self) -> usize {
        self.scheduler.len()
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Capture the published state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<C> {
        GameSnapshot {
            session: self.session.id(),
            cards: self.session.cards().clone(),
            turn_count: self.session.turn_count(),
            is_game_over: self.session.is_game_over(),
            first_selected: self.session.first_selected(),
            now: self.now,
        }
    }
}

impl GameEngine<String> {
    /// Create an engine whose default deck is the built-in pet symbols.
    pub fn with_default_symbols(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::new(config, pet_symbols())
    }
}
