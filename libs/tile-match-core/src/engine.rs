//! Matching game state machine.
//!
//! A round starts with a preview in which every tile is shown and input is
//! locked. Once the preview wakeup arrives the tiles are hidden and the timer
//! starts. The player then picks a question tile and an answer tile; a match
//! locks both tiles in place, a mismatch keeps both visible until the
//! mismatch wakeup hides them again. The round completes when every pair is
//! matched, which stops the timer and records the best time for the subject.
//!
//! The first pick of a turn must be a question tile. Picking another tile of
//! the same kind while one is pending swaps the pending pick.

use crate::clock::{Clock, ManualClock, Wakeup, WakeupKind};
use crate::deck::{self, Board, Tile};
use crate::error::Result;
use crate::pairs::PairGenerator;
use crate::storage::{self, KeyValueStore};
use crate::subjects::SubjectRegistry;
use crate::timer::{BestTimes, TimerService};
use crate::types::{CardKind, CustomDeck, GameConfig, PairId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::time::Duration;

const MSG_PREVIEW: &str = "Memorize the tiles!";
const MSG_PICK_QUESTION: &str = "Pick a question tile.";
const MSG_QUESTION_FIRST: &str = "Start with a question tile.";
const MSG_PICK_ANSWER: &str = "Now pick the matching answer.";
const MSG_MATCH: &str = "Match!";
const MSG_MISMATCH: &str = "Not a match, try again.";
const MSG_NO_PAIRS: &str = "No pairs available for this subject.";

/// Reference to one tile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardRef {
    pub id: PairId,
    pub kind: CardKind,
}

/// Input accepted by [`MatchEngine::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Select { card_id: PairId, kind: CardKind },
    /// Start a fresh round, optionally switching subject first.
    NewRound { subject: Option<String> },
    ResetStats,
    ChangeSubject { subject: String },
    Wakeup(Wakeup),
}

/// Where the round is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    Preview,
    Idle,
    OnePicked { first: CardRef },
    Mismatch { first: CardRef, second: CardRef },
    Complete,
}

impl Phase {
    /// Whether selections are currently refused.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Preview | Self::Mismatch { .. })
    }
}

/// What handling an event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Updated,
    Ticked,
    RoundComplete { elapsed_secs: u64, new_best: bool },
}

/// Snapshot of the counters and pending picks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundState {
    pub matches: u32,
    pub tries: u32,
    pub streak: u32,
    pub total_pairs: usize,
    pub first_pick: Option<CardRef>,
    pub second_pick: Option<CardRef>,
    pub locked: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Counters {
    matches: u32,
    tries: u32,
    streak: u32,
}

/// Tile as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileView {
    pub id: PairId,
    pub kind: CardKind,
    pub text: String,
    pub revealed: bool,
    pub matched: bool,
}

impl From<&Tile> for TileView {
    fn from(tile: &Tile) -> Self {
        Self {
            id: tile.card.id,
            kind: tile.card.kind,
            text: tile.card.text.clone(),
            revealed: tile.revealed,
            matched: tile.matched,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub matches: u32,
    pub tries: u32,
    pub streak: u32,
    pub total_pairs: usize,
    pub elapsed_secs: u64,
    pub best_secs: Option<u64>,
}

/// Everything a renderer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub subject: String,
    pub phase: Phase,
    pub status: String,
    pub questions: Vec<TileView>,
    pub answers: Vec<TileView>,
    pub scoreboard: Scoreboard,
}

/// One game session. Owns the board, counters, timer and persistence port.
pub struct MatchEngine<C, S> {
    config: GameConfig,
    clock: C,
    store: S,
    rng: StdRng,
    registry: SubjectRegistry,
    best_times: BestTimes,
    timer: TimerService,
    subject: String,
    board: Board,
    phase: Phase,
    counters: Counters,
    generation: u64,
    status: String,
}

impl<C: Clock, S: KeyValueStore> MatchEngine<C, S> {
    pub fn new(config: GameConfig, clock: C, store: S) -> Self {
        Self::with_rng(config, clock, store, StdRng::from_entropy())
    }

    /// Build an engine with a caller-supplied random source. Custom decks and
    /// best times are loaded from `store`. No round is running until a
    /// [`Event::NewRound`] arrives.
    pub fn with_rng(config: GameConfig, clock: C, store: S, rng: StdRng) -> Self {
        let decks = storage::load_custom_decks(&store);
        let best_times = storage::load_best_times(&store);
        let registry = SubjectRegistry::new(decks, PairGenerator::new(config.attempt_budget));

        Self {
            subject: config.default_subject.clone(),
            config,
            clock,
            store,
            rng,
            registry,
            best_times,
            timer: TimerService::new(),
            board: Board::default(),
            phase: Phase::Idle,
            counters: Counters::default(),
            generation: 0,
            status: String::new(),
        }
    }

    /// Single entry point for player input and clock wakeups.
    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::Select { card_id, kind } => self.select(CardRef { id: card_id, kind }),
            Event::NewRound { subject } => self.new_round(subject),
            Event::ChangeSubject { subject } => self.new_round(Some(subject)),
            Event::ResetStats => self.reset_stats(),
            Event::Wakeup(wakeup) => self.on_wakeup(wakeup),
        }
    }

    fn new_round(&mut self, subject: Option<String>) -> Outcome {
        if let Some(subject) = subject {
            self.subject = subject;
        }
        self.generation += 1;

        let pairs = self
            .registry
            .resolve(&self.subject, self.config.pair_count, &mut self.rng);
        self.board = deck::build(&pairs, &mut self.rng);
        self.counters = Counters::default();

        tracing::info!(
            subject = %self.subject,
            pairs = self.board.total_pairs(),
            generation = self.generation,
            "starting round"
        );

        if self.board.total_pairs() == 0 {
            self.timer.stop();
            self.phase = Phase::Complete;
            self.status = MSG_NO_PAIRS.to_string();
            return Outcome::Updated;
        }

        self.board.reveal_all();
        self.phase = Phase::Preview;
        self.status = MSG_PREVIEW.to_string();
        self.timer
            .start_preview(&mut self.clock, self.generation, self.config.preview());
        Outcome::Updated
    }

    /// Zero the counters and replay the current board without a preview.
    /// Nothing happens before the first round.
    fn reset_stats(&mut self) -> Outcome {
        if self.generation == 0 {
            return Outcome::Ignored;
        }
        self.generation += 1;
        self.counters = Counters::default();
        self.board.clear_flags();

        if self.board.total_pairs() == 0 {
            self.timer.stop();
            self.phase = Phase::Complete;
            self.status = MSG_NO_PAIRS.to_string();
            return Outcome::Updated;
        }

        self.phase = Phase::Idle;
        self.status = MSG_PICK_QUESTION.to_string();
        self.timer
            .start(&mut self.clock, self.generation, self.config.tick());
        Outcome::Updated
    }

    fn select(&mut self, card: CardRef) -> Outcome {
        if self.phase.is_locked() || self.phase == Phase::Complete {
            tracing::trace!(?card, phase = ?self.phase, "selection ignored while locked");
            return Outcome::Ignored;
        }
        match self.board.get(card.id, card.kind) {
            Some(tile) if !tile.matched => {}
            _ => {
                tracing::trace!(?card, "selection ignored for unknown or matched tile");
                return Outcome::Ignored;
            }
        }

        match self.phase {
            Phase::Idle => {
                if card.kind != CardKind::Question {
                    self.status = MSG_QUESTION_FIRST.to_string();
                    return Outcome::Updated;
                }
                self.board.set_revealed(card.id, card.kind, true);
                self.phase = Phase::OnePicked { first: card };
                self.status = MSG_PICK_ANSWER.to_string();
                Outcome::Updated
            }
            Phase::OnePicked { first } if first == card => Outcome::Ignored,
            Phase::OnePicked { first } if first.kind == card.kind => {
                self.board.set_revealed(first.id, first.kind, false);
                self.board.set_revealed(card.id, card.kind, true);
                self.phase = Phase::OnePicked { first: card };
                Outcome::Updated
            }
            Phase::OnePicked { first } => {
                self.board.set_revealed(card.id, card.kind, true);
                self.counters.tries += 1;
                self.evaluate(first, card)
            }
            Phase::Preview | Phase::Mismatch { .. } | Phase::Complete => Outcome::Ignored,
        }
    }

    fn evaluate(&mut self, first: CardRef, second: CardRef) -> Outcome {
        if first.id == second.id && first.kind != second.kind {
            for pick in [first, second] {
                if let Some(tile) = self.board.get_mut(pick.id, pick.kind) {
                    tile.matched = true;
                    tile.revealed = true;
                }
            }
            self.counters.matches += 1;
            self.counters.streak += 1;

            if self.counters.matches as usize == self.board.total_pairs() {
                return self.complete_round();
            }
            self.phase = Phase::Idle;
            self.status = MSG_MATCH.to_string();
            return Outcome::Updated;
        }

        self.counters.streak = 0;
        self.phase = Phase::Mismatch { first, second };
        self.status = MSG_MISMATCH.to_string();
        self.clock.after(
            self.config.mismatch_delay(),
            Wakeup {
                kind: WakeupKind::HideMismatch,
                round: self.generation,
                epoch: self.timer.epoch(),
            },
        );
        Outcome::Updated
    }

    fn complete_round(&mut self) -> Outcome {
        self.phase = Phase::Complete;
        let elapsed_secs = self.timer.stop();
        let new_best = self.best_times.record_if_best(&self.subject, elapsed_secs);

        if new_best {
            if let Err(err) = storage::save_best_times(&mut self.store, &self.best_times) {
                tracing::warn!(error = %err, "failed to persist best times");
            }
        }

        self.status = if new_best {
            format!("All pairs matched in {elapsed_secs}s! New best time!")
        } else {
            format!("All pairs matched in {elapsed_secs}s!")
        };
        tracing::info!(subject = %self.subject, elapsed_secs, new_best, "round complete");

        Outcome::RoundComplete {
            elapsed_secs,
            new_best,
        }
    }

    fn on_wakeup(&mut self, wakeup: Wakeup) -> Outcome {
        if wakeup.round != self.generation {
            tracing::trace!(?wakeup, current = self.generation, "dropping stale wakeup");
            return Outcome::Ignored;
        }

        match (wakeup.kind, self.phase) {
            (WakeupKind::PreviewOver, Phase::Preview) => {
                self.board.hide_unmatched();
                self.phase = Phase::Idle;
                self.status = MSG_PICK_QUESTION.to_string();
                self.timer
                    .start(&mut self.clock, self.generation, self.config.tick());
                Outcome::Updated
            }
            (WakeupKind::HideMismatch, Phase::Mismatch { first, second }) => {
                self.board.set_revealed(first.id, first.kind, false);
                self.board.set_revealed(second.id, second.kind, false);
                self.phase = Phase::Idle;
                self.status = MSG_PICK_QUESTION.to_string();
                Outcome::Updated
            }
            (WakeupKind::Tick, _) => {
                if self.timer.on_tick(&mut self.clock, wakeup, self.config.tick()) {
                    Outcome::Ticked
                } else {
                    Outcome::Ignored
                }
            }
            _ => Outcome::Ignored,
        }
    }

    /// Save a custom deck, making its subject available for new rounds.
    pub fn save_custom_deck(&mut self, deck: CustomDeck) -> Result<()> {
        storage::upsert_custom_deck(&mut self.store, deck.clone())?;
        self.registry.upsert(deck);
        Ok(())
    }

    pub fn round_state(&self) -> RoundState {
        let (first_pick, second_pick) = match self.phase {
            Phase::OnePicked { first } => (Some(first), None),
            Phase::Mismatch { first, second } => (Some(first), Some(second)),
            _ => (None, None),
        };
        RoundState {
            matches: self.counters.matches,
            tries: self.counters.tries,
            streak: self.counters.streak,
            total_pairs: self.board.total_pairs(),
            first_pick,
            second_pick,
            locked: self.phase.is_locked(),
        }
    }

    pub fn view(&self) -> GameView {
        GameView {
            subject: self.subject.clone(),
            phase: self.phase,
            status: self.status.clone(),
            questions: self.board.side(CardKind::Question).iter().map(TileView::from).collect(),
            answers: self.board.side(CardKind::Answer).iter().map(TileView::from).collect(),
            scoreboard: Scoreboard {
                matches: self.counters.matches,
                tries: self.counters.tries,
                streak: self.counters.streak,
                total_pairs: self.board.total_pairs(),
                elapsed_secs: self.timer.elapsed_secs(),
                best_secs: self.best_times.get(&self.subject),
            },
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs()
    }

    pub fn best_times(&self) -> &BestTimes {
        &self.best_times
    }

    pub fn registry(&self) -> &SubjectRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: KeyValueStore> MatchEngine<ManualClock, S> {
    /// Move simulated time forward, delivering every wakeup that falls due,
    /// including ones scheduled while handling earlier wakeups.
    pub fn advance(&mut self, by: Duration) -> Vec<Outcome> {
        let deadline = self.clock.now() + by;
        let mut outcomes = Vec::new();
        while let Some(wakeup) = self.clock.pop_due(deadline) {
            outcomes.push(self.handle(Event::Wakeup(wakeup)));
        }
        self.clock.set_now(deadline);
        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::types::DeckPair;
    use pretty_assertions::assert_eq;

    const PREVIEW: Duration = Duration::from_secs(5);
    const MISMATCH: Duration = Duration::from_millis(750);

    fn engine_with(decks: &[CustomDeck]) -> MatchEngine<ManualClock, MemoryStore> {
        let mut store = MemoryStore::new();
        storage::save_custom_decks(&mut store, decks).unwrap();
        MatchEngine::with_rng(
            GameConfig::default(),
            ManualClock::new(),
            store,
            StdRng::seed_from_u64(17),
        )
    }

    fn colors() -> CustomDeck {
        CustomDeck {
            subject: "colors".to_string(),
            pairs: [("sky", "blue"), ("grass", "green"), ("blood", "red")]
                .iter()
                .map(|(q, a)| DeckPair {
                    question: q.to_string(),
                    answer: a.to_string(),
                })
                .collect(),
        }
    }

    fn started(subject: &str) -> MatchEngine<ManualClock, MemoryStore> {
        let mut engine = engine_with(&[colors()]);
        engine.handle(Event::NewRound {
            subject: Some(subject.to_string()),
        });
        engine.advance(PREVIEW);
        engine
    }

    fn card(engine: &MatchEngine<ManualClock, MemoryStore>, kind: CardKind, text: &str) -> CardRef {
        let tile = engine
            .board()
            .side(kind)
            .iter()
            .find(|t| t.card.text == text)
            .unwrap();
        CardRef {
            id: tile.card.id,
            kind,
        }
    }

    fn select(engine: &mut MatchEngine<ManualClock, MemoryStore>, card: CardRef) -> Outcome {
        engine.handle(Event::Select {
            card_id: card.id,
            kind: card.kind,
        })
    }

    #[test]
    fn preview_reveals_and_locks() {
        let mut engine = engine_with(&[colors()]);
        engine.handle(Event::NewRound {
            subject: Some("colors".to_string()),
        });

        assert_eq!(engine.phase(), Phase::Preview);
        assert!(engine.round_state().locked);
        assert!(engine.board().tiles().all(|t| t.revealed));

        let sky = card(&engine, CardKind::Question, "sky");
        assert_eq!(select(&mut engine, sky), Outcome::Ignored);

        engine.advance(Duration::from_millis(4_999));
        assert_eq!(engine.phase(), Phase::Preview);
        engine.advance(Duration::from_millis(1));
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.board().tiles().all(|t| !t.revealed));
        assert_eq!(engine.elapsed_secs(), 0);
    }

    #[test]
    fn first_pick_must_be_question() {
        let mut engine = started("colors");
        let blue = card(&engine, CardKind::Answer, "blue");

        assert_eq!(select(&mut engine, blue), Outcome::Updated);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.status(), MSG_QUESTION_FIRST);
        assert!(!engine.board().get(blue.id, blue.kind).unwrap().revealed);
    }

    #[test]
    fn same_kind_pick_swaps_selection() {
        let mut engine = started("colors");
        let sky = card(&engine, CardKind::Question, "sky");
        let grass = card(&engine, CardKind::Question, "grass");

        select(&mut engine, sky);
        select(&mut engine, grass);

        assert_eq!(engine.phase(), Phase::OnePicked { first: grass });
        assert!(!engine.board().get(sky.id, sky.kind).unwrap().revealed);
        assert!(engine.board().get(grass.id, grass.kind).unwrap().revealed);
        assert_eq!(engine.round_state().tries, 0);
    }

    #[test]
    fn reselecting_pending_pick_is_ignored() {
        let mut engine = started("colors");
        let sky = card(&engine, CardKind::Question, "sky");
        select(&mut engine, sky);
        assert_eq!(select(&mut engine, sky), Outcome::Ignored);
        assert_eq!(engine.phase(), Phase::OnePicked { first: sky });
    }

    #[test]
    fn match_marks_both_tiles() {
        let mut engine = started("colors");
        let sky = card(&engine, CardKind::Question, "sky");
        let blue = card(&engine, CardKind::Answer, "blue");

        select(&mut engine, sky);
        assert_eq!(select(&mut engine, blue), Outcome::Updated);

        let state = engine.round_state();
        assert_eq!((state.matches, state.tries, state.streak), (1, 1, 1));
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.board().get(sky.id, sky.kind).unwrap().matched);
        assert!(engine.board().get(blue.id, blue.kind).unwrap().matched);

        // Matched tiles are no longer selectable.
        assert_eq!(select(&mut engine, sky), Outcome::Ignored);
    }

    #[test]
    fn mismatch_locks_then_hides() {
        let mut engine = started("colors");
        let sky = card(&engine, CardKind::Question, "sky");
        let red = card(&engine, CardKind::Answer, "red");
        let grass = card(&engine, CardKind::Question, "grass");

        select(&mut engine, sky);
        select(&mut engine, red);

        let state = engine.round_state();
        assert_eq!((state.matches, state.tries, state.streak), (0, 1, 0));
        assert!(state.locked);
        assert_eq!(state.first_pick, Some(sky));
        assert_eq!(state.second_pick, Some(red));
        assert_eq!(select(&mut engine, grass), Outcome::Ignored);

        engine.advance(MISMATCH);
        assert_eq!(engine.phase(), Phase::Idle);
        for pick in [sky, red] {
            let tile = engine.board().get(pick.id, pick.kind).unwrap();
            assert!(!tile.revealed && !tile.matched);
        }
    }

    #[test]
    fn mismatch_resets_streak() {
        let mut engine = started("colors");
        let sky = card(&engine, CardKind::Question, "sky");
        let blue = card(&engine, CardKind::Answer, "blue");
        let grass = card(&engine, CardKind::Question, "grass");
        let red = card(&engine, CardKind::Answer, "red");

        select(&mut engine, sky);
        select(&mut engine, blue);
        assert_eq!(engine.round_state().streak, 1);

        select(&mut engine, grass);
        select(&mut engine, red);
        assert_eq!(engine.round_state().streak, 0);
        assert_eq!(engine.round_state().matches, 1);
    }

    #[test]
    fn completing_round_stops_timer() {
        let mut engine = started("colors");
        engine.advance(Duration::from_secs(12));

        for (q, a) in [("sky", "blue"), ("grass", "green"), ("blood", "red")] {
            let q = card(&engine, CardKind::Question, q);
            let a = card(&engine, CardKind::Answer, a);
            select(&mut engine, q);
            select(&mut engine, a);
        }

        assert_eq!(engine.phase(), Phase::Complete);
        assert_eq!(engine.best_times().get("colors"), Some(12));
        engine.advance(Duration::from_secs(5));
        assert_eq!(engine.elapsed_secs(), 12);

        let stored = storage::load_best_times(engine.store());
        assert_eq!(stored.get("colors"), Some(12));
    }

    #[test]
    fn reset_stats_is_idempotent() {
        let mut engine = started("colors");
        let sky = card(&engine, CardKind::Question, "sky");
        let blue = card(&engine, CardKind::Answer, "blue");
        select(&mut engine, sky);
        select(&mut engine, blue);

        engine.handle(Event::ResetStats);
        let once = engine.round_state();
        let view_once = engine.view();
        engine.handle(Event::ResetStats);

        assert_eq!(engine.round_state(), once);
        assert_eq!(engine.view(), view_once);
        assert_eq!((once.matches, once.tries, once.streak), (0, 0, 0));
        assert!(!once.locked);
        assert!(engine.board().tiles().all(|t| !t.matched && !t.revealed));
    }

    #[test]
    fn reset_during_mismatch_cancels_pending_hide() {
        let mut engine = started("colors");
        let sky = card(&engine, CardKind::Question, "sky");
        let red = card(&engine, CardKind::Answer, "red");
        select(&mut engine, sky);
        select(&mut engine, red);

        engine.handle(Event::ResetStats);
        engine.advance(Duration::from_millis(300));
        let grass = card(&engine, CardKind::Question, "grass");
        let blue = card(&engine, CardKind::Answer, "blue");
        select(&mut engine, grass);
        select(&mut engine, blue);

        // The hide scheduled before the reset fires in between and must be dropped.
        engine.advance(Duration::from_millis(500));
        assert!(matches!(engine.phase(), Phase::Mismatch { .. }));
        engine.advance(Duration::from_millis(250));
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn new_round_drops_stale_preview() {
        let mut engine = engine_with(&[colors()]);
        engine.handle(Event::NewRound { subject: None });
        engine.advance(Duration::from_secs(3));
        engine.handle(Event::NewRound { subject: None });

        // The first preview would have ended here.
        engine.advance(Duration::from_secs(2));
        assert_eq!(engine.phase(), Phase::Preview);
        engine.advance(Duration::from_secs(3));
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn change_subject_rebuilds_board() {
        let mut engine = started("math");
        assert_eq!(engine.round_state().total_pairs, 8);

        engine.handle(Event::ChangeSubject {
            subject: "colors".to_string(),
        });
        assert_eq!(engine.subject(), "colors");
        assert_eq!(engine.round_state().total_pairs, 3);
        assert_eq!(engine.phase(), Phase::Preview);
    }

    #[test]
    fn saved_deck_is_playable() {
        let mut engine = engine_with(&[]);
        engine
            .save_custom_deck(CustomDeck {
                subject: "animals".to_string(),
                pairs: vec![DeckPair {
                    question: "cow".to_string(),
                    answer: "moo".to_string(),
                }],
            })
            .unwrap();

        engine.handle(Event::ChangeSubject {
            subject: "animals".to_string(),
        });
        assert_eq!(engine.round_state().total_pairs, 1);
        assert_eq!(storage::load_custom_decks(engine.store()).len(), 1);
    }

    #[test]
    fn reset_before_first_round_is_ignored() {
        let mut engine = MatchEngine::with_rng(
            GameConfig::default(),
            ManualClock::new(),
            MemoryStore::new(),
            StdRng::seed_from_u64(1),
        );
        assert_eq!(engine.handle(Event::ResetStats), Outcome::Ignored);
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn empty_board_is_complete_without_best_time() {
        let config = GameConfig {
            attempt_budget: 0,
            ..GameConfig::default()
        };
        let mut engine = MatchEngine::with_rng(
            config,
            ManualClock::new(),
            MemoryStore::new(),
            StdRng::seed_from_u64(1),
        );
        engine.handle(Event::NewRound { subject: None });

        assert_eq!(engine.phase(), Phase::Complete);
        assert_eq!(engine.round_state().total_pairs, 0);
        assert!(engine.best_times().is_empty());
    }

    #[test]
    fn view_reports_scoreboard() {
        let mut engine = started("colors");
        engine.advance(Duration::from_secs(3));
        let view = engine.view();

        assert_eq!(view.subject, "colors");
        assert_eq!(view.questions.len(), 3);
        assert_eq!(view.answers.len(), 3);
        assert_eq!(view.scoreboard.elapsed_secs, 3);
        assert_eq!(view.scoreboard.best_secs, None);
        assert_eq!(view.status, MSG_PICK_QUESTION);
    }
}
