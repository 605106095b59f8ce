//! Common test utilities for driving a game with simulated time.

#![allow(dead_code)]

pub mod fixtures;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tile_match_core::storage;
use tile_match_core::{
    CardKind, CardRef, CustomDeck, Event, GameConfig, ManualClock, MatchEngine, MemoryStore,
    Outcome,
};

pub type TestEngine = MatchEngine<ManualClock, MemoryStore>;

pub const PREVIEW: Duration = Duration::from_secs(5);
pub const MISMATCH_DELAY: Duration = Duration::from_millis(750);

/// Engine over an in-memory store seeded with `decks`.
pub fn engine_with_decks(decks: &[CustomDeck]) -> TestEngine {
    let mut store = MemoryStore::new();
    storage::save_custom_decks(&mut store, decks).expect("memory store never fails");
    engine_with_store(store, 42)
}

pub fn engine_with_store(store: MemoryStore, seed: u64) -> TestEngine {
    MatchEngine::with_rng(
        GameConfig::default(),
        ManualClock::new(),
        store,
        StdRng::seed_from_u64(seed),
    )
}

/// Start a round on `subject` and let the preview run out.
pub fn start_round(engine: &mut TestEngine, subject: &str) {
    engine.handle(Event::NewRound {
        subject: Some(subject.to_string()),
    });
    engine.advance(PREVIEW);
}

pub fn find(engine: &TestEngine, kind: CardKind, text: &str) -> CardRef {
    let tile = engine
        .board()
        .side(kind)
        .iter()
        .find(|t| t.card.text == text)
        .unwrap_or_else(|| panic!("no {} tile with text {text:?}", kind.as_str()));
    CardRef {
        id: tile.card.id,
        kind,
    }
}

pub fn pick(engine: &mut TestEngine, card: CardRef) -> Outcome {
    engine.handle(Event::Select {
        card_id: card.id,
        kind: card.kind,
    })
}

/// Match every remaining pair without mistakes. Returns the last outcome.
pub fn solve_board(engine: &mut TestEngine) -> Outcome {
    let ids: Vec<_> = engine
        .board()
        .side(CardKind::Question)
        .iter()
        .filter(|t| !t.matched)
        .map(|t| t.card.id)
        .collect();

    let mut last = Outcome::Ignored;
    for id in ids {
        pick(engine, CardRef { id, kind: CardKind::Question });
        last = pick(engine, CardRef { id, kind: CardKind::Answer });
    }
    last
}
