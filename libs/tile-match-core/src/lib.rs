//! Core library for the tile matching game and its companion screens.
//!
//! Provides:
//! - Arithmetic pair generation and board building
//! - The matching game engine (pick/match/mismatch state machine, timer, best times)
//! - A key-value persistence port with an in-memory backend
//! - Custom deck editing and import
//! - The flashcard quiz session with typed-answer matching

pub mod clock;
pub mod deck;
pub mod editor;
pub mod engine;
pub mod error;
pub mod matching;
pub mod pairs;
pub mod parser;
pub mod quiz;
pub mod storage;
pub mod subjects;
pub mod timer;
pub mod types;

pub use clock::{Clock, ManualClock, Wakeup, WakeupKind};
pub use deck::{Board, Tile};
pub use editor::DeckEditor;
pub use engine::{CardRef, Event, GameView, MatchEngine, Outcome, Phase, RoundState, Scoreboard, TileView};
pub use error::{EditorError, ParseError, Result, StoreError};
pub use matching::{check_answer, levenshtein_distance, normalized_similarity, AnswerCheck};
pub use pairs::{Operator, PairGenerator};
pub use parser::{parse_deck, parse_deck_json};
pub use quiz::{Feedback, Quiz};
pub use storage::{KeyValueStore, MemoryStore};
pub use subjects::SubjectRegistry;
pub use timer::{BestTimes, TimerService};
pub use types::{
    Card, CardKind, CustomDeck, DeckPair, GameConfig, MatchingMode, Pair, PairId, QuizCard,
    DEFAULT_SUBJECT,
};
