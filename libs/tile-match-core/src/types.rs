//! Core types for the tile matching game and its companion screens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Subject used when none is selected or the selected one is unknown.
pub const DEFAULT_SUBJECT: &str = "math";

/// Subject assigned to an editor deck saved without a name.
pub const FALLBACK_CUSTOM_SUBJECT: &str = "Custom Subject";

/// Stable identifier shared by the two cards of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairId(Uuid);

impl PairId {
    /// Allocate a fresh identifier, distinct from every other one.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PairId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A question/answer unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub id: PairId,
    pub question: String,
    pub answer: String,
}

impl Pair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: PairId::new(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Which face of a pair a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Question,
    Answer,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }
}

/// One displayable face derived from a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: PairId,
    pub kind: CardKind,
    pub text: String,
}

/// Pair as stored in a custom deck (ids are assigned when a round is built).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPair {
    pub question: String,
    pub answer: String,
}

/// User-authored deck, unique by subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDeck {
    pub subject: String,
    pub pairs: Vec<DeckPair>,
}

/// Tunables for a matching game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub pair_count: usize,
    pub attempt_budget: usize,
    pub preview_ms: u64,
    pub mismatch_delay_ms: u64,
    pub tick_ms: u64,
    pub default_subject: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: 8,
            attempt_budget: 200,
            preview_ms: 5_000,
            mismatch_delay_ms: 750,
            tick_ms: 1_000,
            default_subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

impl GameConfig {
    pub fn preview(&self) -> Duration {
        Duration::from_millis(self.preview_ms)
    }

    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Comparison mode for typed quiz answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    Exact,
    CaseInsensitive,
    Fuzzy,
}

impl Default for MatchingMode {
    fn default() -> Self {
        Self::Exact
    }
}

/// A flashcard in the quiz deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizCard {
    #[serde(rename = "mc")]
    MultipleChoice {
        question: String,
        choices: Vec<String>,
        answer: String,
    },
    Input {
        question: String,
        answer: String,
    },
    Flip {
        question: String,
        back: String,
    },
}

impl QuizCard {
    pub fn question(&self) -> &str {
        match self {
            Self::MultipleChoice { question, .. }
            | Self::Input { question, .. }
            | Self::Flip { question, .. } => question,
        }
    }

    /// Expected answer, or the back face for flip cards.
    pub fn expected(&self) -> &str {
        match self {
            Self::MultipleChoice { answer, .. } | Self::Input { answer, .. } => answer,
            Self::Flip { back, .. } => back,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::MultipleChoice { .. } => "mc",
            Self::Input { .. } => "input",
            Self::Flip { .. } => "flip",
        }
    }
}
