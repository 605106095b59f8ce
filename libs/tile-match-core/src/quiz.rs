//! Flashcard quiz session.
//!
//! The deck and the score/streak counters live in the key-value store under
//! the same keys the tile game's store uses for its own data, so both games
//! can share one backend.

use crate::matching::{self, DEFAULT_FUZZY_THRESHOLD};
use crate::storage::{self, KeyValueStore, QUIZ_DECK_KEY, QUIZ_SCORE_KEY, QUIZ_STREAK_KEY};
use crate::types::{MatchingMode, QuizCard};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Elementary math deck used when nothing is stored.
pub fn preloaded_deck() -> Vec<QuizCard> {
    vec![
        QuizCard::MultipleChoice {
            question: "2 + 2 = ?".to_string(),
            choices: ["3", "4", "5", "6"].map(String::from).to_vec(),
            answer: "4".to_string(),
        },
        QuizCard::MultipleChoice {
            question: "5 - 3 = ?".to_string(),
            choices: ["1", "2", "3", "4"].map(String::from).to_vec(),
            answer: "2".to_string(),
        },
        QuizCard::Input {
            question: "3 x 4 = ?".to_string(),
            answer: "12".to_string(),
        },
        QuizCard::Flip {
            question: "What is the square of 5?".to_string(),
            back: "25".to_string(),
        },
    ]
}

/// Outcome of answering the current card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub correct: bool,
    pub expected: String,
    pub message: String,
}

pub struct Quiz<S> {
    store: S,
    deck: Vec<QuizCard>,
    index: usize,
    score: u32,
    streak: u32,
    matching_mode: MatchingMode,
    fuzzy_threshold: f64,
}

impl<S: KeyValueStore> Quiz<S> {
    /// Restore a session from `store`, falling back to the preloaded deck.
    pub fn load(store: S) -> Self {
        let mut quiz = Self {
            store,
            deck: Vec::new(),
            index: 0,
            score: 0,
            streak: 0,
            matching_mode: MatchingMode::default(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        };
        quiz.reload();
        quiz
    }

    /// Use `mode` when checking typed answers.
    pub fn with_matching(mut self, mode: MatchingMode, fuzzy_threshold: f64) -> Self {
        self.matching_mode = mode;
        self.fuzzy_threshold = fuzzy_threshold;
        self
    }

    fn reload(&mut self) {
        let deck: Vec<QuizCard> = storage::load_or_default(&self.store, QUIZ_DECK_KEY);
        self.deck = if deck.is_empty() { preloaded_deck() } else { deck };
        self.score = storage::load_or_default(&self.store, QUIZ_SCORE_KEY);
        self.streak = storage::load_or_default(&self.store, QUIZ_STREAK_KEY);
        self.index = 0;
    }

    fn save(&mut self) {
        let result = storage::write_json(&mut self.store, QUIZ_DECK_KEY, &self.deck)
            .and_then(|_| storage::write_json(&mut self.store, QUIZ_SCORE_KEY, &self.score))
            .and_then(|_| storage::write_json(&mut self.store, QUIZ_STREAK_KEY, &self.streak));
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to persist quiz progress");
        }
    }

    pub fn current(&self) -> &QuizCard {
        &self.deck[self.index]
    }

    pub fn deck(&self) -> &[QuizCard] {
        &self.deck
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Percentage of the deck reached, counting the current card.
    pub fn progress_percent(&self) -> f64 {
        (self.index + 1) as f64 / self.deck.len() as f64 * 100.0
    }

    /// Grade an answer for the current card and persist the counters.
    pub fn check_answer(&mut self, value: &str) -> Feedback {
        let card = self.current();
        let expected = card.expected().to_string();
        let mode = match card {
            QuizCard::MultipleChoice { .. } => MatchingMode::Exact,
            _ => self.matching_mode,
        };
        let correct = matching::check_answer(value, &expected, mode, self.fuzzy_threshold).is_correct;

        let message = if correct {
            self.score += 1;
            self.streak += 1;
            "Correct!".to_string()
        } else {
            self.streak = 0;
            format!("Incorrect! Answer: {expected}")
        };
        self.save();

        Feedback {
            correct,
            expected,
            message,
        }
    }

    /// Count a flip card as known without typing an answer.
    pub fn mark_known(&mut self) {
        self.score += 1;
        self.streak += 1;
        self.save();
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.deck.len() {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.deck.shuffle(rng);
        self.index = 0;
    }

    pub fn add_card(&mut self, card: QuizCard) {
        self.deck.push(card);
        self.save();
    }

    pub fn reset_to_preloaded(&mut self) {
        self.deck = preloaded_deck();
        self.index = 0;
        self.save();
    }

    /// Forget stored quiz progress and start over.
    pub fn reset_progress(&mut self) {
        for key in [QUIZ_DECK_KEY, QUIZ_SCORE_KEY, QUIZ_STREAK_KEY] {
            if let Err(err) = self.store.remove(key) {
                tracing::warn!(key, error = %err, "failed to clear quiz progress");
            }
        }
        self.reload();
        self.score = 0;
        self.streak = 0;
    }
}
