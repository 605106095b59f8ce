//! Custom deck editor.

use crate::error::EditorError;
use crate::types::{CustomDeck, DeckPair, FALLBACK_CUSTOM_SUBJECT};

/// Builds a custom deck one pair at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckEditor {
    subject: String,
    pairs: Vec<DeckPair>,
}

impl DeckEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing deck.
    pub fn from_deck(deck: CustomDeck) -> Self {
        Self {
            subject: deck.subject,
            pairs: deck.pairs,
        }
    }

    pub fn set_subject(&mut self, subject: &str) {
        self.subject = subject.trim().to_string();
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn pairs(&self) -> &[DeckPair] {
        &self.pairs
    }

    /// Append a pair. Both sides are trimmed and must be non-empty.
    pub fn add_pair(&mut self, question: &str, answer: &str) -> Result<(), EditorError> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() {
            return Err(EditorError::EmptyField { field: "question" });
        }
        if answer.is_empty() {
            return Err(EditorError::EmptyField { field: "answer" });
        }
        self.pairs.push(DeckPair {
            question: question.to_string(),
            answer: answer.to_string(),
        });
        Ok(())
    }

    pub fn remove_pair(&mut self, index: usize) -> Result<DeckPair, EditorError> {
        if index >= self.pairs.len() {
            return Err(EditorError::NoSuchPair { index });
        }
        Ok(self.pairs.remove(index))
    }

    pub fn reset(&mut self) {
        self.subject.clear();
        self.pairs.clear();
    }

    pub fn to_deck(&self) -> CustomDeck {
        let subject = if self.subject.is_empty() {
            FALLBACK_CUSTOM_SUBJECT.to_string()
        } else {
            self.subject.clone()
        };
        CustomDeck {
            subject,
            pairs: self.pairs.clone(),
        }
    }

    /// Pretty-printed deck config, importable with `parse_deck_json`.
    pub fn export_json(&self) -> String {
        // A struct of strings always serializes.
        serde_json::to_string_pretty(&self.to_deck()).unwrap_or_default()
    }
}
