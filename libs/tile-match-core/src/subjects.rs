//! Subject name to pair set resolution.

use crate::pairs::{pairs_from_deck, PairGenerator};
use crate::types::{CustomDeck, Pair, DEFAULT_SUBJECT};
use rand::Rng;

/// Known subjects: the generated math subject plus any custom decks.
#[derive(Debug, Clone, Default)]
pub struct SubjectRegistry {
    decks: Vec<CustomDeck>,
    generator: PairGenerator,
}

impl SubjectRegistry {
    pub fn new(decks: Vec<CustomDeck>, generator: PairGenerator) -> Self {
        let mut registry = Self {
            decks: Vec::new(),
            generator,
        };
        for deck in decks {
            registry.upsert(deck);
        }
        registry
    }

    /// Insert or replace a custom deck by subject. A deck named after the
    /// generated math subject is skipped.
    pub fn upsert(&mut self, deck: CustomDeck) {
        if deck.subject == DEFAULT_SUBJECT {
            tracing::warn!(subject = %deck.subject, "ignoring custom deck with reserved subject");
            return;
        }
        match self.decks.iter_mut().find(|d| d.subject == deck.subject) {
            Some(existing) => *existing = deck,
            None => self.decks.push(deck),
        }
    }

    pub fn deck(&self, subject: &str) -> Option<&CustomDeck> {
        self.decks.iter().find(|d| d.subject == subject)
    }

    /// Math first, then custom subjects in insertion order.
    pub fn subjects(&self) -> Vec<&str> {
        std::iter::once(DEFAULT_SUBJECT)
            .chain(self.decks.iter().map(|d| d.subject.as_str()))
            .collect()
    }

    /// Pairs for a round. Unknown subjects and empty decks fall back to
    /// generated math pairs.
    pub fn resolve<R: Rng>(&self, subject: &str, count: usize, rng: &mut R) -> Vec<Pair> {
        match self.deck(subject) {
            Some(deck) if !deck.pairs.is_empty() => pairs_from_deck(deck),
            _ => {
                if subject != DEFAULT_SUBJECT {
                    tracing::debug!(subject, "no custom deck, using generated math pairs");
                }
                self.generator.generate(rng, count)
            }
        }
    }
}
