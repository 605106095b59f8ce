//! Board construction from a pair set.

use crate::types::{Card, CardKind, Pair, PairId};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// A card slot on the board with its display flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    pub card: Card,
    pub revealed: bool,
    pub matched: bool,
}

impl Tile {
    fn new(id: PairId, kind: CardKind, text: &str) -> Self {
        Self {
            card: Card {
                id,
                kind,
                text: text.to_string(),
            },
            revealed: false,
            matched: false,
        }
    }
}

/// Question and answer sequences for one round. Positions carry no meaning
/// beyond display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    questions: Vec<Tile>,
    answers: Vec<Tile>,
}

/// Build a board with both sides shuffled independently.
pub fn build<R: Rng>(pairs: &[Pair], rng: &mut R) -> Board {
    let mut questions: Vec<Tile> = pairs
        .iter()
        .map(|p| Tile::new(p.id, CardKind::Question, &p.question))
        .collect();
    let mut answers: Vec<Tile> = pairs
        .iter()
        .map(|p| Tile::new(p.id, CardKind::Answer, &p.answer))
        .collect();

    questions.shuffle(rng);
    answers.shuffle(rng);

    Board { questions, answers }
}

impl Board {
    /// Number of pairs on the board.
    pub fn total_pairs(&self) -> usize {
        self.questions.len()
    }

    pub fn side(&self, kind: CardKind) -> &[Tile] {
        match kind {
            CardKind::Question => &self.questions,
            CardKind::Answer => &self.answers,
        }
    }

    fn side_mut(&mut self, kind: CardKind) -> &mut [Tile] {
        match kind {
            CardKind::Question => &mut self.questions,
            CardKind::Answer => &mut self.answers,
        }
    }

    pub fn get(&self, id: PairId, kind: CardKind) -> Option<&Tile> {
        self.side(kind).iter().find(|t| t.card.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: PairId, kind: CardKind) -> Option<&mut Tile> {
        self.side_mut(kind).iter_mut().find(|t| t.card.id == id)
    }

    /// Card at a display position.
    pub fn at(&self, kind: CardKind, index: usize) -> Option<&Card> {
        self.side(kind).get(index).map(|t| &t.card)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.questions.iter().chain(self.answers.iter())
    }

    pub(crate) fn set_revealed(&mut self, id: PairId, kind: CardKind, revealed: bool) {
        if let Some(tile) = self.get_mut(id, kind) {
            tile.revealed = revealed;
        }
    }

    pub(crate) fn reveal_all(&mut self) {
        for tile in self.questions.iter_mut().chain(self.answers.iter_mut()) {
            tile.revealed = true;
        }
    }

    pub(crate) fn hide_unmatched(&mut self) {
        for tile in self.questions.iter_mut().chain(self.answers.iter_mut()) {
            if !tile.matched {
                tile.revealed = false;
            }
        }
    }

    pub(crate) fn clear_flags(&mut self) {
        for tile in self.questions.iter_mut().chain(self.answers.iter_mut()) {
            tile.revealed = false;
            tile.matched = false;
        }
    }
}
