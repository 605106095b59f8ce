//! Question/answer pair generation.
//!
//! Arithmetic pairs are synthesized from random operands, rejecting any
//! candidate whose answer is already on the board so every answer tile is
//! unambiguous. Generation is bounded by an attempt budget; a small answer
//! space yields a shorter deck rather than an error.

use crate::types::{CustomDeck, Pair};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Total candidates drawn before generation gives up.
pub const DEFAULT_ATTEMPT_BUDGET: usize = 200;

/// Arithmetic operator used by the math subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "x",
        }
    }

    /// Draw operands for this operator. Subtraction never goes negative.
    fn sample_operands<R: Rng>(self, rng: &mut R) -> (u32, u32) {
        match self {
            Self::Add => (rng.gen_range(1..=10), rng.gen_range(1..=10)),
            Self::Subtract => {
                let a = rng.gen_range(1..=9);
                let b = rng.gen_range(1..=9);
                if a < b {
                    (b, a)
                } else {
                    (a, b)
                }
            }
            Self::Multiply => (rng.gen_range(1..=9), rng.gen_range(1..=9)),
        }
    }

    fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
        }
    }
}

/// Synthesizes arithmetic pairs with pairwise-distinct answers.
#[derive(Debug, Clone)]
pub struct PairGenerator {
    operators: Vec<Operator>,
    attempt_budget: usize,
}

impl Default for PairGenerator {
    fn default() -> Self {
        Self {
            operators: Operator::ALL.to_vec(),
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
        }
    }
}

impl PairGenerator {
    pub fn new(attempt_budget: usize) -> Self {
        Self {
            attempt_budget,
            ..Self::default()
        }
    }

    /// Restrict generation to the given operators.
    pub fn with_operators(mut self, operators: &[Operator]) -> Self {
        self.operators = operators.to_vec();
        self
    }

    /// Generate up to `count` pairs.
    pub fn generate<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<Pair> {
        let mut pairs = Vec::with_capacity(count);
        let mut seen_answers = HashSet::new();
        let mut attempts = 0;

        while pairs.len() < count && attempts < self.attempt_budget {
            attempts += 1;

            let Some(&op) = self.operators.choose(rng) else {
                break;
            };
            let (a, b) = op.sample_operands(rng);
            let answer = op.apply(a, b).to_string();

            if !seen_answers.insert(answer.clone()) {
                continue;
            }
            pairs.push(Pair::new(format!("{} {} {}", a, op.symbol(), b), answer));
        }

        if pairs.len() < count {
            tracing::debug!(
                requested = count,
                generated = pairs.len(),
                attempts,
                "answer space exhausted before deck was filled"
            );
        }

        pairs
    }
}

/// Turn a custom deck into pairs with fresh identifiers.
pub fn pairs_from_deck(deck: &CustomDeck) -> Vec<Pair> {
    deck.pairs
        .iter()
        .map(|p| Pair::new(p.question.clone(), p.answer.clone()))
        .collect()
}
