//! Deck fixtures shared by integration tests.

use tile_match_core::{CustomDeck, DeckPair};

pub fn deck(subject: &str, pairs: &[(&str, &str)]) -> CustomDeck {
    CustomDeck {
        subject: subject.to_string(),
        pairs: pairs
            .iter()
            .map(|(question, answer)| DeckPair {
                question: question.to_string(),
                answer: answer.to_string(),
            })
            .collect(),
    }
}

/// Hand-written arithmetic deck with known questions and answers.
pub fn arithmetic_deck() -> CustomDeck {
    deck(
        "arithmetic",
        &[("3 + 4", "7"), ("2 + 7", "9"), ("6 x 2", "12"), ("9 - 5", "4")],
    )
}
