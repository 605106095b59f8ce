//! Typed-answer comparison for the flashcard quiz.

use crate::types::MatchingMode;
use serde::{Deserialize, Serialize};

/// Similarity required for a fuzzy answer to count.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Result of comparing a player's answer to the expected one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerCheck {
    pub is_correct: bool,
    /// Between 0.0 and 1.0.
    pub similarity: f64,
    pub mode: MatchingMode,
    pub given: String,
    pub expected: String,
}

/// Compare `given` to `expected` after collapsing whitespace.
pub fn check_answer(given: &str, expected: &str, mode: MatchingMode, fuzzy_threshold: f64) -> AnswerCheck {
    let given = collapse_whitespace(given);
    let expected = collapse_whitespace(expected);

    let similarity = match mode {
        MatchingMode::Exact => exact_score(given == expected),
        MatchingMode::CaseInsensitive => exact_score(given.to_lowercase() == expected.to_lowercase()),
        MatchingMode::Fuzzy => normalized_similarity(&given.to_lowercase(), &expected.to_lowercase()),
    };
    let is_correct = match mode {
        MatchingMode::Fuzzy => similarity >= fuzzy_threshold,
        _ => similarity == 1.0,
    };

    AnswerCheck {
        is_correct,
        similarity,
        mode,
        given,
        expected,
    }
}

fn exact_score(equal: bool) -> f64 {
    if equal {
        1.0
    } else {
        0.0
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Levenshtein edit distance over chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rolling rows.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// 1.0 for identical strings, falling towards 0.0 with edit distance.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / longest as f64
}
