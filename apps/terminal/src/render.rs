//! Plain-text rendering of game state.

use tile_match_core::{GameView, Phase, QuizCard, TileView};

const HIDDEN: &str = "???";
const TEXT_WIDTH: usize = 16;

fn tile_text(tile: &TileView) -> String {
    let text = if tile.revealed || tile.matched {
        tile.text.replace('\n', " ")
    } else {
        HIDDEN.to_string()
    };
    let marker = if tile.matched { "*" } else { "" };
    format!("{text}{marker}")
}

fn format_secs(secs: Option<u64>) -> String {
    match secs {
        Some(s) => format!("{s}s"),
        None => "-".to_string(),
    }
}

/// Render the whole board with scoreboard and status line.
pub fn render_game(view: &GameView) -> String {
    let score = &view.scoreboard;
    let mut out = String::new();

    out.push_str(&format!(
        "Subject: {}   Time: {}s   Best: {}\n",
        view.subject,
        score.elapsed_secs,
        format_secs(score.best_secs)
    ));
    out.push_str(&format!(
        "Matches {}/{}   Tries {}   Streak {}\n\n",
        score.matches, score.total_pairs, score.tries, score.streak
    ));
    out.push_str(&format!(
        "{:>4}  {:<width$}{:>4}  {}\n",
        "#",
        "Question",
        "#",
        "Answer",
        width = TEXT_WIDTH
    ));

    let rows = view.questions.len().max(view.answers.len());
    for i in 0..rows {
        let question = view.questions.get(i).map(tile_text).unwrap_or_default();
        let answer = view.answers.get(i).map(tile_text).unwrap_or_default();
        out.push_str(&format!(
            "{:>4}  {:<width$}{:>4}  {}\n",
            format!("q{}", i + 1),
            question,
            format!("a{}", i + 1),
            answer,
            width = TEXT_WIDTH
        ));
    }

    out.push('\n');
    let prompt = match view.phase {
        Phase::Preview | Phase::Mismatch { .. } => "(wait)",
        Phase::Complete => "(new / subject <name> / quit)",
        Phase::Idle | Phase::OnePicked { .. } => "(q<n> / a<n> / new / reset / quit)",
    };
    out.push_str(&format!("{}  {}\n", view.status, prompt));
    out
}

/// Render a quiz card with its position in the deck.
pub fn render_quiz_card(card: &QuizCard, index: usize, len: usize, score: u32, streak: u32) -> String {
    let mut out = format!(
        "Card {}/{}   Type: {}   Score {}   Streak {}\n{}\n",
        index + 1,
        len,
        card.type_name(),
        score,
        streak,
        card.question()
    );
    match card {
        QuizCard::MultipleChoice { choices, .. } => {
            out.push_str(&format!("Choices: {}\n", choices.join(" | ")));
        }
        QuizCard::Input { .. } => out.push_str("Type your answer.\n"),
        QuizCard::Flip { .. } => out.push_str("Type 'show' to flip or 'known' if you knew it.\n"),
    }
    out
}
