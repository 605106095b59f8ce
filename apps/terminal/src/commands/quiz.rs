//! Interactive flashcard quiz.

use crate::db::SqliteStore;
use crate::render::render_quiz_card;
use std::io::{self, BufRead, Write};
use tile_match_core::matching::DEFAULT_FUZZY_THRESHOLD;
use tile_match_core::{KeyValueStore, MatchingMode, Quiz, QuizCard};

const HELP: &str = "\
Type an answer, or one of:
  next / prev     move through the deck
  show            reveal the back of a flip card
  known           count the current card as known
  shuffle         shuffle the deck
  add <q> = <a>   add a typed-answer card
  add mc <q> = <a> | <c1>, <c2>, ...
                  add a multiple-choice card
  add flip <q> = <back>
                  add a flip card
  preloaded       restore the preloaded deck
  reset           clear progress
  quit            leave the quiz";

const ADD_USAGE: &str = "\
Usage: add <question> = <answer>
       add mc <question> = <answer> | <choice>, <choice>, ...
       add flip <question> = <back>";

/// Parse the arguments of `add`. The last `=` separates the question from
/// the answer so questions like `2 + 2 = ?` survive.
pub fn parse_card(rest: &str) -> Option<QuizCard> {
    let rest = rest.trim();
    let (kind, body) = match rest.split_once(' ') {
        Some(("mc", body)) => ("mc", body),
        Some(("flip", body)) => ("flip", body),
        _ => ("input", rest),
    };

    let split = |text: &str| {
        let (question, answer) = text.rsplit_once('=')?;
        let (question, answer) = (question.trim(), answer.trim());
        (!question.is_empty() && !answer.is_empty()).then(|| (question.to_string(), answer.to_string()))
    };

    match kind {
        "mc" => {
            let (front, choices) = body.rsplit_once('|')?;
            let (question, answer) = split(front)?;
            let choices: Vec<String> = choices
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
            choices.contains(&answer).then_some(QuizCard::MultipleChoice {
                question,
                choices,
                answer,
            })
        }
        "flip" => {
            let (question, back) = split(body)?;
            Some(QuizCard::Flip { question, back })
        }
        _ => {
            let (question, answer) = split(body)?;
            Some(QuizCard::Input { question, answer })
        }
    }
}

/// Apply one input line to the quiz. Returns the text to show, or `None`
/// when the player wants to leave.
pub fn apply_line<S: KeyValueStore>(quiz: &mut Quiz<S>, line: &str) -> Option<String> {
    let line = line.trim();
    let reply = match line {
        "quit" | "exit" => return None,
        "help" => HELP.to_string(),
        "next" => {
            quiz.next();
            String::new()
        }
        "prev" => {
            quiz.prev();
            String::new()
        }
        "show" => format!("Answer: {}", quiz.current().expected()),
        "known" => {
            quiz.mark_known();
            "Marked as known.".to_string()
        }
        "shuffle" => {
            quiz.shuffle(&mut rand::thread_rng());
            "Deck shuffled.".to_string()
        }
        "preloaded" => {
            quiz.reset_to_preloaded();
            "Preloaded deck restored.".to_string()
        }
        "reset" => {
            quiz.reset_progress();
            "Progress cleared.".to_string()
        }
        "" => String::new(),
        _ => match line.strip_prefix("add ") {
            Some(rest) => match parse_card(rest) {
                Some(card) => {
                    quiz.add_card(card);
                    "Card added.".to_string()
                }
                None => ADD_USAGE.to_string(),
            },
            None => quiz.check_answer(line).message,
        },
    };
    Some(reply)
}

pub fn run(store: SqliteStore, mode: MatchingMode) -> anyhow::Result<()> {
    let mut quiz = Quiz::load(store).with_matching(mode, DEFAULT_FUZZY_THRESHOLD);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(
            stdout,
            "\n{}> ",
            render_quiz_card(quiz.current(), quiz.index(), quiz.deck().len(), quiz.score(), quiz.streak())
        )?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match apply_line(&mut quiz, &line) {
            Some(reply) if !reply.is_empty() => writeln!(stdout, "{reply}")?,
            Some(_) => {}
            None => break,
        }
    }
    Ok(())
}
