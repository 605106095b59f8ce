//! Interactive tile matching game.

use crate::clock::TokioClock;
use crate::db::SqliteStore;
use crate::render::render_game;
use tile_match_core::{CardKind, Event, GameConfig, MatchEngine, Outcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

const HELP: &str = "\
Commands:
  q<n>            pick question tile n
  a<n>            pick answer tile n
  new             start a new round
  reset           reset stats and replay this board
  subject <name>  switch subject and start a new round
  subjects        list available subjects
  help            show this help
  quit            leave the game";

/// A line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Select { kind: CardKind, index: usize },
    NewRound,
    Reset,
    Subject(String),
    Subjects,
    Help,
    Quit,
}

/// Parse one input line. Tile numbers are 1-based.
pub fn parse_command(line: &str) -> Option<PlayCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "new" => Some(PlayCommand::NewRound),
        "reset" => Some(PlayCommand::Reset),
        "subjects" => Some(PlayCommand::Subjects),
        "help" | "?" => Some(PlayCommand::Help),
        "quit" | "exit" | "q" => Some(PlayCommand::Quit),
        "subject" if !rest.is_empty() => Some(PlayCommand::Subject(rest.to_string())),
        other => {
            let kind = match other.chars().next()? {
                'q' => CardKind::Question,
                'a' => CardKind::Answer,
                _ => return None,
            };
            let index = other[1..].parse::<usize>().ok()?.checked_sub(1)?;
            rest.is_empty().then_some(PlayCommand::Select { kind, index })
        }
    }
}

fn redraw<C, S>(engine: &MatchEngine<C, S>)
where
    C: tile_match_core::Clock,
    S: tile_match_core::KeyValueStore,
{
    print!("\x1b[2J\x1b[H{}", render_game(&engine.view()));
}

pub async fn run(store: SqliteStore, config: GameConfig, subject: Option<String>) -> anyhow::Result<()> {
    let (tx, mut wakeups) = mpsc::unbounded_channel();
    let mut engine = MatchEngine::new(config, TokioClock::new(tx), store);
    engine.handle(Event::NewRound { subject });
    redraw(&engine);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let Some(command) = parse_command(&line) else {
                    println!("Unknown command, type 'help' for a list.");
                    continue;
                };

                let event = match command {
                    PlayCommand::Quit => break,
                    PlayCommand::Help => {
                        println!("{HELP}");
                        continue;
                    }
                    PlayCommand::Subjects => {
                        println!("Subjects: {}", engine.registry().subjects().join(", "));
                        continue;
                    }
                    PlayCommand::NewRound => Event::NewRound { subject: None },
                    PlayCommand::Reset => Event::ResetStats,
                    PlayCommand::Subject(subject) => Event::ChangeSubject { subject },
                    PlayCommand::Select { kind, index } => match engine.board().at(kind, index) {
                        Some(card) => Event::Select { card_id: card.id, kind },
                        None => {
                            println!("No {} tile number {}.", kind.as_str(), index + 1);
                            continue;
                        }
                    },
                };

                if engine.handle(event) != Outcome::Ignored {
                    redraw(&engine);
                }
            }
            Some(wakeup) = wakeups.recv() => {
                match engine.handle(Event::Wakeup(wakeup)) {
                    Outcome::Ignored | Outcome::Ticked => {}
                    _ => redraw(&engine),
                }
            }
        }
    }

    tracing::debug!(subject = engine.subject(), "leaving game");
    Ok(())
}
