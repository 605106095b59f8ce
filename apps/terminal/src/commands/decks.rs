//! Custom deck and best-time management commands.

use anyhow::{bail, Context};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tile_match_core::storage;
use tile_match_core::{parse_deck, parse_deck_json, CustomDeck, DeckEditor, KeyValueStore, StoreError};

/// One line per custom deck.
pub fn list_decks<S: KeyValueStore>(store: &S) -> String {
    let decks = storage::load_custom_decks(store);
    if decks.is_empty() {
        return "No custom decks yet.".to_string();
    }
    decks
        .iter()
        .map(|d| format!("{} ({} pairs)", d.subject, d.pairs.len()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Import a deck file. JSON configs (as written by `export`) and the
/// `Q:`/`A:` text format are both accepted.
pub fn import_deck<S: KeyValueStore>(
    store: &mut S,
    path: &Path,
    subject: Option<&str>,
) -> anyhow::Result<CustomDeck> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_json = path.extension().is_some_and(|ext| ext == "json") || content.trim_start().starts_with('{');
    let mut deck = if is_json {
        parse_deck_json(&content)?
    } else {
        let fallback = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "imported".to_string());
        parse_deck(&content, &fallback)?
    };

    if let Some(subject) = subject {
        deck.subject = subject.to_string();
    }
    if deck.pairs.is_empty() {
        bail!("no pairs found in {}", path.display());
    }

    storage::upsert_custom_deck(store, deck.clone())?;
    tracing::info!(subject = %deck.subject, pairs = deck.pairs.len(), "imported deck");
    Ok(deck)
}

pub fn export_deck<S: KeyValueStore>(store: &S, subject: &str) -> anyhow::Result<String> {
    let deck = storage::load_custom_decks(store)
        .into_iter()
        .find(|d| d.subject == subject)
        .with_context(|| format!("no custom deck named {subject:?}"))?;
    Ok(DeckEditor::from_deck(deck).export_json())
}

pub fn delete_deck<S: KeyValueStore>(store: &mut S, subject: &str) -> anyhow::Result<()> {
    if !storage::delete_custom_deck(store, subject)? {
        bail!("no custom deck named {subject:?}");
    }
    Ok(())
}

pub fn best_times<S: KeyValueStore>(store: &S) -> String {
    let best = storage::load_best_times(store);
    if best.is_empty() {
        return "No completed rounds yet.".to_string();
    }
    best.iter()
        .map(|(subject, secs)| format!("{subject}: {secs}s"))
        .collect::<Vec<_>>()
        .join("\n")
}

const EDIT_HELP: &str = "\
Commands:
  add <question> = <answer>
  remove <n>
  subject <name>
  show        print the deck config
  reset       start over
  save        store the deck and quit
  quit        leave without saving";

/// Apply one editor line. Returns the reply and whether the session is over.
pub fn apply_edit_line<S: KeyValueStore>(
    editor: &mut DeckEditor,
    store: &mut S,
    line: &str,
) -> anyhow::Result<(String, bool)> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    let reply = match word {
        "add" => {
            let Some((question, answer)) = rest.split_once('=') else {
                return Ok(("Usage: add <question> = <answer>".to_string(), false));
            };
            match editor.add_pair(question, answer) {
                Ok(()) => format!("{} pairs.", editor.pairs().len()),
                Err(err) => err.to_string(),
            }
        }
        "remove" => match rest.trim().parse::<usize>() {
            Ok(n) if n > 0 => match editor.remove_pair(n - 1) {
                Ok(pair) => format!("Removed {} = {}.", pair.question, pair.answer),
                Err(err) => err.to_string(),
            },
            _ => "Usage: remove <n>".to_string(),
        },
        "subject" => {
            editor.set_subject(rest);
            format!("Subject: {}", editor.to_deck().subject)
        }
        "show" => editor.export_json(),
        "reset" => {
            editor.reset();
            "Editor cleared.".to_string()
        }
        "save" => {
            if editor.pairs().is_empty() {
                return Ok(("Add at least one pair before saving.".to_string(), false));
            }
            let deck = editor.to_deck();
            return match storage::upsert_custom_deck(store, deck.clone()) {
                Ok(_) => Ok((format!("Saved {} ({} pairs).", deck.subject, deck.pairs.len()), true)),
                Err(err @ StoreError::ReservedSubject { .. }) => Ok((err.to_string(), false)),
                Err(err) => Err(err.into()),
            };
        }
        "quit" | "exit" => return Ok(("Discarded.".to_string(), true)),
        "help" | "" => EDIT_HELP.to_string(),
        _ => format!("Unknown command {word:?}.\n{EDIT_HELP}"),
    };
    Ok((reply, false))
}

pub fn edit<S: KeyValueStore>(store: &mut S, subject: Option<&str>) -> anyhow::Result<()> {
    let mut editor = DeckEditor::new();
    if let Some(subject) = subject {
        editor.set_subject(subject);
    }
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{EDIT_HELP}")?;

    loop {
        write!(stdout, "edit> ")?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let (reply, done) = apply_edit_line(&mut editor, store, &line)?;
        writeln!(stdout, "{reply}")?;
        if done {
            break;
        }
    }
    Ok(())
}
