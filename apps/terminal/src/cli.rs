//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tile_match_core::MatchingMode;

#[derive(Debug, Parser)]
#[command(name = "tile-match", version, about = "Matching tiles, flashcards and custom decks")]
pub struct Cli {
    /// Directory holding the local store (defaults to the platform data dir)
    #[arg(long, global = true, env = "TILE_MATCH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play the tile matching game
    Play {
        /// Subject to play; unknown subjects fall back to math
        #[arg(short, long)]
        subject: Option<String>,

        /// Number of generated math pairs
        #[arg(short, long, default_value_t = 8)]
        pairs: usize,
    },

    /// Run the flashcard quiz
    Quiz {
        /// Accept typed answers that differ only in letter case
        #[arg(long, conflicts_with = "fuzzy")]
        ignore_case: bool,

        /// Accept typed answers with small typos
        #[arg(long)]
        fuzzy: bool,
    },

    /// List custom decks
    Decks,

    /// Import a custom deck from a text or JSON file
    Import {
        file: PathBuf,

        /// Subject used when the file does not name one
        #[arg(short, long)]
        subject: Option<String>,
    },

    /// Print a custom deck as JSON
    Export { subject: String },

    /// Delete a custom deck
    Delete { subject: String },

    /// Build a custom deck interactively
    Edit {
        /// Subject of the new deck
        subject: Option<String>,
    },

    /// Show best completion times
    BestTimes,
}

/// Answer matching selected by the quiz flags.
pub fn matching_mode(ignore_case: bool, fuzzy: bool) -> MatchingMode {
    if fuzzy {
        MatchingMode::Fuzzy
    } else if ignore_case {
        MatchingMode::CaseInsensitive
    } else {
        MatchingMode::Exact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn play_defaults() {
        let cli = Cli::try_parse_from(["tile-match", "play"]).unwrap();
        match cli.command {
            Command::Play { subject, pairs } => {
                assert_eq!(subject, None);
                assert_eq!(pairs, 8);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn quiz_matching_flags() {
        let cli = Cli::try_parse_from(["tile-match", "quiz", "--fuzzy"]).unwrap();
        let Command::Quiz { ignore_case, fuzzy } = cli.command else {
            panic!("expected quiz");
        };
        assert_eq!(matching_mode(ignore_case, fuzzy), MatchingMode::Fuzzy);
        assert_eq!(matching_mode(false, false), MatchingMode::Exact);
        assert_eq!(matching_mode(true, false), MatchingMode::CaseInsensitive);

        assert!(Cli::try_parse_from(["tile-match", "quiz", "--fuzzy", "--ignore-case"]).is_err());
    }

    #[test]
    fn global_data_dir() {
        let cli = Cli::try_parse_from(["tile-match", "decks", "--data-dir", "/tmp/tiles"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/tiles")));
    }
}
