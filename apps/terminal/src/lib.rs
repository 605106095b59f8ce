pub mod cli;
pub mod clock;
pub mod commands;
pub mod db;
pub mod render;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tile_match_core::GameConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{matching_mode, Cli, Command};
use crate::commands::{decks, play, quiz};
use crate::db::SqliteStore;

const STORE_FILE: &str = "store.db";

fn data_dir(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    let base = dirs::data_local_dir().context("could not determine a local data directory")?;
    Ok(base.join("tile-match"))
}

pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let path = data_dir(&cli)?.join(STORE_FILE);
    tracing::debug!(path = %path.display(), "opening store");
    let mut store = SqliteStore::open(&path)
        .with_context(|| format!("failed to open store at {}", path.display()))?;

    match cli.command {
        Command::Play { subject, pairs } => {
            let config = GameConfig {
                pair_count: pairs,
                ..GameConfig::default()
            };
            play::run(store, config, subject).await?;
        }
        Command::Quiz { ignore_case, fuzzy } => {
            quiz::run(store, matching_mode(ignore_case, fuzzy))?
        }
        Command::Decks => println!("{}", decks::list_decks(&store)),
        Command::Import { file, subject } => {
            let deck = decks::import_deck(&mut store, &file, subject.as_deref())?;
            println!("Imported {} ({} pairs).", deck.subject, deck.pairs.len());
        }
        Command::Export { subject } => println!("{}", decks::export_deck(&store, &subject)?),
        Command::Delete { subject } => {
            decks::delete_deck(&mut store, &subject)?;
            println!("Deleted {subject}.");
        }
        Command::Edit { subject } => decks::edit(&mut store, subject.as_deref())?,
        Command::BestTimes => println!("{}", decks::best_times(&store)),
    }

    Ok(())
}
