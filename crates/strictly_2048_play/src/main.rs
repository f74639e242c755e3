//! Strictly 2048 - terminal front end
//!
//! Plays the game on stdin/stdout and keeps the best score in a JSON file.

#![warn(missing_docs)]

mod cli;
mod config;
mod file_store;
mod input;
mod session;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use config::PlayConfig;
use file_store::JsonFileStore;
use strictly_2048::{Game, MemoryStore, load_best};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load(cli.config.as_deref())?.with_overrides(cli.best_file, cli.seed);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { moves } => run_replay(&config, &moves),
        Command::Best => run_best(&config),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &PlayConfig) -> Result<()> {
    let store = JsonFileStore::new(config.best_score_path());
    info!(path = %store.path().display(), seed = ?config.seed(), "Starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let state = match config.seed() {
        Some(seed) => session::run(&mut Game::seeded(*seed, store), stdin.lock(), stdout.lock()),
        None => session::run(&mut Game::from_entropy(store), stdin.lock(), stdout.lock()),
    }
    .context("Terminal I/O failed")?;

    info!(score = state.score(), best = state.best(), "Session ended");
    Ok(())
}

/// Replay moves on a seeded game and print the result
#[instrument(skip(config))]
fn run_replay(config: &PlayConfig, moves: &str) -> Result<()> {
    let Some(seed) = *config.seed() else {
        bail!("Replay needs a seed: pass --seed or set `seed` in the config file");
    };
    let moves = input::parse_moves(moves)?;

    let state = Game::seeded(seed, MemoryStore::new()).replay(&moves);
    println!("{}", serde_json::to_string_pretty(&state)?);
    println!("{}", state.board().display());

    let summary = state.summary();
    println!(
        "{}: score {}, highest tile {}, {} of {} moves accepted",
        summary.status(),
        summary.score(),
        summary.highest_tile(),
        summary.moves(),
        moves.len()
    );
    Ok(())
}

/// Print the stored best score
#[instrument(skip(config))]
fn run_best(config: &PlayConfig) -> Result<()> {
    let store = JsonFileStore::new(config.best_score_path());
    println!("{}", load_best(&store));
    Ok(())
}
