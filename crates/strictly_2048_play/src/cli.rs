//! Command-line interface for strictly_2048_play.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly 2048 - the sliding-tile puzzle in your terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_2048")]
#[command(about = "Play 2048 in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to strictly_2048.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Where the best score is stored (overrides config)
    #[arg(long, global = true)]
    pub best_file: Option<PathBuf>,

    /// Seed for tile spawning (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively: w/a/s/d or up/left/down/right, r restarts, q quits
    Play,

    /// Replay a move list on a seeded game and print the final state as JSON
    Replay {
        /// Moves separated by commas or spaces, e.g. "left,up,up,right"
        moves: String,
    },

    /// Print the stored best score
    Best,
}
