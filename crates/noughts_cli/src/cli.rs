//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - strictly validated 3x3 grid game
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play or replay a 3x3 grid game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Engine config file (TOML). Falls back to $NOUGHTS_CONFIG.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject moves after the game ends and enforce alternating turns
    #[arg(long, global = true)]
    pub strict: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin, one move per line
    Play,

    /// Apply a scripted sequence of moves and report the outcome
    Replay {
        /// Moves such as `X,1,1` or `O,2,3`
        moves: Vec<String>,

        /// Read moves from a file (whitespace or newline separated)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },
}
