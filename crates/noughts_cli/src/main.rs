//! Noughts - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{EngineConfig, Game};
use noughts_cli::{Cli, Command, replay, session, settings};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = settings::load_config(cli.config, cli.strict, settings::config_from_env())?;

    match cli.command {
        Command::Play => run_play(config),
        Command::Replay { moves, file, json } => run_replay(config, moves, file, json),
    }
}

/// Run an interactive game on stdin/stdout.
fn run_play(config: EngineConfig) -> Result<()> {
    info!(?config, "Starting interactive game");
    let mut game = Game::with_config(config);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let outcome = session::play(&mut game, stdin.lock(), &mut stdout)
        .context("Interactive session failed")?;

    info!(%outcome, moves = game.history().len(), "Session ended");
    Ok(())
}

/// Replay moves from a file and/or arguments.
fn run_replay(
    config: EngineConfig,
    moves: Vec<String>,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let requests = replay::collect_requests(file.as_deref(), &moves)?;
    let report = replay::run(config, &requests);

    let mut stdout = std::io::stdout().lock();
    if json {
        let summary = replay::summarize(&report.game, report.steps);
        replay::write_json(&mut stdout, &summary)?;
    } else {
        replay::write_text(&mut stdout, &report.game, &report.steps)?;
    }

    report.result.context("Replay stopped")?;
    Ok(())
}
