//! Batch replay of scripted moves.

use crate::notation::{MoveRequest, parse_script};
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use noughts::{EngineConfig, Game, Move, MoveError, Outcome};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

/// One accepted move and the outcome it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// The move as applied.
    #[serde(rename = "move")]
    pub mov: Move,
    /// Outcome right after the move.
    pub outcome: Outcome,
}

/// Final state of a replay, as printed by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Rendered board.
    pub board: String,
    /// Final outcome.
    pub outcome: Outcome,
    /// Accepted moves in order.
    pub steps: Vec<Step>,
    /// Configuration the game ran under.
    pub config: EngineConfig,
}

/// A scripted move the engine refused.
#[derive(Debug, Clone, Display, Error)]
#[display("Move {} ({}) rejected: {}", number, request, source)]
pub struct ReplayError {
    /// 1-based position of the move in the script.
    pub number: usize,
    /// The rejected request.
    pub request: MoveRequest,
    /// Engine error.
    pub source: MoveError,
}

/// Applies `requests` to `game` in order, stopping at the first rejection.
///
/// Accepted moves are appended to `steps`, so a caller still sees the
/// partial replay when an error comes back.
#[instrument(skip_all, fields(count = requests.len()))]
pub fn apply(
    game: &mut Game,
    requests: &[MoveRequest],
    steps: &mut Vec<Step>,
) -> Result<(), ReplayError> {
    for (i, request) in requests.iter().enumerate() {
        let player = request.player_for(game);
        let outcome = game
            .make_move(player, request.row, request.col)
            .map_err(|source| ReplayError {
                number: i + 1,
                request: *request,
                source,
            })?;
        steps.extend(game.history().last().map(|mov| Step { mov: *mov, outcome }));
    }
    info!(outcome = %game.outcome(), "Replay complete");
    Ok(())
}

/// Result of running a whole script through a fresh game.
#[derive(Debug)]
pub struct Report {
    /// Game after the last accepted move.
    pub game: Game,
    /// Accepted moves in order.
    pub steps: Vec<Step>,
    /// The first rejection, if any.
    pub result: Result<(), ReplayError>,
}

/// Reads and parses a move script.
#[instrument]
pub fn read_script(path: &Path) -> Result<Vec<MoveRequest>> {
    let script = std::fs::read_to_string(path)
        .with_context(|| format!("Reading moves from {}", path.display()))?;
    Ok(parse_script(&script)?)
}

/// Gathers moves from `file` first, then from `moves`.
///
/// # Errors
///
/// Fails on an unreadable file, bad notation, or when no moves are given.
#[instrument(skip(moves), fields(args = moves.len()))]
pub fn collect_requests(file: Option<&Path>, moves: &[String]) -> Result<Vec<MoveRequest>> {
    let mut requests = match file {
        Some(path) => read_script(path)?,
        None => Vec::new(),
    };
    for text in moves {
        requests.push(text.parse::<MoveRequest>()?);
    }
    anyhow::ensure!(!requests.is_empty(), "No moves given");
    Ok(requests)
}

/// Replays `requests` on a new game built from `config`.
pub fn run(config: EngineConfig, requests: &[MoveRequest]) -> Report {
    let mut game = Game::with_config(config);
    let mut steps = Vec::with_capacity(requests.len());
    let result = apply(&mut game, requests, &mut steps);
    Report {
        game,
        steps,
        result,
    }
}

/// Builds the summary of `game` after `steps`.
pub fn summarize(game: &Game, steps: Vec<Step>) -> Summary {
    Summary {
        board: game.render(),
        outcome: game.outcome(),
        steps,
        config: *game.config(),
    }
}

/// Writes `steps` and the final board as text.
pub fn write_text<W: Write>(out: &mut W, game: &Game, steps: &[Step]) -> std::io::Result<()> {
    for (i, step) in steps.iter().enumerate() {
        writeln!(out, "{:>2}. {} => {}", i + 1, step.mov, step.outcome)?;
    }
    writeln!(out, "{}", game.render())?;
    writeln!(out, "{}", game.outcome())
}

/// Writes the JSON summary.
pub fn write_json<W: Write>(out: &mut W, summary: &Summary) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)
}
