//! Interactive play over a line-oriented reader.
//!
//! The engine never retries; this loop is where a rejected move turns into
//! a new prompt.

use crate::notation::{MoveRequest, suggested_player};
use noughts::{Game, Outcome};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Runs an interactive game until it ends or the input runs out.
///
/// Each line holds one move in [`notation`](crate::notation) form.
/// Unreadable lines and rejected moves are reported and re-prompted.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(game: &mut Game, input: R, out: &mut W) -> std::io::Result<Outcome> {
    writeln!(out, "{}", game.render())?;
    let mut lines = input.lines();

    while !game.is_over() {
        write!(out, "{} to move (row col): ", suggested_player(game))?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("Input closed");
            writeln!(out)?;
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let request: MoveRequest = match line.parse() {
            Ok(request) => request,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        let player = request.player_for(game);
        match game.make_move(player, request.row, request.col) {
            Ok(outcome) => {
                writeln!(out, "{}", game.render())?;
                if outcome.is_terminal() {
                    info!(%outcome, "Game over");
                    writeln!(out, "{}", outcome)?;
                }
            }
            Err(e) => {
                warn!(error = %e, "Move rejected, prompting again");
                writeln!(out, "{}. Try again.", e)?;
            }
        }
    }

    Ok(game.outcome())
}
