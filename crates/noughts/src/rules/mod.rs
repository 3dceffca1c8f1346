//! Game rules.
//!
//! Pure functions for evaluating a board. Rules are separated from the
//! move history so contracts and invariants can compose them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, LineKind, winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// Wins are checked first; a full board with a completed line is a win,
/// not a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if board.occupied() == 0 {
        return Outcome::NotStarted;
    }
    if let Some(player) = winner(board) {
        return Outcome::won_by(player);
    }
    if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
