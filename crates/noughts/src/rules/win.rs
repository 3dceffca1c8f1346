//! Win detection.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Orientation of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum LineKind {
    /// Horizontal.
    Row,
    /// Vertical.
    Column,
    /// Corner to corner.
    Diagonal,
}

/// Three positions that win when held by one player.
pub type Line = [Position; 3];

/// The eight winning lines, grouped rows, columns, diagonals.
pub const LINES: [(LineKind, Line); 8] = [
    (
        LineKind::Row,
        [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    ),
    (
        LineKind::Row,
        [Position::MIDDLE_LEFT, Position::CENTER, Position::MIDDLE_RIGHT],
    ),
    (
        LineKind::Row,
        [
            Position::BOTTOM_LEFT,
            Position::BOTTOM_CENTER,
            Position::BOTTOM_RIGHT,
        ],
    ),
    (
        LineKind::Column,
        [Position::TOP_LEFT, Position::MIDDLE_LEFT, Position::BOTTOM_LEFT],
    ),
    (
        LineKind::Column,
        [Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER],
    ),
    (
        LineKind::Column,
        [
            Position::TOP_RIGHT,
            Position::MIDDLE_RIGHT,
            Position::BOTTOM_RIGHT,
        ],
    ),
    (
        LineKind::Diagonal,
        [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    ),
    (
        LineKind::Diagonal,
        [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
    ),
];

/// True if `player` holds every square of `line`.
pub fn holds_line(board: &Board, player: Player, line: &Line) -> bool {
    line.iter()
        .all(|pos| board.get(*pos) == Square::Occupied(player))
}

/// Checks if there is a winner on the board.
///
/// Groups are scanned rows, then columns, then diagonals. Inside a group X
/// is checked before O, so a board carrying lines for both players (only
/// reachable when play continues past a win) resolves the same way every
/// time.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    use strum::IntoEnumIterator;

    LineKind::iter().find_map(|kind| {
        [Player::X, Player::O].into_iter().find(|player| {
            LINES
                .iter()
                .filter(|(k, _)| *k == kind)
                .any(|(_, line)| holds_line(board, *player, line))
        })
    })
}
