//! Board coordinates.

use super::action::InvalidMove;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest valid row or column.
pub const MIN_COORD: i32 = 1;

/// Largest valid row or column.
pub const MAX_COORD: i32 = 3;

/// A cell on the board, addressed by 1-based `(row, col)`.
///
/// A `Position` is always in bounds: the only way to build one from raw
/// integers is [`Position::new`], which rejects anything outside `[1, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(u8, u8)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Top-left (1, 1).
    pub const TOP_LEFT: Position = Position { row: 1, col: 1 };
    /// Top-center (1, 2).
    pub const TOP_CENTER: Position = Position { row: 1, col: 2 };
    /// Top-right (1, 3).
    pub const TOP_RIGHT: Position = Position { row: 1, col: 3 };
    /// Middle-left (2, 1).
    pub const MIDDLE_LEFT: Position = Position { row: 2, col: 1 };
    /// Center (2, 2).
    pub const CENTER: Position = Position { row: 2, col: 2 };
    /// Middle-right (2, 3).
    pub const MIDDLE_RIGHT: Position = Position { row: 2, col: 3 };
    /// Bottom-left (3, 1).
    pub const BOTTOM_LEFT: Position = Position { row: 3, col: 1 };
    /// Bottom-center (3, 2).
    pub const BOTTOM_CENTER: Position = Position { row: 3, col: 2 };
    /// Bottom-right (3, 3).
    pub const BOTTOM_RIGHT: Position = Position { row: 3, col: 3 };

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TOP_LEFT,
        Position::TOP_CENTER,
        Position::TOP_RIGHT,
        Position::MIDDLE_LEFT,
        Position::CENTER,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ];

    /// Validates raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfBounds`] if either coordinate is outside `[1, 3]`.
    #[instrument]
    pub fn new(row: i32, col: i32) -> Result<Self, InvalidMove> {
        let in_range = |v: i32| (MIN_COORD..=MAX_COORD).contains(&v);
        if in_range(row) && in_range(col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(InvalidMove::OutOfBounds { row, col })
        }
    }

    /// Row, 1 to 3.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column, 1 to 3.
    pub fn col(self) -> u8 {
        self.col
    }

    /// `(row, col)` pair.
    pub fn coords(self) -> (u8, u8) {
        (self.row, self.col)
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.row - 1) * 3 + usize::from(self.col - 1)
    }
}

impl TryFrom<(i32, i32)> for Position {
    type Error = InvalidMove;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        pos.coords()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
