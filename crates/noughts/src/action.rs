//! First-class move and error types.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated independently of execution.

use super::{Outcome, Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Which precondition rejected a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// Row or column outside `[1, 3]`.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The square is already taken.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
}

/// Error returned when a move is rejected.
///
/// Under the default engine configuration `InvalidMove` is the only
/// variant a caller will see; the others come from opt-in policies.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Bounds or occupancy check failed.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),

    /// The game already reached a terminal outcome.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The same player tried to move twice in a row.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<InvalidMove> for MoveError {
    fn from(reason: InvalidMove) -> Self {
        MoveError::InvalidMove(reason)
    }
}

impl MoveError {
    /// Returns the bounds/occupancy detail when this is an `InvalidMove`.
    pub fn invalid_move(&self) -> Option<InvalidMove> {
        match self {
            MoveError::InvalidMove(reason) => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MoveError::from(InvalidMove::OutOfBounds { row: 4, col: 1 });
        assert_eq!(err.to_string(), "Invalid move: (4, 1) is off the board");

        let err = MoveError::from(InvalidMove::Occupied(Position::CENTER));
        assert_eq!(
            err.to_string(),
            "Invalid move: Square (2, 2) is already occupied"
        );

        assert_eq!(
            MoveError::GameOver(Outcome::PlayerXWon).to_string(),
            "Game is already over (PlayerXWon)"
        );
        assert_eq!(
            MoveError::WrongPlayer(Player::O).to_string(),
            "It's not O's turn"
        );
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Player::X, Position::TOP_RIGHT);
        assert_eq!(mv.to_string(), "X -> (1, 3)");
        assert_eq!(mv.player(), Player::X);
        assert_eq!(mv.position(), Position::TOP_RIGHT);
    }
}
