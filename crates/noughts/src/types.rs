//! Core domain types for the 3x3 grid game.

use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Separator between rendered board rows.
///
/// Fixed regardless of host platform so rendered boards compare equal everywhere.
pub const LINE_SEPARATOR: char = '\n';

/// Character rendered for an unplayed cell.
pub const EMPTY_LABEL: char = '-';

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character label used on the rendered board.
    pub fn label(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Parses a player from its label (case-insensitive).
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "X" | "x" => Some(Player::X),
            "O" | "o" => Some(Player::O),
            _ => None,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character rendered for this square.
    pub fn label(self) -> char {
        match self {
            Square::Empty => EMPTY_LABEL,
            Square::Occupied(player) => player.label(),
        }
    }
}

/// 3x3 board snapshot.
///
/// Boards are derived from a game's move history; they are never the
/// authoritative record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Renders the board as three rows of three characters.
    ///
    /// Rows run top to bottom, columns left to right, and rows are joined by
    /// [`LINE_SEPARATOR`] with no trailing separator.
    #[instrument(skip(self))]
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(11);
        for (i, row) in self.squares.chunks(3).enumerate() {
            if i > 0 {
                result.push(LINE_SEPARATOR);
            }
            result.extend(row.iter().map(|sq| sq.label()));
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Status of the game, derived from the move history.
///
/// `Display` yields the variant name verbatim (`PlayerXWon`, `Draw`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Outcome {
    /// No move has been made.
    NotStarted,
    /// Moves have been made and nobody has won yet.
    InProgress,
    /// X completed a line.
    PlayerXWon,
    /// O completed a line.
    PlayerOWon,
    /// All nine squares are filled without a line.
    Draw,
}

impl Outcome {
    /// Outcome for a win by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => Outcome::PlayerXWon,
            Player::O => Outcome::PlayerOWon,
        }
    }

    /// True for a win or a draw.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Outcome::PlayerXWon | Outcome::PlayerOWon | Outcome::Draw
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_empty_board_render() {
        assert_eq!(Board::new().render(), "---\n---\n---");
    }

    #[test]
    fn test_render_marks() {
        let mut board = Board::new();
        board.set(Position::TOP_LEFT, Square::Occupied(Player::O));
        board.set(Position::CENTER, Square::Occupied(Player::X));
        assert_eq!(board.to_string(), "O--\n-X-\n---");
        assert_eq!(board.occupied(), 2);
    }

    #[test]
    fn test_outcome_spelling() {
        let names: Vec<String> = Outcome::iter().map(|o| o.to_string()).collect();
        assert_eq!(
            names,
            ["NotStarted", "InProgress", "PlayerXWon", "PlayerOWon", "Draw"]
        );
    }

    #[test]
    fn test_outcome_terminal() {
        assert_eq!(Outcome::won_by(Player::X), Outcome::PlayerXWon);
        assert_eq!(Outcome::won_by(Player::O), Outcome::PlayerOWon);
        for player in Player::iter() {
            assert!(Outcome::won_by(player).is_terminal());
        }
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
        assert!(!Outcome::NotStarted.is_terminal());
    }

    #[test]
    fn test_player_labels() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::from_label("o"), Some(Player::O));
        assert_eq!(Player::from_label("Z"), None);
        assert_eq!(Player::O.label(), 'O');
    }
}
