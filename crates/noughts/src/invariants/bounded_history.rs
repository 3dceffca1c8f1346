//! Bounded history invariant: at most nine moves are ever recorded.

use super::super::{Game, Position};
use super::Invariant;

/// Invariant: The history never exceeds the number of squares.
pub struct BoundedHistoryInvariant;

impl Invariant<Game> for BoundedHistoryInvariant {
    fn holds(game: &Game) -> bool {
        game.history().len() <= Position::ALL.len()
    }

    fn description() -> &'static str {
        "History holds at most 9 moves"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player};

    #[test]
    fn test_full_game_holds() {
        let mut game = Game::new();
        for pos in Position::ALL {
            game.make_move(Player::X, pos.row().into(), pos.col().into())
                .unwrap();
        }
        assert_eq!(game.history().len(), 9);
        assert!(BoundedHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_tenth_entry_violates() {
        let mut game = Game::new();
        for pos in Position::ALL {
            game.history.push(Move::new(Player::O, pos));
        }
        game.history.push(Move::new(Player::X, Position::CENTER));
        assert!(!BoundedHistoryInvariant::holds(&game));
    }
}
