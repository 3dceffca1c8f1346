//! Unique positions invariant: a square, once taken, is never taken again.

use super::super::Game;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: No position appears twice in the move history.
pub struct UniquePositionsInvariant;

impl Invariant<Game> for UniquePositionsInvariant {
    fn holds(game: &Game) -> bool {
        let mut seen = HashSet::with_capacity(game.history().len());
        game.history().iter().all(|mov| seen.insert(mov.position))
    }

    fn description() -> &'static str {
        "Each position is recorded at most once"
    }
}
