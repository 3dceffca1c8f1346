//! Render consistency invariant: the rendered board reflects the history.

use super::super::{EMPTY_LABEL, Game, LINE_SEPARATOR};
use super::Invariant;

/// Invariant: The render is 3 rows of 3 characters and shows one mark per move.
pub struct RenderConsistentInvariant;

impl Invariant<Game> for RenderConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let render = game.render();
        let rows: Vec<&str> = render.split(LINE_SEPARATOR).collect();

        let shaped = rows.len() == 3
            && rows.iter().all(|row| {
                row.chars().count() == 3
                    && row.chars().all(|c| matches!(c, 'X' | 'O') || c == EMPTY_LABEL)
            });

        let marks = render
            .chars()
            .filter(|c| *c != EMPTY_LABEL && *c != LINE_SEPARATOR)
            .count();

        shaped && marks == game.history().len()
    }

    fn description() -> &'static str {
        "Rendered board is 3x3 with one mark per recorded move"
    }
}
