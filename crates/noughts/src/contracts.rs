//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. Bounds are not a precondition here; a [`Move`] can
//! only hold an in-bounds [`Position`](super::Position).

use super::action::{InvalidMove, Move, MoveError};
use super::config::{TerminalPolicy, TurnPolicy};
use super::invariants::{GameInvariants, InvariantSet};
use super::Game;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `InvalidMove::Occupied` if the square is taken.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.occupant(mov.position).is_some() {
            Err(InvalidMove::Occupied(mov.position).into())
        } else {
            Ok(())
        }
    }
}

/// Precondition: The game has not ended, when the engine rejects late moves.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `MoveError::GameOver` under [`TerminalPolicy::Reject`].
    #[instrument(skip(game))]
    pub fn check(_mov: &Move, game: &Game) -> Result<(), MoveError> {
        if *game.config().terminal_policy() == TerminalPolicy::Permit {
            return Ok(());
        }
        let outcome = game.outcome();
        if outcome.is_terminal() {
            Err(MoveError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: Nobody moves twice in a row, when turns are enforced.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `MoveError::WrongPlayer` under [`TurnPolicy::Alternate`].
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if *game.config().turn_policy() == TurnPolicy::Free {
            return Ok(());
        }
        match game.last_mover() {
            Some(last) if last == mov.player => Err(MoveError::WrongPlayer(mov.player)),
            _ => Ok(()),
        }
    }
}

/// Composite precondition, checked in order: empty square, game not over, player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        CellIsEmpty::check(mov, game)?;
        GameNotOver::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - The history grew by exactly one move and kept its prefix
/// - Every invariant in [`GameInvariants`] holds
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        let prior = before.history();
        let extended = after.history().len() == prior.len() + 1
            && after.history().starts_with(prior);
        if !extended {
            warn!(
                before = prior.len(),
                after = after.history().len(),
                "History was not extended by a single move"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one move".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
