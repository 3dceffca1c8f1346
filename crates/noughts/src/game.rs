//! The game engine.

use super::action::{Move, MoveError};
use super::config::EngineConfig;
use super::contracts::{Contract, MoveContract};
use super::position::Position;
use super::rules;
use super::types::{Board, Outcome, Player, Square};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Grid game engine.
///
/// The move history is the only stored state; the board and the outcome
/// are derived from it on demand. Any player may move at any time unless
/// the [`EngineConfig`] says otherwise.
///
/// A `Game` has no interior synchronization. [`Game::make_move`] takes
/// `&mut self`, so sharing one across threads needs an outer `Mutex`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) history: Vec<Move>,
    config: EngineConfig,
}

impl Game {
    /// Creates a new game with the default (permissive) configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a new game with the given configuration.
    #[instrument]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            history: Vec::with_capacity(Position::ALL.len()),
            config,
        }
    }

    /// Builds a game by applying `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns the first move's error; later moves are not attempted.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move], config: EngineConfig) -> Result<Self, MoveError> {
        let mut game = Self::with_config(config);
        for mov in moves {
            game.play(*mov)?;
        }
        Ok(game)
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Moves in the order they were made.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Player occupying `pos`, if any.
    pub fn occupant(&self, pos: Position) -> Option<Player> {
        self.history
            .iter()
            .find(|mov| mov.position == pos)
            .map(|mov| mov.player)
    }

    /// Player who made the most recent move.
    pub fn last_mover(&self) -> Option<Player> {
        self.history.last().map(|mov| mov.player)
    }

    /// Board snapshot built from the history.
    pub fn board(&self) -> Board {
        let mut board = Board::new();
        for mov in &self.history {
            board.set(mov.position, Square::Occupied(mov.player));
        }
        board
    }

    /// Current outcome.
    #[instrument(skip(self))]
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board())
    }

    /// True once someone has won or the board is full.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Renders the board as `"---\n---\n---"`-shaped text.
    pub fn render(&self) -> String {
        self.board().render()
    }

    /// Positions claimed by `player`, in the order they were played.
    #[instrument(skip(self))]
    pub fn player_moves(&self, player: Player) -> Vec<Position> {
        self.history
            .iter()
            .filter(|mov| mov.player == player)
            .map(|mov| mov.position)
            .collect()
    }

    /// Unoccupied positions in row-major order.
    pub fn available_positions(&self) -> Vec<Position> {
        let board = self.board();
        Position::ALL
            .into_iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }

    /// Places `player`'s mark at `(row, col)` and returns the new outcome.
    ///
    /// # Errors
    ///
    /// - `MoveError::InvalidMove` if the coordinates are off the board or
    ///   the square is already occupied (bounds are checked first)
    /// - `MoveError::GameOver` after a win or draw under `TerminalPolicy::Reject`
    /// - `MoveError::WrongPlayer` for a repeated mover under `TurnPolicy::Alternate`
    ///
    /// A rejected move leaves the game unchanged.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn make_move(&mut self, player: Player, row: i32, col: i32) -> Result<Outcome, MoveError> {
        let position = Position::new(row, col).map_err(|reason| {
            warn!(%player, row, col, %reason, "Rejected move");
            MoveError::from(reason)
        })?;
        self.play(Move::new(player, position))
    }

    /// Applies an already-constructed move.
    ///
    /// # Errors
    ///
    /// Same as [`Game::make_move`], minus the bounds check.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn play(&mut self, mov: Move) -> Result<Outcome, MoveError> {
        if let Err(e) = MoveContract::pre(self, &mov) {
            warn!(%mov, error = %e, "Rejected move");
            return Err(e);
        }

        // Postconditions are only checked in debug builds.
        let before = cfg!(debug_assertions).then(|| self.clone());

        self.history.push(mov);

        if let Some(before) = before
            && let Err(e) = MoveContract::post(&before, self)
        {
            *self = before;
            return Err(e);
        }

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%mov, %outcome, "Game reached a terminal outcome");
        } else {
            debug!(%mov, %outcome, "Move accepted");
        }
        Ok(outcome)
    }
}
