//! Noughts - a strictly validated 3x3 grid game engine.
//!
//! Two players, `X` and `O`, place marks on a 3x3 board. The engine
//! validates every move, keeps the move history in play order, and derives
//! the outcome after each move.
//!
//! # Architecture
//!
//! - **Game**: the engine; owns the move history
//! - **Rules**: pure win/draw evaluation over a [`Board`]
//! - **Contracts**: move preconditions and postconditions
//! - **Invariants**: properties checked after every move in debug builds
//! - **Config**: policies for late moves and turn order
//!
//! # Example
//!
//! ```
//! use noughts::{Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! game.make_move(Player::X, 1, 1)?;
//! game.make_move(Player::X, 2, 2)?;
//! assert_eq!(game.make_move(Player::X, 3, 3)?, Outcome::PlayerXWon);
//! assert_eq!(game.render(), "X--\n-X-\n--X");
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
pub mod contracts;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

// Crate-level exports - Moves and errors
pub use action::{InvalidMove, Move, MoveError};

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig, TerminalPolicy, TurnPolicy};

// Crate-level exports - Engine
pub use game::Game;

// Crate-level exports - Domain types
pub use position::{MAX_COORD, MIN_COORD, Position};
pub use types::{Board, EMPTY_LABEL, LINE_SEPARATOR, Outcome, Player, Square};
