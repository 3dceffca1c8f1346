//! Text notation for moves.
//!
//! A move is written `PLAYER,ROW,COL` (`X,1,3`), or with spaces
//! (`X 1 3`). The player may be left out (`1 3`), in which case the caller
//! picks one. Coordinates are parsed as plain integers and are not
//! bounds-checked here; the engine decides what is on the board.

use derive_more::{Display, Error};
use noughts::{Game, Player};
use std::str::FromStr;
use tracing::instrument;

/// A move as typed by a user, before the engine has validated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Explicit player, if given.
    pub player: Option<Player>,
    /// Requested row.
    pub row: i32,
    /// Requested column.
    pub col: i32,
}

impl MoveRequest {
    /// The explicit player, or the one [`suggested_player`] picks for `game`.
    pub fn player_for(&self, game: &Game) -> Player {
        self.player.unwrap_or_else(|| suggested_player(game))
    }
}

impl std::fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.player {
            Some(player) => write!(f, "{},{},{}", player, self.row, self.col),
            None => write!(f, "{},{}", self.row, self.col),
        }
    }
}

/// Opponent of the last mover; `X` opens.
pub fn suggested_player(game: &Game) -> Player {
    game.last_mover().map_or(Player::X, Player::opponent)
}

/// Move text that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Could not read move {:?}: {}", input, reason)]
pub struct NotationError {
    /// The offending text.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

impl NotationError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl FromStr for MoveRequest {
    type Err = NotationError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let (player, coords) = match parts.as_slice() {
            [p, rest @ ..] if rest.len() == 2 => {
                let player = Player::from_label(p)
                    .ok_or_else(|| NotationError::new(s, format!("unknown player {:?}", p)))?;
                (Some(player), rest)
            }
            coords @ [_, _] => (None, coords),
            _ => {
                return Err(NotationError::new(
                    s,
                    "expected PLAYER,ROW,COL or ROW COL",
                ));
            }
        };

        let number = |text: &str| {
            text.parse::<i32>()
                .map_err(|_| NotationError::new(s, format!("{:?} is not a number", text)))
        };

        Ok(Self {
            player,
            row: number(coords[0])?,
            col: number(coords[1])?,
        })
    }
}

/// Parses every move in a whitespace/newline separated script.
///
/// Tokens are `PLAYER,ROW,COL` without spaces. Blank lines and lines
/// starting with `#` are skipped.
#[instrument(skip(script))]
pub fn parse_script(script: &str) -> Result<Vec<MoveRequest>, NotationError> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(MoveRequest::from_str)
        .collect()
}
