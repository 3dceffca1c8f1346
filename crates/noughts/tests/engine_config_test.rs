//! Tests for engine configuration and policies.

use noughts::{EngineConfig, Game, MoveError, Outcome, Player, TerminalPolicy, TurnPolicy};
use std::io::Write;

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "terminal_policy = \"reject\"").unwrap();
    writeln!(file, "turn_policy = \"alternate\"").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.terminal_policy(), TerminalPolicy::Reject);
    assert_eq!(*config.turn_policy(), TurnPolicy::Alternate);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "terminal_policy = [").unwrap();

    let err = EngineConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_strict_game_plays_to_draw() {
    let mut game = Game::with_config(EngineConfig::strict());
    let moves = [
        (Player::X, 1, 1),
        (Player::O, 1, 2),
        (Player::X, 1, 3),
        (Player::O, 2, 2),
        (Player::X, 2, 1),
        (Player::O, 3, 1),
        (Player::X, 2, 3),
        (Player::O, 3, 3),
        (Player::X, 3, 2),
    ];
    let mut last = Outcome::NotStarted;
    for (player, row, col) in moves {
        last = game.make_move(player, row, col).unwrap();
    }
    assert_eq!(last, Outcome::Draw);
    assert_eq!(game.render(), "XOX\nXOX\nOXO");
    assert_eq!(
        game.make_move(Player::O, 2, 2),
        Err(MoveError::InvalidMove(noughts::InvalidMove::Occupied(
            noughts::Position::CENTER
        )))
    );
}

#[test]
fn test_terminal_policy_reject_after_draw() {
    let config = EngineConfig::default().with_terminal_policy(TerminalPolicy::Reject);
    let mut game = Game::with_config(config);
    for (player, row, col) in [
        (Player::X, 1, 1),
        (Player::O, 1, 2),
        (Player::X, 1, 3),
        (Player::O, 2, 1),
        (Player::X, 2, 2),
        (Player::X, 2, 3),
        (Player::O, 3, 1),
        (Player::X, 3, 2),
    ] {
        game.make_move(player, row, col).unwrap();
    }
    assert_eq!(game.make_move(Player::O, 3, 3), Ok(Outcome::Draw));
    // Board is full, so occupancy fails before the terminal check.
    assert!(matches!(
        game.make_move(Player::O, 3, 3),
        Err(MoveError::InvalidMove(_))
    ));
}

#[test]
fn test_turn_policy_allows_either_first_mover() {
    for first in [Player::X, Player::O] {
        let config = EngineConfig::default().with_turn_policy(TurnPolicy::Alternate);
        let mut game = Game::with_config(config);
        game.make_move(first, 2, 2).unwrap();
        assert_eq!(
            game.make_move(first, 1, 1),
            Err(MoveError::WrongPlayer(first))
        );
        assert!(game.make_move(first.opponent(), 1, 1).is_ok());
    }
}
