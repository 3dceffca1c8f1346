//! Engine configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// What to do with a move submitted after a win or draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TerminalPolicy {
    /// Accept the move and recompute the outcome.
    #[default]
    Permit,
    /// Refuse the move with `MoveError::GameOver`.
    Reject,
}

/// Whether the engine enforces alternating turns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TurnPolicy {
    /// Any player may move at any time.
    #[default]
    Free,
    /// After the first move, nobody may move twice in a row.
    Alternate,
}

/// Configuration for a game engine.
///
/// Missing keys fall back to the permissive defaults, so an empty TOML
/// document is a valid configuration. Unknown keys are an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Handling of moves after a terminal outcome.
    terminal_policy: TerminalPolicy,

    /// Turn enforcement.
    turn_policy: TurnPolicy,
}

impl EngineConfig {
    /// Creates a configuration with explicit policies.
    #[instrument]
    pub fn new(terminal_policy: TerminalPolicy, turn_policy: TurnPolicy) -> Self {
        Self {
            terminal_policy,
            turn_policy,
        }
    }

    /// Strict configuration: no moves after the game ends, turns alternate.
    pub fn strict() -> Self {
        Self::new(TerminalPolicy::Reject, TurnPolicy::Alternate)
    }

    /// Returns a copy with a different terminal policy.
    pub fn with_terminal_policy(mut self, policy: TerminalPolicy) -> Self {
        self.terminal_policy = policy;
        self
    }

    /// Returns a copy with a different turn policy.
    pub fn with_turn_policy(mut self, policy: TurnPolicy) -> Self {
        self.turn_policy = policy;
        self
    }

    /// Parses configuration from a TOML document.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;

        info!(
            terminal_policy = %config.terminal_policy,
            turn_policy = %config.turn_policy,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        let config = EngineConfig::default();
        assert_eq!(*config.terminal_policy(), TerminalPolicy::Permit);
        assert_eq!(*config.turn_policy(), TurnPolicy::Free);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml_str("terminal_policy = \"reject\"").unwrap();
        assert_eq!(*config.terminal_policy(), TerminalPolicy::Reject);
        assert_eq!(*config.turn_policy(), TurnPolicy::Free);
    }

    #[test]
    fn test_full_toml() {
        let config = EngineConfig::from_toml_str(
            "terminal_policy = \"reject\"\nturn_policy = \"alternate\"\n",
        )
        .unwrap();
        assert_eq!(config, EngineConfig::strict());
    }

    #[test]
    fn test_bad_policy_is_error() {
        let err = EngineConfig::from_toml_str("turn_policy = \"sometimes\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_misspelled_key_is_error() {
        let err = EngineConfig::from_toml_str("turn_polcy = \"alternate\"").unwrap_err();
        assert!(err.message.contains("turn_polcy"));
    }

    #[test]
    fn test_builder_methods() {
        let config = EngineConfig::default().with_turn_policy(TurnPolicy::Alternate);
        assert_eq!(*config.turn_policy(), TurnPolicy::Alternate);
        let config = config.with_terminal_policy(TerminalPolicy::Reject);
        assert_eq!(config, EngineConfig::strict());
    }
}
