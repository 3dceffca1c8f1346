//! Engine configuration resolution for the command line.

use anyhow::{Context, Result};
use noughts::{EngineConfig, TerminalPolicy, TurnPolicy};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "NOUGHTS_CONFIG";

/// Reads `$NOUGHTS_CONFIG`.
pub fn config_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).map(PathBuf::from)
}

/// Resolves the engine config.
///
/// `path` (from `--config`) wins over `env_path`; with neither, the
/// permissive defaults apply. `strict` then forces `Reject` and
/// `Alternate` whatever the file said.
#[instrument]
pub fn load_config(
    path: Option<PathBuf>,
    strict: bool,
    env_path: Option<PathBuf>,
) -> Result<EngineConfig> {
    let config = match path.or(env_path) {
        Some(path) => EngineConfig::from_file(&path)
            .with_context(|| format!("Loading engine config from {}", path.display()))?,
        None => {
            debug!("No config file, using defaults");
            EngineConfig::default()
        }
    };

    Ok(if strict {
        config
            .with_terminal_policy(TerminalPolicy::Reject)
            .with_turn_policy(TurnPolicy::Alternate)
    } else {
        config
    })
}
