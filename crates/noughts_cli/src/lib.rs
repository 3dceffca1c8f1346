//! Command-line driver for the noughts engine.
//!
//! - **Notation**: parsing `X,1,3`-style move text
//! - **Session**: interactive play with re-prompting on rejected moves
//! - **Replay**: batch application of scripted moves with text or JSON output
//! - **Settings**: engine config from `--config`, `$NOUGHTS_CONFIG` and `--strict`

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod notation;
pub mod replay;
pub mod session;
pub mod settings;

pub use cli::{Cli, Command};
pub use notation::{MoveRequest, NotationError, parse_script, suggested_player};
pub use replay::{Report, ReplayError, Step, Summary};
pub use settings::{CONFIG_ENV, load_config};
