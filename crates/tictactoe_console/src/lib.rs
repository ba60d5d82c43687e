//! Console driver for two-player tic-tac-toe.
//!
//! Everything here is I/O glue around [`tictactoe_core`]: command-line
//! parsing, the optional TOML config, the [`Console`] collaborator and the
//! play-again loop in [`run_session`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, PlayerConfig, SessionConfig};
pub use console::{Console, LineConsole};
pub use session::{RoundOutcome, SessionSummary, parse_index, play_round, run_session};
