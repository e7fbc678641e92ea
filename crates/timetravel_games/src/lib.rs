//! Terminal front end for time-travel tic-tac-toe.
//!
//! Holds no game rules: every interaction goes through
//! [`timetravel_tictactoe::GameController`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings, DEFAULT_CONFIG_PATH};
pub use replay::{render_game, run_replay};
pub use tui::{App, AppAction, draw, move_cursor, run_tui};
