//! Command-line interface for timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "timetravel")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play a list of square indices (0-8) and print the result
    Replay {
        /// Square indices in play order; illegal moves are ignored
        moves: Vec<usize>,

        /// Jump to this move number after playing
        #[arg(short, long)]
        jump: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay_with_jump() {
        let cli = Cli::try_parse_from(["timetravel", "replay", "0", "4", "1", "--jump", "2"])
            .expect("valid arguments");
        assert_eq!(
            cli.command,
            Command::Replay {
                moves: vec![0, 4, 1],
                jump: Some(2),
            }
        );
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_parse_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["timetravel", "play", "--config", "custom.toml"])
            .expect("valid arguments");
        assert_eq!(cli.command, Command::Play);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_negative_index_is_rejected() {
        assert!(Cli::try_parse_from(["timetravel", "replay", "-1"]).is_err());
    }
}
