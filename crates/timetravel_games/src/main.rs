//! timetravel - tic-tac-toe with move history and time-travel.

use anyhow::Result;
use clap::Parser;
use timetravel_games::{Cli, Command, Settings, render_game, run_replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play => {
            // Log to file so output does not interfere with the TUI
            let log_file = std::fs::File::create(settings.log_file())?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(&settings))
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .init();
            run_tui(&settings)
        }
        Command::Replay { moves, jump } => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(&settings))
                .with_writer(std::io::stderr)
                .init();
            info!(?moves, ?jump, "Replaying moves");
            let game = run_replay(&moves, jump);
            print!("{}", render_game(&game));
            Ok(())
        }
    }
}

/// `RUST_LOG` if set, else the configured filter.
fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}
