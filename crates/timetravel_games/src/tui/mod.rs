//! Terminal UI.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};
pub use input::move_cursor;
pub use ui::draw;

use crate::config::Settings;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// Logging must already be pointed away from stdout.
#[instrument(skip(settings))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(enter_terminal, restore_terminal)?;

    let mut app = App::new(*settings.show_square_numbers());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Switches stdout to the alternate screen and wraps it in a terminal.
fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves raw mode and the alternate screen.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `setup`; if it fails, runs `restore` before returning the setup error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().or_else(|err| {
        if let Err(restore_err) = restore() {
            error!(error = ?restore_err, "Failed to restore terminal");
        }
        Err(err)
    })
}

/// Event loop: redraw when the app is dirty, block on input otherwise.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        if app.take_dirty() {
            terminal.draw(|frame| draw(frame, app))?;
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code) == AppAction::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Resize(_, _) => app.mark_dirty(),
            _ => {}
        }
    }
}
