//! Application state and key handling.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use std::cell::Cell;
use std::rc::Rc;
use timetravel_tictactoe::{GameController, GameEvent, Position};
use tracing::{debug, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
///
/// Owns the controller; the UI redraws when the controller reports a change.
#[derive(Debug)]
pub struct App {
    game: GameController,
    cursor: Position,
    show_square_numbers: bool,
    dirty: Rc<Cell<bool>>,
}

impl App {
    /// Creates an application around a fresh game.
    #[instrument]
    pub fn new(show_square_numbers: bool) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let mut game = GameController::new();
        game.subscribe(move |event: &GameEvent| {
            debug!(?event, "Game changed");
            flag.set(true);
        });

        Self {
            game,
            cursor: Position::Center,
            show_square_numbers,
            dirty,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Square highlighted by the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty squares show their number.
    pub fn show_square_numbers(&self) -> bool {
        self.show_square_numbers
    }

    /// Returns true once after each change that needs a redraw.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Requests a redraw, e.g. after a terminal resize.
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Applies a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                self.mark_dirty();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.game.play(self.cursor.to_index()),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.game.play(digit as usize - 1);
                }
            }
            KeyCode::Char('[') | KeyCode::PageUp => {
                if let Some(previous) = self.game.state().current_move().checked_sub(1) {
                    self.game.jump_to(previous);
                }
            }
            KeyCode::Char(']') | KeyCode::PageDown => {
                let next = self.game.state().current_move() + 1;
                if next <= self.game.state().last_move() {
                    self.game.jump_to(next);
                }
            }
            KeyCode::Home => self.game.jump_to(0),
            KeyCode::End => self.game.jump_to(self.game.state().last_move()),
            KeyCode::Char('r') => self.game.reset(),
            _ => {}
        }
        AppAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_tictactoe::{Outcome, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), AppAction::Continue);
        }
    }

    #[test]
    fn test_digits_play_one_based_squares() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        let board = app.game().current_board();
        assert_eq!(board.get(Position::TopLeft).player(), Some(Player::X));
        assert_eq!(board.get(Position::Center).player(), Some(Player::O));
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            app.game().current_board().get(Position::TopLeft).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_brackets_travel_through_history() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('[')]);
        assert_eq!(app.game().state().current_move(), 1);
        press(&mut app, &[KeyCode::Char(']'), KeyCode::Char(']')]);
        assert_eq!(app.game().state().current_move(), 2);
        press(&mut app, &[KeyCode::Home]);
        assert_eq!(app.game().state().current_move(), 0);
        press(&mut app, &[KeyCode::Char('[')]);
        assert_eq!(app.game().state().current_move(), 0);
    }

    #[test]
    fn test_page_keys_and_end_travel_through_history() {
        let mut app = App::new(true);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);
        assert_eq!(app.game().state().current_move(), 3);

        // Already at the newest move: forward travel stays put.
        press(&mut app, &[KeyCode::Char(']')]);
        assert_eq!(app.game().state().current_move(), 3);
        press(&mut app, &[KeyCode::PageDown]);
        assert_eq!(app.game().state().current_move(), 3);

        press(&mut app, &[KeyCode::PageUp, KeyCode::PageUp]);
        assert_eq!(app.game().state().current_move(), 1);
        press(&mut app, &[KeyCode::PageDown]);
        assert_eq!(app.game().state().current_move(), 2);
        press(&mut app, &[KeyCode::Home]);
        press(&mut app, &[KeyCode::PageUp]);
        assert_eq!(app.game().state().current_move(), 0);
        press(&mut app, &[KeyCode::End]);
        assert_eq!(app.game().state().current_move(), 3);
        assert_eq!(app.game().state().boards().len(), 4);
    }

    #[test]
    fn test_reset_after_win() {
        let mut app = App::new(true);
        for c in ['1', '5', '2', '6', '3'] {
            press(&mut app, &[KeyCode::Char(c)]);
        }
        assert_eq!(app.game().outcome(), Outcome::Won(Player::X));
        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.game().state().boards().len(), 1);
    }

    #[test]
    fn test_dirty_flag_follows_game_events() {
        let mut app = App::new(true);
        assert!(app.take_dirty());
        assert!(!app.take_dirty());

        press(&mut app, &[KeyCode::Char('5')]);
        assert!(app.take_dirty());

        // Occupied square: no event, no redraw.
        press(&mut app, &[KeyCode::Char('5')]);
        assert!(!app.take_dirty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(false);
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }
}
