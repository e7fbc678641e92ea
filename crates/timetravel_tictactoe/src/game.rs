//! Game controller: the only way to change a game's history.

#[cfg(debug_assertions)]
use super::invariants::{HistoryInvariants, InvariantSet};
use super::observer::{GameEvent, GameObserver};
use super::{Board, History, Move, MoveEntry, MoveError, Outcome, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Owns a game's [`History`] and applies `play`, `jump_to` and `reset`.
///
/// `play` and `jump_to` ignore requests whose preconditions fail. Use
/// [`try_play`](Self::try_play) and [`try_jump_to`](Self::try_jump_to) to
/// learn why a request was ignored.
#[derive(Default)]
pub struct GameController {
    history: History,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameController {
    /// Creates a controller for a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays `indices` in order from a fresh game. Rejected indices are skipped.
    #[instrument(skip(indices))]
    pub fn replay(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut game = Self::new();
        for index in indices {
            game.play(index);
        }
        game
    }

    /// Read access to the game state.
    pub fn state(&self) -> &History {
        &self.history
    }

    /// The board at the current move.
    pub fn current_board(&self) -> &Board {
        self.history.current_board()
    }

    /// Player to move next.
    pub fn turn(&self) -> Player {
        self.history.turn()
    }

    /// Status of the current board.
    pub fn outcome(&self) -> Outcome {
        self.history.outcome()
    }

    /// Move list for display.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.history.move_list()
    }

    /// One-line status: winner, draw, or who moves next.
    pub fn status_line(&self) -> String {
        match self.outcome() {
            Outcome::Won(player) => format!("Winner: {}", player),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.turn()),
        }
    }

    /// Registers an observer notified after each accepted operation.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Places the current player's mark at square `index` (0-8).
    ///
    /// Does nothing if the index is off the board, the current board is
    /// already won, or the square is taken.
    #[instrument(skip(self), fields(current_move = self.history.current_move()))]
    pub fn play(&mut self, index: usize) {
        if let Err(e) = self.try_play(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Like [`play`](Self::play), but reports why a move was rejected.
    ///
    /// A drawn board is reported as [`MoveError::GameOver`].
    #[instrument(skip(self), fields(current_move = self.history.current_move()))]
    pub fn try_play(&mut self, index: usize) -> Result<(), MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let board = self.history.current_board();

        if self.history.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let mov = Move::new(self.history.turn(), position);
        let next = board.with_mark(position, mov.player);
        self.history.branch(next);

        #[cfg(debug_assertions)]
        if let Err(violations) = HistoryInvariants::check_all(&self.history) {
            debug_assert!(false, "History invariants violated: {:?}", violations);
        }

        let move_number = self.history.current_move();
        debug!(%mov, move_number, "Move applied");
        match self.history.outcome() {
            Outcome::Won(winner) => info!(%winner, move_number, "Game won"),
            Outcome::Draw => info!(move_number, "Game drawn"),
            Outcome::InProgress => {}
        }

        self.publish(GameEvent::Played { mov, move_number });
        Ok(())
    }

    /// Makes snapshot `move_number` current. Out-of-range requests are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) {
        if let Err(e) = self.try_jump_to(move_number) {
            warn!(error = %e, "Jump ignored");
        }
    }

    /// Like [`jump_to`](Self::jump_to), but reports an out-of-range request.
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, move_number: usize) -> Result<(), MoveError> {
        let len = self.history.boards().len();
        if move_number >= len {
            return Err(MoveError::MoveOutOfRange {
                requested: move_number,
                len,
            });
        }

        self.history.set_current(move_number);
        debug!(move_number, "Jumped");
        self.publish(GameEvent::Jumped { move_number });
        Ok(())
    }

    /// Discards the history and starts over from the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history = History::new();
        info!("Game reset");
        self.publish(GameEvent::Reset);
    }

    fn publish(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}
