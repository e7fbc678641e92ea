//! Change notifications for the presentation layer.

use super::Move;

/// Published by the controller after every accepted operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed; `move_number` is the new current move.
    Played {
        /// The move that was applied.
        mov: Move,
        /// Index of the new snapshot.
        move_number: usize,
    },
    /// The current move pointer changed.
    Jumped {
        /// Index of the now-active snapshot.
        move_number: usize,
    },
    /// The history was cleared back to the empty board.
    Reset,
}

/// Receives [`GameEvent`]s from a controller.
pub trait GameObserver {
    /// Called once per accepted operation, after the state has changed.
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}
