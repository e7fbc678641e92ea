//! Tic-tac-toe with move history and time-travel.
//!
//! The game is a reducer over an append-only log of board snapshots:
//!
//! - [`History`] holds every board since the start and a pointer to the
//!   active one. Turn and [`Outcome`] are derived from it on demand.
//! - [`GameController`] is the only writer, exposing `play`, `jump_to` and
//!   `reset`, and notifies [`GameObserver`]s after each change.
//! - [`rules`] holds the pure win/draw checks.
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameController, Outcome, Player};
//!
//! let mut game = GameController::replay([0, 4, 1, 5, 2]);
//! assert_eq!(game.outcome(), Outcome::Won(Player::X));
//!
//! game.jump_to(2);
//! game.play(3);
//! assert_eq!(game.state().boards().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod observer;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::GameController;
pub use history::{History, MoveEntry, describe_move};
pub use observer::{GameEvent, GameObserver};
pub use position::Position;
pub use types::{Board, Outcome, Player, Square};
