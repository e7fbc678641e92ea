//! Move and rejection types.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a `play` or `jump_to` request was not applied.
///
/// The plain controller operations swallow these; the `try_` variants
/// return them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square index is not on the board.
    #[display("Square index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The requested history index does not exist.
    #[display("Move #{} does not exist (history has {} entries)", requested, len)]
    MoveOutOfRange {
        /// Requested move number.
        requested: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for MoveError {}
