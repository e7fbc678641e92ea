//! Snapshot history of a game.
//!
//! Every move appends a full board snapshot, so time-travel is a matter of
//! moving the current-move pointer. Snapshot `n` is the board after `n` moves.

use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::{Board, Move, Outcome, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Append-only log of board snapshots with a pointer to the active one.
///
/// Deserialization rejects any history that breaks the history invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    boards: Vec<Board>,
    current: usize,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct RawHistory {
    boards: Vec<Board>,
    current: usize,
}

impl TryFrom<RawHistory> for History {
    type Error = InvariantViolation;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.boards.is_empty() {
            return Err(InvariantViolation::new("History holds at least the empty board"));
        }

        let history = Self {
            boards: raw.boards,
            current: raw.current,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let description = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%description, "Rejected history");
            InvariantViolation::new(description)
        })?;
        Ok(history)
    }
}

/// One row of the move list shown next to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Index into the history.
    pub move_number: usize,
    /// Human-readable label.
    pub description: String,
    /// Whether this entry is the active snapshot.
    pub is_current: bool,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            current: 0,
        }
    }

    /// Builds a history from raw parts without validation.
    ///
    /// Used to exercise the invariant checks against corrupted histories.
    #[cfg(test)]
    pub(crate) fn from_parts(boards: Vec<Board>, current: usize) -> Self {
        Self { boards, current }
    }

    /// The board at the current move.
    pub fn current_board(&self) -> &Board {
        &self.boards[self.current]
    }

    /// Index of the active snapshot.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Player to move next, derived from the current move number.
    pub fn turn(&self) -> Player {
        Player::for_move_number(self.current)
    }

    /// Status of the current board, evaluated on every call.
    pub fn outcome(&self) -> Outcome {
        Outcome::of(self.current_board())
    }

    /// All snapshots, oldest first. Never empty.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Snapshot at `move_number`, if it exists.
    pub fn board_at(&self, move_number: usize) -> Option<&Board> {
        self.boards.get(move_number)
    }

    /// Index of the newest snapshot.
    pub fn last_move(&self) -> usize {
        self.boards.len() - 1
    }

    /// The move that produced snapshot `move_number`.
    ///
    /// Returns `None` for snapshot 0 and for indices past the end.
    pub fn move_at(&self, move_number: usize) -> Option<Move> {
        let before = self.boards.get(move_number.checked_sub(1)?)?;
        let after = self.boards.get(move_number)?;
        Position::ALL.into_iter().find_map(|pos| {
            match (before.get(pos).player(), after.get(pos).player()) {
                (None, Some(player)) => Some(Move::new(player, pos)),
                _ => None,
            }
        })
    }

    /// Entries for the move list, one per snapshot.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.boards.len())
            .map(|move_number| MoveEntry {
                move_number,
                description: describe_move(move_number),
                is_current: move_number == self.current,
            })
            .collect()
    }

    /// Drops snapshots after the current move, appends `board` and makes it current.
    pub(crate) fn branch(&mut self, board: Board) {
        self.boards.truncate(self.current + 1);
        self.boards.push(board);
        self.current = self.boards.len() - 1;
    }

    /// Points at an existing snapshot. Caller checks the bound.
    pub(crate) fn set_current(&mut self, move_number: usize) {
        debug_assert!(move_number < self.boards.len());
        self.current = move_number;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for a move-list entry.
pub fn describe_move(move_number: usize) -> String {
    if move_number > 0 {
        format!("Go to move #{}", move_number)
    } else {
        "Game starts here".to_string()
    }
}
