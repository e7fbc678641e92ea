//! Alternating turn invariant: X, O, X, O, ...

use super::super::{History, Player};
use super::Invariant;

/// Invariant: the mark added by snapshot `n` belongs to the player whose
/// turn it was after `n - 1` moves.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        (1..history.boards().len()).all(|n| {
            history
                .move_at(n)
                .is_some_and(|mov| mov.player == Player::for_move_number(n - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
