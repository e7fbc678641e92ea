//! History consistency invariant: snapshot index equals mark count.

use super::super::History;
use super::Invariant;

/// Invariant: snapshot `n` holds exactly `n` marks and the current move
/// points inside the history.
///
/// Implies `len(history) - 1` equals the mark count of the newest board.
pub struct HistoryConsistentInvariant;

impl Invariant<History> for HistoryConsistentInvariant {
    fn holds(history: &History) -> bool {
        let counts_match = history
            .boards()
            .iter()
            .enumerate()
            .all(|(n, board)| board.occupied_count() == n);

        counts_match && history.current_move() < history.boards().len()
    }

    fn description() -> &'static str {
        "Snapshot index matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameController, Player, Position};

    #[test]
    fn test_empty_history_holds() {
        assert!(HistoryConsistentInvariant::holds(&History::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let game = GameController::replay([0, 2, 1, 3, 5, 4, 6, 7, 8]);
        assert!(HistoryConsistentInvariant::holds(game.state()));
        assert_eq!(game.state().boards().len(), 10);
    }

    #[test]
    fn test_nonempty_first_snapshot_violates() {
        let history = History::from_parts(
            vec![Board::new().with_mark(Position::Center, Player::X)],
            0,
        );
        assert!(!HistoryConsistentInvariant::holds(&history));
    }

    #[test]
    fn test_dangling_current_move_violates() {
        let history = History::from_parts(vec![Board::new()], 1);
        assert!(!HistoryConsistentInvariant::holds(&history));
    }
}
