//! Single-step invariant: each snapshot adds exactly one mark.

use super::super::{History, Square};
use super::Invariant;

/// Invariant: every snapshot after the first differs from its predecessor
/// in exactly one square, which goes from empty to a mark.
pub struct SingleStepInvariant;

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        history.boards().windows(2).all(|pair| {
            let mut changed = 0;
            for (before, after) in pair[0].squares().iter().zip(pair[1].squares()) {
                if before == after {
                    continue;
                }
                if *before != Square::Empty || *after == Square::Empty {
                    return false;
                }
                changed += 1;
            }
            changed == 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameController, Player, Position};

    #[test]
    fn test_played_game_holds() {
        let game = GameController::replay([4, 0, 8, 2]);
        assert!(SingleStepInvariant::holds(game.state()));
    }

    #[test]
    fn test_unchanged_snapshot_violates() {
        let history = History::from_parts(vec![Board::new(), Board::new()], 0);
        assert!(!SingleStepInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let overwritten = Board::new().with_mark(Position::Center, Player::O);
        let history = History::from_parts(vec![Board::new(), first, overwritten], 2);
        assert!(!SingleStepInvariant::holds(&history));
    }
}
