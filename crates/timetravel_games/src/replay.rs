//! Non-interactive replay: play a move list and print the result.

use timetravel_tictactoe::GameController;
use tracing::{info, instrument};

/// Plays `moves` from a fresh game, optionally jumps, and returns the controller.
#[instrument(skip(moves))]
pub fn run_replay(moves: &[usize], jump: Option<usize>) -> GameController {
    let mut game = GameController::replay(moves.iter().copied());
    if let Some(move_number) = jump {
        game.jump_to(move_number);
    }
    info!(
        snapshots = game.state().boards().len(),
        current_move = game.state().current_move(),
        "Replay finished"
    );
    game
}

/// Text rendering of a game: status line, board, then the move list.
///
/// The active move is marked with `>`.
pub fn render_game(game: &GameController) -> String {
    let mut lines = vec![
        game.status_line(),
        String::new(),
        game.current_board().to_string(),
        String::new(),
    ];
    lines.extend(game.move_list().into_iter().map(|entry| {
        let marker = if entry.is_current { '>' } else { ' ' };
        format!("{} {}. {}", marker, entry.move_number, entry.description)
    }));
    if game.outcome().is_terminal() {
        lines.push("  Game Over! Start Again!".to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_in_progress() {
        let game = run_replay(&[4], None);
        let text = render_game(&game);
        assert!(text.starts_with("Next player: O\n"));
        assert!(text.contains("1|2|3\n-+-+-\n4|X|6"));
        assert!(text.contains("  0. Game starts here\n> 1. Go to move #1\n"));
        assert!(!text.contains("Game Over"));
    }

    #[test]
    fn test_render_fresh_game_layout() {
        let game = run_replay(&[], None);
        assert_eq!(
            render_game(&game),
            "Next player: X\n\n1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\n> 0. Game starts here\n"
        );
    }

    #[test]
    fn test_render_won_game_offers_restart() {
        let game = run_replay(&[0, 4, 1, 5, 2], None);
        let text = render_game(&game);
        assert!(text.starts_with("Winner: X\n"));
        assert!(text.ends_with("Game Over! Start Again!\n"));
    }

    #[test]
    fn test_jump_moves_marker_but_keeps_list() {
        let game = run_replay(&[0, 4, 1], Some(1));
        let text = render_game(&game);
        assert!(text.contains("> 1. Go to move #1"));
        assert!(text.contains("  3. Go to move #3"));
        assert!(text.starts_with("Next player: O\n"));
    }
}
