//! Legal moves and state transitions.

use crate::error::{InvalidActionError, InvalidActionKind};
use crate::rules::terminal::is_terminal;
use crate::rules::turn::current_player;
use crate::types::{Action, Board, Square};
use tracing::instrument;

/// Returns every empty square, in row-major order.
///
/// A finished game has no legal actions, so terminal boards yield an empty
/// list even when squares remain open.
#[instrument(level = "trace")]
pub fn legal_actions(board: &Board) -> Vec<Action> {
    if is_terminal(board) {
        return Vec::new();
    }

    Action::ALL
        .iter()
        .copied()
        .filter(|a| board.at(*a) == Some(Square::Empty))
        .collect()
}

/// Plays `action` for the player to move and returns the resulting board.
///
/// The input board is left unchanged.
///
/// # Errors
///
/// Returns [`InvalidActionError`] if the game is already over, the
/// coordinate is off the board, or the square is occupied.
#[instrument(level = "trace")]
pub fn apply(board: &Board, action: Action) -> Result<Board, InvalidActionError> {
    if is_terminal(board) {
        return Err(InvalidActionError::new(InvalidActionKind::GameOver));
    }

    match board.at(action) {
        None => Err(InvalidActionError::new(InvalidActionKind::OutOfBounds(
            action,
        ))),
        Some(Square::Occupied(_)) => Err(InvalidActionError::new(InvalidActionKind::Occupied(
            action,
        ))),
        Some(Square::Empty) => {
            let mark = Square::Occupied(current_player(board));
            Ok(board.with(action, mark))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_all_actions_legal_on_empty_board() {
        let actions = legal_actions(&Board::new());
        assert_eq!(actions, Action::ALL.to_vec());
    }

    #[test]
    fn test_legal_actions_filters_occupied() {
        let board: Board = "X../.O./...".parse().unwrap();
        let actions = legal_actions(&board);
        assert_eq!(actions.len(), 7);
        assert!(!actions.contains(&Action::new(0, 0)));
        assert!(!actions.contains(&Action::new(1, 1)));
        assert!(actions.contains(&Action::new(2, 2)));
    }

    #[test]
    fn test_no_legal_actions_after_win() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(legal_actions(&board).is_empty());
    }

    #[test]
    fn test_apply_places_current_player() {
        let board = Board::new();
        let next = apply(&board, Action::new(1, 1)).unwrap();
        assert_eq!(next.get(1, 1), Some(Square::Occupied(Player::X)));

        let after = apply(&next, Action::new(0, 0)).unwrap();
        assert_eq!(after.get(0, 0), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let board = Board::new();
        let _ = apply(&board, Action::new(0, 2)).unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_occupied_square() {
        let board: Board = "X../.../...".parse().unwrap();
        let err = apply(&board, Action::new(0, 0)).unwrap_err();
        assert_eq!(err.kind, InvalidActionKind::Occupied(Action::new(0, 0)));
    }

    #[test]
    fn test_apply_out_of_bounds() {
        let err = apply(&Board::new(), Action::new(0, 3)).unwrap_err();
        assert_eq!(err.kind, InvalidActionKind::OutOfBounds(Action::new(0, 3)));
    }

    #[test]
    fn test_apply_on_finished_game() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let err = apply(&board, Action::new(2, 2)).unwrap_err();
        assert_eq!(err.kind, InvalidActionKind::GameOver);
    }

    #[test]
    fn test_error_records_location() {
        let err = apply(&Board::new(), Action::new(5, 5)).unwrap_err();
        assert!(err.file.ends_with("moves.rs"));
        assert!(err.to_string().starts_with("Invalid action: (5, 5) is off the board"));
    }
}
