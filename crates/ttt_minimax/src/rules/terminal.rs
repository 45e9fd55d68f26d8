//! Terminal detection and scoring.

use crate::rules::win::winner;
use crate::types::{Board, DRAW, O_WINS, Player, Square, Utility, X_WINS};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().all(|s| s != Square::Empty)
}

/// Returns true once the game is over: somebody won or no square is left.
#[instrument(level = "trace")]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a board from X's point of view.
///
/// Only meaningful on terminal boards; a game still in progress scores as a
/// draw.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    }
}
