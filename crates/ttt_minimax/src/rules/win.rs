//! Win detection logic for tic-tac-toe.

use crate::types::{Action, Board, Player, Square};
use tracing::instrument;

/// The eight lines that win the game: rows, columns, then diagonals.
pub const LINES: [[Action; 3]; 8] = {
    const fn a(row: usize, col: usize) -> Action {
        Action::ALL[row * 3 + col]
    }
    [
        // Rows
        [a(0, 0), a(0, 1), a(0, 2)],
        [a(1, 0), a(1, 1), a(1, 2)],
        [a(2, 0), a(2, 1), a(2, 2)],
        // Columns
        [a(0, 0), a(1, 0), a(2, 0)],
        [a(0, 1), a(1, 1), a(2, 1)],
        [a(0, 2), a(1, 2), a(2, 2)],
        // Diagonals
        [a(0, 0), a(1, 1), a(2, 2)],
        [a(0, 2), a(1, 1), a(2, 0)],
    ]
};

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. A board with lines for both players is outside the
/// rules; the first line found wins.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let sq = board.at(*a)?;
        match sq {
            Square::Occupied(player) if board.at(*b) == Some(sq) && board.at(*c) == Some(sq) => {
                Some(player)
            }
            _ => None,
        }
    })
}
