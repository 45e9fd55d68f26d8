//! Turn order, derived from the marks on the board.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Returns the player who moves next.
///
/// X always opens, so X is to move whenever both players have the same
/// number of marks; otherwise it is O's turn.
#[instrument(level = "trace")]
pub fn current_player(board: &Board) -> Player {
    let balance: i32 = board
        .squares()
        .map(|s| match s {
            Square::Occupied(Player::X) => 1,
            Square::Occupied(Player::O) => -1,
            Square::Empty => 0,
        })
        .sum();

    if balance == 0 { Player::X } else { Player::O }
}
