//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The game-theoretic value of a board from X's point of view.
pub type Utility = i32;

/// Utility of a board won by X.
pub const X_WINS: Utility = 1;
/// Utility of a board won by O.
pub const O_WINS: Utility = -1;
/// Utility of a drawn (or non-terminal) board.
pub const DRAW: Utility = 0;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first, maximizes).
    X,
    /// Player O (goes second, minimizes).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player's mark.
    Occupied(Player),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A coordinate selecting a cell to mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Getters,
    derive_new::new,
)]
pub struct Action {
    /// Row index, 0 at the top.
    row: usize,
    /// Column index, 0 at the left.
    col: usize,
}

impl Action {
    /// All nine cells in row-major order.
    pub const ALL: [Action; 9] = [
        Action { row: 0, col: 0 },
        Action { row: 0, col: 1 },
        Action { row: 0, col: 2 },
        Action { row: 1, col: 0 },
        Action { row: 1, col: 1 },
        Action { row: 1, col: 2 },
        Action { row: 2, col: 0 },
        Action { row: 2, col: 1 },
        Action { row: 2, col: 2 },
    ];

    /// Returns true if both coordinates lie on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < Board::SIZE && self.col < Board::SIZE
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition in [`crate::apply`] builds a new
/// board and leaves its input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order.
    rows: [[Square; 3]; 3],
}

impl Board {
    /// Width and height of the board.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from its rows.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.rows
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Gets the square targeted by an action.
    pub fn at(&self, action: Action) -> Option<Square> {
        self.get(action.row, action.col)
    }

    /// Checks if the square at the given coordinate is empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Iterates over all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares()
            .filter(|s| *s == Square::Occupied(player))
            .count()
    }

    /// Counts the empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares().filter(|s| *s == Square::Empty).count()
    }

    /// Returns a copy of this board with one square replaced.
    ///
    /// Callers guarantee the action is in bounds.
    pub(crate) fn with(mut self, action: Action, square: Square) -> Self {
        self.rows[action.row][action.col] = square;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_parse_case_insensitive() {
        assert_eq!(Player::from_str("x").unwrap(), Player::X);
        assert_eq!(Player::from_str("O").unwrap(), Player::O);
        assert!(Player::from_str("Z").is_err());
    }

    #[test]
    fn test_action_all_is_row_major() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(*action.row(), i / 3);
            assert_eq!(*action.col(), i % 3);
        }
    }

    #[test]
    fn test_action_bounds() {
        assert!(Action::new(2, 2).in_bounds());
        assert!(!Action::new(3, 0).in_bounds());
        assert!(!Action::new(0, 3).in_bounds());
    }

    #[test]
    fn test_board_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(0, 0), Some(Square::Empty));
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn test_with_does_not_touch_original() {
        let board = Board::new();
        let next = board.with(Action::new(1, 1), Square::Occupied(Player::X));
        assert_eq!(board.empty_count(), 9);
        assert_eq!(next.count(Player::X), 1);
        assert_eq!(next.get(1, 1), Some(Square::Occupied(Player::X)));
    }
}
