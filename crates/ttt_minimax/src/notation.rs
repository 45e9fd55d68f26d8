//! Text notation for boards and actions.
//!
//! A board is written as nine cells in row-major order: `X` or `O` for a
//! mark (either case) and `.`, `-` or `_` for an empty square. Rows may be
//! separated by `/`, `|` or whitespace, so `"X.O/.X./..O"` and
//! `"X.O .X. ..O"` describe the same board. An action is written as
//! `"row,col"` or `"row col"`.

use crate::error::NotationError;
use crate::types::{Action, Board, Player, Square};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

impl FromStr for Board {
    type Err = NotationError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(NotationError::new(format!(
                        "Unexpected character {:?} in board",
                        other
                    )));
                }
            };
            cells.push(square);
        }

        if cells.len() != 9 {
            return Err(NotationError::new(format!(
                "Board needs 9 squares, found {}",
                cells.len()
            )));
        }

        let mut rows = [[Square::Empty; 3]; 3];
        for (i, square) in cells.into_iter().enumerate() {
            rows[i / 3][i % 3] = square;
        }
        Ok(Board::from_rows(rows))
    }
}

fn cell_char(square: Square) -> char {
    match square {
        Square::Empty => '.',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for square in row {
                write!(f, "{}", cell_char(*square))?;
            }
        }
        Ok(())
    }
}

impl Board {
    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their `row,col` number so a player can pick one.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for (r, row) in self.rows().iter().enumerate() {
            for (c, square) in row.iter().enumerate() {
                match square {
                    Square::Empty => result.push_str(&format!("{r}{c}")),
                    Square::Occupied(p) => result.push_str(&format!(" {p}")),
                }
                if c < 2 {
                    result.push('|');
                }
            }
            if r < 2 {
                result.push_str("\n--+--+--\n");
            }
        }
        result
    }
}

impl FromStr for Action {
    type Err = NotationError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let [row, col] = parts.as_slice() else {
            return Err(NotationError::new(format!(
                "Expected \"row,col\", got {:?}",
                s
            )));
        };

        let parse = |part: &str| {
            part.parse::<usize>()
                .map_err(|e| NotationError::new(format!("Bad coordinate {:?}: {}", part, e)))
        };

        let action = Action::new(parse(*row)?, parse(*col)?);
        if !action.in_bounds() {
            return Err(NotationError::new(format!(
                "Coordinate {} is off the board",
                action
            )));
        }
        Ok(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_round_trip() {
        let text = "X.O/.X./..O";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn test_board_separators_are_optional() {
        let a: Board = "X.O .X. ..O".parse().unwrap();
        let b: Board = "x-o|-x-|__o".parse().unwrap();
        let c: Board = "X.O.X...O".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_board_wrong_length() {
        let err = "X.O/.X.".parse::<Board>().unwrap_err();
        assert!(err.message.contains("found 6"));
    }

    #[test]
    fn test_board_bad_character() {
        let err = "X.Q/.X./..O".parse::<Board>().unwrap_err();
        assert!(err.message.contains("'Q'"));
    }

    #[test]
    fn test_render_numbers_empty_squares() {
        let board: Board = "X../.O./...".parse().unwrap();
        let rendered = board.render();
        assert!(rendered.starts_with(" X|01|02"));
        assert!(rendered.contains("10| O|12"));
        assert_eq!(rendered.lines().count(), 5);
    }

    #[test]
    fn test_action_parse() {
        assert_eq!("1,2".parse::<Action>().unwrap(), Action::new(1, 2));
        assert_eq!(" 0 2 ".parse::<Action>().unwrap(), Action::new(0, 2));
        assert!("1".parse::<Action>().is_err());
        assert!("3,0".parse::<Action>().is_err());
        assert!("a,b".parse::<Action>().is_err());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::new(2, 0).to_string(), "(2, 0)");
    }
}
