//! Tic-tac-toe solved by exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over an immutable [`Board`]: turn order,
//!   legal actions, transitions, win detection and scoring.
//! - **Search**: full-depth minimax that picks an optimal [`Action`] for the
//!   player to move.
//! - **Game**: a small driver that keeps history and plays out games.
//!
//! # Example
//!
//! ```
//! use ttt_minimax::{Board, Player, apply, best_action, current_player};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(current_player(&board), Player::X);
//!
//! let action = best_action(&board).expect("game is not over");
//! let next = apply(&board, action)?;
//! assert_eq!(ttt_minimax::utility(&next), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod notation;
mod rules;
mod search;
mod types;

pub use error::{InvalidActionError, InvalidActionKind, NotationError};
pub use game::{Game, GameStatus, self_play};
pub use rules::win::LINES;
pub use rules::{apply, current_player, is_full, is_terminal, legal_actions, utility, winner};
pub use search::{RankedAction, SearchReport, analyze, best_action, minimax_value, ranked_actions};
pub use types::{Action, Board, DRAW, O_WINS, Player, Square, Utility, X_WINS};
