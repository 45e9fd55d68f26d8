//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) value: whose turn it is,
//! which actions are legal, what a move produces, and how a finished game
//! scores. The search engine is built entirely on top of these.

pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use moves::{apply, legal_actions};
pub use terminal::{is_full, is_terminal, utility};
pub use turn::current_player;
pub use win::winner;
