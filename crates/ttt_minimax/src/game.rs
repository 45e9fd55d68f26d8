//! A game in progress: the current board plus the moves that led to it.

use crate::error::{InvalidActionError, InvalidActionKind};
use crate::rules::{apply, current_player, is_full, winner};
use crate::search::best_action;
use crate::types::{Action, Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Derives the status of a board.
    pub fn of(board: &Board) -> Self {
        if let Some(player) = winner(board) {
            GameStatus::Won(player)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Tic-tac-toe game driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The position the game started from.
    start: Board,
    /// The current board.
    board: Board,
    /// Actions played since `start`.
    history: Vec<Action>,
}

impl Game {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates a game that continues from an existing position.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_board(board: Board) -> Self {
        Self {
            start: board,
            board,
            history: Vec::new(),
        }
    }

    /// Returns the starting board.
    pub fn start(&self) -> &Board {
        &self.start
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the actions played so far.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        current_player(&self.board)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// Plays an action for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidActionError`] if the action is not legal; the game is
    /// left unchanged.
    #[instrument(skip(self), fields(player = %self.to_move()))]
    pub fn play(&mut self, action: Action) -> Result<GameStatus, InvalidActionError> {
        self.board = apply(&self.board, action)?;
        self.history.push(action);

        let status = self.status();
        debug!(%action, %status, "Move applied");
        Ok(status)
    }

    /// Plays the optimal action for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidActionError`] if the game is already over.
    #[instrument(skip(self))]
    pub fn play_best(&mut self) -> Result<Action, InvalidActionError> {
        let action = best_action(&self.board)
            .ok_or_else(|| InvalidActionError::new(InvalidActionKind::GameOver))?;
        self.play(action)?;
        Ok(action)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Plays optimal moves for both sides from `board` until the game ends.
#[instrument(skip(board), fields(board = %board))]
pub fn self_play(board: Board) -> Game {
    let mut game = Game::from_board(board);
    while let Ok(action) = game.play_best() {
        debug!(%action, board = %game.board(), "Self-play move");
    }
    info!(status = %game.status(), moves = game.history().len(), "Self-play finished");
    game
}
