//! Exhaustive minimax search.
//!
//! X maximizes utility, O minimizes it. Every line of play is followed to
//! the end of the game; there is no pruning and no caching, which is cheap
//! enough on a 3x3 board (under 550k nodes from the empty position).
//!
//! Among root actions of equal value the first one in row-major order is
//! chosen, so a given board always yields the same move.

use crate::rules::{apply, current_player, is_terminal, legal_actions, utility};
use crate::types::{Action, Board, Player, Utility};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// A legal root action paired with its value under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, derive_new::new)]
pub struct RankedAction {
    /// The action taken at the root.
    action: Action,
    /// Utility reached if both sides play perfectly afterwards.
    value: Utility,
}

/// Everything a single search learns about a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct SearchReport {
    /// The player to move at the root.
    to_move: Player,
    /// The chosen action, `None` when the game is already over.
    best_action: Option<Action>,
    /// Game value of the root board.
    value: Utility,
    /// Every legal root action with its value, in row-major order.
    ranked: Vec<RankedAction>,
    /// Number of boards visited, root included.
    nodes: u64,
}

/// Mutually recursive max/min evaluation with a node counter.
#[derive(Debug, Default)]
struct Minimax {
    nodes: u64,
}

impl Minimax {
    fn max_value(&mut self, board: &Board) -> Utility {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board);
        }
        let mut v = Utility::MIN;
        for (_, next) in successors(board) {
            v = v.max(self.min_value(&next));
        }
        v
    }

    fn min_value(&mut self, board: &Board) -> Utility {
        self.nodes += 1;
        if is_terminal(board) {
            return utility(board);
        }
        let mut v = Utility::MAX;
        for (_, next) in successors(board) {
            v = v.min(self.max_value(&next));
        }
        v
    }

    /// Value of a board whose player to move picks next.
    fn value_for(&mut self, board: &Board, mover: Player) -> Utility {
        match mover {
            Player::X => self.max_value(board),
            Player::O => self.min_value(board),
        }
    }
}

/// Legal actions paired with the boards they lead to.
fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    // Actions come from `legal_actions`, so `apply` accepts each of them.
    legal_actions(board)
        .into_iter()
        .filter_map(move |action| apply(board, action).ok().map(|next| (action, next)))
}

/// Whether `candidate` is strictly better than `incumbent` for `mover`.
fn improves(mover: Player, candidate: Utility, incumbent: Utility) -> bool {
    match mover {
        Player::X => candidate > incumbent,
        Player::O => candidate < incumbent,
    }
}

/// Searches the full game tree below `board`.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> SearchReport {
    let to_move = current_player(board);
    let mut search = Minimax { nodes: 1 };

    let ranked: Vec<RankedAction> = successors(board)
        .map(|(action, next)| {
            let value = search.value_for(&next, to_move.opponent());
            RankedAction::new(action, value)
        })
        .collect();

    let best = ranked.iter().fold(None::<&RankedAction>, |best, r| match best {
        Some(b) if !improves(to_move, r.value, b.value) => Some(b),
        _ => Some(r),
    });

    let report = SearchReport {
        to_move,
        best_action: best.map(|r| r.action),
        value: best.map_or_else(|| utility(board), |r| r.value),
        ranked,
        nodes: search.nodes,
    };

    debug!(
        to_move = %report.to_move,
        best = ?report.best_action,
        value = report.value,
        nodes = report.nodes,
        "Search complete"
    );
    report
}

/// Returns an optimal action for the player to move.
///
/// Returns `None` if the game is already over.
#[instrument(skip(board), fields(board = %board))]
pub fn best_action(board: &Board) -> Option<Action> {
    if is_terminal(board) {
        return None;
    }
    analyze(board).best_action
}

/// Returns the game value of `board` under optimal play by both sides.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax_value(board: &Board) -> Utility {
    Minimax::default().value_for(board, current_player(board))
}

/// Returns every legal action with its minimax value, in row-major order.
#[instrument(skip(board), fields(board = %board))]
pub fn ranked_actions(board: &Board) -> Vec<RankedAction> {
    analyze(board).ranked
}
