//! Exhaustive minimax opponent.
//!
//! Scores are always from O's point of view: O maximises, X minimises.
//! A position where X has a line scores [`LOSS_SCORE`], where O has a
//! line [`WIN_SCORE`], and a full board with no line zero. There is no
//! depth discount, so every equally scored move is optimal; the first
//! one found scanning cells in ascending order is the one returned.
//!
//! The game tree below any position has at most 9! leaves, so the
//! search runs without pruning. Each recursive call takes its own copy
//! of the board.

use super::Strategy;
use crate::action::StrategyError;
use crate::engine::status_of;
use crate::rules::{has_won, is_full};
use crate::types::{Board, Mark};
use tracing::{debug, instrument};

/// Score of a board on which O has completed a line.
pub const WIN_SCORE: i32 = 10;

/// Score of a board on which X has completed a line.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Scores `board` with `to_move` about to play.
pub fn minimax(board: &Board, to_move: Mark) -> i32 {
    let mut nodes = 0;
    search(*board, to_move, &mut nodes)
}

fn terminal_score(board: &Board) -> Option<i32> {
    if has_won(board, Mark::X) {
        Some(LOSS_SCORE)
    } else if has_won(board, Mark::O) {
        Some(WIN_SCORE)
    } else if is_full(board) {
        Some(0)
    } else {
        None
    }
}

/// True when `score` is strictly better than `best` for `mover`.
fn improves(mover: Mark, score: i32, best: i32) -> bool {
    match mover {
        Mark::O => score > best,
        Mark::X => score < best,
    }
}

fn search(board: Board, to_move: Mark, nodes: &mut u64) -> i32 {
    *nodes += 1;

    if let Some(score) = terminal_score(&board) {
        return score;
    }

    let mut best: Option<i32> = None;
    for index in board.empty_cells() {
        let score = search(board.with(index, to_move), to_move.opponent(), nodes);
        if best.is_none_or(|best| improves(to_move, score, best)) {
            best = Some(score);
        }
    }

    // Non-terminal boards always have an empty cell.
    best.unwrap_or(0)
}

/// Plays the game-theoretically optimal move.
#[derive(Debug, Clone, Default)]
pub struct OptimalStrategy {
    last_nodes: u64,
}

impl OptimalStrategy {
    /// Creates a new optimal strategy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited by the most recent search.
    pub fn last_nodes(&self) -> u64 {
        self.last_nodes
    }
}

impl Strategy for OptimalStrategy {
    #[instrument(skip(self, board), fields(board = %board.display()))]
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, StrategyError> {
        if status_of(board).is_terminal() {
            return Err(StrategyError::NoLegalMove);
        }

        let mut nodes = 0;
        let mut best: Option<(usize, i32)> = None;
        for index in board.empty_cells() {
            let score = search(board.with(index, mark), mark.opponent(), &mut nodes);
            if best.is_none_or(|(_, best)| improves(mark, score, best)) {
                best = Some((index, score));
            }
        }

        self.last_nodes = nodes;
        let (index, score) = best.ok_or(StrategyError::NoLegalMove)?;
        debug!(index, score, nodes, "Optimal strategy chose cell");
        Ok(index)
    }

    fn name(&self) -> &str {
        "optimal"
    }
}
