//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cell indices that win when filled by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// The three indices of this line.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// True when `index` is part of this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// True when every cell of the line holds `mark`.
    pub fn is_complete_for(&self, board: &Board, mark: Mark) -> bool {
        self.0
            .iter()
            .all(|&index| board.get(index) == Some(Cell::Occupied(mark)))
    }
}

/// The eight winning lines: rows, columns, diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    // Columns
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    // Diagonals
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// Checks if `mark` has three in a row anywhere.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    WIN_LINES.iter().any(|line| line.is_complete_for(board, mark))
}

/// Returns the first line completed by `mark`, in table order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<WinLine> {
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.is_complete_for(board, mark))
}

/// Returns every line completed by `mark`.
///
/// A single final move can close two lines at once; highlighting shows
/// all of them.
#[instrument(skip(board))]
pub fn winning_lines(board: &Board, mark: Mark) -> Vec<WinLine> {
    WIN_LINES
        .iter()
        .copied()
        .filter(|line| line.is_complete_for(board, mark))
        .collect()
}
