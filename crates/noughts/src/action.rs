//! Move and error types.
//!
//! Moves are domain events: the engine validates them before anything
//! changes, and a rejected move leaves every piece of state as it was.

use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Cell index (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Error raised when a strategy is asked to move with nothing to choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StrategyError {
    /// The board has no empty cell.
    #[display("No legal move: board is full")]
    NoLegalMove,
}

impl std::error::Error for StrategyError {}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the index is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The round has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The move was submitted on the other side's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Mark),

    /// A deferred opponent move outlived the round it was scheduled for.
    #[display("Opponent move belongs to a previous round")]
    StaleOpponentMove,

    /// The opponent strategy could not pick a move.
    #[display("Strategy failed: {}", _0)]
    Strategy(StrategyError),
}

impl From<StrategyError> for MoveError {
    fn from(err: StrategyError) -> Self {
        MoveError::Strategy(err)
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Strategy(err) => Some(err),
            _ => None,
        }
    }
}
