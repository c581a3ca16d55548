//! First-class board invariants.
//!
//! Invariants are logical properties every reachable board satisfies.
//! The engine checks them in debug builds after each placement, and
//! tests check them directly.

use crate::rules::has_won;
use crate::types::{Board, Mark};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples so sets compose as types.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X moves first and marks alternate.
///
/// On any reachable board the X count equals the O count or exceeds it
/// by exactly one.
pub struct TurnAlternation;

impl Invariant<Board> for TurnAlternation {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Turn alternation violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

/// Invariant: at most one mark has completed a line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        !(has_won(board, Mark::X) && has_won(board, Mark::O))
    }

    fn description() -> &'static str {
        "X and O have not both completed a line"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (TurnAlternation, SingleWinner);
