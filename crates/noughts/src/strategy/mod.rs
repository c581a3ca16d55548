//! Opponent strategies.
//!
//! A strategy looks at a board and the mark it plays and names a cell.
//! Two are provided, selected by [`Difficulty`]:
//! - [`RandomStrategy`] picks uniformly among empty cells
//! - [`OptimalStrategy`] runs an exhaustive minimax search

mod minimax;
mod random;

pub use minimax::{LOSS_SCORE, OptimalStrategy, WIN_SCORE, minimax};
pub use random::RandomStrategy;

use crate::action::StrategyError;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Something that can pick a move for the side to play.
pub trait Strategy {
    /// Chooses a cell index for `mark` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::NoLegalMove`] when no empty cell remains.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, StrategyError>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}

/// Opponent strength.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    #[serde(alias = "easy")]
    #[strum(to_string = "random", serialize = "easy")]
    Random,
    /// Game-theoretically optimal move.
    #[serde(alias = "hard")]
    #[strum(to_string = "optimal", serialize = "hard")]
    Optimal,
}

impl Difficulty {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Random => "Easy (random)",
            Self::Optimal => "Hard (optimal)",
        }
    }

    /// Toggles between `Random` and `Optimal`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Random => Self::Optimal,
            Self::Optimal => Self::Random,
        }
    }
}

/// Builds the strategy for `difficulty`.
///
/// `seed` makes the random strategy reproducible; the optimal strategy is
/// deterministic and ignores it.
#[instrument]
pub fn strategy_for(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Strategy> {
    match difficulty {
        Difficulty::Random => match seed {
            Some(seed) => Box::new(RandomStrategy::seeded(seed)),
            None => Box::new(RandomStrategy::from_entropy()),
        },
        Difficulty::Optimal => Box::new(OptimalStrategy::new()),
    }
}
