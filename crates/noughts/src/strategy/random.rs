//! Uniform random opponent.

use super::Strategy;
use crate::action::StrategyError;
use crate::types::{Board, Mark};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl RandomStrategy<StdRng> {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeds deterministically, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStrategy<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board, _mark: Mark) -> Result<usize, StrategyError> {
        let index = board
            .empty_cells()
            .choose(&mut self.rng)
            .copied()
            .ok_or(StrategyError::NoLegalMove)?;
        debug!(index, "Random strategy chose cell");
        Ok(index)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_empty_cell_is_chosen() {
        let board = (0..8).fold(Board::new(), |board, i| {
            board.with(i, if i % 2 == 0 { Mark::X } else { Mark::O })
        });
        let mut strategy = RandomStrategy::seeded(7);
        assert_eq!(strategy.choose_move(&board, Mark::O), Ok(8));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = (0..9).fold(Board::new(), |board, i| board.with(i, Mark::X));
        let mut strategy = RandomStrategy::seeded(7);
        assert_eq!(
            strategy.choose_move(&board, Mark::O),
            Err(StrategyError::NoLegalMove)
        );
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new().with(4, Mark::X);
        let mut a = RandomStrategy::seeded(42);
        let mut b = RandomStrategy::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.choose_move(&board, Mark::O), b.choose_move(&board, Mark::O));
        }
    }
}
