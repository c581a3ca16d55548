//! Session score tally.

use crate::types::{GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Which counter a finished round moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ScoreCounter {
    /// X won the round.
    #[display("X wins")]
    XWins,
    /// O won the round.
    #[display("O wins")]
    OWins,
    /// The round was drawn.
    #[display("Draws")]
    Draws,
}

impl ScoreCounter {
    /// Maps a status to its counter; `InProgress` maps to nothing.
    pub fn for_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won(Mark::X) => Some(ScoreCounter::XWins),
            GameStatus::Won(Mark::O) => Some(ScoreCounter::OWins),
            GameStatus::Drawn => Some(ScoreCounter::Draws),
        }
    }
}

/// Win and draw counters for the running session.
///
/// Counters only grow. Starting a new round keeps them; only a new
/// match clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl ScoreTally {
    /// Creates a zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter matching `status`.
    ///
    /// Returns the counter that moved, or `None` for `InProgress`.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus) -> Option<ScoreCounter> {
        let counter = ScoreCounter::for_status(status)?;
        match counter {
            ScoreCounter::XWins => self.x_wins += 1,
            ScoreCounter::OWins => self.o_wins += 1,
            ScoreCounter::Draws => self.draws += 1,
        }
        info!(%counter, x_wins = self.x_wins, o_wins = self.o_wins, draws = self.draws, "Score recorded");
        Some(counter)
    }

    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Value of a single counter.
    pub fn get(&self, counter: ScoreCounter) -> u32 {
        match counter {
            ScoreCounter::XWins => self.x_wins,
            ScoreCounter::OWins => self.o_wins,
            ScoreCounter::Draws => self.draws,
        }
    }
}

/// Returns `tally` with the counter for `status` incremented.
///
/// `InProgress` returns the tally unchanged.
pub fn record_result(tally: ScoreTally, status: GameStatus) -> ScoreTally {
    let mut next = tally;
    next.record(status);
    next
}
