//! Headless computer-vs-computer rounds.

use anyhow::{Context, Result};
use noughts::{Difficulty, Mark, ScoreTally, Session, SessionConfig, Strategy, strategy_for};
use tracing::{debug, info, instrument};

/// Plays `games` rounds with `x` against `o` and returns the tally.
///
/// Both sides move through a player-vs-player session, so every move
/// passes the same validation a human move does.
#[instrument]
pub fn run_selfplay(
    games: u32,
    x: Difficulty,
    o: Difficulty,
    seed: Option<u64>,
) -> Result<ScoreTally> {
    let mut x_strategy = strategy_for(x, seed);
    let mut o_strategy = strategy_for(o, seed.map(|seed| seed.wrapping_add(1)));
    let mut session = Session::new(SessionConfig::default());

    for game in 0..games {
        while let Some(mark) = session.to_move() {
            let strategy = match mark {
                Mark::X => x_strategy.as_mut(),
                Mark::O => o_strategy.as_mut(),
            };
            let index = strategy
                .choose_move(session.board(), mark)
                .with_context(|| format!("{} found no move in game {}", strategy.name(), game))?;
            session
                .select_human_move(index)
                .with_context(|| format!("{} played an illegal move", strategy.name()))?;
        }

        debug!(game, status = ?session.status(), "Round finished");
        session.reset_round();
    }

    let tally = *session.tally();
    info!(
        x_wins = tally.x_wins(),
        o_wins = tally.o_wins(),
        draws = tally.draws(),
        "Self-play finished"
    );
    Ok(tally)
}

/// One-line summary for the terminal.
pub fn summary(x: Difficulty, o: Difficulty, tally: &ScoreTally) -> String {
    format!(
        "X ({}) wins: {}   O ({}) wins: {}   Draws: {}",
        x,
        tally.x_wins(),
        o,
        tally.o_wins(),
        tally.draws()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::GameStatus;

    #[test]
    fn test_optimal_vs_optimal_only_draws() {
        let tally = run_selfplay(2, Difficulty::Optimal, Difficulty::Optimal, None).unwrap();
        assert_eq!(tally.draws(), 2);
        assert_eq!(tally.x_wins() + tally.o_wins(), 0);
    }

    #[test]
    fn test_random_vs_optimal_never_beats_optimal() {
        let tally = run_selfplay(10, Difficulty::Random, Difficulty::Optimal, Some(3)).unwrap();
        assert_eq!(tally.x_wins(), 0);
        assert_eq!(tally.o_wins() + tally.draws(), 10);
    }

    #[test]
    fn test_summary() {
        let mut tally = ScoreTally::new();
        tally.record(GameStatus::Drawn);
        assert_eq!(
            summary(Difficulty::Random, Difficulty::Optimal, &tally),
            "X (random) wins: 0   O (optimal) wins: 0   Draws: 1"
        );
    }
}
