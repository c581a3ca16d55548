//! Noughts - tic-tac-toe game logic
//!
//! Pure, synchronous game core: no terminal, no async, no I/O.
//!
//! # Architecture
//!
//! - **Engine**: pure transition functions ([`apply_move`], [`evaluate`],
//!   [`winning_line`], [`reset`]) over a `Copy` [`Board`]
//! - **Strategy**: computer opponents behind the [`Strategy`] trait,
//!   uniform random or exhaustive minimax
//! - **Session**: the owned state a frontend threads through each move,
//!   including turn order, score and deferred opponent tickets
//!
//! # Example
//!
//! ```
//! use noughts::{Difficulty, GameMode, Session, SessionConfig, strategy_for};
//!
//! let mut session = Session::new(SessionConfig {
//!     mode: GameMode::PvAI,
//!     difficulty: Difficulty::Optimal,
//! });
//! let mut opponent = strategy_for(Difficulty::Optimal, None);
//!
//! let transition = session.select_human_move(4).unwrap();
//! if let Some(ticket) = transition.opponent_due {
//!     session.play_opponent(ticket, opponent.as_mut()).unwrap();
//! }
//! assert_eq!(session.board().empty_cells().len(), 7);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod invariants;
mod position;
mod rules;
mod score;
mod session;
mod strategy;
mod types;

pub use action::{Move, MoveError, StrategyError};
pub use engine::{apply_move, evaluate, reset, status_of, winning_line};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, SingleWinner, TurnAlternation,
};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, has_won, is_full, winning_lines};
pub use score::{ScoreCounter, ScoreTally, record_result};
pub use session::{
    GameMode, OpponentTicket, Session, SessionConfig, SessionView, Transition,
};
pub use strategy::{
    Difficulty, LOSS_SCORE, OptimalStrategy, RandomStrategy, Strategy, WIN_SCORE, minimax,
    strategy_for,
};
pub use types::{Board, Cell, GameStatus, Mark};
