//! Session state: one owned value threaded through every move.
//!
//! A [`Session`] holds the board, the mark to move, the derived status,
//! the score tally and the configuration. The frontend owns it and calls
//! plain synchronous methods from whatever event loop it runs.
//!
//! Opponent moves in player-vs-AI mode are deferred by the frontend. A
//! human move that hands the turn to O returns an [`OpponentTicket`];
//! the frontend redeems it later with [`Session::play_opponent`]. The
//! ticket names the round it was issued in, so a reset in between makes
//! it stale and it is refused.

use crate::action::{Move, MoveError};
use crate::engine::{apply_move, evaluate, reset};
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::rules::{WinLine, winning_lines};
use crate::score::{ScoreCounter, ScoreTally};
use crate::strategy::{Difficulty, Strategy};
use crate::types::{Board, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays O.
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
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[serde(rename = "pvp")]
    #[strum(to_string = "pvp")]
    PvP,
    /// A human plays X against the computer as O.
    #[serde(rename = "pvai")]
    #[strum(to_string = "pvai")]
    PvAI,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Self::PvP => "Player vs Player",
            Self::PvAI => "Player vs AI",
        }
    }

    /// Toggles between `PvP` and `PvAI`.
    pub fn toggle(self) -> Self {
        match self {
            Self::PvP => Self::PvAI,
            Self::PvAI => Self::PvP,
        }
    }

    /// Scoreboard label for the O side.
    pub fn o_label(self) -> &'static str {
        match self {
            Self::PvP => "Player O",
            Self::PvAI => "AI (O)",
        }
    }
}

/// Mode and opponent strength, chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Who plays O.
    pub mode: GameMode,
    /// Strength of the computer opponent in `PvAI` mode.
    pub difficulty: Difficulty,
}

/// Permission to play one deferred opponent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpponentTicket {
    round: u64,
}

impl OpponentTicket {
    /// Round this ticket was issued in.
    pub fn round(&self) -> u64 {
        self.round
    }
}

/// Outcome of one accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The move that was applied.
    pub applied: Move,
    /// Status after the move.
    pub status: GameStatus,
    /// Counter incremented when the move ended the round.
    pub scored: Option<ScoreCounter>,
    /// Present when the computer plays next.
    pub opponent_due: Option<OpponentTicket>,
}

/// Everything a renderer needs after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// Full board contents.
    pub board: Board,
    /// Current status.
    pub status: GameStatus,
    /// Mark to move, `None` once the round is over.
    pub to_move: Option<Mark>,
    /// Lines to highlight on a win.
    pub winning_lines: Vec<WinLine>,
    /// Cumulative score.
    pub tally: ScoreTally,
    /// Current mode and difficulty.
    pub config: SessionConfig,
}

impl SessionView {
    /// Status line shown above the board.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => match self.to_move {
                Some(mark) => format!("Player {}'s Turn", mark),
                None => String::new(),
            },
            GameStatus::Won(mark) => format!("{} Wins!", mark),
            GameStatus::Drawn => "It's a Draw!".to_string(),
        }
    }

    /// True when `index` lies on a highlighted winning line.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_lines.iter().any(|line| line.contains(index))
    }
}

/// A running session of rounds with a shared score.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    winning_lines: Vec<WinLine>,
    tally: ScoreTally,
    config: SessionConfig,
    round: u64,
}

impl Session {
    /// Creates a session with an empty board and zeroed score.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        info!(mode = %config.mode, difficulty = %config.difficulty, "Creating session");
        Self {
            board: reset(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            winning_lines: Vec::new(),
            tally: ScoreTally::new(),
            config,
            round: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move, `None` once the round is over.
    pub fn to_move(&self) -> Option<Mark> {
        (!self.status.is_terminal()).then_some(self.to_move)
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the score tally.
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Round counter; bumps on every reset.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Applies a move submitted by a human for the current mark.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] once the round is won or drawn
    /// - [`MoveError::NotYourTurn`] in `PvAI` mode while O is to move
    /// - any placement error from [`apply_move`]
    ///
    /// A rejected move changes nothing.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn select_human_move(&mut self, index: usize) -> Result<Transition, MoveError> {
        if self.status.is_terminal() {
            debug!("Ignoring move after round ended");
            return Err(MoveError::GameAlreadyOver);
        }

        if self.config.mode == GameMode::PvAI && self.to_move == Mark::O {
            debug!("Ignoring human move during opponent turn");
            return Err(MoveError::NotYourTurn(Mark::X));
        }

        self.place(index)
    }

    /// Plays the deferred opponent move for `ticket`.
    ///
    /// Re-validates everything the ticket was issued under: same round,
    /// round still running, `PvAI` mode, and O to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::StaleOpponentMove`] if the round was reset
    /// - [`MoveError::GameAlreadyOver`] if the round has ended
    /// - [`MoveError::NotYourTurn`] if O is not the side to move
    /// - [`MoveError::Strategy`] if the strategy found no move
    #[instrument(skip(self, strategy), fields(round = self.round, strategy = strategy.name()))]
    pub fn play_opponent(
        &mut self,
        ticket: OpponentTicket,
        strategy: &mut dyn Strategy,
    ) -> Result<Transition, MoveError> {
        if ticket.round != self.round {
            debug!(ticket_round = ticket.round, "Dropping stale opponent move");
            return Err(MoveError::StaleOpponentMove);
        }

        if self.status.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        if self.config.mode != GameMode::PvAI || self.to_move != Mark::O {
            return Err(MoveError::NotYourTurn(Mark::O));
        }

        let index = strategy.choose_move(&self.board, Mark::O).inspect_err(|err| {
            warn!(error = %err, "Opponent strategy had no move on a running round");
        })?;
        self.place(index)
    }

    /// Ticket for the opponent if it is due to move now.
    pub fn opponent_due(&self) -> Option<OpponentTicket> {
        let due = self.config.mode == GameMode::PvAI
            && !self.status.is_terminal()
            && self.to_move == Mark::O;
        due.then_some(OpponentTicket { round: self.round })
    }

    fn place(&mut self, index: usize) -> Result<Transition, MoveError> {
        let mark = self.to_move;
        let board = apply_move(&self.board, index, mark)?;
        debug_assert!(
            BoardInvariants::check_all(&board).is_ok(),
            "board invariants violated after {} at {}",
            mark,
            index
        );

        let status = evaluate(&board, mark);
        self.board = board;
        self.status = status;

        let scored = self.tally.record(status);
        if status.is_terminal() {
            self.winning_lines = winning_lines(&self.board, mark);
            info!(?status, "Round finished");
        } else {
            self.to_move = mark.opponent();
        }

        Ok(Transition {
            applied: Move::new(mark, index),
            status,
            scored,
            opponent_due: self.opponent_due(),
        })
    }

    /// Starts a new round. The score is kept.
    ///
    /// Any outstanding [`OpponentTicket`] becomes stale.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn reset_round(&mut self) {
        self.board = reset();
        self.to_move = Mark::X;
        self.status = GameStatus::InProgress;
        self.winning_lines.clear();
        self.round += 1;
        debug!(round = self.round, "Round reset");
    }

    /// Starts a new match: new round and zeroed score.
    #[instrument(skip(self))]
    pub fn new_match(&mut self) {
        self.reset_round();
        self.tally = ScoreTally::new();
        info!("New match started");
    }

    /// Switches mode; this also starts a new round.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.config.mode = mode;
        self.reset_round();
    }

    /// Changes difficulty for the next opponent turn.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SessionView {
        SessionView {
            board: self.board,
            status: self.status,
            to_move: self.to_move(),
            winning_lines: self.winning_lines.clone(),
            tally: self.tally,
            config: self.config,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
