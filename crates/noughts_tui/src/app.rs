//! Application state and logic.

use crate::input::{Command, move_cursor};
use noughts::{
    Difficulty, OpponentTicket, OptimalStrategy, Position, RandomStrategy, Session,
    SessionConfig, SessionView, Strategy,
};
use tracing::{debug, info, warn};

/// What the event loop must do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to schedule.
    None,
    /// Start the opponent timer for this ticket.
    ScheduleOpponent(OpponentTicket),
    /// Drop any running opponent timer.
    CancelOpponent,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
pub struct App {
    session: Session,
    cursor: Position,
    random: RandomStrategy,
    optimal: OptimalStrategy,
}

impl App {
    /// Creates a new application.
    pub fn new(config: SessionConfig, seed: Option<u64>) -> Self {
        let random = match seed {
            Some(seed) => RandomStrategy::seeded(seed),
            None => RandomStrategy::from_entropy(),
        };
        Self {
            session: Session::new(config),
            cursor: Position::Center,
            random,
            optimal: OptimalStrategy::new(),
        }
    }

    /// Render snapshot of the session.
    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles a command from the keyboard.
    pub fn handle(&mut self, command: Command) -> Effect {
        debug!(?command, "Handling command");

        match command {
            Command::Place(index) => self.place(index),
            Command::PlaceAtCursor => self.place(self.cursor.to_index()),
            Command::MoveCursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
                Effect::None
            }
            Command::NewRound => {
                self.session.reset_round();
                Effect::CancelOpponent
            }
            Command::NewMatch => {
                self.session.new_match();
                Effect::CancelOpponent
            }
            Command::ToggleMode => {
                let mode = self.session.config().mode.toggle();
                info!(%mode, "Switching mode");
                self.session.set_mode(mode);
                Effect::CancelOpponent
            }
            Command::ToggleDifficulty => {
                let difficulty = self.session.config().difficulty.toggle();
                info!(%difficulty, "Switching difficulty");
                self.session.set_difficulty(difficulty);
                Effect::None
            }
            Command::Quit => Effect::Quit,
        }
    }

    fn place(&mut self, index: usize) -> Effect {
        match self.session.select_human_move(index) {
            Ok(transition) => {
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                }
                transition
                    .opponent_due
                    .map_or(Effect::None, Effect::ScheduleOpponent)
            }
            Err(err) => {
                debug!(error = %err, index, "Move ignored");
                Effect::None
            }
        }
    }

    /// Plays the deferred opponent move. Returns true when it was applied.
    pub fn play_opponent(&mut self, ticket: OpponentTicket) -> bool {
        let strategy: &mut dyn Strategy = match self.session.config().difficulty {
            Difficulty::Random => &mut self.random,
            Difficulty::Optimal => &mut self.optimal,
        };

        match self.session.play_opponent(ticket, strategy) {
            Ok(transition) => {
                debug!(index = transition.applied.index, "Opponent moved");
                true
            }
            Err(err) => {
                warn!(error = %err, "Opponent move dropped");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts::{GameMode, GameStatus, Mark};

    fn pvai(difficulty: Difficulty) -> App {
        App::new(
            SessionConfig {
                mode: GameMode::PvAI,
                difficulty,
            },
            Some(5),
        )
    }

    fn scheduled(effect: Effect) -> OpponentTicket {
        match effect {
            Effect::ScheduleOpponent(ticket) => ticket,
            other => panic!("expected a scheduled opponent, got {other:?}"),
        }
    }

    #[test]
    fn test_pvp_place_schedules_nothing() {
        let mut app = App::new(SessionConfig::default(), None);
        assert_eq!(app.handle(Command::Place(0)), Effect::None);
        assert_eq!(app.view().to_move, Some(Mark::O));
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_pvai_round_trip() {
        let mut app = pvai(Difficulty::Optimal);
        let ticket = scheduled(app.handle(Command::Place(0)));

        // Clicks during the delay are ignored.
        assert_eq!(app.handle(Command::Place(1)), Effect::None);
        assert!(app.view().board.is_empty(1));

        assert!(app.play_opponent(ticket));
        assert_eq!(app.view().board.count(Mark::O), 1);
        assert_eq!(app.view().to_move, Some(Mark::X));
    }

    #[test]
    fn test_reset_cancels_and_drops_ticket() {
        let mut app = pvai(Difficulty::Random);
        let ticket = scheduled(app.handle(Command::Place(4)));
        assert_eq!(app.handle(Command::NewRound), Effect::CancelOpponent);
        assert!(!app.play_opponent(ticket));
        assert_eq!(app.view().board.count(Mark::O), 0);
    }

    #[test]
    fn test_cursor_placement() {
        let mut app = App::new(SessionConfig::default(), None);
        app.handle(Command::MoveCursor(crossterm::event::KeyCode::Up));
        app.handle(Command::PlaceAtCursor);
        assert!(!app.view().board.is_empty(Position::TopCenter.to_index()));
    }

    #[test]
    fn test_toggles() {
        let mut app = App::new(SessionConfig::default(), None);
        app.handle(Command::Place(4));
        assert_eq!(app.handle(Command::ToggleMode), Effect::CancelOpponent);
        assert_eq!(app.view().config.mode, GameMode::PvAI);
        assert_eq!(app.view().status, GameStatus::InProgress);
        assert!(app.view().board.is_empty(4));

        assert_eq!(app.handle(Command::ToggleDifficulty), Effect::None);
        assert_eq!(app.view().config.difficulty, Difficulty::Optimal);
    }

    #[test]
    fn test_new_match_clears_score() {
        let mut app = App::new(SessionConfig::default(), None);
        for index in [0, 3, 1, 4, 2] {
            app.handle(Command::Place(index));
        }
        assert_eq!(app.view().tally.x_wins(), 1);
        app.handle(Command::NewRound);
        assert_eq!(app.view().tally.x_wins(), 1);
        app.handle(Command::NewMatch);
        assert_eq!(app.view().tally.x_wins(), 0);
    }
}
