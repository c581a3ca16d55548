//! Terminal event loop.
//!
//! Input is polled with a short timeout. A deferred opponent move is held
//! as a ticket plus a deadline and played once the deadline passes; a
//! reset drops it, and the session refuses the ticket anyway if its round
//! has moved on.

use crate::app::{App, Effect};
use crate::config::AppConfig;
use crate::input::command_for;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts::OpponentTicket;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the interactive game until the user quits.
#[instrument(skip_all, fields(mode = %config.mode(), difficulty = %config.difficulty()))]
pub async fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting noughts TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let app = App::new(config.session_config(), *config.seed());
    let res = run_app(&mut terminal, app, config.opponent_delay()).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Opponent move waiting for its deadline.
struct Pending {
    ticket: OpponentTicket,
    due: Instant,
}

async fn run_app(terminal: &mut Tui, mut app: App, delay: Duration) -> Result<()> {
    let mut pending: Option<Pending> = None;

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if pending.as_ref().is_some_and(|p| Instant::now() >= p.due) {
            if let Some(Pending { ticket, .. }) = pending.take() {
                app.play_opponent(ticket);
            }
            continue;
        }

        // Check for keyboard input (non-blocking)
        if event::poll(POLL_INTERVAL).context("Failed to poll terminal events")? {
            let Event::Key(key) = event::read().context("Failed to read terminal event")? else {
                continue;
            };
            let Some(command) = command_for(key) else {
                continue;
            };

            match app.handle(command) {
                Effect::None => {}
                Effect::ScheduleOpponent(ticket) => {
                    debug!(round = ticket.round(), ?delay, "Scheduling opponent move");
                    pending = Some(Pending {
                        ticket,
                        due: Instant::now() + delay,
                    });
                }
                Effect::CancelOpponent => {
                    if pending.take().is_some() {
                        debug!("Cancelling pending opponent move");
                    }
                }
                Effect::Quit => {
                    info!("User quit");
                    return Ok(());
                }
            }
        } else {
            tokio::task::yield_now().await;
        }
    }
}
