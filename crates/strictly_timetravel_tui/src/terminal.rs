//! Interactive terminal session.

use crate::app::App;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use strictly_timetravel::GameEngine;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip(engine))]
pub fn run(engine: GameEngine) -> Result<()> {
    info!("Starting Strictly Timetravel TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = restore(&mut stdout);
        return Err(e).context("Failed to enter alternate screen");
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = restore(&mut io::stdout());
            return Err(e).context("Failed to create terminal");
        }
    };

    let res = run_app(&mut terminal, App::new(engine));
    let restored = restore(terminal.backend_mut());

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res.and(restored)
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even if an earlier one fails; the first failure is returned.
fn restore<W: Write>(out: &mut W) -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(out, LeaveAlternateScreen, Show).context("Failed to leave alternate screen");
    if let Err(err) = &screen {
        error!(error = ?err, "Terminal restore failed");
    }
    raw.and(screen)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            info!(step = app.engine().current_step(), "User quit");
            return Ok(());
        }
    }
}
