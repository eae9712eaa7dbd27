//! Terminal UI for rewind.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{digit_position, move_cursor};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::config::Config;

/// Runs the interactive game until the user quits.
#[instrument(skip_all, fields(sort_order = %config.sort_order()))]
pub fn run_tui(config: &Config) -> Result<()> {
    info!("Starting rewind TUI");

    enable_raw_mode()?;
    let mut terminal = setup_or_restore(enter_terminal, restore_terminal)?;

    let app = App::new(*config.sort_order());
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best effort: leaves raw mode and the alternate screen.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Runs `setup`, calling `restore` before returning its error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed");
        restore();
    })
}

/// Draw, wait for one key, handle it; repeat.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no tty")),
            || restored.set(true),
        );
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(false);
        let value = setup_or_restore(|| Ok(7), || restored.set(true)).unwrap();
        assert_eq!(value, 7);
        assert!(!restored.get());
    }
}
