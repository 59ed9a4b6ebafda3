//! TUI Renderer for the interactive clock
//!
//! Owns the terminal and the UI-side state (`ClockApp`). Frames come from the
//! `ClockDriver` scheduler thread over a channel; key presses go back to it as
//! `ClockCommand`s.

mod app;

pub use app::{ClockApp, KeyAction, action_for_key};

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::{Block, Borders, Paragraph},
};
use retroclock_runtime::{ClockCommand, ClockDriver};

use crate::presentation::views::tui::{ClickerView, ClockFaceView, StatusBarView};

const INPUT_POLL: Duration = Duration::from_millis(50);
const CLICKER_PANEL_WIDTH: u16 = 16;

pub struct TuiRenderer {
    app: ClockApp,
}

impl TuiRenderer {
    pub fn new(app: ClockApp) -> Self {
        Self { app }
    }

    /// Runs until the user quits, then restores the terminal and stops the driver.
    pub fn run(mut self, mut driver: ClockDriver) -> Result<()> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = interrupted.clone();
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })?;

        enable_raw_mode()?;
        let mut terminal = rollback_on_error(enter_screen, leave_screen)?;

        let result = self.event_loop(&mut terminal, &driver, &interrupted);

        driver.stop();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableFocusChange,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        info!("clock closed");
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        driver: &ClockDriver,
        interrupted: &AtomicBool,
    ) -> Result<()> {
        loop {
            for event in driver.receiver().try_iter() {
                self.app.apply_event(event);
            }

            terminal.draw(|f| self.render(f))?;

            if event::poll(INPUT_POLL)? {
                let command = match event::read()? {
                    Event::Key(key) => action_for_key(key).and_then(|a| self.app.apply_action(a)),
                    Event::FocusGained => {
                        debug!("terminal focus gained");
                        Some(ClockCommand::Resync)
                    }
                    Event::Resize(width, height) => {
                        debug!("terminal resized to {}x{}", width, height);
                        Some(ClockCommand::Resync)
                    }
                    _ => None,
                };
                if let Some(command) = command {
                    driver.send(command)?;
                }
            }

            if interrupted.load(Ordering::SeqCst) {
                self.app.quit();
            }
            if self.app.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn render(&self, f: &mut Frame) {
        let size = f.area();

        let Some(screen) = self.app.screen() else {
            let loading = Paragraph::new("Starting clock...")
                .block(Block::default().title("retroclock").borders(Borders::ALL));
            f.render_widget(loading, size);
            return;
        };

        // [Clock face (+ clicker) | Status bar]
        let main_chunks = Layout::vertical([Constraint::Min(9), Constraint::Length(3)]).split(size);

        match &screen.clicker {
            Some(clicker) => {
                let content_chunks = Layout::horizontal([
                    Constraint::Min(30),
                    Constraint::Length(CLICKER_PANEL_WIDTH),
                ])
                .split(main_chunks[0]);
                f.render_widget(ClockFaceView::new(&screen.face), content_chunks[0]);
                f.render_widget(ClickerView::new(clicker), content_chunks[1]);
            }
            None => f.render_widget(ClockFaceView::new(&screen.face), main_chunks[0]),
        }

        f.render_widget(StatusBarView::new(&screen.status_bar), main_chunks[1]);
    }
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Best-effort undo of raw mode and `enter_screen`, used when setup fails halfway.
fn leave_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableFocusChange, LeaveAlternateScreen);
}

/// Runs `setup`; if it fails, runs `rollback` before handing the error back.
fn rollback_on_error<T>(setup: impl FnOnce() -> Result<T>, rollback: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|e| {
        debug!("terminal setup failed: {e:#}");
        rollback();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_rolls_back() {
        let rolled_back = Cell::new(false);
        let result: Result<()> = rollback_on_error(
            || Err(anyhow!("alternate screen unavailable")),
            || rolled_back.set(true),
        );

        assert!(result.is_err());
        assert!(rolled_back.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal_state() {
        let rolled_back = Cell::new(false);
        let value = rollback_on_error(|| Ok(7), || rolled_back.set(true)).unwrap();

        assert_eq!(value, 7);
        assert!(!rolled_back.get());
    }
}
