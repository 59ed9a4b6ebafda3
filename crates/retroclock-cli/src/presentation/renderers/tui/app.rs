use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use retroclock_engine::{Clicker, PresentationSnapshot};
use retroclock_runtime::{ClockCommand, ClockEvent, ControllerState};

use crate::presentation::presenters::present_screen;
use crate::presentation::view_models::TuiScreenViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    ToggleFormat,
    ToggleColor,
    ClickerIncrement,
    ClickerDecrement,
    ClickerColor,
    TogglePause,
    Resync,
    Quit,
}

pub fn action_for_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(KeyAction::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('f') => Some(KeyAction::ToggleFormat),
        KeyCode::Char('c') => Some(KeyAction::ToggleColor),
        KeyCode::Char('C') => Some(KeyAction::ClickerColor),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            Some(KeyAction::ClickerIncrement)
        }
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => {
            Some(KeyAction::ClickerDecrement)
        }
        KeyCode::Char('p') => Some(KeyAction::TogglePause),
        KeyCode::Char('r') => Some(KeyAction::Resync),
        _ => None,
    }
}

/// UI-side state of the interactive clock.
///
/// The clock face itself lives on the scheduler thread; this only keeps the
/// latest frame it sent. The clicker is purely local.
pub struct ClockApp {
    frame: Option<PresentationSnapshot>,
    state: ControllerState,
    clicker: Option<Clicker>,
    should_quit: bool,
}

impl ClockApp {
    pub fn new(clicker: Option<Clicker>) -> Self {
        Self {
            frame: None,
            state: ControllerState::Idle,
            clicker,
            should_quit: false,
        }
    }

    pub fn apply_event(&mut self, event: ClockEvent) {
        match event {
            ClockEvent::Frame(frame) => self.frame = Some(*frame),
            ClockEvent::StateChanged(state) => {
                debug!("clock state -> {:?}", state);
                self.state = state;
            }
        }
    }

    /// Applies a key action locally and returns the command, if any, the
    /// scheduler should receive.
    pub fn apply_action(&mut self, action: KeyAction) -> Option<ClockCommand> {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
                None
            }
            KeyAction::ToggleFormat => Some(ClockCommand::ToggleFormat),
            KeyAction::ToggleColor => Some(ClockCommand::ToggleColor),
            KeyAction::Resync => Some(ClockCommand::Resync),
            KeyAction::TogglePause => Some(if self.state == ControllerState::Suspended {
                ClockCommand::Resync
            } else {
                ClockCommand::Suspend
            }),
            KeyAction::ClickerIncrement => {
                if let Some(clicker) = self.clicker.as_mut() {
                    clicker.increment();
                }
                None
            }
            KeyAction::ClickerDecrement => {
                if let Some(clicker) = self.clicker.as_mut() {
                    clicker.decrement();
                }
                None
            }
            KeyAction::ClickerColor => {
                if let Some(clicker) = self.clicker.as_mut() {
                    clicker.toggle_color();
                }
                None
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn clicker(&self) -> Option<&Clicker> {
        self.clicker.as_ref()
    }

    /// `None` until the scheduler has sent its first frame.
    pub fn screen(&self) -> Option<TuiScreenViewModel> {
        self.frame
            .as_ref()
            .map(|frame| present_screen(frame, self.state, self.clicker.as_ref()))
    }
}
