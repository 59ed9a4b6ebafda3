use chrono::{NaiveDateTime, Timelike};
use log::debug;
use retroclock_engine::{PresentationSnapshot, PresentationState};
use retroclock_types::{ClockOptions, DisplayFormat, PaletteColor};
use std::time::Duration;

use crate::time_source::TimeSource;

/// Wake-up margin past a second boundary so a tick never observes the
/// previous second.
const LANDING_SLACK: Duration = Duration::from_millis(5);
const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Scheduled,
    Suspended,
}

/// Keeps a `PresentationState` in step with its time source.
///
/// The controller is driven from outside: something calls `tick`, `blink`
/// and `resync` at the right moments (see `ClockDriver`). Every method that
/// returns `true` / `Some` means the visible frame changed and should be
/// redrawn.
pub struct RefreshController {
    state: ControllerState,
    presentation: PresentationState,
    clock: Box<dyn TimeSource>,
    tick_interval: Duration,
    blink_interval: Duration,
}

impl RefreshController {
    pub fn new(options: &ClockOptions, clock: Box<dyn TimeSource>) -> Self {
        let presentation = PresentationState::new(options, clock.now());
        Self {
            state: ControllerState::Idle,
            presentation,
            clock,
            tick_interval: options.tick_interval,
            blink_interval: options.blink_interval,
        }
    }

    /// Idle → Scheduled with an immediate resample. No-op if already active.
    pub fn activate(&mut self) -> bool {
        if self.state != ControllerState::Idle {
            return false;
        }
        self.state = ControllerState::Scheduled;
        self.presentation.refresh(self.clock.now());
        debug!("clock activated at {}", self.presentation.digits());
        true
    }

    /// Periodic resample. Only reports a change when a digit or the meridiem moved.
    pub fn tick(&mut self) -> bool {
        if self.state != ControllerState::Scheduled {
            return false;
        }
        self.presentation.refresh(self.clock.now())
    }

    /// Colon blink step. Returns the new visibility, or `None` when not running.
    pub fn blink(&mut self) -> Option<bool> {
        if self.state != ControllerState::Scheduled {
            return None;
        }
        let before = self.presentation.colon_visible();
        let after = self.presentation.toggle_colon();
        (before != after).then_some(after)
    }

    /// Forced resample after the display regains visibility or focus.
    ///
    /// Always reflects the time source at the moment of the call, regardless
    /// of when the last tick ran, and resumes a suspended controller.
    pub fn resync(&mut self) -> bool {
        if self.state == ControllerState::Idle {
            return false;
        }
        if self.state == ControllerState::Suspended {
            debug!("clock resumed");
        }
        self.state = ControllerState::Scheduled;
        let now = self.clock.now();
        self.presentation.refresh(now);
        debug!("resync at {} -> {}", now, self.presentation.digits());
        true
    }

    pub fn suspend(&mut self) -> bool {
        if self.state != ControllerState::Scheduled {
            return false;
        }
        self.state = ControllerState::Suspended;
        debug!("clock suspended at {}", self.presentation.digits());
        true
    }

    /// → Idle. Nothing mutates the presentation afterwards until `activate`.
    pub fn deactivate(&mut self) {
        if self.state != ControllerState::Idle {
            debug!("clock deactivated");
        }
        self.state = ControllerState::Idle;
    }

    /// Ignored unless scheduled: a paused face keeps the instant it froze on.
    pub fn toggle_format(&mut self) -> Option<DisplayFormat> {
        if self.state != ControllerState::Scheduled {
            return None;
        }
        Some(self.presentation.toggle_format(self.clock.now()))
    }

    pub fn toggle_color(&mut self) -> Option<PaletteColor> {
        if self.state == ControllerState::Idle {
            return None;
        }
        Some(self.presentation.toggle_color())
    }

    /// Delay before the next tick.
    ///
    /// Sub-second and one-second periods are aligned to the next whole second,
    /// longer periods to the next minute, so digit rollovers show up promptly.
    pub fn delay_until_next_tick(&self, now: NaiveDateTime) -> Duration {
        if self.tick_interval <= Duration::from_secs(1) {
            self.tick_interval.min(delay_until_next_second(now))
        } else {
            self.tick_interval.min(delay_until_next_minute(now))
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn blink_interval(&self) -> Duration {
        self.blink_interval
    }

    pub fn presentation(&self) -> &PresentationState {
        &self.presentation
    }

    pub fn snapshot(&self) -> PresentationSnapshot {
        self.presentation.snapshot()
    }
}

pub fn delay_until_next_second(now: NaiveDateTime) -> Duration {
    let nanos = now.nanosecond() % NANOS_PER_SECOND;
    Duration::from_nanos(u64::from(NANOS_PER_SECOND - nanos)) + LANDING_SLACK
}

pub fn delay_until_next_minute(now: NaiveDateTime) -> Duration {
    let whole_seconds = u64::from(59 - now.second().min(59));
    Duration::from_secs(whole_seconds) + delay_until_next_second(now)
}
