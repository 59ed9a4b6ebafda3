use log::{debug, trace, warn};
use retroclock_engine::PresentationSnapshot;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::JoinHandle;
use std::time::Instant;

use crate::controller::{ControllerState, RefreshController};
use crate::{Error, Result};

/// Inputs to the scheduler thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockCommand {
    ToggleFormat,
    ToggleColor,
    /// Display regained visibility or focus; resample now and resume.
    Resync,
    Suspend,
    Shutdown,
}

/// Outputs of the scheduler thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockEvent {
    Frame(Box<PresentationSnapshot>),
    StateChanged(ControllerState),
}

/// Owns the scheduler thread that drives a `RefreshController`.
///
/// Ticks, colon blinks and commands are multiplexed on one thread through a
/// single `recv_timeout` loop, so the controller is only ever touched from
/// there. `stop` (or dropping the driver) clears the liveness flag, joins the
/// thread and discards anything still queued: no event is observable once it
/// returns.
pub struct ClockDriver {
    commands: Sender<ClockCommand>,
    events: Receiver<ClockEvent>,
    alive: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ClockDriver {
    pub fn start(controller: RefreshController) -> Result<Self> {
        let (command_tx, command_rx) = channel();
        let (event_tx, event_rx) = channel();
        let alive = Arc::new(AtomicBool::new(true));

        let worker_alive = alive.clone();
        let handle = std::thread::Builder::new()
            .name("retroclock-scheduler".to_string())
            .spawn(move || {
                let mut scheduler = Scheduler {
                    controller,
                    commands: command_rx,
                    events: event_tx,
                    alive: worker_alive,
                };
                scheduler.run();
            })?;

        Ok(Self {
            commands: command_tx,
            events: event_rx,
            alive,
            handle: Some(handle),
        })
    }

    pub fn send(&self, command: ClockCommand) -> Result<()> {
        if !self.is_alive() {
            return Err(Error::Stopped);
        }
        self.commands.send(command).map_err(|_| Error::Stopped)
    }

    pub fn receiver(&self) -> &Receiver<ClockEvent> {
        &self.events
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Cancels all scheduled work and waits for the scheduler thread to exit.
    pub fn stop(&mut self) {
        self.alive.store(false, Ordering::Release);
        let _ = self.commands.send(ClockCommand::Shutdown);

        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("clock scheduler thread panicked");
            }
            let discarded = self.events.try_iter().count();
            if discarded > 0 {
                trace!("discarded {} clock events queued before shutdown", discarded);
            }
        }
    }
}

impl Drop for ClockDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

struct Scheduler {
    controller: RefreshController,
    commands: Receiver<ClockCommand>,
    events: Sender<ClockEvent>,
    alive: Arc<AtomicBool>,
}

impl Scheduler {
    fn run(&mut self) {
        self.controller.activate();
        self.emit_state();
        self.emit_frame();

        let blink_interval = self.controller.blink_interval();
        let mut next_tick = self.next_tick_deadline();
        let mut next_blink = Instant::now() + blink_interval;

        while self.is_alive() {
            let timeout = next_tick
                .min(next_blink)
                .saturating_duration_since(Instant::now());

            match self.commands.recv_timeout(timeout) {
                Ok(ClockCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
                Ok(command) => {
                    if !self.is_alive() {
                        break;
                    }
                    if self.handle_command(command) {
                        next_tick = self.next_tick_deadline();
                        next_blink = Instant::now() + blink_interval;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    if !self.is_alive() {
                        break;
                    }
                    let now = Instant::now();
                    if now >= next_tick {
                        if self.controller.tick() {
                            self.emit_frame();
                        }
                        next_tick = self.next_tick_deadline();
                    }
                    if now >= next_blink {
                        if self.controller.blink().is_some() {
                            self.emit_frame();
                        }
                        next_blink += blink_interval;
                        if next_blink <= now {
                            next_blink = now + blink_interval;
                        }
                    }
                }
            }
        }

        self.controller.deactivate();
        debug!("clock scheduler exited");
    }

    /// Returns `true` when the tick and blink phases should restart.
    fn handle_command(&mut self, command: ClockCommand) -> bool {
        match command {
            ClockCommand::ToggleFormat => {
                if let Some(format) = self.controller.toggle_format() {
                    debug!("display format -> {}", format);
                    self.emit_frame();
                }
                true
            }
            ClockCommand::ToggleColor => {
                if let Some(color) = self.controller.toggle_color() {
                    debug!("clock color -> {}", color.name);
                    self.emit_frame();
                }
                false
            }
            ClockCommand::Resync => {
                let was = self.controller.state();
                if self.controller.resync() {
                    if was != self.controller.state() {
                        self.emit_state();
                    }
                    self.emit_frame();
                }
                true
            }
            ClockCommand::Suspend => {
                if self.controller.suspend() {
                    self.emit_state();
                }
                false
            }
            ClockCommand::Shutdown => false,
        }
    }

    fn next_tick_deadline(&self) -> Instant {
        Instant::now() + self.controller.delay_until_next_tick(self.controller.now())
    }

    fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    fn emit_frame(&self) {
        self.emit(ClockEvent::Frame(Box::new(self.controller.snapshot())));
    }

    fn emit_state(&self) {
        self.emit(ClockEvent::StateChanged(self.controller.state()));
    }

    fn emit(&self, event: ClockEvent) {
        if !self.is_alive() {
            trace!("dropping clock event after shutdown: {:?}", event);
            return;
        }
        if self.events.send(event).is_err() {
            trace!("clock event receiver is gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_source::ManualClock;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
    use retroclock_types::{ClockOptions, DisplayFormat};
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(5);

    fn start_at(options: ClockOptions, start: NaiveDateTime) -> (ClockDriver, ManualClock) {
        let clock = ManualClock::new(start);
        let controller = RefreshController::new(&options, Box::new(clock.clone()));
        (ClockDriver::start(controller).unwrap(), clock)
    }

    fn new_year() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn next_frame(driver: &ClockDriver) -> PresentationSnapshot {
        loop {
            match driver.receiver().recv_timeout(WAIT).unwrap() {
                ClockEvent::Frame(frame) => return *frame,
                ClockEvent::StateChanged(_) => continue,
            }
        }
    }

    fn next_state(driver: &ClockDriver) -> ControllerState {
        loop {
            match driver.receiver().recv_timeout(WAIT).unwrap() {
                ClockEvent::StateChanged(state) => return state,
                ClockEvent::Frame(_) => continue,
            }
        }
    }

    #[test]
    fn test_initial_frame_reflects_options() {
        let options = ClockOptions::default().with_format(DisplayFormat::TwelveHour);
        let (mut driver, _clock) = start_at(options, new_year());
        assert_eq!(next_state(&driver), ControllerState::Scheduled);
        assert_eq!(next_frame(&driver).time, "12:00 AM");
        driver.stop();
    }

    #[test]
    fn test_toggle_format_emits_recomputed_frame() {
        let options = ClockOptions::default()
            .with_format(DisplayFormat::TwelveHour)
            .with_blink(false);
        let (mut driver, _clock) = start_at(options, new_year());
        next_frame(&driver);

        driver.send(ClockCommand::ToggleFormat).unwrap();
        let frame = next_frame(&driver);
        assert_eq!(frame.time, "00:00");
        assert_eq!(frame.format, DisplayFormat::TwentyFourHour);
        driver.stop();
    }

    #[test]
    fn test_resync_after_suspend_uses_current_time() {
        let options = ClockOptions::default().with_blink(false);
        let (mut driver, clock) = start_at(options, new_year());
        next_frame(&driver);

        driver.send(ClockCommand::Suspend).unwrap();
        assert_eq!(next_state(&driver), ControllerState::Suspended);

        clock.advance(TimeDelta::hours(3) + TimeDelta::minutes(7));
        driver.send(ClockCommand::Resync).unwrap();
        assert_eq!(next_state(&driver), ControllerState::Scheduled);
        assert_eq!(next_frame(&driver).time, "03:07");
        driver.stop();
    }

    #[test]
    fn test_tick_picks_up_minute_rollover() {
        let options = ClockOptions::default()
            .with_blink(false)
            .with_intervals(Duration::from_millis(20), Duration::from_secs(1));
        let (mut driver, clock) = start_at(options, new_year());
        next_frame(&driver);

        clock.advance(TimeDelta::minutes(1));
        assert_eq!(next_frame(&driver).time, "00:01");
        driver.stop();
    }

    #[test]
    fn test_blink_emits_colon_frames() {
        let options = ClockOptions::default()
            .with_intervals(Duration::from_secs(1), Duration::from_millis(20));
        let (mut driver, _clock) = start_at(options, new_year());
        assert!(next_frame(&driver).colon_visible);
        assert!(!next_frame(&driver).colon_visible);
        assert!(next_frame(&driver).colon_visible);
        driver.stop();
    }

    #[test]
    fn test_no_events_after_stop() {
        let options = ClockOptions::default()
            .with_intervals(Duration::from_millis(5), Duration::from_millis(5));
        let (mut driver, clock) = start_at(options, new_year());
        next_frame(&driver);

        driver.stop();
        assert!(!driver.is_alive());
        clock.advance(TimeDelta::minutes(10));
        std::thread::sleep(Duration::from_millis(50));
        assert!(driver.receiver().try_recv().is_err());
        assert!(matches!(
            driver.send(ClockCommand::Resync),
            Err(Error::Stopped)
        ));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut driver, _clock) = start_at(ClockOptions::default(), new_year());
        driver.stop();
        driver.stop();
        assert!(!driver.is_alive());
    }
}
