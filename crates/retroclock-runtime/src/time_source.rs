use chrono::{Local, NaiveDateTime, TimeDelta};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Where the clock reads wall-clock time from.
pub trait TimeSource: Send {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Starts at a fixed instant and advances with elapsed monotonic time.
#[derive(Debug, Clone)]
pub struct AnchoredClock {
    anchor: NaiveDateTime,
    started: Instant,
}

impl AnchoredClock {
    pub fn new(anchor: NaiveDateTime) -> Self {
        Self {
            anchor,
            started: Instant::now(),
        }
    }
}

impl TimeSource for AnchoredClock {
    fn now(&self) -> NaiveDateTime {
        let elapsed = TimeDelta::from_std(self.started.elapsed()).unwrap_or(TimeDelta::MAX);
        self.anchor
            .checked_add_signed(elapsed)
            .unwrap_or(NaiveDateTime::MAX)
    }
}

/// Time source moved only by explicit calls. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, time: NaiveDateTime) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = time;
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += delta;
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// System clock, or an anchored clock when a starting instant is given.
pub fn time_source_for(initial_date: Option<NaiveDateTime>) -> Box<dyn TimeSource> {
    match initial_date {
        Some(anchor) => Box::new(AnchoredClock::new(anchor)),
        None => Box::new(SystemClock),
    }
}
