use chrono::NaiveDateTime;
use std::time::Duration;

use crate::{ColorSelection, DisplayFormat, Palette};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_secs(1);

/// Construction-time configuration of a clock.
///
/// Everything here is fixed for the life of the clock; the runtime state
/// (current color, current format) starts from these values.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockOptions {
    pub palette: Palette,
    pub initial_color: ColorSelection,
    pub show_seconds: bool,
    /// Starting instant; `None` means "now" from the system clock.
    pub initial_date: Option<NaiveDateTime>,
    pub blink_colon: bool,
    pub show_date: bool,
    pub initial_format: DisplayFormat,
    pub tick_interval: Duration,
    pub blink_interval: Duration,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            initial_color: ColorSelection::default(),
            show_seconds: false,
            initial_date: None,
            blink_colon: true,
            show_date: false,
            initial_format: DisplayFormat::default(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            blink_interval: DEFAULT_BLINK_INTERVAL,
        }
    }
}

impl ClockOptions {
    pub fn with_format(mut self, format: DisplayFormat) -> Self {
        self.initial_format = format;
        self
    }

    pub fn with_color(mut self, color: ColorSelection) -> Self {
        self.initial_color = color;
        self
    }

    pub fn with_initial_date(mut self, date: NaiveDateTime) -> Self {
        self.initial_date = Some(date);
        self
    }

    pub fn with_seconds(mut self, show_seconds: bool) -> Self {
        self.show_seconds = show_seconds;
        self
    }

    pub fn with_date(mut self, show_date: bool) -> Self {
        self.show_date = show_date;
        self
    }

    pub fn with_blink(mut self, blink_colon: bool) -> Self {
        self.blink_colon = blink_colon;
        self
    }

    pub fn with_intervals(mut self, tick: Duration, blink: Duration) -> Self {
        self.tick_interval = tick;
        self.blink_interval = blink;
        self
    }
}
