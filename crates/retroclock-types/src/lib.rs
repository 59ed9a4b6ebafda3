pub mod digit;
pub mod error;
pub mod format;
pub mod options;
pub mod palette;
pub mod segment;

pub use digit::{CalendarDigits, ClockDigits, DigitPair, DigitValue};
pub use error::{Error, Result};
pub use format::{DisplayFormat, Meridiem};
pub use options::{ClockOptions, DEFAULT_BLINK_INTERVAL, DEFAULT_TICK_INTERVAL};
pub use palette::{ColorSelection, Palette, PaletteColor, Rgb};
pub use segment::{Segment, SegmentPattern};
