use chrono::Timelike;
use retroclock_types::{ClockDigits, DigitPair, DisplayFormat, Meridiem};

/// Converts an instant into the digits drawn on the clock face.
///
/// In 12-hour mode the hour is folded into `1..=12` (midnight and noon read
/// as 12) and a meridiem is attached; in 24-hour mode the raw hour is used and
/// there is no meridiem.
pub fn decompose<T: Timelike>(
    time: &T,
    format: DisplayFormat,
    include_seconds: bool,
) -> ClockDigits {
    let raw_hour = time.hour();
    let (hour, meridiem) = match format {
        DisplayFormat::TwelveHour => {
            (twelve_hour(raw_hour), Some(Meridiem::from_hour(raw_hour)))
        }
        DisplayFormat::TwentyFourHour => (raw_hour, None),
    };

    ClockDigits {
        hours: DigitPair::split(hour),
        minutes: DigitPair::split(time.minute()),
        seconds: include_seconds.then(|| DigitPair::split(time.second())),
        meridiem,
    }
}

fn twelve_hour(raw_hour: u32) -> u32 {
    match raw_hour % 12 {
        0 => 12,
        h => h,
    }
}
