use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Meridiem;

/// A single rendered digit position, always in `0..=9`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "u8", into = "u8")]
pub struct DigitValue(u8);

impl DigitValue {
    pub const ZERO: DigitValue = DigitValue(0);
    pub const MAX: DigitValue = DigitValue(9);

    /// Reduces any integer into `0..=9` with Euclidean modulo, so `-1` maps to `9`.
    pub fn new(value: i64) -> Self {
        DigitValue(value.rem_euclid(10) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for DigitValue {
    fn from(value: u8) -> Self {
        DigitValue(value % 10)
    }
}

impl From<DigitValue> for u8 {
    fn from(digit: DigitValue) -> Self {
        digit.0
    }
}

impl fmt::Display for DigitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tens and ones of a two-digit quantity such as minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DigitPair {
    pub tens: DigitValue,
    pub ones: DigitValue,
}

impl DigitPair {
    /// Splits `value` (taken modulo 100) into tens and ones.
    pub fn split(value: u32) -> Self {
        let value = value % 100;
        Self {
            tens: DigitValue::from((value / 10) as u8),
            ones: DigitValue::from((value % 10) as u8),
        }
    }

    pub fn value(self) -> u32 {
        self.tens.get() as u32 * 10 + self.ones.get() as u32
    }
}

impl fmt::Display for DigitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tens, self.ones)
    }
}

/// Everything the clock face draws for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockDigits {
    pub hours: DigitPair,
    pub minutes: DigitPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<DigitPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meridiem: Option<Meridiem>,
}

impl ClockDigits {
    /// Digits in display order: hours, minutes, then seconds when present.
    pub fn digits(&self) -> Vec<DigitValue> {
        let mut digits = vec![
            self.hours.tens,
            self.hours.ones,
            self.minutes.tens,
            self.minutes.ones,
        ];
        if let Some(seconds) = self.seconds {
            digits.push(seconds.tens);
            digits.push(seconds.ones);
        }
        digits
    }

    /// Meridiem text, empty in 24-hour mode.
    pub fn meridiem_str(&self) -> &'static str {
        self.meridiem.map(Meridiem::as_str).unwrap_or("")
    }
}

impl fmt::Display for ClockDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hours, self.minutes)?;
        if let Some(seconds) = self.seconds {
            write!(f, ":{}", seconds)?;
        }
        if let Some(meridiem) = self.meridiem {
            write!(f, " {}", meridiem)?;
        }
        Ok(())
    }
}

/// Month, day and year digits of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDigits {
    pub month: DigitPair,
    pub day: DigitPair,
    pub year: [DigitValue; 4],
}

impl CalendarDigits {
    /// Two-digit year as drawn on the segment calendar.
    pub fn short_year(&self) -> DigitPair {
        DigitPair {
            tens: self.year[2],
            ones: self.year[3],
        }
    }
}

impl fmt::Display for CalendarDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/", self.month, self.day)?;
        for digit in self.year {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
