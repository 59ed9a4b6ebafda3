use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Hour presentation of the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DisplayFormat {
    #[serde(rename = "12h", alias = "12")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h", alias = "24")]
    TwentyFourHour,
}

impl DisplayFormat {
    /// The other format. Applying this twice yields the original value.
    pub fn toggled(self) -> Self {
        match self {
            DisplayFormat::TwelveHour => DisplayFormat::TwentyFourHour,
            DisplayFormat::TwentyFourHour => DisplayFormat::TwelveHour,
        }
    }

    pub fn is_twelve_hour(self) -> bool {
        self == DisplayFormat::TwelveHour
    }

    /// Button label as shown on the clock controls.
    pub fn label(self) -> &'static str {
        match self {
            DisplayFormat::TwelveHour => "12H",
            DisplayFormat::TwentyFourHour => "24H",
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayFormat::TwelveHour => write!(f, "12h"),
            DisplayFormat::TwentyFourHour => write!(f, "24h"),
        }
    }
}

impl FromStr for DisplayFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12h" | "12" => Ok(DisplayFormat::TwelveHour),
            "24h" | "24" => Ok(DisplayFormat::TwentyFourHour),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }
}

/// AM/PM indicator, only present in 12-hour output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn from_hour(hour: u32) -> Self {
        if hour >= 12 { Meridiem::Pm } else { Meridiem::Am }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
