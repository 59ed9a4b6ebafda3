use retroclock_runtime::ControllerState;
use retroclock_types::{CalendarDigits, ClockDigits, DigitValue, DisplayFormat, Rgb};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedColorViewModel {
    pub name: String,
    pub hex: String,
    #[serde(skip)]
    pub rgb: Rgb,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClockFaceViewModel {
    pub time: String,
    pub format: DisplayFormat,
    pub digits: ClockDigits,
    pub colon_visible: bool,
    pub color: LedColorViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DigitGalleryViewModel {
    pub digits: Vec<DigitEntryViewModel>,
    pub color: LedColorViewModel,
    /// Glyphs per printed row.
    #[serde(skip)]
    pub columns: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DigitEntryViewModel {
    pub digit: DigitValue,
    /// Lit segment letters, e.g. `"bc"` for 1.
    pub segments: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarViewModel {
    pub date: String,
    pub digits: CalendarDigits,
    pub color: LedColorViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClickerViewModel {
    pub count: u8,
    pub digit: DigitValue,
    pub can_increment: bool,
    pub can_decrement: bool,
    pub color: LedColorViewModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockStatus {
    Starting,
    Running,
    Paused,
}

impl From<ControllerState> for ClockStatus {
    fn from(state: ControllerState) -> Self {
        match state {
            ControllerState::Idle => ClockStatus::Starting,
            ControllerState::Scheduled => ClockStatus::Running,
            ControllerState::Suspended => ClockStatus::Paused,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub status: ClockStatus,
    pub format: DisplayFormat,
    pub color_name: String,
    pub show_clicker: bool,
}

/// Everything the interactive screen needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct TuiScreenViewModel {
    pub face: ClockFaceViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicker: Option<ClickerViewModel>,
    pub status_bar: StatusBarViewModel,
}
