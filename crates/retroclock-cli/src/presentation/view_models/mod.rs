pub mod clock;
pub mod common;
pub mod config;
pub mod result;

use std::fmt;

pub use clock::{
    CalendarViewModel, ClickerViewModel, ClockFaceViewModel, ClockStatus, DigitEntryViewModel,
    DigitGalleryViewModel, LedColorViewModel, StatusBarViewModel, TuiScreenViewModel,
};
pub use common::{ColorMode, Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigPathViewModel, ConfigShowViewModel};
pub use result::CommandResultViewModel;

/// Bridge from a view model to its console view.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ColorMode) -> Box<dyn fmt::Display + 'a>;
}
