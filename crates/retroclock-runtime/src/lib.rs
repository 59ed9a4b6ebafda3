// Runtime layer - owns the clock's moving parts (time sources, the refresh
// controller, the scheduler thread) and the on-disk configuration.

pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod time_source;

pub use config::{ClickerSection, ClockSection, Config, resolve_config_path};
pub use controller::{ControllerState, RefreshController};
pub use driver::{ClockCommand, ClockDriver, ClockEvent};
pub use error::{Error, Result};
pub use time_source::{AnchoredClock, ManualClock, SystemClock, TimeSource, time_source_for};
