// Engine module - pure clock logic (segment table, time decomposition, display state)
// This layer sits between the domain types and the runtime scheduler; nothing here
// reads the system clock or touches a terminal.

pub mod calendar;
pub mod clicker;
pub mod decompose;
pub mod presentation;
pub mod segments;

pub use calendar::{decompose_date, format_date};
pub use clicker::Clicker;
pub use decompose::decompose;
pub use presentation::{PresentationSnapshot, PresentationState};
pub use segments::{SEGMENT_TABLE, digit_pattern, segment_pattern};
