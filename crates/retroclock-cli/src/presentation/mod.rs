//! # Presentation Layer
//!
//! MVVM-style split between clock state and output:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> Console / JSON
//!                                                          |
//!                                                          +--> [ TUI Renderer ] <-- keys
//!                                                                     |
//!                                                                     v
//!                                                              [ View (Widget) ]
//! ```
//!
//! * `view_models/`: serializable data only. The JSON output is exactly these structs.
//! * `presenters/`: engine/runtime types to view models.
//! * `formatters/`: seven-segment glyph layout shared by console and TUI views.
//! * `views/`: `fmt::Display` console views and ratatui widgets.
//! * `renderers/`: console (plain/JSON) and the interactive TUI loop.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge};
