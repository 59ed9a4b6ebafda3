// retroclock CLI
//
// Layering: retroclock-types (domain values) -> retroclock-engine (pure clock
// logic) -> retroclock-runtime (time sources, scheduler thread, config) -> this
// crate (argument parsing, logging, console and TUI presentation).

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, FaceArgs, RunArgs, parse_datetime};
pub use commands::run;
