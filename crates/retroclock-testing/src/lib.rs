//! Testing infrastructure for retroclock integration tests.
//!
//! - `TestWorld`: an isolated config directory plus CLI execution
//! - `assertions`: checks on the JSON the CLI prints
//! - `fixtures`: fixed instants and config files

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
