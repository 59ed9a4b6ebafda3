mod context;

pub mod calendar;
pub mod config;
pub mod digits;
pub mod run;
pub mod show;

pub use context::HandlerContext;
