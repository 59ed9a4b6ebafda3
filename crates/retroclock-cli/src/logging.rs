use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

use crate::types::LogLevel;

/// Where log records go for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink<'a> {
    Stderr,
    File(&'a Path),
    /// The alternate screen owns the terminal; nothing may write to it.
    Disabled,
}

impl<'a> LogSink<'a> {
    pub fn select(log_file: Option<&'a Path>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => LogSink::File(path),
            (None, true) => LogSink::Disabled,
            (None, false) => LogSink::Stderr,
        }
    }
}

/// Installs the global logger. An explicit level wins over `RUST_LOG`.
pub fn init(level: Option<LogLevel>, sink: LogSink<'_>) -> Result<()> {
    if sink == LogSink::Disabled {
        return Ok(());
    }

    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level.to_filter());
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };

    if let LogSink::File(path) = sink {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
        builder.write_style(env_logger::WriteStyle::Never);
    }

    // A second init (e.g. in tests) keeps the first logger.
    let _ = builder.try_init();
    Ok(())
}
