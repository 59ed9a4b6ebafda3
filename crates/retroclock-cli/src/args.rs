use crate::types::{HourFormat, LogLevel, OutputFormat};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "retroclock")]
#[command(about = "Retro seven-segment clock for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Log level (defaults to RUST_LOG, then warn)"
    )]
    pub log_level: Option<LogLevel>,

    #[arg(
        long,
        global = true,
        help = "Append logs to this file instead of stderr (required for logs while the clock is open)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Config file path (defaults to RETROCLOCK_CONFIG, then the user config directory)"
    )]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive clock (default)")]
    Run(RunArgs),

    #[command(about = "Print the time once as seven-segment digits")]
    Show {
        #[command(flatten)]
        face: FaceArgs,

        #[arg(long, default_value = "plain")]
        output: OutputFormat,
    },

    #[command(about = "Print the 0-9 digit gallery")]
    Digits {
        #[arg(long, help = "LED color: palette name or #rrggbb")]
        color: Option<String>,

        #[arg(long, default_value = "plain")]
        output: OutputFormat,
    },

    #[command(about = "Print a date as MM/DD/YY seven-segment digits")]
    Calendar {
        #[arg(long, help = "LED color: palette name or #rrggbb")]
        color: Option<String>,

        #[arg(long, value_parser = parse_datetime, help = "Date to show instead of today")]
        at: Option<NaiveDateTime>,

        #[arg(long, default_value = "plain")]
        output: OutputFormat,
    },

    #[command(about = "Manage the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Write a config file with the default settings")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },

    #[command(about = "Print the effective config")]
    Show {
        #[arg(long, default_value = "plain")]
        output: OutputFormat,
    },

    #[command(about = "Print the resolved config file path")]
    Path,
}

/// Clock face flags shared by `run` and `show`. Unset flags fall back to the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct FaceArgs {
    #[arg(long, help = "Hour format")]
    pub format: Option<HourFormat>,

    #[arg(long, help = "LED color: palette name or #rrggbb")]
    pub color: Option<String>,

    #[arg(long, help = "Show seconds")]
    pub seconds: bool,

    #[arg(long, help = "Show the date under the time")]
    pub date: bool,

    #[arg(
        long,
        value_parser = parse_datetime,
        help = "Start from this local time (YYYY-MM-DDTHH:MM[:SS]) instead of now"
    )]
    pub at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub face: FaceArgs,

    #[arg(long, help = "Keep the colon lit")]
    pub no_blink: bool,

    #[arg(long, help = "Hide the clicker demo")]
    pub no_clicker: bool,

    #[arg(long, help = "Clicker LED color: palette name or #rrggbb")]
    pub clicker_color: Option<String>,
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a local timestamp; a bare date means midnight.
pub fn parse_datetime(text: &str) -> Result<NaiveDateTime, String> {
    let text = text.trim();
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        && let Some(midnight) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(midnight);
    }
    Err(format!(
        "invalid timestamp '{}' (expected YYYY-MM-DDTHH:MM[:SS])",
        text
    ))
}
