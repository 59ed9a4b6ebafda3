//! Fixed instants and config files shared by the CLI tests.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;

pub const MIDNIGHT: &str = "2024-01-01T00:00:00";
pub const BEFORE_MIDNIGHT: &str = "2024-06-15T23:59:00";
pub const AFTERNOON: &str = "2024-03-09T15:04:05";
pub const LEAP_DAY: &str = "2024-02-29";

pub const TWENTY_FOUR_HOUR_CYAN: &str = r#"[clock]
format = "24h"
color = "cyan"
"#;

pub const ZERO_TICK: &str = r#"[clock]
tick_interval_ms = 0
"#;

/// Parse one of the fixture instants.
pub fn instant(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .unwrap_or_else(|e| panic!("bad fixture instant {value}: {e}"))
}

pub fn write_config(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_instants_parse() {
        assert_eq!(instant(MIDNIGHT).hour(), 0);
        assert_eq!(instant(BEFORE_MIDNIGHT).minute(), 59);
        assert_eq!(instant(AFTERNOON).second(), 5);
    }
}
