//! Assertions over the CLI's JSON output.
//!
//! Every command prints a `CommandResult` envelope; these look inside its
//! `content`.

use anyhow::{Context, Result};
use predicates::prelude::*;
use serde_json::Value;

/// Assert the `time` string of a `show --output json` result.
pub fn assert_time(json: &Value, expected: &str) -> Result<()> {
    let time = json["content"]["time"]
        .as_str()
        .context("Expected 'content.time' string in JSON")?;

    if time != expected {
        anyhow::bail!("Expected time {}, got {}", expected, time);
    }

    Ok(())
}

/// Assert the palette name of the LED color in any result.
pub fn assert_color(json: &Value, expected: &str) -> Result<()> {
    let name = json["content"]["color"]["name"]
        .as_str()
        .context("Expected 'content.color.name' string in JSON")?;

    if name != expected {
        anyhow::bail!("Expected color {}, got {}", expected, name);
    }

    Ok(())
}

/// Assert the lit segment letters of one digit in a `digits --output json` result.
pub fn assert_digit_segments(json: &Value, digit: u64, expected: &str) -> Result<()> {
    let digits = json["content"]["digits"]
        .as_array()
        .context("Expected 'content.digits' array in JSON")?;

    let entry = digits
        .iter()
        .find(|entry| entry["digit"].as_u64() == Some(digit))
        .with_context(|| format!("Digit {} missing from gallery", digit))?;
    let segments = entry["segments"]
        .as_str()
        .with_context(|| format!("Digit {} has no segments", digit))?;

    if segments != expected {
        anyhow::bail!(
            "Digit {} lights {} but expected {}",
            digit,
            segments,
            expected
        );
    }

    Ok(())
}

/// Matches plain output whose readable line (below the art) is `time`.
pub fn shows_time(time: &str) -> impl Predicate<str> {
    predicate::str::contains(format!("\n\n{}\n", time))
}
