use crate::{Error, Result};
use retroclock_types::{ClockOptions, ColorSelection, DisplayFormat, Palette};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "RETROCLOCK_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. RETROCLOCK_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.retroclock/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("retroclock").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".retroclock").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSection {
    pub color: String,
    pub format: DisplayFormat,
    pub show_seconds: bool,
    pub show_date: bool,
    pub blink_colon: bool,
    pub tick_interval_ms: u64,
    pub blink_interval_ms: u64,
}

impl Default for ClockSection {
    fn default() -> Self {
        let defaults = ClockOptions::default();
        Self {
            color: "red".to_string(),
            format: defaults.initial_format,
            show_seconds: defaults.show_seconds,
            show_date: defaults.show_date,
            blink_colon: defaults.blink_colon,
            tick_interval_ms: defaults.tick_interval.as_millis() as u64,
            blink_interval_ms: defaults.blink_interval.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickerSection {
    pub color: String,
}

impl Default for ClickerSection {
    fn default() -> Self {
        Self {
            color: "red".to_string(),
        }
    }
}

/// Persistent defaults. Command-line flags are layered on top by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockSection,
    #[serde(default)]
    pub clicker: ClickerSection,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validated clock options. Unknown colors and zero intervals are rejected.
    pub fn to_options(&self, palette: &Palette) -> Result<ClockOptions> {
        let clock = &self.clock;
        if clock.tick_interval_ms == 0 {
            return Err(Error::Config("tick_interval_ms must be positive".to_string()));
        }
        if clock.blink_interval_ms == 0 {
            return Err(Error::Config("blink_interval_ms must be positive".to_string()));
        }

        let options = ClockOptions {
            palette: palette.clone(),
            ..ClockOptions::default()
        };
        Ok(options
            .with_color(palette.resolve(&clock.color)?)
            .with_format(clock.format)
            .with_seconds(clock.show_seconds)
            .with_date(clock.show_date)
            .with_blink(clock.blink_colon)
            .with_intervals(
                Duration::from_millis(clock.tick_interval_ms),
                Duration::from_millis(clock.blink_interval_ms),
            ))
    }

    pub fn clicker_color(&self, palette: &Palette) -> Result<ColorSelection> {
        Ok(palette.resolve(&self.clicker.color)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default_matches_clock_defaults() -> Result<()> {
        let options = Config::default().to_options(&Palette::default())?;
        assert_eq!(options, ClockOptions::default());
        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.clock.color = "amber".to_string();
        config.clock.format = DisplayFormat::TwelveHour;
        config.clock.show_seconds = true;
        config.clicker.color = "cyan".to_string();

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let config: Config = toml::from_str("[clock]\nformat = \"12h\"\n")?;
        assert_eq!(config.clock.format, DisplayFormat::TwelveHour);
        assert_eq!(config.clock.color, "red");
        assert!(config.clock.blink_colon);
        assert_eq!(config.clicker, ClickerSection::default());
        Ok(())
    }

    #[test]
    fn test_to_options_resolves_colors() -> Result<()> {
        let palette = Palette::default();
        let mut config = Config::default();
        config.clock.color = "#00FFFF".to_string();
        config.clicker.color = "Magenta".to_string();

        let options = config.to_options(&palette)?;
        assert_eq!(options.initial_color.index(), 2);
        assert_eq!(config.clicker_color(&palette)?.index(), 4);
        Ok(())
    }

    #[test]
    fn test_to_options_rejects_unknown_color() {
        let mut config = Config::default();
        config.clock.color = "ultraviolet".to_string();
        let err = config.to_options(&Palette::default()).unwrap_err();
        assert!(matches!(err, Error::Types(_)));
        assert_eq!(err.to_string(), "Unknown color: ultraviolet");
    }

    #[test]
    fn test_to_options_rejects_zero_interval() {
        let mut config = Config::default();
        config.clock.blink_interval_ms = 0;
        assert!(matches!(
            config.to_options(&Palette::default()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/retroclock/custom.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/retroclock/custom.toml"));
        Ok(())
    }
}
