use anyhow::{Context, Result};
use log::debug;
use retroclock_runtime::{Config, resolve_config_path};
use retroclock_types::{ClockOptions, ColorSelection, Palette};
use std::path::{Path, PathBuf};

use crate::args::{FaceArgs, RunArgs};

/// Config file, palette and the flag-over-config merge rules for one invocation.
pub struct ExecutionContext {
    config_path: PathBuf,
    config: Config,
    palette: Palette,
}

impl ExecutionContext {
    pub fn load(explicit_config: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_config)?;
        let config = Config::load_from(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
        debug!("config loaded from {}", config_path.display());

        Ok(Self {
            config_path,
            config,
            palette: Palette::default(),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn resolve_color(&self, name_or_hex: &str) -> Result<ColorSelection> {
        Ok(self.palette.resolve(name_or_hex)?)
    }

    /// Config defaults with any flags given on the command line layered on top.
    pub fn clock_options(&self, face: &FaceArgs) -> Result<ClockOptions> {
        let mut options = self.config.to_options(&self.palette)?;

        if let Some(format) = face.format {
            options = options.with_format(format.into());
        }
        if let Some(color) = &face.color {
            options = options.with_color(self.resolve_color(color)?);
        }
        if face.seconds {
            options = options.with_seconds(true);
        }
        if face.date {
            options = options.with_date(true);
        }
        if let Some(at) = face.at {
            options = options.with_initial_date(at);
        }
        Ok(options)
    }

    pub fn run_options(&self, args: &RunArgs) -> Result<ClockOptions> {
        let mut options = self.clock_options(&args.face)?;
        if args.no_blink {
            options = options.with_blink(false);
        }
        Ok(options)
    }

    pub fn clicker_color(&self, args: &RunArgs) -> Result<ColorSelection> {
        match &args.clicker_color {
            Some(color) => self.resolve_color(color),
            None => Ok(self.config.clicker_color(&self.palette)?),
        }
    }

    /// Explicit color, otherwise the configured clock color.
    pub fn face_color(&self, color: Option<&str>) -> Result<ColorSelection> {
        self.resolve_color(color.unwrap_or(&self.config.clock.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HourFormat;
    use retroclock_types::DisplayFormat;
    use tempfile::TempDir;

    fn context_with(config: &str) -> (TempDir, ExecutionContext) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, config).unwrap();
        let context = ExecutionContext::load(path.to_str()).unwrap();
        (dir, context)
    }

    #[test]
    fn test_flags_override_config() {
        let (_dir, context) = context_with("[clock]\nformat = \"12h\"\ncolor = \"cyan\"\n");

        let from_config = context.clock_options(&FaceArgs::default()).unwrap();
        assert_eq!(from_config.initial_format, DisplayFormat::TwelveHour);
        assert_eq!(from_config.initial_color.index(), 2);

        let face = FaceArgs {
            format: Some(HourFormat::TwentyFourHour),
            color: Some("amber".to_string()),
            seconds: true,
            ..FaceArgs::default()
        };
        let overridden = context.clock_options(&face).unwrap();
        assert_eq!(overridden.initial_format, DisplayFormat::TwentyFourHour);
        assert_eq!(overridden.initial_color.index(), 3);
        assert!(overridden.show_seconds);
    }

    #[test]
    fn test_unknown_color_flag_is_an_error() {
        let (_dir, context) = context_with("");
        let face = FaceArgs {
            color: Some("plaid".to_string()),
            ..FaceArgs::default()
        };
        let err = context.clock_options(&face).unwrap_err();
        assert_eq!(err.to_string(), "Unknown color: plaid");
    }

    #[test]
    fn test_no_blink_and_clicker_color() {
        let (_dir, context) = context_with("[clicker]\ncolor = \"green\"\n");
        let args = RunArgs {
            no_blink: true,
            ..RunArgs::default()
        };
        assert!(!context.run_options(&args).unwrap().blink_colon);
        assert_eq!(context.clicker_color(&args).unwrap().index(), 1);
    }
}
