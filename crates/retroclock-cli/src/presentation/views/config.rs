use std::fmt;

use crate::presentation::view_models::{
    ColorMode, ConfigInitViewModel, ConfigPathViewModel, ConfigShowViewModel, CreateView,
};

impl CreateView for ConfigShowViewModel {
    fn create_view<'a>(&'a self, _mode: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigShowView { data: self })
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

impl CreateView for ConfigPathViewModel {
    fn create_view<'a>(&'a self, _mode: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigPathView { data: self })
    }
}

struct ConfigShowView<'a> {
    data: &'a ConfigShowViewModel,
}

impl<'a> fmt::Display for ConfigShowView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.exists {
            writeln!(f, "# {}", self.data.path)?;
        } else {
            writeln!(f, "# {} (not found, showing defaults)", self.data.path)?;
        }
        let body = toml::to_string_pretty(&self.data.config).map_err(|_| fmt::Error)?;
        write!(f, "{}", body)
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.created {
            writeln!(f, "Wrote default config to {}", self.data.path)
        } else {
            writeln!(f, "Config already exists at {}", self.data.path)
        }
    }
}

struct ConfigPathView<'a> {
    data: &'a ConfigPathViewModel,
}

impl<'a> fmt::Display for ConfigPathView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.path)
    }
}
