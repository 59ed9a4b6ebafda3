use retroclock_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigPathViewModel, ConfigShowViewModel,
};

pub fn present_config_show(path: &Path, config: &Config) -> ConfigShowViewModel {
    ConfigShowViewModel {
        path: path.display().to_string(),
        exists: path.exists(),
        config: config.clone(),
    }
}

pub fn present_config_init(path: &Path, created: bool) -> ConfigInitViewModel {
    ConfigInitViewModel {
        path: path.display().to_string(),
        created,
    }
}

pub fn present_config_path(path: &Path) -> ConfigPathViewModel {
    ConfigPathViewModel {
        path: path.display().to_string(),
        exists: path.exists(),
    }
}
