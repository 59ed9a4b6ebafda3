use retroclock_runtime::Config;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConfigShowViewModel {
    pub path: String,
    pub exists: bool,
    pub config: Config,
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub created: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfigPathViewModel {
    pub path: String,
    pub exists: bool,
}
