use anyhow::{Context, Result};
use log::info;
use retroclock_runtime::Config;
use std::path::Path;

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters::{
    present_config_init, present_config_path, present_config_show,
};
use crate::presentation::{CommandResultViewModel, Guidance, StatusBadge};
use crate::types::OutputFormat;

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    let created = if config_path.exists() && !force {
        false
    } else {
        Config::default()
            .save_to(config_path)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        info!("wrote default config to {}", config_path.display());
        true
    };

    let result = CommandResultViewModel::new(present_config_init(config_path, created));
    let result = if created {
        result
            .with_badge(StatusBadge::success("Config written"))
            .with_suggestion(Guidance::new("Start the clock").with_command("retroclock"))
    } else {
        result
            .with_badge(StatusBadge::info("Config unchanged"))
            .with_suggestion(
                Guidance::new("Reset it to the defaults")
                    .with_command("retroclock config init --force"),
            )
    };

    HandlerContext::new(OutputFormat::Plain).render(result)
}

pub fn show(ctx: &ExecutionContext, output: OutputFormat) -> Result<()> {
    // Fails early on a config that would not produce a valid clock.
    ctx.config().to_options(ctx.palette())?;
    ctx.config().clicker_color(ctx.palette())?;

    let view_model = present_config_show(ctx.config_path(), ctx.config());
    HandlerContext::new(output).render(CommandResultViewModel::new(view_model))
}

pub fn path(config_path: &Path) -> Result<()> {
    HandlerContext::new(OutputFormat::Plain)
        .render(CommandResultViewModel::new(present_config_path(config_path)))
}
