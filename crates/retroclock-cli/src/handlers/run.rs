use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use log::info;
use retroclock_engine::Clicker;
use retroclock_runtime::{ClockDriver, RefreshController, time_source_for};

use crate::args::RunArgs;
use crate::context::ExecutionContext;
use crate::presentation::TuiRenderer;
use crate::presentation::renderers::tui::ClockApp;

pub fn handle(ctx: &ExecutionContext, args: &RunArgs) -> Result<()> {
    let options = ctx.run_options(args)?;
    let clicker = if args.no_clicker {
        None
    } else {
        Some(Clicker::new(ctx.palette().clone(), ctx.clicker_color(args)?))
    };

    if !std::io::stdout().is_terminal() {
        bail!("The interactive clock needs a terminal; use `retroclock show` for one-shot output");
    }

    let controller = RefreshController::new(&options, time_source_for(options.initial_date));
    let driver = ClockDriver::start(controller)?;
    info!(
        "clock started ({}, tick {:?}, blink {:?})",
        options.initial_format, options.tick_interval, options.blink_interval
    );

    TuiRenderer::new(ClockApp::new(clicker)).run(driver)
}
