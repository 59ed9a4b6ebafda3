use anyhow::Result;
use retroclock_engine::PresentationState;
use retroclock_runtime::{SystemClock, TimeSource};

use super::HandlerContext;
use crate::args::FaceArgs;
use crate::context::ExecutionContext;
use crate::presentation::CommandResultViewModel;
use crate::presentation::presenters::present_clock_face;
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, face: &FaceArgs, output: OutputFormat) -> Result<()> {
    let options = ctx.clock_options(face)?;
    let now = options.initial_date.unwrap_or_else(|| SystemClock.now());
    let snapshot = PresentationState::new(&options, now).snapshot();

    HandlerContext::new(output).render(CommandResultViewModel::new(present_clock_face(&snapshot)))
}
