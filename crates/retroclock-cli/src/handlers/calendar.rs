use anyhow::Result;
use chrono::NaiveDateTime;
use retroclock_runtime::{SystemClock, TimeSource};

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::CommandResultViewModel;
use crate::presentation::presenters::present_calendar;
use crate::types::OutputFormat;

pub fn handle(
    ctx: &ExecutionContext,
    color: Option<&str>,
    at: Option<NaiveDateTime>,
    output: OutputFormat,
) -> Result<()> {
    let selection = ctx.face_color(color)?;
    let date = at.unwrap_or_else(|| SystemClock.now()).date();
    let calendar = present_calendar(date, ctx.palette().color(selection));

    HandlerContext::new(output).render(CommandResultViewModel::new(calendar))
}
