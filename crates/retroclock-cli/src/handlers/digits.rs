use anyhow::Result;
use terminal_size::{Width, terminal_size};

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::CommandResultViewModel;
use crate::presentation::formatters::GLYPH_WIDTH;
use crate::presentation::presenters::present_digit_gallery;
use crate::types::OutputFormat;

const ALL_DIGITS: usize = 10;
const HALF_ROW: usize = 5;

pub fn handle(ctx: &ExecutionContext, color: Option<&str>, output: OutputFormat) -> Result<()> {
    let selection = ctx.face_color(color)?;
    let color = ctx.palette().color(selection);
    let gallery = present_digit_gallery(color, gallery_columns());

    HandlerContext::new(output).render(CommandResultViewModel::new(gallery))
}

fn strip_width(glyphs: usize) -> usize {
    glyphs * GLYPH_WIDTH + glyphs.saturating_sub(1)
}

/// Ten glyphs per row, or two rows of five on a terminal too narrow for that.
fn gallery_columns() -> usize {
    match terminal_size() {
        Some((Width(width), _)) if usize::from(width) < strip_width(ALL_DIGITS) => HALF_ROW,
        _ => ALL_DIGITS,
    }
}
