//! TUI View Components
//!
//! Ratatui widgets for the interactive clock. Each one is a thin wrapper
//! around a view model; layout and color mapping happen here, nothing else.

pub mod clicker;
pub mod clock_face;
pub mod status_bar;

pub use clicker::ClickerView;
pub use clock_face::ClockFaceView;
pub use status_bar::StatusBarView;

use crate::presentation::formatters::{Cell, SegmentArt};
use crate::presentation::view_models::ClockStatus;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use retroclock_types::Rgb;

/// Ghost color for unlit segments.
const UNLIT: Color = Color::Rgb(0x30, 0x30, 0x30);

pub(crate) fn led_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(crate) fn status_to_color(status: ClockStatus) -> Color {
    match status {
        ClockStatus::Starting => Color::Cyan,
        ClockStatus::Running => Color::Green,
        ClockStatus::Paused => Color::Yellow,
    }
}

/// One `Line` per glyph row; unlit strokes stay visible as dim ghosts.
pub(crate) fn art_lines(art: &SegmentArt, rgb: Rgb) -> Vec<Line<'static>> {
    let lit = Style::default().fg(led_color(rgb));
    let unlit = Style::default().fg(UNLIT);

    art.rows()
        .iter()
        .map(|cells| {
            Line::from(
                cells
                    .iter()
                    .map(|cell: &Cell| {
                        let style = if cell.lit { lit } else { unlit };
                        Span::styled(cell.ch.to_string(), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
