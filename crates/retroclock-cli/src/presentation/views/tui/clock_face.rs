use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::SegmentArt;
use crate::presentation::view_models::ClockFaceViewModel;

use super::{art_lines, led_color};

pub struct ClockFaceView<'a> {
    model: &'a ClockFaceViewModel,
}

impl<'a> ClockFaceView<'a> {
    pub fn new(model: &'a ClockFaceViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ClockFaceView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = led_color(self.model.color.rgb);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" retroclock ")
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        block.render(area, buf);

        let art = SegmentArt::for_clock(&self.model.digits, self.model.colon_visible);
        let mut lines = art_lines(&art, self.model.color.rgb);

        if let Some(date) = &self.model.date {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                date.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }

        // Vertically center the face inside the block.
        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let mut padded = vec![Line::raw(""); top as usize];
        padded.extend(lines);

        Paragraph::new(padded)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
