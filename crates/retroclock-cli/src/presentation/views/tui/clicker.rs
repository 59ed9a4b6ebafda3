use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::SegmentArt;
use crate::presentation::view_models::ClickerViewModel;

use super::{art_lines, led_color};

/// Single-digit counter panel with its own LED color.
pub struct ClickerView<'a> {
    model: &'a ClickerViewModel,
}

impl<'a> ClickerView<'a> {
    pub fn new(model: &'a ClickerViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ClickerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" clicker ")
            .border_style(Style::default().fg(led_color(self.model.color.rgb)));
        let inner = block.inner(area);
        block.render(area, buf);

        let art = SegmentArt::for_digits([self.model.digit]);
        let mut lines = art_lines(&art, self.model.color.rgb);

        let enabled = Style::default().fg(Color::Yellow);
        let disabled = Style::default().fg(Color::DarkGray);
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(
                "[-]",
                if self.model.can_decrement { enabled } else { disabled },
            ),
            Span::raw(" "),
            Span::styled(
                "[+]",
                if self.model.can_increment { enabled } else { disabled },
            ),
        ]));

        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let mut padded = vec![Line::raw(""); top as usize];
        padded.extend(lines);

        Paragraph::new(padded)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
