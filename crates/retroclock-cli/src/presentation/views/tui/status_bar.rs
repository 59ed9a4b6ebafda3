//! Status Bar View Component
//!
//! Renders the bottom bar with the clock state and key bindings.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::{ClockStatus, StatusBarViewModel};

use super::status_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

fn status_label(status: ClockStatus) -> &'static str {
    match status {
        ClockStatus::Starting => "STARTING",
        ClockStatus::Running => "RUNNING",
        ClockStatus::Paused => "PAUSED",
    }
}

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::styled(
                format!("● {} ", status_label(self.model.status)),
                Style::default().fg(status_to_color(self.model.status)),
            ),
            Span::raw("| "),
            Span::raw(format!("{} ", self.model.format.label())),
            Span::raw("| "),
            Span::raw(self.model.color_name.clone()),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let mut help = vec![
            key("[f]"),
            Span::raw("ormat "),
            key("[c]"),
            Span::raw("olor "),
        ];
        if self.model.show_clicker {
            help.extend([
                key("[+/-]"),
                Span::raw("click "),
                key("[C]"),
                Span::raw("licker color "),
            ]);
        }
        help.extend([
            key("[p]"),
            Span::raw(if self.model.status == ClockStatus::Paused {
                "resume "
            } else {
                "ause "
            }),
            key("[r]"),
            Span::raw("esync "),
            key("[q]"),
            Span::raw("uit"),
        ]);
        Paragraph::new(Line::from(help)).render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::buffer_text;
    use retroclock_types::DisplayFormat;

    fn render(model: &StatusBarViewModel) -> String {
        let area = Rect::new(0, 0, 120, 3);
        let mut buf = Buffer::empty(area);
        StatusBarView::new(model).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_status_and_bindings() {
        let model = StatusBarViewModel {
            status: ClockStatus::Running,
            format: DisplayFormat::TwelveHour,
            color_name: "amber".to_string(),
            show_clicker: true,
        };
        let text = render(&model);
        assert!(text.contains("● RUNNING | 12H | amber"));
        assert!(text.contains("[+/-]click"));
        assert!(text.contains("[q]uit"));
    }

    #[test]
    fn test_clicker_bindings_hidden_without_clicker() {
        let model = StatusBarViewModel {
            status: ClockStatus::Paused,
            format: DisplayFormat::TwentyFourHour,
            color_name: "red".to_string(),
            show_clicker: false,
        };
        let text = render(&model);
        assert!(text.contains("PAUSED"));
        assert!(text.contains("[p]resume"));
        assert!(!text.contains("click"));
    }
}
