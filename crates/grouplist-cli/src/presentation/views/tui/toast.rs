use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::status_level_to_color;
use crate::presentation::view_models::StatusBadge;

/// One-shot notification drawn over the list.
pub struct ToastView<'a> {
    badge: &'a StatusBadge,
}

impl<'a> ToastView<'a> {
    pub fn new(badge: &'a StatusBadge) -> Self {
        Self { badge }
    }

    /// Where the toast goes inside `area`: bottom-centered, as wide as the
    /// message allows.
    pub fn placement(&self, area: Rect) -> Rect {
        let text_width = u16::try_from(self.badge.label.chars().count()).unwrap_or(u16::MAX);
        let width = text_width.saturating_add(4).min(area.width);
        let height = 3.min(area.height);
        let x = area.x + (area.width - width) / 2;
        let y = area.bottom().saturating_sub(height + 1).max(area.y);
        Rect::new(x, y, width, height)
    }
}

impl Widget for ToastView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.badge.level);
        Clear.render(area, buf);
        Paragraph::new(self.badge.label.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .render(area, buf);
    }
}
