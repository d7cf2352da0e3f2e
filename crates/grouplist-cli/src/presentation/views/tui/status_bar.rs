//! Bottom bar with list totals, the selection hint and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        let mut status = vec![
            Span::raw(format!("Groups: {} ", self.model.group_count)),
            Span::raw("| "),
            Span::raw(format!("Items: {} ", self.model.item_count)),
            Span::raw("| "),
            Span::raw(format!("Expanded: {}", self.model.expanded_count)),
        ];
        if let Some(hint) = &self.model.hint {
            status.push(Span::raw(" | "));
            status.push(Span::styled(
                format!("[Enter] {}", hint),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help = Line::from(vec![
            Span::styled("[q]", key),
            Span::raw("uit "),
            Span::styled("[j/k]", key),
            Span::raw("move "),
            Span::styled("[space]", key),
            Span::raw("toggle"),
        ])
        .right_aligned();
        Paragraph::new(help).render(chunks[1], buf);
    }
}
