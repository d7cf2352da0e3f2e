use grouplist_types::NodeKey;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::presentation::formatters::{
    display_width, group_title, header_background, id_label, indicator, item_count_label,
    truncate_text, tui_color,
};
use crate::presentation::view_models::{HeaderViewModel, ListLineViewModel, RowViewModel};

/// The scrolled part of the list, with an optional pinned header on top.
pub struct ListView<'a> {
    lines: &'a [ListLineViewModel],
    pinned: Option<&'a HeaderViewModel>,
    selected: Option<NodeKey>,
}

impl<'a> ListView<'a> {
    pub fn new(lines: &'a [ListLineViewModel]) -> Self {
        Self {
            lines,
            pinned: None,
            selected: None,
        }
    }

    pub fn pinned(mut self, header: Option<&'a HeaderViewModel>) -> Self {
        self.pinned = header;
        self
    }

    pub fn selected(mut self, key: Option<NodeKey>) -> Self {
        self.selected = key;
        self
    }
}

impl Widget for ListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;

        if let Some(header) = self.pinned {
            if y < area.bottom() {
                let line_area = Rect::new(area.x, y, area.width, 1);
                render_header(header, line_area, buf);
                buf.set_style(line_area, Style::default().add_modifier(Modifier::UNDERLINED));
                y += 1;
            }
        }

        for line in self.lines {
            if y >= area.bottom() {
                break;
            }
            let line_area = Rect::new(area.x, y, area.width, 1);
            match line {
                ListLineViewModel::Header(header) => render_header(header, line_area, buf),
                ListLineViewModel::Row(row) => render_row(row, line_area, buf),
            }
            if self.selected == Some(line.key()) {
                buf.set_style(line_area, Style::default().add_modifier(Modifier::REVERSED));
            }
            y += 1;
        }
    }
}

fn render_header(header: &HeaderViewModel, area: Rect, buf: &mut Buffer) {
    buf.set_style(
        area,
        Style::default().bg(header_background()).fg(Color::Black),
    );

    let title = group_title(header.group_id);
    let count = item_count_label(header.item_count);
    let arrow = indicator(header.expanded);

    // swatch(2) + space + title + space + count, arrow on the right edge
    let used = 3 + display_width(&title) + 1 + display_width(&count) + 2;
    let padding = usize::from(area.width).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled("  ", Style::default().bg(tui_color(header.accent))),
        Span::raw(" "),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::raw(count),
        Span::raw(" ".repeat(padding)),
        Span::raw(" "),
        Span::raw(arrow),
    ]);
    buf.set_line(area.x, area.y, &line, area.width);
}

fn render_row(row: &RowViewModel, area: Rect, buf: &mut Buffer) {
    let index = format!(" {:>2} ", row.index);
    let id = id_label(row.id);

    // indent(4) + index box + gap(2), id on the right edge
    let fixed = 4 + display_width(&index) + 2 + 1 + display_width(&id);
    let room = usize::from(area.width).saturating_sub(fixed);
    let name = truncate_text(&row.name, room);
    let padding = room.saturating_sub(display_width(&name));

    let line = Line::from(vec![
        Span::raw("    "),
        Span::styled(
            index,
            Style::default().bg(tui_color(row.accent)).fg(Color::Black),
        ),
        Span::raw("  "),
        Span::raw(name),
        Span::raw(" ".repeat(padding)),
        Span::raw(" "),
        Span::styled(id, Style::default().fg(Color::DarkGray)),
    ]);
    buf.set_line(area.x, area.y, &line, area.width);
}
