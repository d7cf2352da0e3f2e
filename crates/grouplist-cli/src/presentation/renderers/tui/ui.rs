use grouplist_engine::visible_nodes;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::{AppState, LoadPhase, position_of};
use crate::presentation::presenters::{present_line, present_status_bar};
use crate::presentation::view_models::ListLineViewModel;
use crate::presentation::views::tui::{ListView, StatusBarView, ToastView};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .split(f.area());

    render_title(f, chunks[0], state);
    render_list(f, chunks[1], state);
    render_status_bar(f, chunks[2], state);

    if let Some(toast) = &state.toast {
        let view = ToastView::new(&toast.badge);
        let area = view.placement(chunks[1]);
        f.render_widget(view, area);
    }
}

fn render_title(f: &mut Frame, area: Rect, state: &AppState) {
    let title = Line::from(vec![
        Span::styled(" grouplist ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(state.title.as_str(), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn render_list(f: &mut Frame, area: Rect, state: &mut AppState) {
    state.hit_map.clear();

    let placeholder = match state.phase {
        LoadPhase::Loading => Some("Loading items..."),
        _ if state.nodes.is_empty() => Some("No valid items to display."),
        _ => None,
    };
    if let Some(message) = placeholder {
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(paragraph, area);
        return;
    }

    let visible = visible_nodes(&state.nodes, state.expansion.state());
    let selected = position_of(&visible, state.selected);

    state.viewport.resize(usize::from(area.height));
    if let Some(index) = selected {
        state.viewport.follow(index, &visible);
    }
    let slice = state.viewport.slice(&visible);

    let lines: Vec<ListLineViewModel> = visible[slice.rows.clone()]
        .iter()
        .map(present_line)
        .collect();
    let pinned = slice.pinned.map(|index| present_line(&visible[index]));
    let pinned_header = match &pinned {
        Some(ListLineViewModel::Header(header)) => Some(header),
        _ => None,
    };

    let mut y = area.y;
    if let Some(header) = pinned_header {
        state.hit_map.push((y, header.key));
        y += 1;
    }
    for line in &lines {
        state.hit_map.push((y, line.key()));
        y += 1;
    }

    let view = ListView::new(&lines)
        .pinned(pinned_header)
        .selected(selected.map(|index| visible[index].key()));
    f.render_widget(view, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let visible = state.visible();
    let selected = position_of(&visible, state.selected).map(|index| visible[index]);
    let model = present_status_bar(&state.nodes, state.expansion.state(), selected.as_ref());
    f.render_widget(StatusBarView::new(&model), area);
}
