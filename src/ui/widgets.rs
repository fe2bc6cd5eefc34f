//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{List, ListState},
    Frame,
};

/// Highlight used by every picker-style list
pub fn list_highlight_style() -> Style {
    Style::default()
        .bg(Color::Cyan)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

/// Render a list that keeps the selected item in view.
///
/// `None` renders without a highlighted row (e.g. an empty filter result).
pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    list: List,
    selected_index: Option<usize>,
) {
    let mut list_state = ListState::default().with_selected(selected_index);
    let list = list.highlight_style(list_highlight_style());
    frame.render_stateful_widget(list, area, &mut list_state);
}
