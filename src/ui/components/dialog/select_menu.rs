//! Option menu for the select fields

use super::base::{centered_rect, render_frame};
use crate::state::{SelectMenuState, CATEGORY_OPTIONS};
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the option list for a select field.
///
/// `current` is the value already chosen, marked with a check.
pub fn render_select_menu(
    frame: &mut Frame,
    title: &str,
    menu: &SelectMenuState,
    current: Option<&str>,
) {
    let height = (CATEGORY_OPTIONS.len() as u16 + 4).min(20);
    let area = centered_rect(frame.area(), 36, height);
    let inner = render_frame(frame, area, title, Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = CATEGORY_OPTIONS
        .iter()
        .map(|option| {
            let mark = if current == Some(option.value) {
                "✓ "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(Color::Green)),
                Span::raw(option.label),
            ]))
        })
        .collect();

    render_scrollable_list(frame, chunks[0], List::new(items), Some(menu.highlighted));

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" choose  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" close", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(hint, chunks[1]);
}
