//! Image file picker dialog

use super::base::{centered_rect, render_frame};
use crate::state::{format_size, FilePickerState};
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the picker over the form
pub fn render_file_picker(frame: &mut Frame, picker: &FilePickerState) {
    let screen = frame.area();
    let area = centered_rect(
        screen,
        (screen.width * 3 / 4).max(40),
        (screen.height * 3 / 4).max(12),
    );
    let inner = render_frame(frame, area, "Choose Files", Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Current directory
            Constraint::Length(1), // Filter
            Constraint::Min(1),    // Entries
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let dir_line = Paragraph::new(Line::from(Span::styled(
        picker.dir.display().to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(dir_line, chunks[0]);

    let filter_line = if picker.filter.is_empty() {
        Line::from(Span::styled(
            "Type to filter",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(Color::DarkGray)),
            Span::styled(&picker.filter, Style::default().fg(Color::Yellow)),
        ])
    };
    frame.render_widget(Paragraph::new(filter_line), chunks[1]);

    let entries = picker.filtered_entries();
    if entries.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No matching files",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(empty, chunks[2]);
    } else {
        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| {
                let (mark, name, style) = if entry.is_dir {
                    (
                        "    ",
                        format!("{}/", entry.name),
                        Style::default().fg(Color::Blue),
                    )
                } else {
                    let mark = if picker.is_marked(&entry.path) {
                        "[x] "
                    } else {
                        "[ ] "
                    };
                    let color = if entry.looks_like_image() {
                        Color::Cyan
                    } else {
                        Color::Gray
                    };
                    (mark, entry.name.clone(), Style::default().fg(color))
                };

                let mut spans = vec![
                    Span::styled(mark, Style::default().fg(Color::Green)),
                    Span::styled(name, style),
                ];
                if !entry.is_dir {
                    spans.push(Span::styled(
                        format!("  {}", format_size(entry.size_bytes)),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        render_scrollable_list(
            frame,
            chunks[2],
            List::new(items),
            Some(picker.selected_index),
        );
    }

    let marked = picker.marked.len();
    let mut hints = vec![
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::styled(" mark  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" open/choose  ", Style::default().fg(Color::DarkGray)),
        Span::styled("←", Style::default().fg(Color::Cyan)),
        Span::styled(" up  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ];
    if marked > 0 {
        hints.push(Span::styled(
            format!("  {marked} marked"),
            Style::default().fg(Color::Green),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(hints)), chunks[3]);
}
