//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    has_error: bool,
) {
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = Style::default().fg(Color::White);
    let placeholder_style = Style::default().fg(Color::DarkGray);
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let display_value = field.display_value();

    let content = if field.is_select() {
        let text = if display_value.is_empty() {
            Span::styled(field.placeholder, placeholder_style)
        } else {
            Span::styled(display_value, value_style)
        };
        // Arrow pinned to the right edge
        let inner_width = area.width.saturating_sub(2) as usize;
        let pad = inner_width.saturating_sub(text.width() + 2);
        Paragraph::new(Line::from(vec![
            text,
            Span::raw(" ".repeat(pad)),
            Span::styled("▾", Style::default().fg(Color::Gray)),
        ]))
    } else if field.is_files() {
        let button_style = if is_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Black).bg(Color::Gray)
        };
        let chosen = if display_value.is_empty() {
            Span::styled(field.placeholder, placeholder_style)
        } else {
            Span::styled(display_value, value_style)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(" Choose Files ", button_style),
            Span::raw(" "),
            chosen,
        ]))
    } else if display_value.is_empty() {
        if is_active {
            Paragraph::new(Line::from(vec![
                cursor,
                Span::styled(field.placeholder, placeholder_style),
            ]))
        } else {
            Paragraph::new(Span::styled(field.placeholder, placeholder_style))
        }
    } else if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, value_style),
            cursor,
        ]))
    };

    let title_style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw the line under a field: the error when there is one, else the help text
pub fn draw_field_message(frame: &mut Frame, area: Rect, field: &FormField, error: Option<&str>) {
    let line = match error {
        Some(message) => Line::from(Span::styled(message, Style::default().fg(Color::Red))),
        None => Line::from(Span::styled(
            field.description,
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}
