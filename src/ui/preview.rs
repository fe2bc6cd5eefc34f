//! Logo preview carousel

use crate::config::MAX_PREVIEWS_PER_PAGE;
use crate::state::{format_size, PreviewManager};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw one card per visible preview with scroll arrows on either side
pub fn draw_carousel(frame: &mut Frame, area: Rect, previews: &PreviewManager, per_page: usize) {
    let per_page = per_page.clamp(1, MAX_PREVIEWS_PER_PAGE);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(rows[0]);

    let arrow = |enabled: bool, glyph: &'static str| {
        let color = if enabled { Color::Cyan } else { Color::DarkGray };
        let pad = columns[0].height.saturating_sub(1) / 2;
        let mut lines = vec![Line::from(""); pad as usize];
        lines.push(Line::from(Span::styled(glyph, Style::default().fg(color))));
        Paragraph::new(lines)
    };
    frame.render_widget(arrow(previews.can_scroll_prev(), "‹"), columns[0]);
    frame.render_widget(arrow(previews.can_scroll_next(per_page), "›"), columns[2]);

    let visible = previews.visible(per_page);
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, per_page as u32); per_page])
        .spacing(1)
        .split(columns[1]);

    for (preview, slot) in visible.iter().zip(slots.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                preview.format.label(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format_size(preview.size_bytes),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                preview.url(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .title(Span::styled(
                    preview.file_name.as_str(),
                    Style::default().fg(Color::White),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(card, *slot);
    }

    let position = Paragraph::new(Line::from(Span::styled(
        format!(
            "{} / {}",
            (previews.cursor() + 1).min(previews.len()),
            previews.len()
        ),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(position, rows[1]);
}
