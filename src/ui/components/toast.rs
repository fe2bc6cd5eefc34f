//! Toast stack in the top-right corner

use super::dialog::wrap_text;
use crate::state::Toast;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 48;

/// Draw visible toasts, newest on top
pub fn render_toasts(frame: &mut Frame, toasts: &[Toast]) {
    let screen = frame.area();
    let width = TOAST_WIDTH.min(screen.width);
    let text_width = width.saturating_sub(4) as usize;
    let mut y = screen.y + 1;

    for toast in toasts.iter().rev() {
        let body = wrap_text(&toast.body, text_width);
        let height = body.len() as u16 + 3;
        if y + height > screen.y + screen.height {
            break;
        }

        let offset = toast.slide_offset(width);
        let x = screen.x + screen.width.saturating_sub(width) + offset;
        let visible_width = width.saturating_sub(offset);
        if visible_width < 3 {
            y += height;
            continue;
        }
        let area = Rect::new(x, y, visible_width, height);

        let mut lines = vec![Line::from(Span::styled(
            toast.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.extend(
            body.into_iter()
                .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Green)))),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title_bottom(Span::styled(
                format!(" {} ", toast.created_at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ))
            .style(Style::default().bg(Color::Black));

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(block), area);

        y += height;
    }
}
