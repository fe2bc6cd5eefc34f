//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a message dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint line shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Rect of the given size centered in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Clear `area` and draw the standard dialog frame, returning the inner area
pub fn render_frame(frame: &mut Frame, area: Rect, title: &str, border_color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Render a centered message dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let padding = 4u16;
    let max_line_width = config.max_width.saturating_sub(padding) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let dialog_width = (content_width + padding + 2).min(config.max_width);

    // Message lines + blank + hint, plus borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let dialog_height = (wrapped_lines.len() as u16 + hint_lines + 2).max(5);

    let dialog_area = centered_rect(frame.area(), dialog_width, dialog_height);
    let inner = render_frame(frame, dialog_area, config.title, config.border_color);

    let mut content: Vec<Line> = wrapped_lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::White))))
        .collect();

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let body = Paragraph::new(content).style(Style::default().bg(Color::Black));
    let body_area = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    frame.render_widget(body, body_area);
}

/// Wrap text on word boundaries to fit within `max_width` characters.
///
/// Words longer than a line are split.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        // Keep leading indentation (pretty-printed JSON)
        let indent: String = paragraph.chars().take_while(|c| *c == ' ').collect();
        let mut line_start = indent.chars().count();
        let mut current_line = indent;
        let mut current_len = line_start;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while !word.is_empty() {
                let needs_space = current_len > line_start;
                let room = max_width.saturating_sub(current_len + usize::from(needs_space));

                if word.len() <= room {
                    if needs_space {
                        current_line.push(' ');
                        current_len += 1;
                    }
                    current_line.extend(word.iter());
                    current_len += word.len();
                    word.clear();
                } else if needs_space || current_len >= max_width {
                    lines.push(std::mem::take(&mut current_line));
                    current_len = 0;
                    line_start = 0;
                } else {
                    let rest = word.split_off(room.max(1));
                    current_line.extend(word.iter());
                    lines.push(std::mem::take(&mut current_line));
                    current_len = 0;
                    line_start = 0;
                    word = rest;
                }
            }
        }
        if !current_line.trim().is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_unchanged() {
        assert_eq!(wrap_text("hello world", 40), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_on_word_boundary() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_indentation() {
        let lines = wrap_text("{\n  \"a\": 1\n}", 20);
        assert_eq!(lines, vec!["{", "  \"a\": 1", "}"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(centered_rect(area, 20, 20), area);
        assert_eq!(centered_rect(area, 4, 1), Rect::new(3, 2, 4, 1));
    }
}
