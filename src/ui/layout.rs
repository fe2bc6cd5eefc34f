//! Layout components (header, status bar)

use crate::app::App;
use crate::state::{Form, Overlay, SAVE_BUTTON_INDEX};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header height (title + subtitle + bottom border)
pub const HEADER_HEIGHT: u16 = 3;

const SELECT_MENU_HINTS: &str = "↑/↓ j/k:nav  Enter:choose  Esc:close";
const FILE_PICKER_HINTS: &str =
    "↑/↓:nav  Space:mark  Enter:open/choose  ←:up  type:filter  Esc:cancel";

/// Split the screen into header, main content, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Main content
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the page header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Manage your Business",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This is how others will see you on the site.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Form validity
    let error_count = app.state.form.errors().len();
    let validity = if error_count == 0 {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(validity);

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    if !app.state.toasts.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!(
                "{} shown  {}:copy  Esc:dismiss",
                app.state.toasts.len(),
                crate::platform::COPY_SHORTCUT
            ),
            Style::default().fg(Color::Gray),
        ));
    }

    if !app.state.previews.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("🖼 {}", app.state.previews.len()),
            Style::default().fg(Color::Blue),
        ));
    }

    let quit_hint = " ^C:quit ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever has focus
fn get_hints(app: &App) -> String {
    let save = crate::platform::SAVE_SHORTCUT;
    match &app.state.overlay {
        Overlay::SelectMenu(_) => SELECT_MENU_HINTS.to_string(),
        Overlay::FilePicker(_) => FILE_PICKER_HINTS.to_string(),
        Overlay::None => {
            let form = &app.state.form;
            let index = form.active_field();
            if index == SAVE_BUTTON_INDEX {
                return format!("Tab:next  Enter:save  {save}:save");
            }
            match form.get_field(index) {
                Some(f) if f.is_select() => format!("Enter:open  ←/→:cycle  {save}:save"),
                Some(f) if f.is_files() => {
                    format!("Enter:choose files  ←/→:carousel  Del:clear  {save}:save")
                }
                Some(f) if f.is_multiline => format!("Enter:newline  Tab:next  {save}:save"),
                _ => format!("Tab:next  {save}:save"),
            }
        }
    }
}
