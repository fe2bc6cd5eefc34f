//! Business settings form rendering

use super::field_renderer::{draw_field, draw_field_message};
use crate::app::App;
use crate::state::{Form, SAVE_BUTTON_INDEX};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::preview::draw_carousel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Color,
    Frame,
};

/// Save button label
const SAVE_LABEL: &str = "Save";

/// Height of the carousel strip when there are previews
pub const CAROUSEL_HEIGHT: u16 = 7;

/// Screen regions of the form, indexed like the form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub fields: [Rect; SAVE_BUTTON_INDEX],
    pub messages: [Rect; SAVE_BUTTON_INDEX],
    pub carousel: Option<Rect>,
    pub save: Rect,
}

impl FormLayout {
    /// Field index under a screen position, Save button included
    pub fn field_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        if self.save.contains(pos) {
            return Some(SAVE_BUTTON_INDEX);
        }
        self.fields.iter().position(|r| r.contains(pos))
    }

    pub fn carousel_contains(&self, column: u16, row: u16) -> bool {
        self.carousel
            .is_some_and(|r| r.contains(Position::new(column, row)))
    }
}

/// Lay out the form: text fields and Save on the left, choices and logos on the right
pub fn form_layout(area: Rect, has_previews: bool) -> FormLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .spacing(2)
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name message
            Constraint::Min(6),                // Description
            Constraint::Length(1),             // Description message
            Constraint::Length(1),             // Gap
            Constraint::Length(BUTTON_HEIGHT), // Save
        ])
        .split(columns[0]);

    let carousel_height = if has_previews { CAROUSEL_HEIGHT } else { 0 };
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Industry
            Constraint::Length(1),               // Industry message
            Constraint::Length(3),               // Style
            Constraint::Length(1),               // Style message
            Constraint::Length(3),               // Logos
            Constraint::Length(1),               // Logos message
            Constraint::Length(carousel_height), // Carousel
            Constraint::Min(0),
        ])
        .split(columns[1]);

    let save_width = (SAVE_LABEL.chars().count() as u16 + 4).min(left[5].width);

    FormLayout {
        fields: [left[0], left[2], right[0], right[2], right[4]],
        messages: [left[1], left[3], right[1], right[3], right[5]],
        carousel: has_previews.then_some(right[6]),
        save: Rect {
            width: save_width,
            ..left[5]
        },
    }
}

/// Draw every field, its message line, the carousel, and the Save button
pub fn draw_settings_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let layout = form_layout(area, !app.state.previews.is_empty());
    let overlay_open = app.state.has_overlay();

    for index in 0..SAVE_BUTTON_INDEX {
        let Some(field) = form.get_field(index) else {
            continue;
        };
        let error = form.visible_error(index);
        let is_active = !overlay_open && form.active_field() == index;
        draw_field(
            frame,
            layout.fields[index],
            field,
            is_active,
            error.is_some(),
        );
        draw_field_message(frame, layout.messages[index], field, error.as_deref());
    }

    if let Some(carousel) = layout.carousel {
        draw_carousel(
            frame,
            carousel,
            &app.state.previews,
            app.state.previews_per_page,
        );
    }

    render_button(
        frame,
        layout.save,
        SAVE_LABEL,
        !overlay_open && form.is_buttons_row_active(),
        true,
        Some(Color::Green),
    );
}
