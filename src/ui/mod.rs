//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod preview;
mod widgets;

use crate::app::App;
use crate::state::{Form, Overlay};
use ratatui::{layout::Rect, Frame};

pub use forms::{form_layout, FormLayout};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area);
    forms::draw_settings_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    match &app.state.overlay {
        Overlay::None => {}
        Overlay::SelectMenu(menu) => {
            let field = app.state.form.get_field(menu.field_index);
            let title = field.map(|f| f.label).unwrap_or("Select");
            let current = field
                .and_then(|f| f.selected_option())
                .map(|o| o.value);
            components::render_select_menu(frame, title, menu, current);
        }
        Overlay::FilePicker(picker) => components::render_file_picker(frame, picker),
    }

    components::render_toasts(frame, app.state.toasts.toasts());

    // Errors stay above everything else
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, app.state.queued_errors());
    }
}

/// Area the form occupies on a screen of the given size
pub fn main_area(screen: Rect) -> Rect {
    let (_, main_area, _) = layout::create_layout(screen);
    main_area
}
