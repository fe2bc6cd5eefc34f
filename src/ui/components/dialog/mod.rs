//! Dialog components for TUI

mod base;
mod error_dialog;
mod file_picker_dialog;
mod select_menu;

pub use base::wrap_text;
pub use error_dialog::render_error_dialog;
pub use file_picker_dialog::render_file_picker;
pub use select_menu::render_select_menu;
