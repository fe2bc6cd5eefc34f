//! Reusable UI components

mod button;
mod dialog;
mod toast;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::{render_error_dialog, render_file_picker, render_select_menu};
pub use toast::render_toasts;
