//! Form rendering module
//!
//! - `field_renderer`: single field and message line
//! - `settings_form`: the business settings page layout

mod field_renderer;
mod settings_form;

pub use settings_form::{draw_settings_form, form_layout, FormLayout};
