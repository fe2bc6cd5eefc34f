//! Form domain layer
//!
//! Schema, field value objects, and the controller for the business
//! settings form.

mod field;
mod form_state;
mod options;
mod validation;
mod values;

pub use field::FormField;
pub use form_state::{BusinessForm, Form, SAVE_BUTTON_INDEX};
pub use options::CATEGORY_OPTIONS;
pub use values::SubmittedForm;

#[cfg(test)]
pub use options::option_index;
