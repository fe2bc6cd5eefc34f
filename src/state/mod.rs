//! Application state module

mod app_state;
mod file_picker;
mod forms;
mod preview;
mod toast;

pub use app_state::*;
pub use file_picker::*;
pub use forms::*;
pub use preview::*;
pub use toast::*;
