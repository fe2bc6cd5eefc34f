//! Submission of the settings form
//!
//! There is no backend yet: the local submitter serializes the payload and
//! logs it, and the app turns the receipt into a notification.

mod local;
mod traits;

pub use local::LocalSubmitter;
pub use traits::SubmitHandler;

#[cfg(test)]
pub use traits::MockSubmitHandler;
