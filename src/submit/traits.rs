//! Trait abstraction for form submission to enable mocking in tests

use super::local::SubmitReceipt;
use crate::state::SubmittedForm;
use anyhow::Result;
use async_trait::async_trait;

/// Destination of a validated settings form
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    /// Submit the serialized form
    async fn submit(&mut self, form: &SubmittedForm) -> Result<SubmitReceipt>;
}
