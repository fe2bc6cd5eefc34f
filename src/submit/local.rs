//! Local submitter: serialize and log, no transport

use super::traits::SubmitHandler;
use crate::state::SubmittedForm;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};

/// What a submission produced
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    /// Pretty-printed JSON of the submitted form
    pub json: String,
    pub submitted_at: DateTime<Local>,
}

/// Submitter that only logs the payload
#[derive(Debug, Default)]
pub struct LocalSubmitter {
    submitted: usize,
}

impl LocalSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful submissions this session
    #[cfg(test)]
    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

#[async_trait]
impl SubmitHandler for LocalSubmitter {
    async fn submit(&mut self, form: &SubmittedForm) -> Result<SubmitReceipt> {
        let json = serde_json::to_string_pretty(form)?;
        self.submitted += 1;
        tracing::info!(submission = self.submitted, "data {json}");
        Ok(SubmitReceipt {
            json,
            submitted_at: Local::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn acme() -> SubmittedForm {
        SubmittedForm {
            business_name: "Acme Bakery".to_string(),
            business_description: "We bake bread.".to_string(),
            industry: "Food".to_string(),
            style: "Modern".to_string(),
            images: vec![],
        }
    }

    #[tokio::test]
    async fn test_submit_returns_pretty_json() {
        let mut submitter = LocalSubmitter::new();
        let receipt = submitter.submit(&acme()).await.unwrap();

        let expected = r#"{
  "business-name": "Acme Bakery",
  "business-description": "We bake bread.",
  "industry": "Food",
  "style": "Modern",
  "images": []
}"#;
        assert_eq!(receipt.json, expected);
        assert_eq!(submitter.submitted(), 1);
    }

    #[test]
    fn test_submit_always_succeeds_locally() {
        let mut submitter = LocalSubmitter::new();
        let form = SubmittedForm {
            images: vec!["logo.png".to_string(), "mark.svg".to_string()],
            ..acme()
        };
        let receipt = tokio_test::block_on(submitter.submit(&form)).unwrap();
        let parsed: SubmittedForm = serde_json::from_str(&receipt.json).unwrap();
        assert_eq!(parsed, form);
    }
}
