//! Candidate, validated, and submitted shapes of the settings form

use crate::state::SelectedImage;
use serde::{Deserialize, Serialize};

/// Field values exactly as entered; unselected options are empty strings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFormValues {
    pub business_name: String,
    pub business_description: String,
    pub industry: String,
    pub style: String,
    pub images: Vec<SelectedImage>,
}

/// Values that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub business_name: String,
    pub business_description: String,
    pub industry: &'static str,
    pub style: &'static str,
    pub images: Vec<SelectedImage>,
}

/// Serializable form payload; files are reduced to their names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedForm {
    #[serde(rename = "business-name")]
    pub business_name: String,
    #[serde(rename = "business-description")]
    pub business_description: String,
    pub industry: String,
    pub style: String,
    pub images: Vec<String>,
}

impl From<&FormValues> for SubmittedForm {
    fn from(values: &FormValues) -> Self {
        Self {
            business_name: values.business_name.clone(),
            business_description: values.business_description.clone(),
            industry: values.industry.to_string(),
            style: values.style.to_string(),
            images: values.images.iter().map(|i| i.name.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn values_with_images(images: Vec<SelectedImage>) -> FormValues {
        FormValues {
            business_name: "Acme Bakery".to_string(),
            business_description: "We bake bread.".to_string(),
            industry: "Food",
            style: "Modern",
            images,
        }
    }

    #[test]
    fn test_submitted_form_uses_hyphenated_keys() {
        let submitted = SubmittedForm::from(&values_with_images(vec![]));
        let value = serde_json::to_value(&submitted).unwrap();

        assert_eq!(
            value,
            json!({
                "business-name": "Acme Bakery",
                "business-description": "We bake bread.",
                "industry": "Food",
                "style": "Modern",
                "images": [],
            })
        );
    }

    #[test]
    fn test_images_reduced_to_names_in_order() {
        let submitted = SubmittedForm::from(&values_with_images(vec![
            SelectedImage::new("/tmp/logos/b.png", 10),
            SelectedImage::new("/tmp/logos/a.jpg", 20),
        ]));
        assert_eq!(submitted.images, vec!["b.png", "a.jpg"]);
    }

    #[test]
    fn test_raw_default_is_unselected() {
        let raw = RawFormValues::default();
        assert!(raw.industry.is_empty());
        assert!(raw.style.is_empty());
        assert!(raw.images.is_empty());
    }
}
