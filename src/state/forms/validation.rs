//! Settings form schema and validation

use super::options::{option_index, CATEGORY_OPTIONS};
use super::values::{FormValues, RawFormValues};
use std::collections::BTreeMap;
use thiserror::Error;

pub const BUSINESS_NAME: &str = "business-name";
pub const BUSINESS_DESCRIPTION: &str = "business-description";
pub const INDUSTRY: &str = "industry";
pub const STYLE: &str = "style";
pub const IMAGES: &str = "images";

pub const BUSINESS_NAME_MAX: usize = 50;
pub const BUSINESS_DESCRIPTION_MAX: usize = 200;

const INDUSTRY_REQUIRED: &str = "Please select the Business' Industry.";
const STYLE_REQUIRED: &str = "Please select the Business' Style.";

/// A single field's validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("String must contain at least {min} character(s)")]
    TooShort { min: usize },
    #[error("String must contain at most {max} character(s)")]
    TooLong { max: usize },
    #[error("{0}")]
    Required(&'static str),
    #[error("Invalid option '{0}'")]
    InvalidOption(String),
}

/// Field name to error, ordered by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, FieldError>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: &'static str, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldError)> {
        self.errors.iter().map(|(k, v)| (*k, v))
    }
}

/// Check a string's length in characters against inclusive bounds
pub fn check_length(value: &str, min: usize, max: usize) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len < min {
        Err(FieldError::TooShort { min })
    } else if len > max {
        Err(FieldError::TooLong { max })
    } else {
        Ok(())
    }
}

/// Resolve a select value against the declared options
pub fn check_selection(value: &str, required: &'static str) -> Result<&'static str, FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required(required));
    }
    option_index(value)
        .map(|i| CATEGORY_OPTIONS[i].value)
        .ok_or_else(|| FieldError::InvalidOption(value.to_string()))
}

/// Validate a candidate set of field values.
///
/// Every field is checked, so the error map holds one entry per failing
/// field rather than stopping at the first.
pub fn validate(raw: &RawFormValues) -> Result<FormValues, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Err(e) = check_length(&raw.business_name, 1, BUSINESS_NAME_MAX) {
        errors.insert(BUSINESS_NAME, e);
    }
    if let Err(e) = check_length(&raw.business_description, 1, BUSINESS_DESCRIPTION_MAX) {
        errors.insert(BUSINESS_DESCRIPTION, e);
    }
    let industry = check_selection(&raw.industry, INDUSTRY_REQUIRED)
        .map_err(|e| errors.insert(INDUSTRY, e))
        .ok();
    let style = check_selection(&raw.style, STYLE_REQUIRED)
        .map_err(|e| errors.insert(STYLE, e))
        .ok();

    match (industry, style) {
        (Some(industry), Some(style)) if errors.is_empty() => Ok(FormValues {
            business_name: raw.business_name.clone(),
            business_description: raw.business_description.clone(),
            industry,
            style,
            images: raw.images.clone(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SelectedImage;

    fn valid_raw() -> RawFormValues {
        RawFormValues {
            business_name: "Acme Bakery".to_string(),
            business_description: "We bake bread.".to_string(),
            industry: "Food".to_string(),
            style: "Modern".to_string(),
            images: vec![],
        }
    }

    mod length_bounds {
        use super::*;

        #[test]
        fn test_business_name_bounds() {
            for len in 0..=60 {
                let raw = RawFormValues {
                    business_name: "a".repeat(len),
                    ..valid_raw()
                };
                let accepted = validate(&raw).is_ok();
                assert_eq!(accepted, (1..=50).contains(&len), "name length {len}");
            }
        }

        #[test]
        fn test_business_description_bounds() {
            for len in 0..=210 {
                let raw = RawFormValues {
                    business_description: "b".repeat(len),
                    ..valid_raw()
                };
                let accepted = validate(&raw).is_ok();
                assert_eq!(accepted, (1..=200).contains(&len), "description length {len}");
            }
        }

        #[test]
        fn test_length_counts_chars_not_bytes() {
            // 50 two-byte characters is still 50 characters
            assert!(check_length(&"é".repeat(50), 1, 50).is_ok());
            assert!(check_length(&"é".repeat(51), 1, 50).is_err());
        }

        #[test]
        fn test_whitespace_counts_as_content() {
            assert!(check_length(" ", 1, 50).is_ok());
        }

        #[test]
        fn test_messages() {
            assert_eq!(
                check_length("", 1, 50).unwrap_err().to_string(),
                "String must contain at least 1 character(s)"
            );
            assert_eq!(
                check_length(&"x".repeat(51), 1, 50).unwrap_err().to_string(),
                "String must contain at most 50 character(s)"
            );
        }
    }

    mod selections {
        use super::*;

        #[test]
        fn test_missing_industry_rejected() {
            let raw = RawFormValues {
                industry: String::new(),
                ..valid_raw()
            };
            let errors = validate(&raw).unwrap_err();
            assert_eq!(
                errors.get(INDUSTRY),
                Some(&FieldError::Required("Please select the Business' Industry."))
            );
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_missing_style_rejected() {
            let raw = RawFormValues {
                style: String::new(),
                ..valid_raw()
            };
            let errors = validate(&raw).unwrap_err();
            assert_eq!(
                errors.get(STYLE).map(ToString::to_string).as_deref(),
                Some("Please select the Business' Style.")
            );
        }

        #[test]
        fn test_undeclared_option_rejected() {
            let raw = RawFormValues {
                industry: "Mining".to_string(),
                ..valid_raw()
            };
            let errors = validate(&raw).unwrap_err();
            assert_eq!(
                errors.get(INDUSTRY),
                Some(&FieldError::InvalidOption("Mining".to_string()))
            );
        }
    }

    mod whole_form {
        use super::*;

        #[test]
        fn test_valid_form_yields_typed_values() {
            let values = validate(&valid_raw()).unwrap();
            assert_eq!(values.business_name, "Acme Bakery");
            assert_eq!(values.industry, "Food");
            assert_eq!(values.style, "Modern");
            assert!(values.images.is_empty());
        }

        #[test]
        fn test_images_are_optional_and_carried() {
            let raw = RawFormValues {
                images: vec![SelectedImage::new("/tmp/logo.png", 3)],
                ..valid_raw()
            };
            let values = validate(&raw).unwrap();
            assert_eq!(values.images.len(), 1);
        }

        #[test]
        fn test_empty_form_reports_every_field() {
            let errors = validate(&RawFormValues::default()).unwrap_err();
            assert_eq!(errors.len(), 4);
            for field in [BUSINESS_NAME, BUSINESS_DESCRIPTION, INDUSTRY, STYLE] {
                assert!(errors.contains(field), "missing error for {field}");
            }
            assert!(!errors.contains(IMAGES));
        }
    }
}
