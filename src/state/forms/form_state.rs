//! Form state management and the business settings form

use super::field::FormField;
use super::validation::{
    self, ValidationErrors, BUSINESS_DESCRIPTION, BUSINESS_NAME, IMAGES, INDUSTRY, STYLE,
};
use super::values::{FormValues, RawFormValues};
use crate::state::SelectedImage;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Index of the Save button row
pub const SAVE_BUTTON_INDEX: usize = 5;

/// Business account settings form
#[derive(Debug, Clone)]
pub struct BusinessForm {
    pub business_name: FormField,
    pub business_description: FormField,
    pub industry: FormField,
    pub style: FormField,
    pub images: FormField,
    pub active_field_index: usize,
    /// Result of the latest validation pass
    errors: ValidationErrors,
}

impl BusinessForm {
    pub fn new() -> Self {
        let mut form = Self {
            business_name: FormField::text(
                BUSINESS_NAME,
                "Name",
                "Name of your Business",
                "The name shown on your public profile.",
                false,
            ),
            business_description: FormField::text(
                BUSINESS_DESCRIPTION,
                "Description",
                "Tell others a little bit about your business",
                "A short pitch, up to 200 characters.",
                true,
            ),
            industry: FormField::select(
                INDUSTRY,
                "Industry",
                "Select your Business' Industry",
                "The market your business operates in.",
            ),
            style: FormField::select(
                STYLE,
                "Style",
                "Select your Business' style",
                "The look used for generated assets.",
            ),
            images: FormField::files(IMAGES, "Business Logos", "Enter to choose image files."),
            active_field_index: 0,
            errors: ValidationErrors::default(),
        };
        form.revalidate();
        form
    }

    /// Returns true if the Save button is currently focused
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == SAVE_BUTTON_INDEX
    }

    /// Snapshot the current values as a validation candidate
    pub fn raw_values(&self) -> RawFormValues {
        RawFormValues {
            business_name: self.business_name.as_text().to_string(),
            business_description: self.business_description.as_text().to_string(),
            industry: self.industry.selected_value().to_string(),
            style: self.style.selected_value().to_string(),
            images: self.images.as_files().to_vec(),
        }
    }

    /// Re-run the schema against the current values
    pub fn revalidate(&mut self) {
        self.errors = match validation::validate(&self.raw_values()) {
            Ok(_) => ValidationErrors::default(),
            Err(errors) => errors,
        };
    }

    /// Validate for submission; marks every field dirty so errors show
    pub fn validate_for_submit(&mut self) -> Result<FormValues, ValidationErrors> {
        for index in 0..SAVE_BUTTON_INDEX {
            if let Some(field) = self.field_mut(index) {
                field.dirty = true;
            }
        }
        let result = validation::validate(&self.raw_values());
        self.errors = result.as_ref().err().cloned().unwrap_or_default();
        result
    }

    /// All current errors, shown or not
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Error message to render under a field, if it should be visible
    pub fn visible_error(&self, index: usize) -> Option<String> {
        let field = self.get_field(index)?;
        if !field.dirty {
            return None;
        }
        self.errors.get(field.name).map(ToString::to_string)
    }

    /// Index of the first field with an error
    pub fn first_invalid_field(&self) -> Option<usize> {
        (0..SAVE_BUTTON_INDEX).find(|&i| {
            self.get_field(i)
                .is_some_and(|f| self.errors.contains(f.name))
        })
    }

    /// Type a character into the active text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
        self.revalidate();
    }

    /// Delete the last character of the active text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
        self.revalidate();
    }

    /// Cycle the active select forward
    pub fn select_next_option(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.select_next();
        }
        self.revalidate();
    }

    /// Cycle the active select backward
    pub fn select_prev_option(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.select_prev();
        }
        self.revalidate();
    }

    /// Set the option at `option_index` on the select at `field_index`
    pub fn choose_option(&mut self, field_index: usize, option_index: usize) {
        if let Some(field) = self.field_mut(field_index) {
            field.select_index(option_index);
        }
        self.revalidate();
    }

    /// Replace the selected image files
    pub fn set_images(&mut self, files: Vec<SelectedImage>) {
        self.images.set_files(files);
        self.revalidate();
    }

    /// Whether the active field is a multi-line text field
    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Clear all values and errors
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.business_name),
            1 => Some(&mut self.business_description),
            2 => Some(&mut self.industry),
            3 => Some(&mut self.style),
            4 => Some(&mut self.images),
            _ => None,
        }
    }
}

impl Default for BusinessForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for BusinessForm {
    fn field_count(&self) -> usize {
        6 // name, description, industry, style, images, save
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SAVE_BUTTON_INDEX);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field_index;
        self.field_mut(index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.business_name),
            1 => Some(&self.business_description),
            2 => Some(&self.industry),
            3 => Some(&self.style),
            4 => Some(&self.images),
            // Index 5 is the Save button, no FormField for it
            _ => None,
        }
    }
}
