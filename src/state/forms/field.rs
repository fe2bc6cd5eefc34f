//! Form field value objects

use super::options::{SelectOption, CATEGORY_OPTIONS};
use crate::state::SelectedImage;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Index into the option list, `None` until something is picked
    Select(Option<usize>),
    Files(Vec<SelectedImage>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    /// Schema name, also the key in the submitted payload
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Help text shown beneath the field when it has no visible error
    pub description: &'static str,
    pub value: FieldValue,
    pub is_multiline: bool,
    /// Set once the user has edited the field (or tried to submit)
    pub dirty: bool,
}

impl FormField {
    fn with_value(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        description: &'static str,
        value: FieldValue,
        is_multiline: bool,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            description,
            value,
            is_multiline,
            dirty: false,
        }
    }

    /// Create a new text field
    pub fn text(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        description: &'static str,
        is_multiline: bool,
    ) -> Self {
        Self::with_value(
            name,
            label,
            placeholder,
            description,
            FieldValue::Text(String::new()),
            is_multiline,
        )
    }

    /// Create a new single-select field over [`CATEGORY_OPTIONS`]
    pub fn select(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        description: &'static str,
    ) -> Self {
        Self::with_value(
            name,
            label,
            placeholder,
            description,
            FieldValue::Select(None),
            false,
        )
    }

    /// Create a new file list field
    pub fn files(name: &'static str, label: &'static str, description: &'static str) -> Self {
        Self::with_value(
            name,
            label,
            "No file chosen",
            description,
            FieldValue::Files(Vec::new()),
            false,
        )
    }

    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Select(_))
    }

    pub fn is_files(&self) -> bool {
        matches!(self.value, FieldValue::Files(_))
    }

    /// Get the text value (empty for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the selected option, if any
    pub fn selected_option(&self) -> Option<&'static SelectOption> {
        match self.value {
            FieldValue::Select(Some(i)) => CATEGORY_OPTIONS.get(i),
            _ => None,
        }
    }

    /// Selected option value, or `""` when nothing is selected
    pub fn selected_value(&self) -> &'static str {
        self.selected_option().map(|o| o.value).unwrap_or("")
    }

    /// Get the selected files (empty for non-file fields)
    pub fn as_files(&self) -> &[SelectedImage] {
        match &self.value {
            FieldValue::Files(files) => files,
            _ => &[],
        }
    }

    /// Select an option by value; unknown values leave the field unchanged
    #[cfg(test)]
    pub fn select_value(&mut self, value: &str) -> bool {
        match (&mut self.value, super::options::option_index(value)) {
            (FieldValue::Select(selected), Some(index)) => {
                *selected = Some(index);
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    /// Select the option at `index`
    pub fn select_index(&mut self, index: usize) {
        if let FieldValue::Select(selected) = &mut self.value {
            if index < CATEGORY_OPTIONS.len() {
                *selected = Some(index);
                self.dirty = true;
            }
        }
    }

    /// Move to the next option (wraps around)
    pub fn select_next(&mut self) {
        if let FieldValue::Select(selected) = self.value {
            let next = selected.map_or(0, |i| (i + 1) % CATEGORY_OPTIONS.len());
            self.select_index(next);
        }
    }

    /// Move to the previous option (wraps around)
    pub fn select_prev(&mut self) {
        if let FieldValue::Select(selected) = self.value {
            let prev = match selected {
                None | Some(0) => CATEGORY_OPTIONS.len() - 1,
                Some(i) => i - 1,
            };
            self.select_index(prev);
        }
    }

    /// Replace the file list
    pub fn set_files(&mut self, files: Vec<SelectedImage>) {
        if let FieldValue::Files(current) = &mut self.value {
            *current = files;
            self.dirty = true;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
            self.dirty = true;
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
            self.dirty = true;
        }
    }

    /// Get the display value for rendering (empty means "show the placeholder")
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select(_) => self
                .selected_option()
                .map(|o| o.label.to_string())
                .unwrap_or_default(),
            FieldValue::Files(files) => match files.len() {
                0 => String::new(),
                1 => files[0].name.clone(),
                n => format!("{n} files"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_field() -> FormField {
        FormField::text("business-name", "Name", "Name of your Business", "", false)
    }

    fn industry_field() -> FormField {
        FormField::select("industry", "Industry", "Select your Business' Industry", "")
    }

    #[test]
    fn test_text_input_marks_dirty() {
        let mut field = name_field();
        assert!(!field.dirty);
        field.push_char('A');
        field.push_char('b');
        assert_eq!(field.as_text(), "Ab");
        assert!(field.dirty);
        field.pop_char();
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_push_char_ignored_on_select() {
        let mut field = industry_field();
        field.push_char('x');
        assert_eq!(field.selected_value(), "");
        assert!(!field.dirty);
    }

    #[test]
    fn test_select_value_by_value() {
        let mut field = industry_field();
        assert!(field.select_value("Food"));
        assert_eq!(field.selected_value(), "Food");
        assert_eq!(field.display_value(), "Food & Drink");
        assert!(!field.select_value("Mining"));
        assert_eq!(field.selected_value(), "Food");
    }

    #[test]
    fn test_select_next_starts_at_first_and_wraps() {
        let mut field = industry_field();
        field.select_next();
        assert_eq!(field.selected_option(), CATEGORY_OPTIONS.first());
        field.select_index(CATEGORY_OPTIONS.len() - 1);
        field.select_next();
        assert_eq!(field.selected_option(), CATEGORY_OPTIONS.first());
    }

    #[test]
    fn test_select_prev_from_none_goes_to_last() {
        let mut field = industry_field();
        field.select_prev();
        assert_eq!(field.selected_option(), CATEGORY_OPTIONS.last());
    }

    #[test]
    fn test_files_display() {
        let mut field = FormField::files("images", "Business Logos", "");
        assert_eq!(field.display_value(), "");
        field.set_files(vec![SelectedImage::new("/a/logo.png", 1)]);
        assert_eq!(field.display_value(), "logo.png");
        field.set_files(vec![
            SelectedImage::new("/a/one.png", 1),
            SelectedImage::new("/a/two.png", 1),
        ]);
        assert_eq!(field.display_value(), "2 files");
        assert_eq!(field.as_files().len(), 2);
    }
}
