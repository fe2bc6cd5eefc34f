//! Application state definitions

use super::file_picker::FilePickerState;
use super::forms::{BusinessForm, Form, CATEGORY_OPTIONS};
use super::preview::{PreviewManager, SelectedImage};
use super::toast::ToastQueue;
use crate::config::MAX_PREVIEWS_PER_PAGE;
use std::collections::VecDeque;
use std::time::Duration;

/// Open option list for one of the select fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectMenuState {
    /// Form field index of the select being edited
    pub field_index: usize,
    /// Highlighted option index
    pub highlighted: usize,
}

impl SelectMenuState {
    pub fn move_down(&mut self) {
        if self.highlighted + 1 < CATEGORY_OPTIONS.len() {
            self.highlighted += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }
}

/// Modal layer drawn above the form
#[derive(Debug, Clone, Default)]
pub enum Overlay {
    #[default]
    None,
    SelectMenu(SelectMenuState),
    FilePicker(FilePickerState),
}

/// State of one form session
pub struct AppState {
    pub form: BusinessForm,
    pub previews: PreviewManager,
    pub overlay: Overlay,
    pub toasts: ToastQueue,
    /// Carousel cards per page
    pub previews_per_page: usize,
    errors: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Duration::from_secs(4), 3)
    }
}

impl AppState {
    pub fn new(toast_lifetime: Duration, previews_per_page: usize) -> Self {
        Self {
            form: BusinessForm::new(),
            previews: PreviewManager::default(),
            overlay: Overlay::None,
            toasts: ToastQueue::new(toast_lifetime),
            previews_per_page: previews_per_page.clamp(1, MAX_PREVIEWS_PER_PAGE),
            errors: VecDeque::new(),
        }
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Errors waiting behind the one on screen
    pub fn queued_errors(&self) -> usize {
        self.errors.len().saturating_sub(1)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Handle a file selection event: previews and form value are replaced
    pub fn select_images(&mut self, files: Vec<SelectedImage>) {
        self.previews.replace(&files);
        self.form.set_images(files);
    }

    /// Open the option list if the focused field is a select
    pub fn open_select_menu(&mut self) -> bool {
        let index = self.form.active_field();
        let Some(field) = self.form.get_field(index) else {
            return false;
        };
        if !field.is_select() {
            return false;
        }
        let highlighted = field
            .selected_option()
            .and_then(|o| CATEGORY_OPTIONS.iter().position(|c| c == o))
            .unwrap_or(0);
        self.overlay = Overlay::SelectMenu(SelectMenuState {
            field_index: index,
            highlighted,
        });
        true
    }

    /// Apply the highlighted option and close the menu
    pub fn confirm_select_menu(&mut self) {
        if let Overlay::SelectMenu(menu) = std::mem::take(&mut self.overlay) {
            self.form.choose_option(menu.field_index, menu.highlighted);
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    pub fn has_overlay(&self) -> bool {
        !matches!(self.overlay, Overlay::None)
    }

    /// Start over: clear values, previews, and overlays
    pub fn reset_session(&mut self) {
        self.form.reset();
        self.previews.clear();
        self.overlay = Overlay::None;
    }
}
