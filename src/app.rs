//! Application state and core logic

use crate::config::SettingsConfig;
use crate::state::{
    load_selection, AppState, FilePickerState, Form, Overlay, PickerOutcome, SubmittedForm,
};
use crate::submit::{LocalSubmitter, SubmitHandler};
use crate::ui::FormLayout;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::path::PathBuf;

/// Title of the toast raised by a successful submit
pub const SUBMIT_TOAST_TITLE: &str = "You submitted the following values:";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: SettingsConfig,
    /// Where validated forms are sent
    submitter: Box<dyn SubmitHandler>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Write config changes back to disk
    persist_config: bool,
}

impl App {
    /// Create the app with the local submitter
    pub fn new(config: SettingsConfig) -> Self {
        let mut app = Self::with_submitter(config, Box::new(LocalSubmitter::new()));
        app.persist_config = true;
        app
    }

    /// Create the app with a custom submit handler; config changes stay in memory
    pub fn with_submitter(config: SettingsConfig, submitter: Box<dyn SubmitHandler>) -> Self {
        let state = AppState::new(config.toast_duration(), config.previews_per_page());
        Self {
            state,
            config,
            submitter,
            quit: false,
            status_message: None,
            terminal_size: None,
            persist_config: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.toasts.prune();
    }

    /// Whether the UI needs fast redraws
    pub fn is_animating(&self) -> bool {
        self.state.toasts.is_animating()
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Release everything held by the form session
    pub fn end_session(&mut self) {
        self.state.reset_session();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            // Ctrl+S saves from anywhere
            KeyCode::Char('s') if ctrl => {
                self.submit().await?;
                return Ok(());
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_last_toast();
                return Ok(());
            }
            _ => {}
        }

        match self.state.overlay {
            Overlay::None => self.handle_form_key(key).await?,
            Overlay::SelectMenu(_) => self.handle_select_menu_key(key),
            Overlay::FilePicker(_) => self.handle_file_picker_key(key),
        }
        Ok(())
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let form = &self.state.form;
        let on_save = form.is_buttons_row_active();
        let (is_select, is_files) = form
            .get_field(form.active_field())
            .map(|f| (f.is_select(), f.is_files()))
            .unwrap_or((false, false));
        let is_text = !on_save && !is_select && !is_files;
        let typing = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            KeyCode::Esc => self.state.toasts.dismiss_all(),
            KeyCode::Enter if on_save => self.submit().await?,
            KeyCode::Enter if is_select => {
                self.state.open_select_menu();
            }
            KeyCode::Enter if is_files => self.open_file_picker(),
            KeyCode::Enter => {
                // Enter in description field adds newline
                if self.state.form.is_active_field_multiline() {
                    self.state.form.input_char('\n');
                } else {
                    self.state.form.next_field();
                }
            }
            KeyCode::Right if is_select => self.state.form.select_next_option(),
            KeyCode::Left if is_select => self.state.form.select_prev_option(),
            KeyCode::Right if is_files => self.state.previews.next(),
            KeyCode::Left if is_files => self.state.previews.prev(),
            KeyCode::Delete if is_files => {
                self.state.select_images(Vec::new());
                self.status_message = Some("Selection cleared".to_string());
            }
            KeyCode::Char(c) if is_text && typing => self.state.form.input_char(c),
            KeyCode::Backspace if is_text => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    fn handle_select_menu_key(&mut self, key: KeyEvent) {
        let Overlay::SelectMenu(menu) = &mut self.state.overlay else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => menu.move_up(),
            KeyCode::Down | KeyCode::Char('j') => menu.move_down(),
            KeyCode::Enter => self.state.confirm_select_menu(),
            KeyCode::Esc => self.state.close_overlay(),
            _ => {}
        }
    }

    fn handle_file_picker_key(&mut self, key: KeyEvent) {
        let Overlay::FilePicker(picker) = &mut self.state.overlay else {
            return;
        };
        let result = match key.code {
            KeyCode::Esc => {
                self.state.close_overlay();
                return;
            }
            KeyCode::Up => {
                picker.move_up();
                Ok(())
            }
            KeyCode::Down => {
                picker.move_down();
                Ok(())
            }
            KeyCode::Char(' ') => {
                picker.toggle_mark();
                Ok(())
            }
            KeyCode::Left => picker.go_up(),
            KeyCode::Backspace if picker.filter.is_empty() => picker.go_up(),
            KeyCode::Backspace => {
                picker.pop_filter_char();
                Ok(())
            }
            KeyCode::Char(c) => {
                picker.push_filter_char(c);
                Ok(())
            }
            KeyCode::Enter => match picker.confirm() {
                Ok(PickerOutcome::Navigated | PickerOutcome::Empty) => Ok(()),
                Ok(PickerOutcome::Selected(paths)) => {
                    let dir = picker.dir.clone();
                    self.state.close_overlay();
                    self.apply_selection(&paths, dir);
                    return;
                }
                Err(e) => Err(e),
            },
            _ => Ok(()),
        };

        if let Err(e) = result {
            self.push_error(e.to_string());
        }
    }

    /// Open the image picker in the configured directory
    fn open_file_picker(&mut self) {
        let dir = self.config.image_dir_or_default();
        match FilePickerState::open(dir, self.config.show_hidden_files()) {
            Ok(picker) => self.state.overlay = Overlay::FilePicker(picker),
            Err(e) => self.push_error(e.to_string()),
        }
    }

    /// Replace the form images with the chosen files
    fn apply_selection(&mut self, paths: &[PathBuf], dir: PathBuf) {
        let files = match load_selection(paths) {
            Ok(files) => files,
            Err(e) => {
                self.push_error(e.to_string());
                return;
            }
        };

        let count = files.len();
        self.state.select_images(files);
        self.status_message = Some(match count {
            1 => "1 file selected".to_string(),
            n => format!("{n} files selected"),
        });
        tracing::debug!("Selected {count} image(s) from {}", dir.display());
        for preview in self.state.previews.previews() {
            tracing::debug!("{} -> {}", preview.url(), preview.path.display());
        }

        // Remember where the picker ended up
        let dir = dir.to_string_lossy().into_owned();
        if self.config.image_dir.as_deref() != Some(dir.as_str()) {
            self.config.image_dir = Some(dir);
            self.save_config();
        }
    }

    /// Validate and, if the form is valid, hand it to the submitter
    pub async fn submit(&mut self) -> Result<()> {
        let values = match self.state.form.validate_for_submit() {
            Ok(values) => values,
            Err(errors) => {
                for (field, error) in errors.iter() {
                    tracing::debug!("{field}: {error}");
                }
                if let Some(index) = self.state.form.first_invalid_field() {
                    self.state.form.set_active_field(index);
                }
                self.status_message = Some(match errors.len() {
                    1 => "1 field needs attention".to_string(),
                    n => format!("{n} fields need attention"),
                });
                return Ok(());
            }
        };

        let payload = SubmittedForm::from(&values);
        match self.submitter.submit(&payload).await {
            Ok(receipt) => {
                self.state.toasts.push(SUBMIT_TOAST_TITLE, receipt.json);
                self.status_message = Some(format!(
                    "Saved at {}",
                    receipt.submitted_at.format("%H:%M:%S")
                ));
            }
            Err(e) => self.push_error(format!("Failed to submit: {e}")),
        }
        Ok(())
    }

    fn copy_last_toast(&mut self) {
        let Some(body) = self.state.toasts.latest().map(|t| t.body.clone()) else {
            self.status_message = Some("Nothing to copy".to_string());
            return;
        };
        match self.copy_to_clipboard(&body) {
            Ok(()) => self.status_message = Some("Copied to clipboard".to_string()),
            Err(e) => self.push_error(format!("Clipboard unavailable: {e}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    fn save_config(&self) {
        if !self.persist_config {
            return;
        }
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {e}");
        }
    }

    /// Where the form sits on the current terminal
    fn form_layout(&self) -> FormLayout {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        let main_area = crate::ui::main_area(Rect::new(0, 0, width, height));
        crate::ui::form_layout(main_area, !self.state.previews.is_empty())
    }

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() {
            return Ok(());
        }

        // Scrolling moves the highlight inside overlays
        match &mut self.state.overlay {
            Overlay::None => {}
            Overlay::SelectMenu(menu) => {
                match mouse.kind {
                    MouseEventKind::ScrollUp => menu.move_up(),
                    MouseEventKind::ScrollDown => menu.move_down(),
                    _ => {}
                }
                return Ok(());
            }
            Overlay::FilePicker(picker) => {
                match mouse.kind {
                    MouseEventKind::ScrollUp => picker.move_up(),
                    MouseEventKind::ScrollDown => picker.move_down(),
                    _ => {}
                }
                return Ok(());
            }
        }

        let layout = self.form_layout();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = layout.field_at(mouse.column, mouse.row) {
                    self.status_message = None;
                    self.state.form.set_active_field(index);
                    if self.state.form.is_buttons_row_active() {
                        self.submit().await?;
                    }
                }
            }
            MouseEventKind::ScrollDown if layout.carousel_contains(mouse.column, mouse.row) => {
                self.state.previews.next();
            }
            MouseEventKind::ScrollUp if layout.carousel_contains(mouse.column, mouse.row) => {
                self.state.previews.prev();
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{option_index, SAVE_BUTTON_INDEX};
    use crate::submit::MockSubmitHandler;
    use std::fs;
    use tempfile::TempDir;

    fn test_app() -> App {
        App::with_submitter(SettingsConfig::default(), Box::new(LocalSubmitter::new()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key(key(code)).await.unwrap();
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c)).await;
        }
    }

    /// Open the menu on the focused select and pick `value`
    async fn choose(app: &mut App, value: &str) {
        press(app, KeyCode::Enter).await;
        for _ in 0..option_index(value).unwrap() {
            press(app, KeyCode::Down).await;
        }
        press(app, KeyCode::Enter).await;
    }

    /// Fill every required field through the keyboard
    async fn fill_acme(app: &mut App) {
        type_text(app, "Acme Bakery").await;
        press(app, KeyCode::Tab).await;
        type_text(app, "We bake bread.").await;
        press(app, KeyCode::Tab).await;
        choose(app, "Food").await;
        press(app, KeyCode::Tab).await;
        choose(app, "Modern").await;
    }

    /// Temp dir holding PNG stubs
    fn dir_with(names: &[&str]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"\x89PNG\r\n\x1a\n").unwrap();
        }
        dir
    }

    mod submit_flow {
        use super::*;

        #[tokio::test]
        async fn test_acme_bakery_end_to_end() {
            let mut app = test_app();
            fill_acme(&mut app).await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert_eq!(app.state.toasts.len(), 1);
            let toast = app.state.toasts.latest().unwrap();
            assert_eq!(toast.title, SUBMIT_TOAST_TITLE);
            assert!(toast.body.contains("\"business-name\": \"Acme Bakery\""));
            assert!(toast
                .body
                .contains("\"business-description\": \"We bake bread.\""));
            assert!(toast.body.contains("\"industry\": \"Food\""));
            assert!(toast.body.contains("\"style\": \"Modern\""));
            assert!(toast.body.contains("\"images\": []"));
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_enter_on_save_submits() {
            let mut app = test_app();
            fill_acme(&mut app).await;
            press(&mut app, KeyCode::Tab).await;
            press(&mut app, KeyCode::Tab).await;
            assert!(app.state.form.is_buttons_row_active());
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.toasts.len(), 1);
        }

        #[tokio::test]
        async fn test_invalid_form_never_reaches_submitter() {
            let mut mock = MockSubmitHandler::new();
            mock.expect_submit().times(0);
            let mut app = App::with_submitter(SettingsConfig::default(), Box::new(mock));

            type_text(&mut app, "Acme Bakery").await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert!(app.state.toasts.is_empty());
            // Focus jumps to the description, the first invalid field
            assert_eq!(app.state.form.active_field(), 1);
            assert_eq!(
                app.status_message.as_deref(),
                Some("3 fields need attention")
            );
            assert!(app.state.form.visible_error(2).is_some());
        }

        #[tokio::test]
        async fn test_submitter_failure_shows_error_without_toast() {
            let mut mock = MockSubmitHandler::new();
            mock.expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("backend offline")));
            let mut app = App::with_submitter(SettingsConfig::default(), Box::new(mock));

            fill_acme(&mut app).await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert!(app.state.toasts.is_empty());
            assert_eq!(
                app.state.current_error(),
                Some("Failed to submit: backend offline")
            );

            // The dialog swallows keys until dismissed
            type_text(&mut app, "x").await;
            press(&mut app, KeyCode::Esc).await;
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_each_submit_raises_one_toast() {
            let mut app = test_app();
            fill_acme(&mut app).await;
            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(ctrl('s')).await.unwrap();
            assert_eq!(app.state.toasts.len(), 2);

            press(&mut app, KeyCode::Esc).await;
            assert!(app.state.toasts.is_empty());
        }
    }

    mod editing {
        use super::*;

        #[tokio::test]
        async fn test_enter_adds_newline_only_in_description() {
            let mut app = test_app();
            type_text(&mut app, "Acme").await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.form.business_name.as_text(), "Acme");
            assert_eq!(app.state.form.active_field(), 1);

            type_text(&mut app, "line one").await;
            press(&mut app, KeyCode::Enter).await;
            type_text(&mut app, "line two").await;
            assert_eq!(
                app.state.form.business_description.as_text(),
                "line one\nline two"
            );
        }

        #[tokio::test]
        async fn test_arrows_cycle_select_options() {
            let mut app = test_app();
            app.state.form.set_active_field(2);
            press(&mut app, KeyCode::Right).await;
            press(&mut app, KeyCode::Right).await;
            assert_eq!(app.state.form.industry.selected_value(), "Retail");
            press(&mut app, KeyCode::Left).await;
            assert_eq!(app.state.form.industry.selected_value(), "Food");
        }

        #[tokio::test]
        async fn test_typing_ignored_on_select_fields() {
            let mut app = test_app();
            app.state.form.set_active_field(3);
            type_text(&mut app, "abc").await;
            assert_eq!(app.state.form.style.selected_value(), "");
            assert!(!app.state.has_overlay());
        }

        #[tokio::test]
        async fn test_escape_closes_select_menu_without_change() {
            let mut app = test_app();
            app.state.form.set_active_field(2);
            press(&mut app, KeyCode::Enter).await;
            press(&mut app, KeyCode::Down).await;
            press(&mut app, KeyCode::Esc).await;
            assert!(!app.state.has_overlay());
            assert_eq!(app.state.form.industry.selected_value(), "");
        }

        #[tokio::test]
        async fn test_quit_shortcut() {
            let mut app = test_app();
            app.handle_key(ctrl('q')).await.unwrap();
            assert!(app.should_quit());
        }
    }

    mod image_selection {
        use super::*;

        fn app_in(dir: &TempDir) -> App {
            let config = SettingsConfig {
                image_dir: Some(dir.path().to_string_lossy().into_owned()),
                ..Default::default()
            };
            App::with_submitter(config, Box::new(LocalSubmitter::new()))
        }

        async fn focus_logos(app: &mut App) {
            app.state.form.set_active_field(4);
            press(app, KeyCode::Enter).await;
            assert!(matches!(app.state.overlay, Overlay::FilePicker(_)));
        }

        #[tokio::test]
        async fn test_three_files_then_one_leaves_one_preview() {
            let dir = dir_with(&["a.png", "b.png", "c.png"]);
            let mut app = app_in(&dir);

            focus_logos(&mut app).await;
            for _ in 0..3 {
                press(&mut app, KeyCode::Char(' ')).await;
                press(&mut app, KeyCode::Down).await;
            }
            press(&mut app, KeyCode::Enter).await;
            assert!(!app.state.has_overlay());
            assert_eq!(app.state.previews.len(), 3);
            let names: Vec<&str> = app
                .state
                .previews
                .previews()
                .iter()
                .map(|p| p.file_name.as_str())
                .collect();
            assert_eq!(names, vec!["a.png", "b.png", "c.png"]);

            focus_logos(&mut app).await;
            press(&mut app, KeyCode::Char(' ')).await;
            press(&mut app, KeyCode::Enter).await;

            assert_eq!(app.state.previews.len(), 1);
            assert_eq!(app.state.form.images.as_files().len(), 1);
            assert_eq!(app.state.form.images.as_files()[0].name, "a.png");
        }

        #[tokio::test]
        async fn test_submitted_images_are_file_names() {
            let dir = dir_with(&["logo.png"]);
            let mut app = app_in(&dir);
            fill_acme(&mut app).await;

            focus_logos(&mut app).await;
            press(&mut app, KeyCode::Enter).await;
            app.handle_key(ctrl('s')).await.unwrap();

            let toast = app.state.toasts.latest().unwrap();
            assert!(toast.body.contains("\"logo.png\""));
        }

        #[tokio::test]
        async fn test_cancel_keeps_previous_selection() {
            let dir = dir_with(&["a.png", "b.png"]);
            let mut app = app_in(&dir);

            focus_logos(&mut app).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.previews.len(), 1);

            focus_logos(&mut app).await;
            press(&mut app, KeyCode::Esc).await;
            assert_eq!(app.state.previews.len(), 1);
        }

        #[tokio::test]
        async fn test_enter_on_empty_filter_keeps_selection() {
            let dir = dir_with(&["a.png"]);
            let mut app = app_in(&dir);
            focus_logos(&mut app).await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.previews.len(), 1);

            focus_logos(&mut app).await;
            type_text(&mut app, "zzz").await;
            press(&mut app, KeyCode::Enter).await;

            assert!(matches!(app.state.overlay, Overlay::FilePicker(_)));
            assert_eq!(app.state.previews.len(), 1);
            assert_eq!(app.state.form.images.as_files()[0].name, "a.png");
            assert!(app.status_message.is_none());
        }

        #[tokio::test]
        async fn test_filter_then_choose() {
            let dir = dir_with(&["alpha.png", "beta.png"]);
            let mut app = app_in(&dir);

            focus_logos(&mut app).await;
            type_text(&mut app, "bet").await;
            press(&mut app, KeyCode::Enter).await;
            assert_eq!(app.state.form.images.as_files()[0].name, "beta.png");
        }

        #[tokio::test]
        async fn test_delete_clears_selection() {
            let dir = dir_with(&["a.png"]);
            let mut app = app_in(&dir);
            focus_logos(&mut app).await;
            press(&mut app, KeyCode::Enter).await;

            press(&mut app, KeyCode::Delete).await;
            assert!(app.state.previews.is_empty());
            assert!(app.state.form.images.as_files().is_empty());
        }

        #[tokio::test]
        async fn test_missing_directory_reports_error() {
            let config = SettingsConfig {
                image_dir: Some("/nonexistent/tito/logos".to_string()),
                ..Default::default()
            };
            let mut app = App::with_submitter(config, Box::new(LocalSubmitter::new()));
            app.state.form.set_active_field(4);
            press(&mut app, KeyCode::Enter).await;
            assert!(!app.state.has_overlay());
            assert!(app.state.has_errors());
        }
    }

    mod mouse {
        use super::*;

        fn click(column: u16, row: u16) -> MouseEvent {
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }
        }

        #[tokio::test]
        async fn test_click_focuses_field() {
            let mut app = test_app();
            app.terminal_size = Some((30, 100));
            let style = app.form_layout().fields[3];
            app.handle_mouse(click(style.x + 1, style.y + 1))
                .await
                .unwrap();
            assert_eq!(app.state.form.active_field(), 3);
        }

        #[tokio::test]
        async fn test_click_on_save_submits() {
            let mut app = test_app();
            app.terminal_size = Some((30, 100));
            fill_acme(&mut app).await;
            let save = app.form_layout().save;
            app.handle_mouse(click(save.x + 1, save.y + 1))
                .await
                .unwrap();
            assert_eq!(app.state.form.active_field(), SAVE_BUTTON_INDEX);
            assert_eq!(app.state.toasts.len(), 1);
        }
    }
}
