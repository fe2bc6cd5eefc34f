//! Configuration handling for the settings TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Most preview cards a carousel page can hold
pub const MAX_PREVIEWS_PER_PAGE: usize = 6;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsConfig {
    /// Directory the image picker opens in
    pub image_dir: Option<String>,
    /// List dotfiles in the image picker
    pub show_hidden_files: Option<bool>,
    /// How long a toast stays on screen, in milliseconds
    pub toast_duration_ms: Option<u64>,
    /// Preview cards per carousel page
    pub previews_per_page: Option<usize>,
}

impl SettingsConfig {
    const DEFAULT_TOAST_DURATION_MS: u64 = 4000;
    const DEFAULT_PREVIEWS_PER_PAGE: usize = 3;

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "tito", "tito-settings")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file path; the terminal belongs to the UI while it runs
    pub fn log_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "tito", "tito-settings")
            .map(|dirs| dirs.data_dir().join("tito-settings.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SettingsConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Picker start directory: configured dir, else the working directory
    pub fn image_dir_or_default(&self) -> PathBuf {
        self.image_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn show_hidden_files(&self) -> bool {
        self.show_hidden_files.unwrap_or(false)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(
            self.toast_duration_ms
                .unwrap_or(Self::DEFAULT_TOAST_DURATION_MS),
        )
    }

    pub fn previews_per_page(&self) -> usize {
        self.previews_per_page
            .unwrap_or(Self::DEFAULT_PREVIEWS_PER_PAGE)
            .clamp(1, MAX_PREVIEWS_PER_PAGE)
    }
}

/// Open `path` for appending, creating parent directories as needed
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
