//! Multi-file picker state

use super::preview::SelectedImage;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One row in the picker listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size_bytes: u64,
}

impl FileEntry {
    /// Whether the extension looks like an image (used for highlighting only)
    pub fn looks_like_image(&self) -> bool {
        let ext = self
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        matches!(
            ext.as_str(),
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg"
        )
    }
}

/// Result of pressing Enter in the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Moved into a directory; picker stays open
    Navigated,
    /// Nothing marked or highlighted; picker stays open
    Empty,
    /// Files chosen, in selection order
    Selected(Vec<PathBuf>),
}

/// Directory listing with marked files
#[derive(Debug, Clone)]
pub struct FilePickerState {
    pub dir: PathBuf,
    entries: Vec<FileEntry>,
    /// Index into the filtered entries
    pub selected_index: usize,
    /// Marked files, in the order they were marked
    pub marked: Vec<PathBuf>,
    pub filter: String,
    pub show_hidden: bool,
}

impl FilePickerState {
    /// Open the picker on `dir`
    pub fn open(dir: impl Into<PathBuf>, show_hidden: bool) -> Result<Self, PickerError> {
        let mut state = Self {
            dir: dir.into(),
            entries: Vec::new(),
            selected_index: 0,
            marked: Vec::new(),
            filter: String::new(),
            show_hidden,
        };
        state.refresh()?;
        Ok(state)
    }

    /// Re-read the current directory
    pub fn refresh(&mut self) -> Result<(), PickerError> {
        self.entries = read_entries(&self.dir, self.show_hidden)?;
        self.selected_index = 0;
        Ok(())
    }

    /// Entries matching the filter (case-insensitive substring)
    pub fn filtered_entries(&self) -> Vec<&FileEntry> {
        let needle = self.filter.to_lowercase();
        self.entries
            .iter()
            .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn highlighted(&self) -> Option<&FileEntry> {
        self.filtered_entries().get(self.selected_index).copied()
    }

    pub fn move_down(&mut self) {
        let count = self.filtered_entries().len();
        if count > 0 && self.selected_index < count - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.selected_index = 0;
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.selected_index = 0;
    }

    pub fn is_marked(&self, path: &Path) -> bool {
        self.marked.iter().any(|p| p == path)
    }

    /// Mark or unmark the highlighted file; directories are ignored
    pub fn toggle_mark(&mut self) {
        let Some(entry) = self.highlighted() else {
            return;
        };
        if entry.is_dir {
            return;
        }
        let path = entry.path.clone();
        if let Some(pos) = self.marked.iter().position(|p| *p == path) {
            self.marked.remove(pos);
        } else {
            self.marked.push(path);
        }
    }

    /// Go to the parent directory; marks are kept
    pub fn go_up(&mut self) -> Result<(), PickerError> {
        if let Some(parent) = self.dir.parent().map(Path::to_path_buf) {
            let entries = read_entries(&parent, self.show_hidden)?;
            self.dir = parent;
            self.entries = entries;
            self.selected_index = 0;
            self.filter.clear();
        }
        Ok(())
    }

    /// Enter a directory, or confirm the selection.
    ///
    /// Marked files win; with nothing marked the highlighted file is chosen.
    /// An empty listing never yields an empty selection.
    pub fn confirm(&mut self) -> Result<PickerOutcome, PickerError> {
        if !self.marked.is_empty() {
            return Ok(PickerOutcome::Selected(self.marked.clone()));
        }
        match self.highlighted().cloned() {
            Some(entry) if entry.is_dir => {
                let entries = read_entries(&entry.path, self.show_hidden)?;
                self.dir = entry.path;
                self.entries = entries;
                self.selected_index = 0;
                self.filter.clear();
                Ok(PickerOutcome::Navigated)
            }
            Some(entry) => Ok(PickerOutcome::Selected(vec![entry.path])),
            None => Ok(PickerOutcome::Empty),
        }
    }
}

/// Resolve chosen paths into selected images, preserving order
pub fn load_selection(paths: &[PathBuf]) -> Result<Vec<SelectedImage>, PickerError> {
    paths
        .iter()
        .map(|path| {
            SelectedImage::from_path(path).map_err(|source| PickerError::ReadFile {
                path: path.clone(),
                source,
            })
        })
        .collect()
}

fn read_entries(dir: &Path, show_hidden: bool) -> Result<Vec<FileEntry>, PickerError> {
    let read_dir = fs::read_dir(dir).map_err(|source| PickerError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<FileEntry> = read_dir
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !show_hidden && name.starts_with('.') {
                return None;
            }
            let metadata = entry.metadata().ok()?;
            Some(FileEntry {
                name,
                path: entry.path(),
                is_dir: metadata.is_dir(),
                size_bytes: metadata.len(),
            })
        })
        .collect();

    // Directories first, then by name
    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    Ok(entries)
}
