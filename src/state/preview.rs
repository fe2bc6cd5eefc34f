//! Selected image files and their transient preview references

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A file chosen in the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub path: PathBuf,
    /// File name without directories, as submitted
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedImage {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            path,
            name,
            size_bytes,
        }
    }

    /// Build from a path on disk, reading its size
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        Ok(Self::new(path, metadata.len()))
    }
}

/// Image format as detected for a preview card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Bmp,
    Svg,
    Unknown,
}

impl ImageFormat {
    /// Detect from leading bytes
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else if bytes.starts_with(b"BM") {
            Some(Self::Bmp)
        } else {
            None
        }
    }

    /// Detect from the file extension
    pub fn from_extension(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Self::Png,
            "jpg" | "jpeg" => Self::Jpeg,
            "gif" => Self::Gif,
            "webp" => Self::Webp,
            "bmp" => Self::Bmp,
            "svg" => Self::Svg,
            _ => Self::Unknown,
        }
    }

    /// Sniff the file header, falling back to the extension
    pub fn detect(path: &Path) -> Self {
        let mut header = [0u8; 12];
        let read = File::open(path).and_then(|mut f| f.read(&mut header));
        match read {
            Ok(n) => Self::from_magic(&header[..n]).unwrap_or_else(|| Self::from_extension(path)),
            Err(e) => {
                tracing::debug!("Could not read header of {}: {e}", path.display());
                Self::from_extension(path)
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Gif => "GIF",
            Self::Webp => "WebP",
            Self::Bmp => "BMP",
            Self::Svg => "SVG",
            Self::Unknown => "unknown",
        }
    }
}

/// Displayable handle for one selected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRef {
    pub handle: Uuid,
    pub file_name: String,
    pub path: PathBuf,
    pub format: ImageFormat,
    pub size_bytes: u64,
}

impl PreviewRef {
    fn from_image(image: &SelectedImage) -> Self {
        Self {
            handle: Uuid::new_v4(),
            file_name: image.name.clone(),
            path: image.path.clone(),
            format: ImageFormat::detect(&image.path),
            size_bytes: image.size_bytes,
        }
    }

    pub fn url(&self) -> String {
        format!("preview:{}", self.handle)
    }
}

/// Human-readable byte size
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KIB {
        format!("{bytes} B")
    } else if b < KIB * KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{:.1} MiB", b / (KIB * KIB))
    }
}

/// Preview list plus the carousel position
#[derive(Debug, Default)]
pub struct PreviewManager {
    previews: Vec<PreviewRef>,
    cursor: usize,
}

impl PreviewManager {
    /// Replace the preview list with one reference per file, in order.
    ///
    /// Handles from the previous selection are revoked.
    pub fn replace(&mut self, files: &[SelectedImage]) -> &[PreviewRef] {
        for old in self.previews.drain(..) {
            tracing::debug!("Revoking {}", old.url());
        }
        self.previews = files.iter().map(PreviewRef::from_image).collect();
        self.cursor = 0;
        tracing::debug!("Created {} preview(s)", self.previews.len());
        &self.previews
    }

    /// Drop every preview (end of the form session)
    pub fn clear(&mut self) {
        self.replace(&[]);
    }

    pub fn previews(&self) -> &[PreviewRef] {
        &self.previews
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    /// Whether `handle` belongs to the current selection
    #[cfg(test)]
    pub fn is_live(&self, handle: Uuid) -> bool {
        self.previews.iter().any(|p| p.handle == handle)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Scroll the carousel forward; stops at the last card
    pub fn next(&mut self) {
        if self.cursor + 1 < self.previews.len() {
            self.cursor += 1;
        }
    }

    /// Scroll the carousel back; stops at the first card
    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_scroll_next(&self, per_page: usize) -> bool {
        self.cursor + per_page.max(1) < self.previews.len()
    }

    /// Cards visible with `per_page` slots, aligned to the start
    pub fn visible(&self, per_page: usize) -> &[PreviewRef] {
        let start = self.cursor.min(self.previews.len());
        let end = (start + per_page.max(1)).min(self.previews.len());
        &self.previews[start..end]
    }
}
