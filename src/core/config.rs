use std::path::PathBuf;

/// Directory scanned by the gallery when none is given. Common camera roll location on Android.
pub const DEFAULT_PHOTO_DIR: &str = "/sdcard/DCIM/Camera";

/// Starting point and listing options for the file browser.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub start_dir: PathBuf,
    /// Prepend a `..` entry when the current directory has a parent.
    pub show_parent: bool,
}

impl ExplorerConfig {
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_parent_entry(mut self, show_parent: bool) -> Self {
        self.show_parent = show_parent;
        self
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            start_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            show_parent: true,
        }
    }
}

/// Source directory and grid layout of the gallery.
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub photo_dir: PathBuf,
    /// Lowercase extensions without the leading dot.
    pub extensions: Vec<String>,
    pub columns: usize,
    pub tile_height: u32,
    pub spacing: u32,
}

impl GalleryConfig {
    pub fn new(photo_dir: impl Into<PathBuf>) -> Self {
        Self {
            photo_dir: photo_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            photo_dir: PathBuf::from(DEFAULT_PHOTO_DIR),
            extensions: ["jpg", "png", "jpeg"].iter().map(|s| s.to_string()).collect(),
            columns: 2,
            tile_height: 200,
            spacing: 5,
        }
    }
}
