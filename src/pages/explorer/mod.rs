use crate::core::config::ExplorerConfig;
use crate::core::errors::{Error, Result};
use crate::models::file_entry::FileEntry;
use crate::models::media::OpenRequest;
use crate::models::notice::Notice;
use crate::services::fs::listing::{list_dir, parent_of, ListParams};
use crate::services::fs::{archive, opener, ops};
use std::fs;
use std::path::{Path, PathBuf};

mod types;
pub use types::Activation;

/// File browser state: the current directory, its last listing, and navigation history.
///
/// Every method runs synchronously. Operations on entries return a [`Notice`]
/// for the user and refresh the listing when they change the directory.
pub struct ExplorerPage {
    pub cwd: PathBuf,
    history: Vec<PathBuf>,
    history_index: usize,
    pub entries: Vec<FileEntry>,
    show_parent: bool,
}

impl ExplorerPage {
    pub fn new(config: &ExplorerConfig) -> Result<Self> {
        let cwd = canonical_dir(&config.start_dir)?;
        let mut page = Self {
            history: vec![cwd.clone()],
            history_index: 0,
            cwd,
            entries: Vec::new(),
            show_parent: config.show_parent,
        };
        page.refresh()?;
        Ok(page)
    }

    /// Re-lists the current directory. Listing errors propagate to the caller.
    pub fn refresh(&mut self) -> Result<&[FileEntry]> {
        self.entries = list_dir(ListParams {
            path: &self.cwd,
            include_parent: self.show_parent,
        })?;
        Ok(&self.entries)
    }

    pub fn navigate(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let target = canonical_dir(path.as_ref())?;
        if target == self.cwd {
            return Ok(());
        }

        self.change_dir(target.clone())?;
        // Navigating after going back drops the forward history.
        self.history.truncate(self.history_index + 1);
        self.history.push(target);
        self.history_index += 1;
        Ok(())
    }

    /// Moves to the parent directory. Returns `false` at the filesystem root.
    pub fn navigate_up(&mut self) -> Result<bool> {
        let Some(parent) = parent_of(&self.cwd).map(Path::to_path_buf) else {
            return Ok(false);
        };
        self.navigate(parent)?;
        Ok(true)
    }

    pub fn go_back(&mut self) -> Result<bool> {
        if self.history_index == 0 {
            return Ok(false);
        }
        let target = self.history[self.history_index - 1].clone();
        self.change_dir(target)?;
        self.history_index -= 1;
        Ok(true)
    }

    pub fn go_forward(&mut self) -> Result<bool> {
        if self.history_index + 1 >= self.history.len() {
            return Ok(false);
        }
        let target = self.history[self.history_index + 1].clone();
        self.change_dir(target)?;
        self.history_index += 1;
        Ok(true)
    }

    /// Directories are entered, files are opened.
    pub fn activate(&mut self, entry: &FileEntry) -> Result<Activation> {
        if entry.is_dir() {
            self.navigate(&entry.path)?;
            return Ok(Activation::Navigated(self.cwd.clone()));
        }
        Ok(match self.open(&entry.path) {
            Ok(request) => Activation::Opened(request),
            Err(notice) => Activation::Failed(notice),
        })
    }

    pub fn open(&self, path: impl AsRef<Path>) -> std::result::Result<OpenRequest, Notice> {
        let path = path.as_ref();
        match opener::open_file(path) {
            Ok(request) => {
                tracing::info!("opening {:?} as {}", path, request.kind().label());
                Ok(request)
            }
            Err(e) => Err(failure("Could not open", path, e)),
        }
    }

    /// Renames `path` to `new_name` in the same directory. `None` when the name is empty.
    pub fn rename(&mut self, path: impl AsRef<Path>, new_name: &str) -> Option<Notice> {
        let path = path.as_ref();
        match ops::rename(path, new_name) {
            Ok(None) => None,
            Ok(Some(new_path)) => {
                self.refresh_after_change();
                Some(Notice::info(format!("Renamed to {}", display_name(&new_path))))
            }
            Err(e) => Some(failure("Rename failed for", path, e)),
        }
    }

    pub fn delete(&mut self, path: impl AsRef<Path>) -> Notice {
        let path = path.as_ref();
        match ops::delete(path) {
            Ok(()) => {
                self.refresh_after_change();
                Notice::info(format!("Deleted {}", display_name(path)))
            }
            Err(e) => failure("Delete failed for", path, e),
        }
    }

    pub fn zip(&mut self, path: impl AsRef<Path>) -> Notice {
        let path = path.as_ref();
        match archive::zip_path(path) {
            Ok(out) => {
                self.refresh_after_change();
                Notice::info(format!("Zipped to {}", display_name(&out)))
            }
            Err(e) => failure("Zip failed for", path, e),
        }
    }

    pub fn unzip(&mut self, path: impl AsRef<Path>) -> Notice {
        let path = path.as_ref();
        match archive::unzip_path(path) {
            Ok(dest) => {
                self.refresh_after_change();
                Notice::info(format!("Extracted to {}", display_name(&dest)))
            }
            Err(e) => failure("Unzip failed for", path, e),
        }
    }

    pub fn save_text(&mut self, path: impl AsRef<Path>, contents: &str) -> Notice {
        let path = path.as_ref();
        match ops::save_text(path, contents) {
            Ok(()) => {
                self.refresh_after_change();
                Notice::info(format!("Saved {}", display_name(path)))
            }
            Err(e) => failure("Save failed for", path, e),
        }
    }

    /// Visited directories, oldest first.
    pub fn history(&self) -> &[PathBuf] {
        &self.history
    }

    pub fn find(&self, name: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    fn change_dir(&mut self, path: PathBuf) -> Result<()> {
        let previous = std::mem::replace(&mut self.cwd, path);
        if let Err(e) = self.refresh() {
            self.cwd = previous;
            return Err(e);
        }
        tracing::debug!("cwd is now {:?}", self.cwd);
        Ok(())
    }

    fn refresh_after_change(&mut self) {
        if let Err(e) = self.refresh() {
            tracing::warn!("refresh of {:?} failed: {}", self.cwd, e);
            self.entries.clear();
        }
    }
}

fn canonical_dir(path: &Path) -> Result<PathBuf> {
    let full = fs::canonicalize(path)?;
    if !full.is_dir() {
        return Err(Error::NotADirectory(full));
    }
    Ok(full)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn failure(action: &str, path: &Path, e: Error) -> Notice {
    tracing::warn!("{} {:?}: {}", action, path, e);
    Notice::error(format!("{} {}: {}", action, display_name(path), e))
}
