use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: FileKind,
    pub size: u64,
    pub modified: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Synthetic `..` entry pointing at the parent directory.
    Parent,
    Dir,
    File,
    /// Broken symlinks, sockets, devices.
    Other,
}

impl FileEntry {
    pub fn parent(path: PathBuf) -> Self {
        Self {
            name: "..".to_string(),
            path,
            kind: FileKind::Parent,
            size: 0,
            modified: 0,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, FileKind::Parent | FileKind::Dir)
    }
}
