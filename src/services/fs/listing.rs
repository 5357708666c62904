use crate::core::errors::Result;
use crate::models::file_entry::{FileEntry, FileKind};
use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

pub struct ListParams<'a> {
    pub path: &'a Path,
    pub include_parent: bool,
}

/// Lists `params.path`: directories first, then everything else, each group by lowercase name.
pub fn list_dir(params: ListParams<'_>) -> Result<Vec<FileEntry>> {
    let dir = params.path;
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = os_str_to_string(entry.file_name());
        let path = entry.path();

        // Follow links so a link to a directory is browsed as one.
        let (kind, size, modified) = match fs::metadata(&path) {
            Ok(md) => {
                let modified = md
                    .modified()
                    .ok()
                    .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                    .map(|d| d.as_secs())
                    .unwrap_or(0);
                if md.is_dir() {
                    (FileKind::Dir, 0, modified)
                } else if md.is_file() {
                    (FileKind::File, md.len(), modified)
                } else {
                    (FileKind::Other, 0, modified)
                }
            }
            Err(e) => {
                tracing::debug!("metadata unavailable for {:?}: {}", path, e);
                (FileKind::Other, 0, 0)
            }
        };

        entries.push(FileEntry {
            name,
            path,
            kind,
            size,
            modified,
        });
    }

    sort_entries(&mut entries);

    if params.include_parent {
        if let Some(parent) = parent_of(dir) {
            entries.insert(0, FileEntry::parent(parent.to_path_buf()));
        }
    }

    tracing::debug!("listed {} entries in {:?}", entries.len(), dir);
    Ok(entries)
}

pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| match b.is_dir().cmp(&a.is_dir()) {
        Ordering::Equal => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        kind_order => kind_order,
    });
}

/// Parent of `dir` unless `dir` is a root (or a bare relative name with an empty parent).
pub fn parent_of(dir: &Path) -> Option<&Path> {
    dir.parent()
        .filter(|p| !p.as_os_str().is_empty() && *p != dir)
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
