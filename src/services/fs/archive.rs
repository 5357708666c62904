use crate::core::errors::{Error, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Component, Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

/// Archive written by [`zip_path`]: a sibling named after the target with `.zip` appended.
///
/// Paths without a final name (`/`, `.`, `..`) are rejected.
pub fn archive_path_for(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| Error::InvalidName(path.display().to_string()))?;
    let mut archive_name = name.to_os_string();
    archive_name.push(".zip");
    Ok(path.with_file_name(archive_name))
}

/// Directory [`unzip_path`] extracts into: the archive path without its `.zip` suffix.
pub fn extract_dir_for(archive: &Path) -> Result<PathBuf> {
    let is_zip = archive
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("zip"));
    let stem = archive.file_stem().filter(|s| !s.is_empty());
    match (is_zip, stem) {
        (true, Some(stem)) => Ok(archive.with_file_name(stem)),
        _ => Err(Error::NotAnArchive(archive.to_path_buf())),
    }
}

/// Zips a file or directory into a sibling `<path>.zip`.
///
/// A file is stored under its own name. A directory is stored with member
/// names relative to its parent, so the archive root is the directory itself.
/// The archive is staged under a temporary name and only appears once complete.
pub fn zip_path(path: &Path) -> Result<PathBuf> {
    let md = fs::metadata(path)?;
    let archive = archive_path_for(path)?;
    let root = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let archive_dir = archive
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    // Dropped (and removed) on any early return.
    let staged = NamedTempFile::new_in(archive_dir)?;
    let mut writer = ZipWriter::new(BufWriter::new(staged));
    let options = SimpleFileOptions::default();
    let mut members = 0usize;

    if md.is_dir() {
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry?;
            let name = member_name(entry.path(), &root)?;
            if entry.file_type().is_dir() {
                if is_empty_dir(entry.path())? {
                    writer.add_directory(format!("{name}/"), options)?;
                    members += 1;
                }
            } else if entry.path().is_file() {
                writer.start_file(name, options)?;
                io::copy(&mut File::open(entry.path())?, &mut writer)?;
                members += 1;
            } else {
                tracing::debug!("skipping non-regular entry {:?}", entry.path());
            }
        }
    } else {
        writer.start_file(member_name(path, &root)?, options)?;
        io::copy(&mut File::open(path)?, &mut writer)?;
        members += 1;
    }

    let staged = writer
        .finish()?
        .into_inner()
        .map_err(|e| e.into_error())?;
    staged.persist(&archive).map_err(|e| e.error)?;
    tracing::info!("zipped {:?} into {:?} ({} members)", path, archive, members);
    Ok(archive)
}

/// Extracts `archive` into the sibling directory named after it, overwriting existing files.
pub fn unzip_path(archive: &Path) -> Result<PathBuf> {
    let dest = extract_dir_for(archive)?;
    let mut zip = ZipArchive::new(File::open(archive)?)?;
    fs::create_dir_all(&dest)?;
    zip.extract(&dest)?;
    tracing::info!("extracted {} members of {:?} into {:?}", zip.len(), archive, dest);
    Ok(dest)
}

/// Member names of `archive` in stored order.
pub fn list_members(archive: &Path) -> Result<Vec<String>> {
    let mut zip = ZipArchive::new(File::open(archive)?)?;
    let mut names = Vec::with_capacity(zip.len());
    for i in 0..zip.len() {
        names.push(zip.by_index(i)?.name().to_string());
    }
    Ok(names)
}

fn member_name(path: &Path, root: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| Error::Other(format!("{} is outside {}", path.display(), root.display())))?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        return Err(Error::Other(format!("cannot archive {}", path.display())));
    }
    Ok(parts.join("/"))
}

fn is_empty_dir(path: &Path) -> Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}
