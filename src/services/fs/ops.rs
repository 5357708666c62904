use crate::core::errors::{Error, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Renames `old` within its own directory. An empty `new_name` is a no-op and yields `Ok(None)`.
pub fn rename(old: &Path, new_name: &str) -> Result<Option<PathBuf>> {
    if new_name.is_empty() {
        return Ok(None);
    }
    validate_name(new_name)?;

    let new_path = match old.parent() {
        Some(dir) => dir.join(new_name),
        None => PathBuf::from(new_name),
    };
    if new_path == old {
        return Ok(Some(new_path));
    }
    // `fs::rename` replaces existing files on Unix; refuse instead.
    if fs::symlink_metadata(&new_path).is_ok() {
        return Err(Error::TargetExists(new_path));
    }

    fs::rename(old, &new_path)?;
    tracing::info!("renamed {:?} -> {:?}", old, new_path);
    Ok(Some(new_path))
}

/// Removes a file or symlink, or a whole directory tree. Permanent.
pub fn delete(path: &Path) -> Result<()> {
    let md = fs::symlink_metadata(path)?;
    if md.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    tracing::info!("deleted {:?}", path);
    Ok(())
}

/// Writes edited text back to `path`.
pub fn save_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    tracing::info!("saved {} bytes to {:?}", contents.len(), path);
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(Error::InvalidName(name.to_string())),
    }
}
