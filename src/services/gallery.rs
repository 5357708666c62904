use crate::core::config::GalleryConfig;
use crate::core::errors::Result;
use crate::models::gallery::GalleryItem;
use std::fs;

/// Image files directly inside the configured photo directory, by lowercase name.
///
/// A missing directory is an empty gallery rather than an error.
pub fn scan(config: &GalleryConfig) -> Result<Vec<GalleryItem>> {
    let dir = &config.photo_dir;
    if !dir.exists() {
        tracing::info!("photo directory {:?} does not exist", dir);
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !has_image_extension(&name, &config.extensions) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let dimensions = match image::image_dimensions(&path) {
            Ok(dims) => Some(dims),
            Err(e) => {
                tracing::debug!("could not read image header of {:?}: {}", path, e);
                None
            }
        };
        items.push(GalleryItem {
            name,
            path,
            dimensions,
        });
    }

    items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    tracing::debug!("found {} images in {:?}", items.len(), dir);
    Ok(items)
}

fn has_image_extension(name: &str, extensions: &[String]) -> bool {
    let lower = name.to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext.trim_start_matches('.').to_lowercase())))
}
