use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub name: String,
    pub path: PathBuf,
    /// Width and height in pixels, when the header could be decoded.
    pub dimensions: Option<(u32, u32)>,
}
