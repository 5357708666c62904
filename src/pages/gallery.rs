use crate::core::config::GalleryConfig;
use crate::core::errors::Result;
use crate::models::gallery::GalleryItem;
use crate::services::gallery;

/// Scrollable grid of the images found in one directory.
pub struct GalleryPage {
    pub config: GalleryConfig,
    pub items: Vec<GalleryItem>,
}

impl GalleryPage {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
        }
    }

    pub fn load(&mut self) -> Result<&[GalleryItem]> {
        self.items = gallery::scan(&self.config)?;
        Ok(&self.items)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GalleryItem]> {
        self.items.chunks(self.config.columns.max(1))
    }

    /// Height the grid needs so every row fits inside the scroll view.
    pub fn content_height(&self) -> u32 {
        let rows = self.rows().count() as u32;
        if rows == 0 {
            return 0;
        }
        rows * self.config.tile_height + (rows - 1) * self.config.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn page_with(count: usize, columns: usize) -> GalleryPage {
        let mut page = GalleryPage::new(GalleryConfig::new("/unused").with_columns(columns));
        page.items = (0..count)
            .map(|i| GalleryItem {
                name: format!("{i}.jpg"),
                path: PathBuf::from(format!("/unused/{i}.jpg")),
                dimensions: None,
            })
            .collect();
        page
    }

    #[test]
    fn rows_chunk_by_column_count() {
        let page = page_with(5, 2);
        let sizes: Vec<usize> = page.rows().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn content_height_includes_spacing() {
        assert_eq!(page_with(0, 2).content_height(), 0);
        assert_eq!(page_with(1, 2).content_height(), 200);
        assert_eq!(page_with(3, 2).content_height(), 405);
    }
}
