use anyhow::Result;
use pocketfm::core::config::GalleryConfig;
use pocketfm::pages::gallery::GalleryPage;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_gallery_keeps_only_images() -> Result<()> {
    let root = tempdir()?;
    image::RgbImage::new(4, 3).save(root.path().join("b.png"))?;
    fs::write(root.path().join("A.JPG"), "not really a jpeg")?;
    fs::write(root.path().join("clip.mp4"), "video")?;
    fs::write(root.path().join("notes.txt"), "text")?;
    fs::create_dir(root.path().join("folder.png"))?;

    let mut page = GalleryPage::new(GalleryConfig::new(root.path()));
    let items = page.load()?;

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["A.JPG", "b.png"]);
    assert_eq!(items[0].dimensions, None);
    assert_eq!(items[1].dimensions, Some((4, 3)));
    Ok(())
}

#[test]
fn test_gallery_of_missing_directory_is_empty() -> Result<()> {
    let root = tempdir()?;
    let mut page = GalleryPage::new(GalleryConfig::new(root.path().join("DCIM/Camera")));

    assert!(page.load()?.is_empty());
    assert_eq!(page.rows().count(), 0);
    assert_eq!(page.content_height(), 0);
    Ok(())
}

#[test]
fn test_gallery_lays_out_two_columns() -> Result<()> {
    let root = tempdir()?;
    for i in 0..3 {
        fs::write(root.path().join(format!("{i}.jpeg")), "x")?;
    }

    let mut page = GalleryPage::new(GalleryConfig::new(root.path()));
    page.load()?;

    let rows: Vec<usize> = page.rows().map(|r| r.len()).collect();
    assert_eq!(rows, vec![2, 1]);
    Ok(())
}
