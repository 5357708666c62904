use crate::core::errors::Result;
use crate::models::media::{MediaKind, OpenRequest};
use std::fs;
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac", "m4a", "aac"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov", "webm", "3gp"];
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "py", "json", "csv", "log", "xml", "html", "css", "js", "rs", "toml", "yaml",
    "yml", "ini", "cfg",
];

pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
}

pub fn classify(path: &Path) -> MediaKind {
    let Some(ext) = extension_of(path) else {
        return MediaKind::Unsupported;
    };
    let ext = ext.as_str();
    if IMAGE_EXTENSIONS.contains(&ext) {
        MediaKind::Image
    } else if AUDIO_EXTENSIONS.contains(&ext) {
        MediaKind::Audio
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        MediaKind::Video
    } else if TEXT_EXTENSIONS.contains(&ext) {
        MediaKind::Text
    } else {
        MediaKind::Unsupported
    }
}

/// Decides which surface `path` opens in. Only text files are read.
pub fn open_file(path: &Path) -> Result<OpenRequest> {
    let path_buf = path.to_path_buf();
    let request = match classify(path) {
        MediaKind::Image => OpenRequest::Image(path_buf),
        MediaKind::Audio => OpenRequest::Audio(path_buf),
        MediaKind::Video => OpenRequest::Video(path_buf),
        MediaKind::Text => {
            let bytes = fs::read(path)?;
            OpenRequest::Text {
                path: path_buf,
                contents: decode_text(&bytes),
            }
        }
        MediaKind::Unsupported => OpenRequest::Unsupported {
            path: path_buf,
            extension: extension_of(path),
        },
    };
    Ok(request)
}

/// UTF-8 decode that drops invalid byte sequences instead of substituting them.
pub fn decode_text(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
