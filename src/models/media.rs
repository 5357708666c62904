use serde::Serialize;
use std::path::{Path, PathBuf};

use super::notice::Notice;

/// Which presentation surface a file is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Audio,
    Video,
    Text,
    Unsupported,
}

impl MediaKind {
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
            MediaKind::Text => "text",
            MediaKind::Unsupported => "unsupported",
        }
    }
}

/// A request for the presentation layer to open a surface with a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenRequest {
    Image(PathBuf),
    Audio(PathBuf),
    Video(PathBuf),
    Text { path: PathBuf, contents: String },
    Unsupported { path: PathBuf, extension: Option<String> },
}

impl OpenRequest {
    pub fn kind(&self) -> MediaKind {
        match self {
            OpenRequest::Image(_) => MediaKind::Image,
            OpenRequest::Audio(_) => MediaKind::Audio,
            OpenRequest::Video(_) => MediaKind::Video,
            OpenRequest::Text { .. } => MediaKind::Text,
            OpenRequest::Unsupported { .. } => MediaKind::Unsupported,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            OpenRequest::Image(path)
            | OpenRequest::Audio(path)
            | OpenRequest::Video(path)
            | OpenRequest::Text { path, .. }
            | OpenRequest::Unsupported { path, .. } => path.as_path(),
        }
    }

    /// The declined-action message for unsupported files.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            OpenRequest::Unsupported { extension, .. } => Some(Notice::info(match extension {
                Some(ext) => format!("Unsupported file type: .{ext}"),
                None => "Unsupported file type".to_string(),
            })),
            _ => None,
        }
    }
}
