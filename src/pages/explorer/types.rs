use crate::models::media::OpenRequest;
use crate::models::notice::Notice;
use std::path::PathBuf;

/// Result of activating an entry in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The current directory changed.
    Navigated(PathBuf),
    Opened(OpenRequest),
    /// The file could not be opened.
    Failed(Notice),
}
