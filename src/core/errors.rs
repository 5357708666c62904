use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid name: {0:?}")]
    InvalidName(String),
    #[error("'{}' already exists", .0.display())]
    TargetExists(PathBuf),
    #[error("'{}' is not a zip archive", .0.display())]
    NotAnArchive(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("other error: {0}")]
    Other(String),
}
