pub mod file_entry;
pub mod gallery;
pub mod media;
pub mod notice;
