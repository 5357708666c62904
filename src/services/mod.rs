pub mod fs;
pub mod gallery;
