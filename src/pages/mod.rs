pub mod explorer;
pub mod gallery;
