pub mod archive;
pub mod listing;
pub mod opener;
pub mod ops;
