//! Core of a small mobile file manager and photo gallery.
//!
//! The presentation layer drives [`pages::explorer::ExplorerPage`] and
//! [`pages::gallery::GalleryPage`] through plain function calls and renders the
//! entries, open requests and notices they return.

pub mod core;
pub mod models;
pub mod pages;
pub mod services;
