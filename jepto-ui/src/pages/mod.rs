//! Pages
//!
//! Top-level page components for each route.

pub mod landing;

pub use landing::Landing;
