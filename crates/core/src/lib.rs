//! Core domain types, filename sanitization, and the content store for
//! the website content migration jobs.

pub mod error;
pub mod manifest;
pub mod sanitize;
pub mod shape;
pub mod store;

pub use error::{Error, Result};
pub use manifest::{ImageRef, Manifest, ShapeIndex, SlideRecord, TextBlock};
pub use sanitize::{derive_title, sanitize_filename};
pub use shape::{collect_pictures, PictureShape, Shape};
pub use store::{write_pretty_json, ContentStore};
