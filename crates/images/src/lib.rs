//! Image compression batch job for extracted website content.
//!
//! Recompresses the images directory of a content store in place and
//! keeps the slide manifest in sync when files change extension.

pub mod compress;

pub use compress::{
    apply_renames, compress_all, compress_image, reconcile_manifest, run, BatchReport,
    CompressOptions, CompressedFile,
};
