//! Legacy website mirroring: fixed-catalog asset downloads plus the
//! static site content document.

pub mod content;
pub mod fetch;

pub use content::{write_content, SiteContent};
pub use fetch::{AssetCatalog, AssetGroup, Downloader, FetchReport};
