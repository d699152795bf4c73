//! Batch download of legacy website assets.
//!
//! The asset list is a small catalog of named URL groups; each group's
//! files land in the images directory as `<group>_<n>.<ext>`. Downloads
//! are best-effort: a failed URL is reported and skipped.

use migrate_core::{Error, Result};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Per-request timeout for asset downloads.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Fallback extension when a URL does not end in a usable one.
const FALLBACK_EXT: &str = "bin";

/// A named group of asset URLs sharing a filename prefix.
#[derive(Debug, Clone)]
pub struct AssetGroup {
    /// Filename prefix (`gallery` gives `gallery_1.png`, ...).
    pub name: String,

    /// Source URLs in download order.
    pub urls: Vec<String>,

    /// Cap on how many of the group's URLs are fetched.
    pub limit: Option<usize>,
}

impl AssetGroup {
    /// Create a group with no download cap.
    pub fn new(name: impl Into<String>, urls: Vec<String>) -> Self {
        Self {
            name: name.into(),
            urls,
            limit: None,
        }
    }

    /// Cap the group at its first `limit` URLs.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The (filename, url) pairs this group will fetch. Indices are
    /// 1-based and extensions come from the URL tail.
    pub fn targets(&self) -> Vec<(String, &str)> {
        let take = self.limit.unwrap_or(self.urls.len());
        self.urls
            .iter()
            .take(take)
            .enumerate()
            .map(|(i, url)| {
                let filename = format!("{}_{}.{}", self.name, i + 1, url_extension(url));
                (filename, url.as_str())
            })
            .collect()
    }
}

/// The full set of asset groups to mirror.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    pub groups: Vec<AssetGroup>,
}

impl AssetCatalog {
    /// Add a group to the catalog.
    pub fn push(&mut self, group: AssetGroup) {
        self.groups.push(group);
    }

    /// Total number of files the catalog will attempt to fetch.
    pub fn target_count(&self) -> usize {
        self.groups.iter().map(|g| g.targets().len()).sum()
    }
}

/// Outcome of a download batch.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub downloaded: usize,
    pub failed: usize,
}

/// Blocking HTTP downloader with a fixed per-request timeout.
pub struct Downloader {
    client: reqwest::blocking::Client,
}

impl Downloader {
    /// Build a downloader with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DOWNLOAD_TIMEOUT)
    }

    /// Build a downloader with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::HttpError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Fetch one URL into `dest`. Nothing is written unless the response
    /// is a success and the whole body arrived.
    pub fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::HttpError(e.to_string()))?;
        let body = response
            .bytes()
            .map_err(|e| Error::HttpError(e.to_string()))?;

        fs::write(dest, &body)?;
        log::debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(())
    }

    /// Fetch every catalog target into `images_dir`, best-effort, with
    /// one progress line per file.
    pub fn fetch_catalog(&self, catalog: &AssetCatalog, images_dir: &Path) -> Result<FetchReport> {
        fs::create_dir_all(images_dir)?;
        let mut report = FetchReport::default();

        for group in &catalog.groups {
            for (filename, url) in group.targets() {
                match self.fetch(url, &images_dir.join(&filename)) {
                    Ok(()) => {
                        report.downloaded += 1;
                        println!("✓ Downloaded: {}", filename);
                    }
                    Err(e) => {
                        report.failed += 1;
                        println!("Error downloading {}: {}", url, e);
                    }
                }
            }
        }

        Ok(report)
    }
}

/// Extension from the tail of a URL; `bin` when there is none worth using.
fn url_extension(url: &str) -> &str {
    match url.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && !ext.contains('/') => ext,
        _ => FALLBACK_EXT,
    }
}
