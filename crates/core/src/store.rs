//! Filesystem content store shared by the batch jobs.
//!
//! The content root holds an `images/` directory and the slide manifest.
//! Both the extraction and compression jobs go through this one
//! abstraction, so tests can point it at a temporary directory.

use crate::{Error, Manifest, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest filename inside the content root.
pub const MANIFEST_FILENAME: &str = "slides_data.json";

/// Image directory name inside the content root.
pub const IMAGES_DIR: &str = "images";

/// Image extensions the pipeline handles (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Repository over one content root directory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    /// Create a store over `root` without touching the filesystem.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The images directory under the root.
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    /// Path of the slide manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILENAME)
    }

    /// Create the root and images directories.
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(self.images_dir())?;
        Ok(())
    }

    /// List image files in the images directory, sorted by name.
    ///
    /// Only lowercase `.png`, `.jpg` and `.jpeg` extensions are picked up.
    /// The manifest plays no part in discovery.
    pub fn list_images(&self) -> Result<Vec<PathBuf>> {
        let dir = self.images_dir();
        if !dir.is_dir() {
            return Err(Error::MissingInput(dir.display().to_string()));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            let is_image = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| IMAGE_EXTENSIONS.contains(&e))
                .unwrap_or(false);
            if is_image && path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        log::debug!("Found {} images under {}", files.len(), dir.display());
        Ok(files)
    }

    /// Write image bytes into the images directory.
    ///
    /// Returns the root-relative path recorded in the manifest, always
    /// with forward slashes.
    pub fn write_image(&self, filename: &str, data: &[u8]) -> Result<String> {
        fs::write(self.images_dir().join(filename), data)?;
        Ok(format!("{}/{}", IMAGES_DIR, filename))
    }

    /// Load the manifest from `slides_data.json`.
    pub fn load_manifest(&self) -> Result<Manifest> {
        let path = self.manifest_path();
        if !path.is_file() {
            return Err(Error::MissingInput(path.display().to_string()));
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Save the manifest, pretty-printed with a trailing newline.
    pub fn save_manifest(&self, manifest: &Manifest) -> Result<()> {
        write_pretty_json(&self.manifest_path(), manifest)?;
        log::debug!(
            "Saved manifest with {} slides to {}",
            manifest.len(),
            self.manifest_path().display()
        );
        Ok(())
    }
}

/// Serialize `value` to `path` as indented JSON (2-space indent, UTF-8
/// with non-ASCII characters kept literal), ending with a newline.
pub fn write_pretty_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}
