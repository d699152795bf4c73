//! Error types for the website content migration jobs.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the migration batch jobs.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open, read, or write a file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// An expected input file or directory does not exist.
    #[error("Input not found: {0}")]
    MissingInput(String),

    /// ZIP archive error (the .pptx container).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML parsing error (slide or relationship parts).
    #[error("XML parsing error: {0}")]
    XmlError(String),

    /// Manifest or content JSON error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Image decode or encode error.
    #[error("Image error: {0}")]
    ImageError(String),

    /// HTTP download error.
    #[error("Download error: {0}")]
    HttpError(String),
}
