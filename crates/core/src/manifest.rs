//! Manifest types shared by the extraction and compression jobs.
//!
//! The manifest (`slides_data.json`) is the contract between the batch
//! jobs and the website build that consumes them: a single JSON array with
//! one record per slide, in presentation order.

use serde::{Deserialize, Serialize};

/// The slide manifest: one record per slide, in presentation order.
pub type Manifest = Vec<SlideRecord>;

/// Content extracted from one slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideRecord {
    /// 1-based slide number, contiguous in presentation order.
    pub slide_number: usize,

    /// Non-empty text runs from top-level shapes, in shape order.
    pub text_content: Vec<TextBlock>,

    /// Images extracted from this slide, in extraction order.
    pub images: Vec<ImageRef>,

    /// All text blocks joined with a blank line between them.
    pub all_text: String,

    /// Filename-safe title derived from the first text block.
    pub title: String,
}

impl SlideRecord {
    /// Create an empty record for the given slide number.
    pub fn new(slide_number: usize) -> Self {
        Self {
            slide_number,
            text_content: Vec::new(),
            images: Vec::new(),
            all_text: String::new(),
            title: String::new(),
        }
    }
}

/// One text run and the top-level position of the shape it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    /// Position of the source shape among the slide's top-level shapes.
    pub shape_index: usize,

    /// Trimmed text content, paragraphs separated by newlines.
    pub text: String,
}

/// Reference to an image written into the content store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRef {
    /// Bare filename inside the images directory.
    pub filename: String,

    /// Root-relative path with forward slashes (`images/<filename>`).
    pub path: String,

    /// Position key of the source shape; composite for grouped shapes.
    pub shape_index: ShapeIndex,
}

/// Position of a picture within a slide's shape tree.
///
/// Top-level pictures carry the slide's running image counter as a plain
/// integer. Pictures nested in group shapes carry an underscore-joined
/// path like `"3_1"` (counter of the group, then child positions), so
/// images inside groups stay uniquely addressable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeIndex {
    Flat(usize),
    Nested(String),
}

impl ShapeIndex {
    /// Key for the child at `index` under the shape this key points at.
    pub fn child(&self, index: usize) -> ShapeIndex {
        match self {
            ShapeIndex::Flat(base) => ShapeIndex::Nested(format!("{}_{}", base, index)),
            ShapeIndex::Nested(path) => ShapeIndex::Nested(format!("{}_{}", path, index)),
        }
    }

    /// Zero-padded form used in image filenames (`07`, `03_01`).
    pub fn file_fragment(&self) -> String {
        match self {
            ShapeIndex::Flat(n) => format!("{:02}", n),
            ShapeIndex::Nested(path) => path
                .split('_')
                .map(|part| match part.parse::<usize>() {
                    Ok(n) => format!("{:02}", n),
                    Err(_) => part.to_string(),
                })
                .collect::<Vec<_>>()
                .join("_"),
        }
    }
}
