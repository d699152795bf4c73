//! PPTX (Office Open XML) parsing and content extraction.
//!
//! Parses .pptx files, which are ZIP archives containing XML documents,
//! and runs the extraction job that turns a presentation into an image
//! directory plus the slide manifest.

pub mod extractor;
pub mod parser;

pub use extractor::ContentExtractor;
pub use parser::PptxParser;
