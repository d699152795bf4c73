//! Slide shape tree and picture traversal.
//!
//! The extraction job walks slides through this small model rather than a
//! parser's document tree, so any backend able to produce `Shape` values
//! plugs into the same pipeline.

use crate::ShapeIndex;

/// A shape on a slide, resolved to its extractable content.
#[derive(Debug, Clone)]
pub enum Shape {
    /// A text-bearing shape (text box, placeholder, autoshape).
    Text {
        /// Shape name from the document, if any.
        name: Option<String>,
        /// Raw text with paragraphs joined by newlines, untrimmed.
        text: String,
    },

    /// A picture with its encoded bytes.
    Picture(PictureShape),

    /// A group of shapes; only pictures are extracted from inside groups.
    Group {
        name: Option<String>,
        children: Vec<Shape>,
    },

    /// A shape the pipeline ignores (table, connector, chart). Kept so
    /// top-level shape positions stay stable.
    Other,
}

/// Image content carried by a picture shape.
#[derive(Debug, Clone)]
pub struct PictureShape {
    /// Shape name from the document, if any.
    pub name: Option<String>,

    /// Encoded image bytes exactly as stored in the document.
    pub data: Vec<u8>,

    /// Lowercase extension of the media part (`png`, `jpg`, ...).
    pub ext: String,
}

impl Shape {
    /// Whether this shape is a picture.
    pub fn is_picture(&self) -> bool {
        matches!(self, Shape::Picture(_))
    }

    /// Whether this shape is a group of other shapes.
    pub fn is_group(&self) -> bool {
        matches!(self, Shape::Group { .. })
    }

    /// Child shapes; empty for anything but a group.
    pub fn children(&self) -> &[Shape] {
        match self {
            Shape::Group { children, .. } => children,
            _ => &[],
        }
    }

    /// Encoded image bytes, for pictures.
    pub fn image_bytes(&self) -> Option<&[u8]> {
        match self {
            Shape::Picture(picture) => Some(&picture.data),
            _ => None,
        }
    }

    /// Raw text content, for text-bearing shapes.
    pub fn text(&self) -> Option<&str> {
        match self {
            Shape::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Shape name as recorded in the document.
    pub fn name(&self) -> Option<&str> {
        match self {
            Shape::Text { name, .. } | Shape::Group { name, .. } => name.as_deref(),
            Shape::Picture(picture) => picture.name.as_deref(),
            Shape::Other => None,
        }
    }
}

/// Collect every picture reachable from `shape`, descending into groups.
///
/// `key` names the position of `shape` itself; children extend it with
/// their own position (`3` -> `"3_0"`, `"3_0"` -> `"3_0_1"`), so nested
/// pictures keep unique, traceable keys.
pub fn collect_pictures<'a>(
    shape: &'a Shape,
    key: ShapeIndex,
    found: &mut Vec<(ShapeIndex, &'a PictureShape)>,
) {
    match shape {
        Shape::Picture(picture) => found.push((key, picture)),
        Shape::Group { children, .. } => {
            for (i, child) in children.iter().enumerate() {
                collect_pictures(child, key.child(i), found);
            }
        }
        Shape::Text { .. } | Shape::Other => {}
    }
}
