//! Content extraction batch job: presentation in, content store out.
//!
//! Walks each slide's shape tree, writes every picture into the store's
//! images directory under a deterministic name, and saves the slide
//! manifest once at the end.

use crate::PptxParser;
use migrate_core::{
    collect_pictures, derive_title, sanitize_filename, ContentStore, Error, ImageRef, Manifest,
    PictureShape, Result, Shape, ShapeIndex, SlideRecord, TextBlock,
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Generic shape name PowerPoint assigns to pasted pictures; never worth
/// carrying into a filename.
const DEFAULT_PICTURE_NAME: &str = "Picture";

/// Length cap for shape-name fragments in image filenames.
const NAME_FRAGMENT_LEN: usize = 20;

/// The content extraction job.
pub struct ContentExtractor {
    parser: PptxParser,
}

impl ContentExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self {
            parser: PptxParser::new(),
        }
    }

    /// Extract text and images from `pptx_path` into the store.
    ///
    /// Returns the manifest that was written to `slides_data.json`.
    pub fn extract(&self, pptx_path: &Path, store: &ContentStore) -> Result<Manifest> {
        if !pptx_path.is_file() {
            return Err(Error::MissingInput(pptx_path.display().to_string()));
        }
        store.ensure_dirs()?;

        let file = File::open(pptx_path)?;
        let slides = self.parser.parse(BufReader::new(file))?;

        let mut manifest = Manifest::new();
        for (idx, shapes) in slides.iter().enumerate() {
            let slide_number = idx + 1;
            println!("Processing slide {}...", slide_number);

            let record = self.extract_slide(slide_number, shapes, store)?;
            println!(
                "  - Found {} text elements and {} images",
                record.text_content.len(),
                record.images.len()
            );
            manifest.push(record);
        }

        store.save_manifest(&manifest)?;
        Ok(manifest)
    }

    /// Build one slide's record, writing its images through the store.
    fn extract_slide(
        &self,
        slide_number: usize,
        shapes: &[Shape],
        store: &ContentStore,
    ) -> Result<SlideRecord> {
        let mut record = SlideRecord::new(slide_number);
        let mut text_parts: Vec<String> = Vec::new();
        let mut image_counter = 0;

        for (shape_index, shape) in shapes.iter().enumerate() {
            if let Some(text) = shape.text() {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    text_parts.push(trimmed.to_string());
                    record.text_content.push(TextBlock {
                        shape_index,
                        text: trimmed.to_string(),
                    });
                }
            }

            // Pictures are keyed by a running per-slide counter, not the
            // shape position; grouped pictures extend the counter with
            // their path inside the group.
            let mut pictures = Vec::new();
            collect_pictures(shape, ShapeIndex::Flat(image_counter), &mut pictures);
            for (key, picture) in &pictures {
                record
                    .images
                    .push(self.save_picture(slide_number, key, picture, store)?);
            }
            image_counter += pictures.len();
        }

        record.all_text = text_parts.join("\n\n");
        record.title = derive_title(&text_parts, slide_number);
        Ok(record)
    }

    /// Write one picture into the store under its deterministic name.
    fn save_picture(
        &self,
        slide_number: usize,
        key: &ShapeIndex,
        picture: &PictureShape,
        store: &ContentStore,
    ) -> Result<ImageRef> {
        let filename = image_filename(slide_number, key, picture);
        let path = store.write_image(&filename, &picture.data)?;
        Ok(ImageRef {
            filename,
            path,
            shape_index: key.clone(),
        })
    }
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic image filename: `slide_NN_image_KK.ext`, or
/// `slide_NN_<name>_KK.ext` when the shape carries a name worth keeping.
fn image_filename(slide_number: usize, key: &ShapeIndex, picture: &PictureShape) -> String {
    let name_fragment = picture
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .map(|name| sanitize_filename(name, NAME_FRAGMENT_LEN))
        .filter(|name| name != DEFAULT_PICTURE_NAME);

    let base = match name_fragment {
        Some(name) => format!(
            "slide_{:02}_{}_{}",
            slide_number,
            name,
            key.file_fragment()
        ),
        None => format!("slide_{:02}_image_{}", slide_number, key.file_fragment()),
    };

    format!("{}.{}", base, picture.ext)
}
