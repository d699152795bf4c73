//! In-place compression of extracted images.
//!
//! Every image is decoded, flattened onto white if it carries alpha,
//! downscaled to fit a bounding box, and re-encoded. JPEG files stay
//! JPEG. PNG files are re-encoded as optimized PNG, but switch to JPEG
//! when a trial JPEG encode is decisively smaller; the slide manifest is
//! then updated to match the renamed files.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder, Rgb, RgbImage};
use migrate_core::{ContentStore, Error, Manifest, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Tunable compression policy.
#[derive(Debug, Clone)]
pub struct CompressOptions {
    /// JPEG quality factor (1-100).
    pub quality: u8,

    /// Maximum width or height in pixels; larger images are downscaled
    /// to fit. Nothing is ever upscaled.
    pub max_dimension: u32,

    /// A PNG is converted to JPEG only when the trial JPEG is smaller
    /// than this fraction of the optimized PNG.
    pub png_to_jpeg_ratio: f64,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            quality: 85,
            max_dimension: 1920,
            png_to_jpeg_ratio: 0.7,
        }
    }
}

/// Outcome of one file's compression.
#[derive(Debug)]
pub struct CompressedFile {
    /// Final path on disk; the extension may differ from the input.
    pub path: PathBuf,

    /// Bytes written.
    pub size: u64,
}

/// Aggregate results of a compression batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files discovered in the images directory.
    pub total: usize,

    /// Files compressed successfully.
    pub processed: usize,

    /// Combined size of every file the batch attempted.
    pub original_bytes: u64,

    /// Combined output size of the successfully processed files.
    pub compressed_bytes: u64,

    /// Old filename to new filename, for every PNG that became a JPEG.
    pub renames: HashMap<String, String>,
}

impl BatchReport {
    /// Percentage saved across the whole batch.
    pub fn reduction_percent(&self) -> f64 {
        percent_reduction(self.original_bytes, self.compressed_bytes)
    }
}

/// The full compression job: compress the store's images, then bring the
/// manifest in line with any renamed files.
pub fn run(store: &ContentStore, options: &CompressOptions) -> Result<BatchReport> {
    let report = compress_all(store, options)?;
    if !report.renames.is_empty() {
        reconcile_manifest(store, &report.renames)?;
    }
    Ok(report)
}

/// Compress every image in the store's images directory, printing one
/// progress line per file and a summary at the end.
///
/// Individual failures are reported and skipped; the batch keeps going.
pub fn compress_all(store: &ContentStore, options: &CompressOptions) -> Result<BatchReport> {
    if options.quality == 0 || options.quality > 100 {
        return Err(Error::ImageError(format!(
            "quality must be between 1 and 100, got {}",
            options.quality
        )));
    }

    let files = store.list_images()?;
    let mut report = BatchReport {
        total: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        println!("No images found to compress");
        return Ok(report);
    }

    println!("Found {} images to compress...", files.len());
    println!(
        "Settings: Quality={}, Max dimension={}px",
        options.quality, options.max_dimension
    );
    println!();

    for path in &files {
        let name = filename_of(path);
        let original_size = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                println!("Compressing: {} -> FAILED: {}", name, e);
                continue;
            }
        };
        report.original_bytes += original_size;

        match compress_image(path, options) {
            Ok(compressed) => {
                report.processed += 1;
                report.compressed_bytes += compressed.size;

                let new_name = filename_of(&compressed.path);
                println!(
                    "Compressing: {} ({:.1} KB) -> {} ({:.1} KB, {:.1}% reduction)",
                    name,
                    kb(original_size),
                    new_name,
                    kb(compressed.size),
                    percent_reduction(original_size, compressed.size)
                );

                if new_name != name {
                    report.renames.insert(name, new_name);
                }
            }
            Err(e) => {
                println!(
                    "Compressing: {} ({:.1} KB) -> FAILED: {}",
                    name,
                    kb(original_size),
                    e
                );
            }
        }
    }

    print_summary(&report);
    Ok(report)
}

/// Compress one image in place.
///
/// The output format follows the input extension: `.jpg`/`.jpeg` are
/// re-encoded as JPEG, `.png` is re-encoded as optimized PNG with a JPEG
/// trial, and anything else is forced to JPEG under a `.jpg` name.
pub fn compress_image(path: &Path, options: &CompressOptions) -> Result<CompressedFile> {
    let img = image::open(path)
        .map_err(|e| Error::ImageError(format!("{}: {}", path.display(), e)))?;

    let rgb = flatten_to_rgb(&img);
    let rgb = bounded_resize(rgb, options.max_dimension);

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => {
            let encoded = encode_jpeg(&rgb, options.quality)?;
            fs::write(path, &encoded)?;
            Ok(CompressedFile {
                path: path.to_path_buf(),
                size: encoded.len() as u64,
            })
        }
        "png" => {
            let png = encode_png(&rgb)?;
            let jpeg = encode_jpeg(&rgb, options.quality)?;

            if (jpeg.len() as f64) < (png.len() as f64) * options.png_to_jpeg_ratio {
                let jpeg_path = path.with_extension("jpg");
                fs::write(&jpeg_path, &jpeg)?;
                fs::remove_file(path)?;
                Ok(CompressedFile {
                    path: jpeg_path,
                    size: jpeg.len() as u64,
                })
            } else {
                fs::write(path, &png)?;
                Ok(CompressedFile {
                    path: path.to_path_buf(),
                    size: png.len() as u64,
                })
            }
        }
        _ => {
            let encoded = encode_jpeg(&rgb, options.quality)?;
            let jpeg_path = path.with_extension("jpg");
            fs::write(&jpeg_path, &encoded)?;
            if jpeg_path != path {
                fs::remove_file(path)?;
            }
            Ok(CompressedFile {
                path: jpeg_path,
                size: encoded.len() as u64,
            })
        }
    }
}

/// Apply a rename map to the manifest's image references.
///
/// Rewrites `filename` and swaps the `path` extension for every matching
/// reference; nothing else in the manifest is touched. Returns how many
/// references changed.
pub fn apply_renames(manifest: &mut Manifest, renames: &HashMap<String, String>) -> usize {
    let mut updated = 0;
    for slide in manifest.iter_mut() {
        for image in slide.images.iter_mut() {
            if let Some(new_name) = renames.get(&image.filename) {
                image.filename = new_name.clone();
                image.path = swap_path_extension(&image.path, new_name);
                updated += 1;
            }
        }
    }
    updated
}

/// Rewrite the manifest after renames. Returns whether the manifest was
/// saved; stores without a manifest are left alone.
pub fn reconcile_manifest(
    store: &ContentStore,
    renames: &HashMap<String, String>,
) -> Result<bool> {
    if renames.is_empty() || !store.manifest_path().is_file() {
        return Ok(false);
    }

    let mut manifest = store.load_manifest()?;
    if apply_renames(&mut manifest, renames) == 0 {
        return Ok(false);
    }

    store.save_manifest(&manifest)?;
    println!(
        "\nUpdated {} with new image filenames",
        store.manifest_path().display()
    );
    Ok(true)
}

/// Flatten transparency onto an opaque white background and drop to RGB.
///
/// Fully opaque pixels pass through bit-exact.
fn flatten_to_rgb(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    let rgba = img.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        rgb.put_pixel(
            x,
            y,
            Rgb([
                composite_on_white(r, a),
                composite_on_white(g, a),
                composite_on_white(b, a),
            ]),
        );
    }
    rgb
}

/// Integer alpha compositing of one channel over white, with rounding.
fn composite_on_white(channel: u8, alpha: u8) -> u8 {
    let c = u32::from(channel);
    let a = u32::from(alpha);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

/// Downscale to fit inside a `max_dimension` square, preserving aspect
/// ratio. Images already inside the box come back untouched.
fn bounded_resize(rgb: RgbImage, max_dimension: u32) -> RgbImage {
    let (width, height) = rgb.dimensions();
    if width <= max_dimension && height <= max_dimension {
        return rgb;
    }

    let resized =
        DynamicImage::ImageRgb8(rgb).resize(max_dimension, max_dimension, FilterType::Lanczos3);
    let (new_width, new_height) = resized.dimensions();
    log::debug!("Resized {}x{} -> {}x{}", width, height, new_width, new_height);
    resized.to_rgb8()
}

/// JPEG-encode at the given quality factor.
fn encode_jpeg(rgb: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    encoder
        .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(|e| Error::ImageError(format!("JPEG encode failed: {}", e)))?;
    Ok(buf)
}

/// PNG-encode at maximum compression effort.
fn encode_png(rgb: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .map_err(|e| Error::ImageError(format!("PNG encode failed: {}", e)))?;
    Ok(buf)
}

/// Replace the extension of a manifest path with the one on `new_name`.
fn swap_path_extension(path: &str, new_name: &str) -> String {
    let new_ext = new_name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("jpg");
    match path.rsplit_once('.') {
        Some((stem, _)) => format!("{}.{}", stem, new_ext),
        None => format!("{}.{}", path, new_ext),
    }
}

fn print_summary(report: &BatchReport) {
    println!("\n{}", "=".repeat(60));
    println!("Compression Summary:");
    println!("  Images processed: {}/{}", report.processed, report.total);
    println!("  Original total size: {:.2} MB", mb(report.original_bytes));
    println!(
        "  Compressed total size: {:.2} MB",
        mb(report.compressed_bytes)
    );
    println!("  Total reduction: {:.1}%", report.reduction_percent());
    println!(
        "  Space saved: {:.2} MB",
        mb(report.original_bytes) - mb(report.compressed_bytes)
    );
}

fn percent_reduction(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - compressed as f64) / original as f64 * 100.0
}

fn kb(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

fn mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

fn filename_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use migrate_core::{ImageRef, ShapeIndex, SlideRecord};

    fn flat_rgb(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb(color))
    }

    fn noise_rgb(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            let mut v = u64::from(x)
                .wrapping_mul(0x9E37_79B9_7F4A_7C15)
                ^ u64::from(y).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
            v ^= v << 13;
            v ^= v >> 7;
            v ^= v << 17;
            Rgb([v as u8, (v >> 8) as u8, (v >> 16) as u8])
        })
    }

    #[test]
    fn test_composite_on_white() {
        assert_eq!(composite_on_white(0, 0), 255);
        assert_eq!(composite_on_white(200, 0), 255);
        assert_eq!(composite_on_white(0, 255), 0);
        assert_eq!(composite_on_white(77, 255), 77);
        assert_eq!(composite_on_white(128, 128), 191);
    }

    #[test]
    fn test_flatten_opaque_pixels_pass_through() {
        let mut rgba = RgbaImage::new(3, 1);
        rgba.put_pixel(0, 0, Rgba([17, 130, 244, 255]));
        rgba.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        rgba.put_pixel(2, 0, Rgba([255, 255, 255, 255]));

        let rgb = flatten_to_rgb(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.get_pixel(0, 0).0, [17, 130, 244]);
        assert_eq!(rgb.get_pixel(1, 0).0, [0, 0, 0]);
        assert_eq!(rgb.get_pixel(2, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_flatten_transparent_becomes_white() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([90, 10, 200, 0]));
        let rgb = flatten_to_rgb(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.get_pixel(1, 1).0, [255, 255, 255]);
    }

    #[test]
    fn test_flatten_skips_opaque_formats() {
        let rgb_in = flat_rgb(4, 4, [10, 20, 30]);
        let rgb = flatten_to_rgb(&DynamicImage::ImageRgb8(rgb_in));
        assert_eq!(rgb.get_pixel(2, 2).0, [10, 20, 30]);
    }

    #[test]
    fn test_bounded_resize_caps_large_images() {
        let resized = bounded_resize(flat_rgb(300, 200, [5, 5, 5]), 192);
        assert_eq!(resized.dimensions(), (192, 128));
    }

    #[test]
    fn test_bounded_resize_portrait() {
        let resized = bounded_resize(flat_rgb(200, 300, [5, 5, 5]), 192);
        assert_eq!(resized.dimensions(), (128, 192));
    }

    #[test]
    fn test_bounded_resize_never_upscales() {
        let resized = bounded_resize(flat_rgb(100, 80, [5, 5, 5]), 192);
        assert_eq!(resized.dimensions(), (100, 80));
    }

    #[test]
    fn test_jpeg_recompressed_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.jpg");
        flat_rgb(64, 48, [120, 90, 60]).save(&path).unwrap();

        let out = compress_image(&path, &CompressOptions::default()).unwrap();
        assert_eq!(out.path, path);
        assert!(path.is_file());

        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.dimensions(), (64, 48));
    }

    #[test]
    fn test_small_flat_png_stays_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        flat_rgb(8, 8, [200, 40, 40]).save(&path).unwrap();

        let out = compress_image(&path, &CompressOptions::default()).unwrap();
        assert_eq!(out.path, path);
        assert!(path.is_file());
        assert!(!dir.path().join("icon.jpg").exists());
    }

    #[test]
    fn test_noisy_png_converts_to_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("busy.png");
        noise_rgb(256, 256).save(&path).unwrap();

        let out = compress_image(&path, &CompressOptions::default()).unwrap();
        assert_eq!(out.path, dir.path().join("busy.jpg"));
        assert!(!path.exists());

        let reloaded = image::open(&out.path).unwrap();
        assert_eq!(reloaded.dimensions(), (256, 256));
    }

    #[test]
    fn test_foreign_extension_forced_to_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anim.gif");
        flat_rgb(16, 16, [9, 9, 9]).save(&path).unwrap();

        let out = compress_image(&path, &CompressOptions::default()).unwrap();
        assert_eq!(out.path, dir.path().join("anim.jpg"));
        assert!(!path.exists());
    }

    #[test]
    fn test_semi_transparent_png_flattens_onto_white() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.png");
        RgbaImage::from_pixel(32, 32, Rgba([255, 0, 0, 128]))
            .save(&path)
            .unwrap();

        compress_image(&path, &CompressOptions::default()).unwrap();

        // Solid color stays PNG, so the decode is lossless
        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(reloaded.get_pixel(16, 16).0, [255, 127, 127]);
    }

    #[test]
    fn test_corrupt_file_does_not_abort_batch() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        store.ensure_dirs().unwrap();

        fs::write(store.images_dir().join("broken.png"), b"not a png").unwrap();
        flat_rgb(8, 8, [0, 120, 0])
            .save(store.images_dir().join("ok.png"))
            .unwrap();

        let report = compress_all(&store, &CompressOptions::default()).unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.processed, 1);
        assert!(report.renames.is_empty());
        assert!(store.images_dir().join("broken.png").is_file());
        assert!(store.images_dir().join("ok.png").is_file());
    }

    #[test]
    fn test_quality_out_of_range_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        store.ensure_dirs().unwrap();

        let options = CompressOptions {
            quality: 0,
            ..Default::default()
        };
        assert!(compress_all(&store, &options).is_err());
    }

    #[test]
    fn test_compress_all_missing_dir_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path().join("nowhere"));
        assert!(compress_all(&store, &CompressOptions::default()).is_err());
    }

    #[test]
    fn test_swap_path_extension() {
        assert_eq!(swap_path_extension("images/a.png", "a.jpg"), "images/a.jpg");
        assert_eq!(swap_path_extension("images/b.c.png", "b.c.jpg"), "images/b.c.jpg");
        assert_eq!(swap_path_extension("noext", "x.jpg"), "noext.jpg");
    }

    fn manifest_with(filenames: &[&str]) -> Manifest {
        let mut record = SlideRecord::new(1);
        for (i, name) in filenames.iter().enumerate() {
            record.images.push(ImageRef {
                filename: name.to_string(),
                path: format!("images/{}", name),
                shape_index: ShapeIndex::Flat(i),
            });
        }
        record.all_text = "text".to_string();
        record.title = "text".to_string();
        vec![record]
    }

    #[test]
    fn test_apply_renames_touches_only_matches() {
        let mut manifest = manifest_with(&["a.png", "b.png"]);
        let mut renames = HashMap::new();
        renames.insert("a.png".to_string(), "a.jpg".to_string());

        let updated = apply_renames(&mut manifest, &renames);
        assert_eq!(updated, 1);

        let images = &manifest[0].images;
        assert_eq!(images[0].filename, "a.jpg");
        assert_eq!(images[0].path, "images/a.jpg");
        assert_eq!(images[0].shape_index, ShapeIndex::Flat(0));
        assert_eq!(images[1].filename, "b.png");
        assert_eq!(images[1].path, "images/b.png");
    }

    #[test]
    fn test_reconcile_without_renames_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        store.ensure_dirs().unwrap();
        store.save_manifest(&manifest_with(&["a.png"])).unwrap();

        let saved = reconcile_manifest(&store, &HashMap::new()).unwrap();
        assert!(!saved);
    }

    #[test]
    fn test_run_compresses_and_reconciles() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(dir.path());
        store.ensure_dirs().unwrap();

        noise_rgb(200, 200)
            .save(store.images_dir().join("busy.png"))
            .unwrap();
        flat_rgb(8, 8, [0, 120, 0])
            .save(store.images_dir().join("flat.png"))
            .unwrap();
        flat_rgb(64, 64, [120, 90, 60])
            .save(store.images_dir().join("photo.jpg"))
            .unwrap();
        store
            .save_manifest(&manifest_with(&["busy.png", "flat.png"]))
            .unwrap();

        let report = run(&store, &CompressOptions::default()).unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.processed, 3);
        assert_eq!(report.renames.len(), 1);
        assert_eq!(report.renames["busy.png"], "busy.jpg");

        assert!(store.images_dir().join("busy.jpg").is_file());
        assert!(!store.images_dir().join("busy.png").exists());
        assert!(store.images_dir().join("flat.png").is_file());
        assert!(store.images_dir().join("photo.jpg").is_file());

        let manifest = store.load_manifest().unwrap();
        let images = &manifest[0].images;
        assert_eq!(images[0].filename, "busy.jpg");
        assert_eq!(images[0].path, "images/busy.jpg");
        assert_eq!(images[1].filename, "flat.png");
        assert_eq!(images[1].path, "images/flat.png");
    }
}
