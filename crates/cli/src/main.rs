//! CLI driver for the website content migration batch jobs.

mod legacy;

use anyhow::Result;
use clap::{Parser, Subcommand};
use migrate_core::ContentStore;
use migrate_images::CompressOptions;
use migrate_pptx::ContentExtractor;
use migrate_web::{write_content, Downloader};
use std::fs;
use std::path::{Path, PathBuf};

/// One-time migration jobs for rebuilding the Law Park Educational Trust
/// website: extract presentation content, compress images, mirror legacy
/// site assets.
#[derive(Parser, Debug)]
#[command(name = "site-migrate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract text and images from a PowerPoint presentation
    Extract {
        /// Input presentation (.pptx)
        input: PathBuf,

        /// Output content directory
        #[arg(short, long, default_value = "extracted_content")]
        output: PathBuf,
    },

    /// Compress extracted images for web delivery
    Compress {
        /// Content directory holding images/ and slides_data.json
        #[arg(long, default_value = "extracted_content")]
        content_dir: PathBuf,

        /// JPEG quality factor
        #[arg(short, long, default_value_t = 85, value_parser = clap::value_parser!(u8).range(1..=100))]
        quality: u8,

        /// Maximum image width/height in pixels
        #[arg(long, default_value_t = 1920)]
        max_dimension: u32,
    },

    /// Download images and content from the legacy website
    Fetch {
        /// Output directory for site content and images
        #[arg(short, long, default_value = "website_content")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let outcome = match cli.command {
        Command::Extract { input, output } => run_extract(&input, &output),
        Command::Compress {
            content_dir,
            quality,
            max_dimension,
        } => run_compress(&content_dir, quality, max_dimension),
        Command::Fetch { output } => run_fetch(&output),
    };

    // Job failures are reported as text; the process exits normally
    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

/// Run the presentation extraction job.
fn run_extract(input: &Path, output: &Path) -> Result<()> {
    println!("Extracting content from: {}", input.display());
    println!("Output directory: {}", output.display());

    let store = ContentStore::new(output);
    let manifest = ContentExtractor::new().extract(input, &store)?;

    let total_images: usize = manifest.iter().map(|s| s.images.len()).sum();
    println!("\nExtraction complete!");
    println!("  - Total slides: {}", manifest.len());
    println!("  - Images saved to: {}", store.images_dir().display());
    println!("  - Data saved to: {}", store.manifest_path().display());
    println!("  - Total images extracted: {}", total_images);

    Ok(())
}

/// Run the image compression job.
fn run_compress(content_dir: &Path, quality: u8, max_dimension: u32) -> Result<()> {
    log::debug!(
        "Compressing {} with quality={} max_dimension={}",
        content_dir.display(),
        quality,
        max_dimension
    );

    let store = ContentStore::new(content_dir);
    let options = CompressOptions {
        quality,
        max_dimension,
        ..Default::default()
    };
    migrate_images::run(&store, &options)?;

    Ok(())
}

/// Run the legacy website mirroring job.
fn run_fetch(output: &Path) -> Result<()> {
    let catalog = legacy::asset_catalog();
    let content = legacy::site_content();

    fs::create_dir_all(output)?;
    let images_dir = output.join("images");

    println!("Downloading images from original website...");
    let downloader = Downloader::new()?;
    let report = downloader.fetch_catalog(&catalog, &images_dir)?;
    if report.failed > 0 {
        println!("{} of {} downloads failed", report.failed, catalog.target_count());
    }

    let content_path = output.join("website_content.json");
    write_content(&content, &content_path)?;

    println!("\n✓ Content saved to: {}", content_path.display());
    println!("✓ Images saved to: {}", images_dir.display());
    println!("\nExtraction complete!");

    Ok(())
}
