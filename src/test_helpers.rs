//! Shared test utilities for the spreadcut test suite.
//!
//! Synthetic images are generated on the fly so tests never depend on
//! fixture files. Every generated image has a distinct pixel at every
//! coordinate, which makes "this strip came from that spot" assertions
//! meaningful.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let original = write_png(&tmp.path().join("a.png"), 100, 50, 0);
//! // ... run a pipeline ...
//! assert_eq!(file_names(&tmp.path().join("output")), vec!["a_left.png", "a_right.png"]);
//! ```

use image::{ImageEncoder, Rgb, RgbImage};
use std::path::Path;

// =========================================================================
// Image generation
// =========================================================================

/// Gradient image; `seed` shifts the blue channel so two images differ.
pub fn gradient(width: u32, height: u32, seed: u8) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, seed.wrapping_add((x / 256) as u8)])
    })
}

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
}

/// Write a gradient PNG and return the pixels that were written.
pub fn write_png(path: &Path, width: u32, height: u32, seed: u8) -> RgbImage {
    ensure_parent(path);
    let img = gradient(width, height, seed);
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
    img
}

/// Write a gradient JPEG at default quality.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    ensure_parent(path);
    let img = gradient(width, height, 128);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create an empty file, for tests where the backend never reads it.
pub fn touch_file(path: &Path) {
    ensure_parent(path);
    std::fs::write(path, b"").unwrap();
}

// =========================================================================
// Directory inspection
// =========================================================================

/// Sorted file names directly inside `dir`. Panics if `dir` is unreadable.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", dir.display()))
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
