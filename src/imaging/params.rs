//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which decides which regions and files to produce) and the
//! [`backend`](super::backend) (which does the actual pixel work). Both
//! backends consume the same parameters, so operation logic never knows
//! whether ImageMagick or the in-process codec is doing the work.
//!
//! ## Types
//!
//! - [`Quality`] — JPEG encoding quality (1–100, default 75). Clamped on construction.
//! - [`OutputFormat`] — Encoder selected from an output extension (PNG or JPEG).
//! - [`Region`] — Rectangle in source pixel coordinates.
//! - [`CropParams`] — One source, one or more regions, each written to its own file.
//! - [`AppendParams`] — Two sources placed left-to-right into one output.

use std::path::{Path, PathBuf};

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

/// Encoder for an output file, chosen from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless.
    Png,
    /// Lossy, encoded at the configured [`Quality`].
    Jpeg,
}

impl OutputFormat {
    /// Resolve a format from a bare extension (`"png"`, `"JPG"`, ...).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Resolve a format from the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// A rectangle in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One region of the source and the file it is written to.
#[derive(Debug, Clone, PartialEq)]
pub struct CropTarget {
    pub region: Region,
    pub output: PathBuf,
}

/// Parameters for cropping regions out of a single source image.
///
/// Targets are written in order; a failure stops at that target and leaves
/// earlier outputs on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct CropParams {
    pub source: PathBuf,
    pub targets: Vec<CropTarget>,
    pub quality: Quality,
}

/// Parameters for placing two images side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendParams {
    /// Placed at x = 0.
    pub left: PathBuf,
    /// Placed at x = width of `left`.
    pub right: PathBuf,
    pub output: PathBuf,
    pub quality: Quality,
}
