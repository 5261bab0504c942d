//! Input discovery.
//!
//! Finds the images a run will process. Two shapes of listing exist because
//! the two commands care about different things:
//!
//! - [`list_images`] — one folder, no recursion, sorted by full path. Combine
//!   pairs neighbours in this order, so it must be deterministic.
//! - [`walk_images`] — the whole tree below a folder, in traversal order
//!   (entries sorted by file name at each level). Crop treats every image
//!   independently.
//!
//! ## Filtering
//!
//! - Only `.jpg`, `.jpeg` and `.png` files are returned, compared
//!   case-insensitively. Anything else is skipped without a message.
//! - Directories are never returned.
//! - The walk prunes every directory named [`OUTPUT_DIR_NAME`] below the
//!   root, so artifacts from a previous run are not processed again.
//!   Pruning looks only at path segments below the root: a root such as
//!   `/data/output/scans` is walked in full, even though its own path
//!   contains an `output` segment.
//!
//! An unreadable folder is an error for the whole run.

use crate::config::OUTPUT_DIR_NAME;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error walking folder: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Extensions (lowercase) that are treated as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Whether `path` has a supported image extension.
pub fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Images directly inside `folder`, sorted by full path.
pub fn list_images(folder: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let io_err = |source| ScanError::Io {
        path: folder.to_path_buf(),
        source,
    };

    let mut images = Vec::new();
    for entry in fs::read_dir(folder).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            continue;
        }
        if is_image(&path) {
            images.push(path);
        }
    }

    images.sort();
    Ok(images)
}

fn is_output_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == OUTPUT_DIR_NAME
}

/// Images anywhere below `folder`, skipping output directories.
pub fn walk_images(folder: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut images = Vec::new();

    let walker = WalkDir::new(folder)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_output_dir(e));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if is_image(entry.path()) {
            images.push(entry.into_path());
        }
    }

    Ok(images)
}
