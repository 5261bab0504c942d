//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take a source, compute regions and output paths, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::split_regions;
use super::params::{AppendParams, CropParams, CropTarget, Quality};
use crate::naming::{combined_output_name, split_output_names};
use crate::types::Direction;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-image failure. The pipeline reports it and moves on.
#[derive(Error, Debug)]
pub enum OperationError {
    #[error("image width too small ({width})")]
    WidthTooSmall { width: u32 },
    #[error("no file name in {}", .0.display())]
    NoFileName(PathBuf),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, OperationError>;

/// Files written by a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutputs {
    /// Strip from the left edge (named `_right`).
    pub left_edge: PathBuf,
    /// Strip from the right edge (named `_left`).
    pub right_edge: PathBuf,
}

/// Plan a split without executing it.
///
/// Reads only the header of `source` to learn its size.
pub fn plan_split(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    split_width: u32,
    quality: Quality,
) -> Result<CropParams> {
    let dims = backend.identify(source)?;
    let regions = split_regions(dims, split_width)
        .ok_or(OperationError::WidthTooSmall { width: dims.width })?;
    let names =
        split_output_names(source).ok_or_else(|| OperationError::NoFileName(source.into()))?;

    Ok(CropParams {
        source: source.to_path_buf(),
        targets: vec![
            CropTarget {
                region: regions.left,
                output: output_dir.join(names.left_edge),
            },
            CropTarget {
                region: regions.right,
                output: output_dir.join(names.right_edge),
            },
        ],
        quality,
    })
}

/// Split `source` into its left and right edge strips under `output_dir`.
///
/// Too-narrow images are rejected before anything is written. If the second
/// strip fails, the first stays on disk.
pub fn split_image(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    split_width: u32,
    quality: Quality,
) -> Result<SplitOutputs> {
    let params = plan_split(backend, source, output_dir, split_width, quality)?;
    backend.crop(&params)?;

    Ok(SplitOutputs {
        left_edge: params.targets[0].output.clone(),
        right_edge: params.targets[1].output.clone(),
    })
}

/// Plan combining a sorted pair without executing it.
///
/// The output is named after `first` regardless of `direction`.
pub fn plan_combine(
    first: &Path,
    second: &Path,
    direction: Direction,
    output_dir: &Path,
    quality: Quality,
) -> Result<AppendParams> {
    let name = combined_output_name(first).ok_or_else(|| OperationError::NoFileName(first.into()))?;
    let (left, right) = direction.arrange(first, second);

    Ok(AppendParams {
        left: left.to_path_buf(),
        right: right.to_path_buf(),
        output: output_dir.join(name),
        quality,
    })
}

/// Combine a sorted pair side by side. Heights are not checked.
pub fn combine_pair(
    backend: &impl ImageBackend,
    first: &Path,
    second: &Path,
    direction: Direction,
    output_dir: &Path,
    quality: Quality,
) -> Result<AppendParams> {
    let params = plan_combine(first, second, direction, output_dir, quality)?;
    backend.append(&params)?;
    Ok(params)
}
