//! Batch pipelines for the two commands.
//!
//! ## Crop
//!
//! ```text
//! walk folder → for each image: identify → width check → crop both strips → write
//! ```
//!
//! ## Combine
//!
//! ```text
//! list folder (sorted) → for each pair (0,1), (2,3), ...: order by direction → append → write
//! ```
//!
//! ## Output Structure
//!
//! ```text
//! scans/
//! ├── 001.png
//! ├── 002.png
//! └── output/
//!     ├── 001_right.png    # crop: strip from the left edge of 001.png
//!     ├── 001_left.png     # crop: strip from the right edge of 001.png
//!     └── 001.png          # combine: 001.png + 002.png
//! ```
//!
//! ## Failure handling
//!
//! Only a folder that can't be read, or an output directory that can't be
//! created, stops a run ([`ProcessError`]). Everything that goes wrong with a
//! single image or pair is reported as a [`ProcessEvent`] and the run moves
//! on. Nothing is retried and partial outputs are left in place.
//!
//! Images are processed one at a time, in order. Progress is reported
//! through an optional channel so the caller decides how to display it.

use crate::config::{BackendKind, RunConfig, output_dir};
use crate::imaging::{
    ImageBackend, MagickBackend, Quality, RustBackend, combine_pair, split_image,
};
use crate::scan::{ScanError, list_images, walk_images};
use crate::types::Direction;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to read image files: {0}")]
    Scan(#[from] ScanError),
    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid split width: {0}")]
    InvalidSplitWidth(u32),
}

/// Progress of a run, one event per step worth telling the user about.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// Crop is about to work on an image.
    Processing { source: PathBuf },
    /// Both strips were written.
    Split {
        source: PathBuf,
        left_edge: PathBuf,
        right_edge: PathBuf,
    },
    /// An image was skipped.
    Skipped { source: PathBuf, reason: String },
    /// Combine found an odd number of images; this one has no partner.
    Unpaired { source: PathBuf },
    /// A pair was written.
    Combined {
        left: PathBuf,
        right: PathBuf,
        output: PathBuf,
    },
    /// A pair could not be combined.
    CombineFailed {
        left: PathBuf,
        right: PathBuf,
        reason: String,
    },
}

/// Counts for a finished run.
///
/// For crop, `succeeded` counts images; for combine, pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

fn emit(events: Option<&Sender<ProcessEvent>>, event: ProcessEvent) {
    if let Some(tx) = events {
        // A closed receiver only means nobody is listening
        tx.send(event).ok();
    }
}

fn create_output_dir(folder: &Path) -> Result<PathBuf, ProcessError> {
    let dir = output_dir(folder);
    std::fs::create_dir_all(&dir).map_err(|source| ProcessError::OutputDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Split every image under `folder` using the backend `config` selects.
pub fn crop(
    folder: &Path,
    split_width: u32,
    config: &RunConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<RunSummary, ProcessError> {
    match config.backend {
        BackendKind::Magick => {
            let backend = MagickBackend::new(config.magick_program.clone());
            crop_with_backend(&backend, folder, split_width, config.quality, events)
        }
        BackendKind::Native => {
            crop_with_backend(&RustBackend::new(), folder, split_width, config.quality, events)
        }
    }
}

/// Split every image under `folder` with a specific backend.
pub fn crop_with_backend(
    backend: &impl ImageBackend,
    folder: &Path,
    split_width: u32,
    quality: Quality,
    events: Option<Sender<ProcessEvent>>,
) -> Result<RunSummary, ProcessError> {
    if split_width == 0 {
        return Err(ProcessError::InvalidSplitWidth(split_width));
    }

    let images = walk_images(folder)?;
    let out_dir = create_output_dir(folder)?;
    let events = events.as_ref();
    let mut summary = RunSummary::default();

    for source in images {
        emit(
            events,
            ProcessEvent::Processing {
                source: source.clone(),
            },
        );
        match split_image(backend, &source, &out_dir, split_width, quality) {
            Ok(outputs) => {
                summary.succeeded += 1;
                emit(
                    events,
                    ProcessEvent::Split {
                        source,
                        left_edge: outputs.left_edge,
                        right_edge: outputs.right_edge,
                    },
                );
            }
            Err(e) => {
                summary.failed += 1;
                emit(
                    events,
                    ProcessEvent::Skipped {
                        source,
                        reason: e.to_string(),
                    },
                );
            }
        }
    }

    Ok(summary)
}

/// Combine consecutive pairs in `folder` using the backend `config` selects.
pub fn combine(
    folder: &Path,
    direction: Direction,
    config: &RunConfig,
    events: Option<Sender<ProcessEvent>>,
) -> Result<RunSummary, ProcessError> {
    match config.backend {
        BackendKind::Magick => {
            let backend = MagickBackend::new(config.magick_program.clone());
            combine_with_backend(&backend, folder, direction, config.quality, events)
        }
        BackendKind::Native => {
            combine_with_backend(&RustBackend::new(), folder, direction, config.quality, events)
        }
    }
}

/// Combine consecutive pairs in `folder` with a specific backend.
///
/// With an odd number of images the last one is reported and left alone.
pub fn combine_with_backend(
    backend: &impl ImageBackend,
    folder: &Path,
    direction: Direction,
    quality: Quality,
    events: Option<Sender<ProcessEvent>>,
) -> Result<RunSummary, ProcessError> {
    let images = list_images(folder)?;
    let events = events.as_ref();

    let pairs = images.chunks_exact(2);
    if let [unpaired] = pairs.remainder() {
        emit(
            events,
            ProcessEvent::Unpaired {
                source: unpaired.clone(),
            },
        );
    }

    let out_dir = create_output_dir(folder)?;
    let mut summary = RunSummary::default();

    for pair in pairs {
        let (first, second) = (&pair[0], &pair[1]);
        match combine_pair(backend, first, second, direction, &out_dir, quality) {
            Ok(params) => {
                summary.succeeded += 1;
                emit(
                    events,
                    ProcessEvent::Combined {
                        left: params.left,
                        right: params.right,
                        output: params.output,
                    },
                );
            }
            Err(e) => {
                summary.failed += 1;
                let (left, right) = direction.arrange(first, second);
                emit(
                    events,
                    ProcessEvent::CombineFailed {
                        left: left.clone(),
                        right: right.clone(),
                        reason: e.to_string(),
                    },
                );
            }
        }
    }

    Ok(summary)
}
