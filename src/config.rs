//! Run settings.
//!
//! There is no config file. Everything a run needs is carried in a
//! [`RunConfig`] built from command-line flags; the ImageMagick path can also
//! come from the `SPREADCUT_MAGICK` environment variable (resolved by clap).
//!
//! ## Defaults
//!
//! ```text
//! backend        magick
//! magick program magick   (looked up on PATH)
//! JPEG quality   75
//! output dir     <folder>/output
//! ```

use crate::imaging::Quality;
use std::path::{Path, PathBuf};

/// Program name used to invoke ImageMagick when none is configured.
pub const DEFAULT_MAGICK_PROGRAM: &str = "magick";

/// Name of the directory, inside the input folder, that receives all outputs.
///
/// Enumeration never descends into it, so repeated runs don't pick up their
/// own artifacts.
pub const OUTPUT_DIR_NAME: &str = "output";

/// Which [`ImageBackend`](crate::imaging::ImageBackend) performs crop and append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Shell out to ImageMagick.
    #[default]
    Magick,
    /// Decode, copy and encode in process.
    Native,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub backend: BackendKind,
    pub magick_program: PathBuf,
    pub quality: Quality,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            magick_program: PathBuf::from(DEFAULT_MAGICK_PROGRAM),
            quality: Quality::default(),
        }
    }
}

/// Output directory for an input folder.
pub fn output_dir(folder: &Path) -> PathBuf {
    folder.join(OUTPUT_DIR_NAME)
}
