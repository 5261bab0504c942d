//! # spreadcut
//!
//! Batch tool for folders of paired images: scanned book spreads, stereo
//! halves, anything that was one picture cut in two or two pictures that
//! belong together.
//!
//! # Commands
//!
//! ```text
//! crop <folder> <split_width>     every image → its left and right edge strips
//! combine <folder> <left|right>   consecutive pairs → one side-by-side image
//! ```
//!
//! Both commands write into `<folder>/output/` and never touch the inputs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Finds input images: flat sorted listing or recursive walk |
//! | [`imaging`] | Region math, the [`imaging::ImageBackend`] trait and its two backends |
//! | [`naming`] | Output file names, including the crossed `_left`/`_right` suffixes |
//! | [`process`] | The crop and combine pipelines, with per-file error isolation |
//! | [`output`] | Console line formatting for pipeline events |
//! | [`config`] | Run settings: backend, ImageMagick path, JPEG quality |
//! | [`types`] | [`types::Direction`] |
//!
//! # Design Decisions
//!
//! ## Two Backends, One Trait
//!
//! Crop and append can run through ImageMagick (`magick` on `PATH`) or fully
//! in process with the `image` crate. Both implement the same trait and take
//! the same parameter structs; the pipeline picks one at the start of a run
//! and never branches on it again. ImageMagick is the default because it
//! handles every colour model and bit depth the user's files may carry; the
//! native backend needs nothing installed.
//!
//! ## Best-Effort Batches
//!
//! One bad file never stops a run. Decode failures, too-narrow images, tool
//! failures and encode failures are reported and skipped. Only a folder that
//! can't be read, or an output directory that can't be created, is fatal.
//!
//! ## Sequential by Design
//!
//! Files are processed one after another on a single thread. Each iteration
//! opens, transforms and closes its own files, so a long batch never
//! accumulates handles or child processes.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
