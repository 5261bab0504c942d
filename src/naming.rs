//! Output filename derivation.
//!
//! All artifacts land in the output directory next to the inputs; only the
//! file name is decided here.
//!
//! ## Split names
//!
//! A split writes two files from `<stem>.<ext>`:
//!
//! | Strip | Columns | File |
//! |---|---|---|
//! | left edge | `[0, split)` | `<stem>_right.<ext>` |
//! | right edge | `[width - split, width)` | `<stem>_left.<ext>` |
//!
//! The suffixes are crossed relative to the strip position. Existing
//! downstream consumers read these names, so the crossing is kept as is; it
//! may equally be a long-standing naming slip. Confirm with whoever consumes
//! the output before "fixing" it.
//!
//! ## Combine names
//!
//! A combined pair reuses the file name of the first image of the pair in
//! sorted order, whichever side it ends up on.

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Suffix carried by the strip cut from the right edge.
pub const RIGHT_EDGE_SUFFIX: &str = "_left";
/// Suffix carried by the strip cut from the left edge.
pub const LEFT_EDGE_SUFFIX: &str = "_right";

/// File names for the two strips of a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNames {
    /// Name for the strip at columns `[0, split)`.
    pub left_edge: OsString,
    /// Name for the strip at columns `[width - split, width)`.
    pub right_edge: OsString,
}

fn with_suffix(stem: &OsStr, suffix: &str, ext: Option<&OsStr>) -> OsString {
    let mut name = stem.to_os_string();
    name.push(suffix);
    if let Some(ext) = ext {
        name.push(".");
        name.push(ext);
    }
    name
}

/// Derive both strip names from a source path.
///
/// Returns `None` for paths without a file name (`/`, `..`).
///
/// - `"scans/page01.png"` → left edge `page01_right.png`, right edge `page01_left.png`
/// - `"IMG.Final.JPG"` → `IMG.Final_right.JPG`, `IMG.Final_left.JPG`
pub fn split_output_names(source: &Path) -> Option<SplitNames> {
    let stem = source.file_stem()?;
    let ext = source.extension();
    Some(SplitNames {
        left_edge: with_suffix(stem, LEFT_EDGE_SUFFIX, ext),
        right_edge: with_suffix(stem, RIGHT_EDGE_SUFFIX, ext),
    })
}

/// File name for a combined pair: the name of `first`, unchanged.
pub fn combined_output_name(first: &Path) -> Option<&OsStr> {
    first.file_name()
}
