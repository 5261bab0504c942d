//! Pure calculation functions for crop and append geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;
use super::params::Region;

/// The two edge strips taken from a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRegions {
    /// Columns `[0, split)`.
    pub left: Region,
    /// Columns `[width - split, width)`.
    pub right: Region,
}

/// Narrowest source that can be split at `split_width`.
///
/// Both strips plus a two pixel gutter must fit: `2 * split + 2`.
pub fn minimum_width(split_width: u32) -> u64 {
    u64::from(split_width) * 2 + 2
}

/// Calculate the left and right strips for a split.
///
/// Returns `None` when the source is too narrow for `split_width`
/// (see [`minimum_width`]).
///
/// # Examples
/// ```
/// # use spreadcut::imaging::{Dimensions, split_regions};
/// let regions = split_regions(Dimensions { width: 200, height: 50 }, 50).unwrap();
/// assert_eq!(regions.left.x, 0);
/// assert_eq!(regions.right.x, 150);
///
/// assert!(split_regions(Dimensions { width: 101, height: 50 }, 50).is_none());
/// ```
pub fn split_regions(dims: Dimensions, split_width: u32) -> Option<SplitRegions> {
    if minimum_width(split_width) > u64::from(dims.width) {
        return None;
    }

    Some(SplitRegions {
        left: Region {
            x: 0,
            y: 0,
            width: split_width,
            height: dims.height,
        },
        right: Region {
            x: dims.width - split_width,
            y: 0,
            width: split_width,
            height: dims.height,
        },
    })
}

/// Canvas size for placing `left` and `right` side by side.
///
/// Width is the sum, height the taller of the two. The shorter image leaves
/// the remainder of its column unfilled.
pub fn append_dimensions(left: Dimensions, right: Dimensions) -> Dimensions {
    Dimensions {
        width: left.width + right.width,
        height: left.height.max(right.height),
    }
}
