//! Image processing.
//!
//! | Operation | Magick backend | Rust backend |
//! |---|---|---|
//! | **Identify** | `image::ImageReader` header read | `image::ImageReader` header read |
//! | **Crop** | `magick -crop WxH+X+Y +repage` | `DynamicImage::crop_imm` |
//! | **Append** | `magick +append` | `GenericImage::copy_from` |
//! | **Encode** | by output extension | PNG / JPEG encoders |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for region math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`MagickBackend`] and [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod magick_backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{SplitRegions, append_dimensions, minimum_width, split_regions};
pub use magick_backend::MagickBackend;
pub use operations::{OperationError, SplitOutputs, combine_pair, split_image};
pub use params::{AppendParams, CropParams, CropTarget, OutputFormat, Quality, Region};
pub use rust_backend::RustBackend;
