//! Pure Rust image processing backend.
//!
//! Everything is statically linked into the binary; no external tool is
//! needed.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions` (header only, content sniffed) |
//! | Decode (JPEG, PNG) | `image::ImageReader` with content sniffing |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Append | `image::GenericImage::copy_from` onto a zeroed canvas |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at [`Quality`] |

use super::backend::{BackendError, Dimensions, ImageBackend, read_dimensions};
use super::calculations::append_dimensions;
use super::params::{AppendParams, CropParams, OutputFormat, Quality, Region};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, GenericImage, ImageReader, RgbImage, RgbaImage};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// The format is sniffed from the file contents, so a PNG saved with a
/// `.jpg` name still decodes.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("failed to decode {}: {e}", path.display()))
        })
}

/// Encode `img` to `path`, choosing the encoder from the extension.
///
/// The extension is checked before the file is created, so an unsupported
/// target leaves nothing behind.
fn save_image(img: &DynamicImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    let format =
        OutputFormat::from_path(path).ok_or_else(|| BackendError::UnsupportedFormat(path.into()))?;

    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);

    let encoded = match format {
        OutputFormat::Png => img.write_with_encoder(PngEncoder::new(&mut writer)),
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
            let encoder = JpegEncoder::new_with_quality(&mut writer, quality.value() as u8);
            rgb.write_with_encoder(encoder)
        }
    };
    encoded.map_err(|e| {
        BackendError::ProcessingFailed(format!("failed to encode {}: {e}", path.display()))
    })?;

    writer.flush()?;
    Ok(())
}

fn contains(img: &DynamicImage, region: Region) -> bool {
    u64::from(region.x) + u64::from(region.width) <= u64::from(img.width())
        && u64::from(region.y) + u64::from(region.height) <= u64::from(img.height())
}

/// Place `left` at x = 0 and `right` directly after it.
///
/// The canvas starts zeroed; where heights differ the shorter side is padded
/// with black (or transparent, when either input has alpha).
fn append_images(left: &DynamicImage, right: &DynamicImage) -> Result<DynamicImage, BackendError> {
    let dims = append_dimensions(
        Dimensions {
            width: left.width(),
            height: left.height(),
        },
        Dimensions {
            width: right.width(),
            height: right.height(),
        },
    );
    let copy_err = |e: image::ImageError| {
        BackendError::ProcessingFailed(format!("failed to place image on canvas: {e}"))
    };

    if left.color().has_alpha() || right.color().has_alpha() {
        let mut canvas = RgbaImage::new(dims.width, dims.height);
        canvas.copy_from(&left.to_rgba8(), 0, 0).map_err(copy_err)?;
        canvas
            .copy_from(&right.to_rgba8(), left.width(), 0)
            .map_err(copy_err)?;
        Ok(DynamicImage::ImageRgba8(canvas))
    } else {
        let mut canvas = RgbImage::new(dims.width, dims.height);
        canvas.copy_from(&left.to_rgb8(), 0, 0).map_err(copy_err)?;
        canvas
            .copy_from(&right.to_rgb8(), left.width(), 0)
            .map_err(copy_err)?;
        Ok(DynamicImage::ImageRgb8(canvas))
    }
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        read_dimensions(path)
    }

    fn crop(&self, params: &CropParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;

        for target in &params.targets {
            let r = target.region;
            if !contains(&img, r) {
                return Err(BackendError::ProcessingFailed(format!(
                    "crop {}x{}+{}+{} outside {}x{} image",
                    r.width,
                    r.height,
                    r.x,
                    r.y,
                    img.width(),
                    img.height()
                )));
            }
            let cropped = img.crop_imm(r.x, r.y, r.width, r.height);
            save_image(&cropped, &target.output, params.quality)?;
        }

        Ok(())
    }

    fn append(&self, params: &AppendParams) -> Result<(), BackendError> {
        let left = load_image(&params.left)?;
        let right = load_image(&params.right)?;
        let combined = append_images(&left, &right)?;
        save_image(&combined, &params.output, params.quality)
    }
}
