//! ImageMagick backend — crop and append run as `magick` subprocesses.
//!
//! The tool is treated as an opaque synchronous transform: the only thing
//! inspected is the exit status. Stderr is captured so a failure message can
//! say what went wrong.
//!
//! | Operation | Command |
//! |---|---|
//! | Identify | none, header read via `image::ImageReader` |
//! | Crop | `magick <src> -crop WxH+X+Y +repage [-quality Q] <out>` per region |
//! | Append | `magick <left> <right> +append [-quality Q] <out>` |

use super::backend::{BackendError, Dimensions, ImageBackend, read_dimensions};
use super::params::{AppendParams, CropParams, OutputFormat, Quality, Region};
use crate::config::DEFAULT_MAGICK_PROGRAM;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Backend that shells out to ImageMagick.
pub struct MagickBackend {
    program: PathBuf,
}

impl MagickBackend {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run the tool to completion; non-zero exit is an error.
    fn run(&self, args: &[OsString]) -> Result<(), BackendError> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => BackendError::ProcessingFailed(format!(
                    "{} not found, is ImageMagick installed?",
                    self.program.display()
                )),
                _ => BackendError::Io(e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(BackendError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}

impl Default for MagickBackend {
    fn default() -> Self {
        Self::new(DEFAULT_MAGICK_PROGRAM)
    }
}

/// ImageMagick geometry for a region: `WxH+X+Y`.
pub fn geometry(region: Region) -> String {
    format!("{}x{}+{}+{}", region.width, region.height, region.x, region.y)
}

/// Output path plus, for JPEG targets, the quality setting that precedes it.
fn output_args(output: &Path, quality: Quality) -> Result<Vec<OsString>, BackendError> {
    let format =
        OutputFormat::from_path(output).ok_or_else(|| BackendError::UnsupportedFormat(output.into()))?;

    let mut args = Vec::new();
    if format == OutputFormat::Jpeg {
        args.push("-quality".into());
        args.push(quality.value().to_string().into());
    }
    args.push(output.into());
    Ok(args)
}

fn crop_args(
    source: &Path,
    region: Region,
    output: &Path,
    quality: Quality,
) -> Result<Vec<OsString>, BackendError> {
    let mut args: Vec<OsString> = vec![
        source.into(),
        "-crop".into(),
        geometry(region).into(),
        // Drop the virtual canvas offset so the strip starts at 0,0
        "+repage".into(),
    ];
    args.extend(output_args(output, quality)?);
    Ok(args)
}

fn append_args(params: &AppendParams) -> Result<Vec<OsString>, BackendError> {
    let mut args: Vec<OsString> = vec![
        params.left.as_path().into(),
        params.right.as_path().into(),
        "+append".into(),
    ];
    args.extend(output_args(&params.output, params.quality)?);
    Ok(args)
}

impl ImageBackend for MagickBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        read_dimensions(path)
    }

    fn crop(&self, params: &CropParams) -> Result<(), BackendError> {
        for target in &params.targets {
            let args = crop_args(&params.source, target.region, &target.output, params.quality)?;
            self.run(&args)?;
        }
        Ok(())
    }

    fn append(&self, params: &AppendParams) -> Result<(), BackendError> {
        let args = append_args(params)?;
        self.run(&args)
    }
}
