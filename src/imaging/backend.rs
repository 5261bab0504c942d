//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations every backend must
//! support: identify, crop, and append.
//!
//! Two implementations exist and are picked where the pipeline starts:
//!
//! | Backend | Identify | Crop / Append |
//! |---|---|---|
//! | [`MagickBackend`](super::magick_backend::MagickBackend) | header read (`image`) | `magick` subprocess |
//! | [`RustBackend`](super::rust_backend::RustBackend) | header read (`image`) | decode, copy pixels, encode |

use super::params::{AppendParams, CropParams};
use image::ImageReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
    #[error("{} exited with {status}{}", .program.display(), stderr_suffix(.stderr))]
    CommandFailed {
        program: PathBuf,
        status: std::process::ExitStatus,
        stderr: String,
    },
    #[error("Unsupported output format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Read image dimensions from the file header without decoding pixels.
///
/// The format is sniffed from the file contents, not the extension, so a PNG
/// saved as `.jpg` is identified the same way it is later decoded.
pub(crate) fn read_dimensions(path: &Path) -> Result<Dimensions, BackendError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let (width, height) = reader.into_dimensions().map_err(|e| {
        BackendError::ProcessingFailed(format!("failed to decode image config: {e}"))
    })?;
    if width == 0 || height == 0 {
        return Err(BackendError::ProcessingFailed(format!(
            "image has no pixels ({width}x{height})"
        )));
    }
    Ok(Dimensions { width, height })
}

/// Trait for image processing backends.
///
/// Every backend implements all three operations so the pipeline is
/// backend-agnostic.
pub trait ImageBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Write each region of the source to its own file, in order.
    fn crop(&self, params: &CropParams) -> Result<(), BackendError>;

    /// Place two images side by side into one output.
    fn append(&self, params: &AppendParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::params::{CropTarget, Quality, Region};
    use std::sync::Mutex;

    /// Mock backend that records operations without executing them.
    #[derive(Default)]
    pub struct MockBackend {
        pub identify_results: Mutex<Vec<Dimensions>>,
        /// Paths whose crop or append should fail.
        pub failing: Mutex<Vec<String>>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Crop {
            source: String,
            outputs: Vec<(String, Region)>,
            quality: u32,
        },
        Append {
            left: String,
            right: String,
            output: String,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                identify_results: Mutex::new(dims),
                ..Self::default()
            }
        }

        pub fn failing_on(self, path: &str) -> Self {
            self.failing.lock().unwrap().push(path.to_string());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        fn check_failure(&self, path: &Path) -> Result<(), BackendError> {
            let path = path.to_string_lossy();
            if self.failing.lock().unwrap().iter().any(|p| *p == path) {
                return Err(BackendError::ProcessingFailed(format!("mock failure: {path}")));
            }
            Ok(())
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            self.identify_results
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| BackendError::ProcessingFailed("No mock dimensions".to_string()))
        }

        fn crop(&self, params: &CropParams) -> Result<(), BackendError> {
            self.check_failure(&params.source)?;
            self.operations.lock().unwrap().push(RecordedOp::Crop {
                source: params.source.to_string_lossy().to_string(),
                outputs: params
                    .targets
                    .iter()
                    .map(|t| (t.output.to_string_lossy().to_string(), t.region))
                    .collect(),
                quality: params.quality.value(),
            });
            Ok(())
        }

        fn append(&self, params: &AppendParams) -> Result<(), BackendError> {
            self.check_failure(&params.left)?;
            self.check_failure(&params.right)?;
            self.operations.lock().unwrap().push(RecordedOp::Append {
                left: params.left.to_string_lossy().to_string(),
                right: params.right.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
            });
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 600,
        }]);

        let result = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_records_crop() {
        let backend = MockBackend::new();
        let region = Region {
            x: 0,
            y: 0,
            width: 10,
            height: 20,
        };

        backend
            .crop(&CropParams {
                source: "/source.png".into(),
                targets: vec![CropTarget {
                    region,
                    output: "/out/source_right.png".into(),
                }],
                quality: Quality::new(90),
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Crop { outputs, quality: 90, .. } if outputs.len() == 1
        ));
    }

    #[test]
    fn mock_failure_is_reported() {
        let backend = MockBackend::new().failing_on("/a.png");
        let result = backend.append(&AppendParams {
            left: "/a.png".into(),
            right: "/b.png".into(),
            output: "/out/a.png".into(),
            quality: Quality::default(),
        });
        assert!(result.is_err());
        assert!(backend.get_operations().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn command_failed_includes_trimmed_stderr() {
        use std::os::unix::process::ExitStatusExt;
        let err = BackendError::CommandFailed {
            program: "magick".into(),
            status: std::process::ExitStatus::from_raw(1 << 8),
            stderr: "  bad geometry\n".into(),
        };
        assert_eq!(err.to_string(), "magick exited with exit status: 1: bad geometry");
    }

    #[test]
    fn read_dimensions_missing_file_errors() {
        assert!(read_dimensions(Path::new("/nonexistent/image.png")).is_err());
    }

    #[test]
    fn read_dimensions_sniffs_content_not_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("scan.jpg");
        crate::test_helpers::write_png(&path, 30, 12, 0);

        let dims = read_dimensions(&path).unwrap();
        assert_eq!(dims, Dimensions { width: 30, height: 12 });
    }
}
