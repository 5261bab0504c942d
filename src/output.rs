//! CLI output formatting for both commands.
//!
//! # Output Format
//!
//! ## Crop
//!
//! ```text
//! Processing: scans/001.png
//!     scans/output/001_right.png
//!     scans/output/001_left.png
//! Processing: scans/002.png
//!   Skipped (image width too small (90))
//! Split 1 image, skipped 1
//! ```
//!
//! ## Combine
//!
//! ```text
//! Warning: odd number of images, last one will be skipped (scans/005.png)
//! Combined scans/001.png + scans/002.png → scans/output/001.png
//! Failed to combine scans/003.png and scans/004.png: IO error: ...
//! Combined 1 pair, failed 1
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return lines and do no I/O, so they are tested
//! directly. The binary prints them as events arrive.

use crate::process::{ProcessEvent, RunSummary};

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Format one pipeline event as console lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Processing { source } => {
            vec![format!("Processing: {}", source.display())]
        }
        ProcessEvent::Split {
            left_edge,
            right_edge,
            ..
        } => vec![
            format!("    {}", left_edge.display()),
            format!("    {}", right_edge.display()),
        ],
        ProcessEvent::Skipped { reason, .. } => vec![format!("  Skipped ({reason})")],
        ProcessEvent::Unpaired { source } => vec![format!(
            "Warning: odd number of images, last one will be skipped ({})",
            source.display()
        )],
        ProcessEvent::Combined {
            left,
            right,
            output,
        } => vec![format!(
            "Combined {} + {} \u{2192} {}",
            left.display(),
            right.display(),
            output.display()
        )],
        ProcessEvent::CombineFailed {
            left,
            right,
            reason,
        } => vec![format!(
            "Failed to combine {} and {}: {reason}",
            left.display(),
            right.display()
        )],
    }
}

/// Closing line of a crop run.
pub fn format_crop_summary(summary: &RunSummary) -> String {
    format!(
        "Split {}, skipped {}",
        plural(summary.succeeded, "image", "images"),
        summary.failed
    )
}

/// Closing line of a combine run.
pub fn format_combine_summary(summary: &RunSummary) -> String {
    format!(
        "Combined {}, failed {}",
        plural(summary.succeeded, "pair", "pairs"),
        summary.failed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_processing() {
        let lines = format_process_event(&ProcessEvent::Processing {
            source: PathBuf::from("scans/001.png"),
        });
        assert_eq!(lines, vec!["Processing: scans/001.png"]);
    }

    #[test]
    fn format_split_lists_left_edge_first() {
        let lines = format_process_event(&ProcessEvent::Split {
            source: PathBuf::from("scans/001.png"),
            left_edge: PathBuf::from("scans/output/001_right.png"),
            right_edge: PathBuf::from("scans/output/001_left.png"),
        });
        assert_eq!(
            lines,
            vec![
                "    scans/output/001_right.png",
                "    scans/output/001_left.png"
            ]
        );
    }

    #[test]
    fn format_skipped_shows_reason() {
        let lines = format_process_event(&ProcessEvent::Skipped {
            source: PathBuf::from("scans/002.png"),
            reason: "image width too small (90)".to_string(),
        });
        assert_eq!(lines, vec!["  Skipped (image width too small (90))"]);
    }

    #[test]
    fn format_unpaired_warning() {
        let lines = format_process_event(&ProcessEvent::Unpaired {
            source: PathBuf::from("scans/005.png"),
        });
        assert_eq!(
            lines,
            vec!["Warning: odd number of images, last one will be skipped (scans/005.png)"]
        );
    }

    #[test]
    fn format_combined() {
        let lines = format_process_event(&ProcessEvent::Combined {
            left: PathBuf::from("a.png"),
            right: PathBuf::from("b.png"),
            output: PathBuf::from("output/a.png"),
        });
        assert_eq!(lines, vec!["Combined a.png + b.png \u{2192} output/a.png"]);
    }

    #[test]
    fn format_combine_failed() {
        let lines = format_process_event(&ProcessEvent::CombineFailed {
            left: PathBuf::from("b.png"),
            right: PathBuf::from("a.png"),
            reason: "boom".to_string(),
        });
        assert_eq!(lines, vec!["Failed to combine b.png and a.png: boom"]);
    }

    #[test]
    fn summaries_pluralize() {
        assert_eq!(
            format_crop_summary(&RunSummary {
                succeeded: 1,
                failed: 2
            }),
            "Split 1 image, skipped 2"
        );
        assert_eq!(
            format_combine_summary(&RunSummary {
                succeeded: 3,
                failed: 0
            }),
            "Combined 3 pairs, failed 0"
        );
    }
}
