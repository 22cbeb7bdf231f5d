//! Dimension report writer
//!
//! Persists a decoded size as a `WIDTHxHEIGHT` line, either appended to a file
//! the user names or to a timestamped file generated inside a directory.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::types::Dimensions;

const REPORT_TIMESTAMP_FORMAT: &str = "%m%d%Y_%H%M%S";
const FALLBACK_STEM: &str = "image";

/// Errors that can occur when writing a dimension report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Invalid file or folder path: {0}")]
    InvalidTarget(String),

    #[error("Image path has no parent directory: {0}")]
    MissingParent(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where a report line goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    /// An existing file; the line is appended to it as-is.
    File(PathBuf),
    /// An existing directory; a report file name is generated inside it.
    Directory(PathBuf),
}

impl ReportTarget {
    /// Classifies a user-supplied path. It must already exist.
    pub fn resolve(path: &Path) -> Result<Self, ReportError> {
        if path.is_file() {
            Ok(Self::File(path.to_path_buf()))
        } else if path.is_dir() {
            Ok(Self::Directory(path.to_path_buf()))
        } else {
            Err(ReportError::InvalidTarget(path.display().to_string()))
        }
    }

    /// The directory holding `image`.
    pub fn beside(image: &Path) -> Result<Self, ReportError> {
        let parent = image
            .parent()
            .ok_or_else(|| ReportError::MissingParent(image.display().to_string()))?;

        if parent.as_os_str().is_empty() {
            Ok(Self::Directory(PathBuf::from(".")))
        } else {
            Ok(Self::Directory(parent.to_path_buf()))
        }
    }

    /// Final file path for a report about `image` created at `timestamp`.
    pub fn report_path(&self, image: &Path, timestamp: NaiveDateTime) -> PathBuf {
        match self {
            Self::File(path) => path.clone(),
            Self::Directory(dir) => dir.join(report_file_name(image, timestamp)),
        }
    }
}

/// `{image_stem}_{MMddyyyy_HHmmss}.txt`
pub fn report_file_name(image: &Path, timestamp: NaiveDateTime) -> String {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_STEM.to_string());

    format!("{}_{}.txt", stem, timestamp.format(REPORT_TIMESTAMP_FORMAT))
}

/// Appends `dimensions` as a single line and returns the file written to.
pub fn write_report(
    dimensions: Dimensions,
    target: &ReportTarget,
    image: &Path,
    timestamp: NaiveDateTime,
) -> Result<PathBuf, ReportError> {
    let path = target.report_path(image, timestamp);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "{}", dimensions)?;
    file.flush()?;

    tracing::info!(path = %path.display(), %dimensions, "Wrote dimension report");
    Ok(path)
}
