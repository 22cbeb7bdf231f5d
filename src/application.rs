//! Inspect-image use case
//!
//! Opens an image file, decodes its header and, when asked to, records the
//! size in a report. The binary only adds prompts and terminal styling.

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::cli::WriteMode;
use crate::decode::decode_reader;
use crate::report::{ReportTarget, write_report};
use crate::types::Probe;

pub const UNRECOGNIZED_MESSAGE: &str = "This is not a valid .bmp or .png file!";

/// Result of inspecting one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectOutcome {
    pub probe: Probe,
    /// Report file written to, if any.
    pub report: Option<PathBuf>,
}

/// Decodes the header of the file at `path`.
pub fn probe_file(path: &Path) -> Result<Probe> {
    if !path.is_file() {
        bail!("File not found: {}", path.display());
    }

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    decode_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read image header of {}", path.display()))
}

/// Line shown to the user for a probe result.
pub fn describe(probe: &Probe) -> String {
    match probe {
        Probe::Recognized { format, dimensions } => format!(
            "This is a .{} image. Resolution: {} pixels.",
            format.extension(),
            dimensions
        ),
        Probe::Unrecognized => UNRECOGNIZED_MESSAGE.to_string(),
    }
}

/// Probes `image` and writes its size according to `mode`.
///
/// Unrecognized images never produce a report.
pub fn inspect_image(
    image: &Path,
    mode: &WriteMode,
    timestamp: NaiveDateTime,
) -> Result<InspectOutcome> {
    let probe = probe_file(image)?;

    let Some(dimensions) = probe.dimensions() else {
        tracing::info!(image = %image.display(), "Unrecognized image format");
        return Ok(InspectOutcome {
            probe,
            report: None,
        });
    };

    let target = match mode {
        WriteMode::Skip => None,
        WriteMode::BesideImage => Some(ReportTarget::beside(image)?),
        WriteMode::To(path) => Some(ReportTarget::resolve(path)?),
    };

    let report = target
        .map(|target| write_report(dimensions, &target, image, timestamp))
        .transpose()
        .context("Failed to write dimensions")?;

    Ok(InspectOutcome { probe, report })
}
