use std::fmt;

use crate::signatures::Format;

/// Pixel size read from an image header.
///
/// Values are taken verbatim from the header, so zero and negative sizes are
/// possible (a bottom-up bitmap stores a negative height, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

impl Dimensions {
    pub const ZERO: Dimensions = Dimensions::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Outcome of probing a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Recognized {
        format: Format,
        dimensions: Dimensions,
    },
    Unrecognized,
}

impl Probe {
    pub fn format(&self) -> Format {
        match self {
            Probe::Recognized { format, .. } => *format,
            Probe::Unrecognized => Format::Unrecognized,
        }
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        match self {
            Probe::Recognized { dimensions, .. } => Some(*dimensions),
            Probe::Unrecognized => None,
        }
    }

    /// Collapses the probe into the legacy `0x0` convention for unknown formats.
    ///
    /// This cannot tell an unrecognized stream from a genuinely zero-sized
    /// image; prefer matching on the probe.
    pub fn dimensions_or_zero(&self) -> Dimensions {
        self.dimensions().unwrap_or(Dimensions::ZERO)
    }
}
