//! Signature registry
//!
//! Maps the magic bytes at the start of a file to the image format they
//! identify. The table is a fixed, process-wide constant; no registered
//! signature is a prefix of another, so the first match is the only match.

use std::fmt;

use crate::formats::{bmp::BMP_SIGNATURE, png::PNG_SIGNATURE};

/// Image formats the registry can identify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Bitmap,
    PortableNetworkGraphics,
    /// No registered signature matched; nothing is decoded.
    Unrecognized,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Bitmap => "bmp",
            Format::PortableNetworkGraphics => "png",
            Format::Unrecognized => "bin",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Format::Bitmap => "BMP Image",
            Format::PortableNetworkGraphics => "PNG Image",
            Format::Unrecognized => "Unknown",
        }
    }

    /// Magic bytes registered for this format.
    pub fn signature(&self) -> Option<&'static [u8]> {
        SIGNATURES
            .iter()
            .find(|sig| sig.format == *self)
            .map(|sig| sig.magic)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A magic byte sequence and the format it identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub format: Format,
    pub magic: &'static [u8],
}

impl Signature {
    /// True when `data` starts with this signature. Shorter input never matches.
    pub fn matches(&self, data: &[u8]) -> bool {
        data.starts_with(self.magic)
    }
}

/// Registered signatures, in the order they are tried.
pub static SIGNATURES: [Signature; 2] = [
    Signature {
        format: Format::Bitmap,
        magic: &BMP_SIGNATURE,
    },
    Signature {
        format: Format::PortableNetworkGraphics,
        magic: &PNG_SIGNATURE,
    },
];

pub fn signatures() -> &'static [Signature] {
    &SIGNATURES
}

/// Length of the longest registered signature.
pub fn max_signature_len() -> usize {
    SIGNATURES.iter().map(|sig| sig.magic.len()).max().unwrap_or(0)
}

/// Identifies the format whose signature prefixes `bytes`.
///
/// Does not consume anything; `bytes` is whatever the caller has already read
/// from the start of the file.
pub fn detect(bytes: &[u8]) -> Format {
    SIGNATURES
        .iter()
        .find(|sig| sig.matches(bytes))
        .map(|sig| sig.format)
        .unwrap_or(Format::Unrecognized)
}
