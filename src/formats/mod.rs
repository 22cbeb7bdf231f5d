pub mod bmp;
pub mod png;

use crate::core::{ByteSource, Result};
use crate::signatures::Format;
use crate::types::Dimensions;

pub use bmp::decode_bmp;
pub use png::decode_png;

/// Runs the header decoder for `format` on a source positioned just past its
/// signature. Returns `None` for [`Format::Unrecognized`] without reading.
pub fn decode_header<S: ByteSource>(format: Format, source: &mut S) -> Result<Option<Dimensions>> {
    match format {
        Format::Bitmap => decode_bmp(source).map(Some),
        Format::PortableNetworkGraphics => decode_png(source).map(Some),
        Format::Unrecognized => Ok(None),
    }
}
