use crate::core::{ByteSource, Result};
use crate::endian::read_big_endian_i32;
use crate::types::Dimensions;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// IHDR length field plus the `IHDR` tag, which sit between the signature and
/// the width.
const IHDR_PREAMBLE: usize = 8;

/// Reads width and height from the IHDR chunk.
///
/// The source must sit right after the signature (file offset 8). Width is the
/// big-endian integer at offset 16, height at offset 20. The chunk length and
/// tag are skipped without inspection.
pub fn decode_png<S: ByteSource>(source: &mut S) -> Result<Dimensions> {
    source.skip(IHDR_PREAMBLE)?;
    let width = read_big_endian_i32(source)?;
    let height = read_big_endian_i32(source)?;
    Ok(Dimensions::new(width, height))
}
