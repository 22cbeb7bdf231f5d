use crate::core::{ByteSource, Result};
use crate::types::Dimensions;

pub const BMP_SIGNATURE: [u8; 2] = [0x42, 0x4D];

/// Bytes between the end of the signature and the width field.
const WIDTH_GAP: usize = 16;

/// Reads width and height from the BITMAPINFOHEADER.
///
/// The source must sit right after the `BM` signature (file offset 2). Width
/// is the little-endian integer at offset 18, height at offset 22.
pub fn decode_bmp<S: ByteSource>(source: &mut S) -> Result<Dimensions> {
    source.skip(WIDTH_GAP)?;
    let width = source.read_i32_le()?;
    let height = source.read_i32_le()?;
    Ok(Dimensions::new(width, height))
}
