use crate::core::{ByteSource, Result};

/// Reads four bytes and interprets the first one read as the most significant.
#[inline]
pub fn read_big_endian_i32<S: ByteSource>(source: &mut S) -> Result<i32> {
    Ok(i32::from_be_bytes(source.read_array::<4>()?))
}
