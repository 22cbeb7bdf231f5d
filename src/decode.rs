//! Header decoding entry points
//!
//! Reads the signature one byte at a time, re-checking the registry after
//! each byte, then hands the same source to the matching header decoder. The
//! cursor therefore sits immediately after the matched signature when the
//! decoder starts.

use std::io::Read;

use crate::core::{ByteSource, DecodeError, ReaderSource, Result, SliceSource};
use crate::formats::decode_header;
use crate::signatures::{detect, max_signature_len};
use crate::types::Probe;

/// Identifies the format of `source` and reads its pixel size.
///
/// Returns [`Probe::Unrecognized`] when no signature matches within the
/// longest signature length, or when the stream ends before any signature
/// matched (a partial signature included). Running out of bytes inside the
/// header of a matched format is a [`TruncatedStream`] error.
///
/// [`TruncatedStream`]: crate::core::DecodeError::TruncatedStream
pub fn decode_dimensions<S: ByteSource>(source: &mut S) -> Result<Probe> {
    let max_len = max_signature_len();
    let mut prefix = Vec::with_capacity(max_len);

    while prefix.len() < max_len {
        match source.read_byte() {
            Ok(byte) => prefix.push(byte),
            Err(DecodeError::TruncatedStream { .. }) => {
                tracing::debug!(
                    prefix = ?prefix,
                    "Stream ended after {} bytes without a signature",
                    prefix.len()
                );
                return Ok(Probe::Unrecognized);
            }
            Err(e) => return Err(e),
        }

        let format = detect(&prefix);
        if let Some(dimensions) = decode_header(format, source)? {
            tracing::debug!(%format, %dimensions, "Decoded image header");
            return Ok(Probe::Recognized { format, dimensions });
        }
    }

    tracing::debug!(
        prefix = ?prefix,
        "No signature matched within {} bytes",
        max_len
    );
    Ok(Probe::Unrecognized)
}

/// Decodes an in-memory buffer holding (at least) the start of an image file.
pub fn decode_bytes(data: &[u8]) -> Result<Probe> {
    decode_dimensions(&mut SliceSource::new(data))
}

/// Decodes from any reader, consuming only the bytes the header needs.
pub fn decode_reader<R: Read>(reader: R) -> Result<Probe> {
    decode_dimensions(&mut ReaderSource::new(reader))
}
