use std::io::{self, Read};

use super::error::{DecodeError, Result};

const SKIP_CHUNK: usize = 64;

/// Forward-only cursor over the bytes of an image file.
///
/// Every read advances the cursor; there is no way to rewind. Running out of
/// bytes is reported as [`DecodeError::TruncatedStream`] and leaves the source
/// exhausted.
pub trait ByteSource {
    /// Fills `buf` completely from the next bytes of the stream.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Number of bytes consumed so far.
    fn position(&self) -> u64;

    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.read_into(&mut byte)?;
        Ok(byte[0])
    }

    /// Reads exactly `N` bytes in stream order.
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    /// Discards the next `len` bytes.
    fn skip(&mut self, len: usize) -> Result<()> {
        let mut scratch = [0u8; SKIP_CHUNK];
        let mut remaining = len;
        while remaining > 0 {
            let step = remaining.min(SKIP_CHUNK);
            self.read_into(&mut scratch[..step])?;
            remaining -= step;
        }
        Ok(())
    }

    /// Reads a 32-bit signed integer stored least significant byte first.
    fn read_i32_le(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array::<4>()?))
    }
}

/// Byte source over an in-memory buffer.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let available = self.remaining();
        if available < buf.len() {
            self.pos = self.data.len();
            return Err(DecodeError::TruncatedStream {
                offset: self.pos as u64,
                needed: buf.len() - available,
            });
        }

        let end = self.pos + buf.len();
        buf.copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(())
    }

    fn position(&self) -> u64 {
        self.pos as u64
    }
}

/// Byte source over any [`Read`] implementation, typically an open file.
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
    position: u64,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    self.position += filled as u64;
                    return Err(DecodeError::TruncatedStream {
                        offset: self.position,
                        needed: buf.len() - filled,
                    });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(DecodeError::Io(e)),
            }
        }
        self.position += filled as u64;
        Ok(())
    }

    fn position(&self) -> u64 {
        self.position
    }
}
