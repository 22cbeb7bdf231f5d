use std::io;
use thiserror::Error;

/// Errors that can occur while decoding an image header
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Truncated stream: needed {needed} more bytes at offset {offset}")]
    TruncatedStream { offset: u64, needed: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
