pub mod application;
pub mod cli;
pub mod core;
pub mod decode;
pub mod endian;
pub mod formats;
pub mod report;
pub mod signatures;
pub mod types;

pub use crate::core::{ByteSource, DecodeError, ReaderSource, SliceSource};
pub use decode::{decode_bytes, decode_dimensions, decode_reader};
pub use endian::read_big_endian_i32;
pub use signatures::{Format, Signature, detect};
pub use types::{Dimensions, Probe};
