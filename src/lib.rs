mod error;
pub(crate) mod marker;
pub(crate) mod quality;
pub(crate) mod sample_precision;
pub(crate) mod scanner;

pub use crate::error::{Error, Result};

use std::fs::File;
use std::io::{Cursor, Read, Seek};

use memmap::Mmap;

/// Estimates the encoding quality (1-100) of the JPEG in `stream` by locating
/// its first luminance quantization table and classifying the table's
/// coefficient sum against the sums a standard encoder produces at each
/// quality setting.
///
/// The stream is read and seeked forward, never owned: the caller opens it
/// and closes it. On success the cursor sits just past the table's payload.
pub fn jpeg_quality<R: Read + Seek>(stream: &mut R) -> Result<u8> {
    let (payload, precision) = scanner::locate_luminance_dqt(stream)?;
    Ok(quality::estimate_quality(&payload, precision))
}

/// Estimates encoding quality from an in-memory JPEG.
pub fn jpeg_quality_from_bytes(bytes: &[u8]) -> Result<u8> {
    jpeg_quality(&mut Cursor::new(bytes))
}

/// Estimates encoding quality from an already-open file by memory-mapping
/// it. The handle stays with the caller.
pub fn jpeg_quality_from_file(file: &File) -> Result<u8> {
    let mmap = unsafe { Mmap::map(file)? };
    jpeg_quality_from_bytes(&mmap)
}

/// Estimates encoding quality from a file path.
pub fn jpeg_quality_from_file_path(file_path: &str) -> Result<u8> {
    let file = File::open(file_path)?;
    jpeg_quality_from_file(&file)
}
