use std::io;

use thiserror::Error;

/// Every failure is terminal for the call: no retry, no partial result, no
/// fallback quality value.
#[derive(Debug, Error)]
pub enum Error {
    /// The stream does not begin with the start-of-image marker, or a byte
    /// read at a marker boundary is not the marker prefix.
    #[error("not a jpeg: missing or malformed marker")]
    NotAJpeg,

    /// The underlying stream failed mid-scan: short read, seek past the
    /// available data, or a transport error.
    #[error("read failed: {0}")]
    Read(#[from] io::Error),

    /// Structurally sound jpeg, but no usable luminance quantization table
    /// appears before the compressed scan data or the end of the stream.
    #[error("no usable luminance quantization table before scan data")]
    QualityIndeterminate,
}

pub type Result<T> = std::result::Result<T, Error>;
