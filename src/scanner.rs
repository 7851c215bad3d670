use std::io::{Read, Seek, SeekFrom};

use log::trace;

use crate::error::{Error, Result};
use crate::marker::Marker;
use crate::sample_precision::SamplePrecision;

/// Smallest usable DQT payload: the Pq/Tq byte plus a full 64-entry table of
/// 8-bit values.
const MIN_DQT_PAYLOAD: i64 = 65;

/// Walks the marker segments from the top of the stream until the first
/// quantization table definition and returns its raw payload bytes along
/// with the sample precision decoded from the Pq nibble.
///
/// Segments ahead of the table are seeked past, not read. The stream is left
/// wherever the scan stopped; the caller owns the stream and closes it.
pub(crate) fn locate_luminance_dqt<R: Read + Seek>(
    stream: &mut R,
) -> Result<(Vec<u8>, SamplePrecision)> {
    let mut marker = [0u8; Marker::SIZE];

    stream.read_exact(&mut marker)?;
    if marker != [Marker::GLOBAL, Marker::SOI as u8] {
        return Err(Error::NotAJpeg);
    }

    loop {
        stream.read_exact(&mut marker)?;
        if marker[0] != Marker::GLOBAL {
            return Err(Error::NotAJpeg);
        }

        match Marker::from_type_byte(marker[1]) {
            // entropy-coded data or the end of the image reached without a
            // single table definition
            Some(Marker::SOS) | Some(Marker::EOI) => return Err(Error::QualityIndeterminate),
            Some(Marker::DQT) => {
                let payload_len = read_payload_length(stream)?;
                if payload_len < MIN_DQT_PAYLOAD {
                    return Err(Error::QualityIndeterminate);
                }

                let mut payload = vec![0u8; payload_len as usize];
                stream.read_exact(&mut payload)?;

                // Pq sits in the high nibble; the low nibble is the table id.
                let precision = SamplePrecision::decode(payload[0] >> 4);
                if precision == SamplePrecision::SixteenBit && payload_len < 2 * MIN_DQT_PAYLOAD - 1
                {
                    // a 16-bit table needs 1 + 64 * 2 payload bytes
                    return Err(Error::QualityIndeterminate);
                }

                trace!(
                    "quantization table found: {} payload bytes, {:?}",
                    payload_len,
                    precision
                );
                return Ok((payload, precision));
            }
            _ => {
                let payload_len = read_payload_length(stream)?;
                trace!("skipping segment 0xff{:02x}: {} bytes", marker[1], payload_len);
                stream.seek(SeekFrom::Current(payload_len))?;
            }
        }
    }
}

/// Reads a segment's 2-byte big-endian length field and returns the payload
/// size it declares. The declared length counts its own two bytes, so this
/// can go negative on a malformed field.
fn read_payload_length<R: Read>(stream: &mut R) -> Result<i64> {
    let mut length = [0u8; Marker::SIZE];
    stream.read_exact(&mut length)?;
    Ok(i64::from(u16::from_be_bytes(length)) - Marker::SIZE as i64)
}
