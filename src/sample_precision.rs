#[derive(Debug, PartialEq, Copy, Clone)]
pub(crate) enum SamplePrecision {
    EightBit,
    SixteenBit,
}

impl SamplePrecision {
    /// Decodes the Pq nibble of a quantization table definition. Value 0
    /// indicates 8-bit Qk values; any nonzero value indicates 16-bit Qk
    /// values.
    pub(crate) fn decode(pq: u8) -> Self {
        match pq {
            0 => SamplePrecision::EightBit,
            _ => SamplePrecision::SixteenBit,
        }
    }
}
