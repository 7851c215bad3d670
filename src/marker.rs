/// The segment markers the scan distinguishes. Every other marker type is
/// treated as an opaque segment and skipped over by its declared length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Marker {
    /// Start of image
    SOI = 0xD8,

    /// End of image
    EOI = 0xD9,

    /// Start of scan
    SOS = 0xDA,

    /// Define quantization table(s)
    DQT = 0xDB,
}

impl Marker {
    /// Every marker begins with this prefix byte.
    pub(crate) const GLOBAL: u8 = 0xFF;

    /// A marker is always two bytes, as is a segment length field.
    pub(crate) const SIZE: usize = 2;

    pub(crate) fn from_type_byte(b: u8) -> Option<Marker> {
        match b {
            0xD8 => Some(Marker::SOI),
            0xD9 => Some(Marker::EOI),
            0xDA => Some(Marker::SOS),
            0xDB => Some(Marker::DQT),
            _ => None,
        }
    }
}
