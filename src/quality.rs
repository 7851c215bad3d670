use crate::sample_precision::SamplePrecision;

/// Expected luminance coefficient sums by quality setting.
///
/// `REFERENCE_SUMS[j]` is the sum an encoder running at quality `j + 1`
/// leaves in its luminance table: the Annex K base table scaled by `5000/q`
/// below quality 50 and by `200 - 2q` from 50 up, every entry clamped to
/// [1, 255], summed over the same 63-entry window `estimate_quality` reads.
/// Sums shrink strictly as quality rises, from 16065 at quality 1 down to 63
/// at quality 100.
pub(crate) const REFERENCE_SUMS: [u16; 100] = [
    16065, 16060, 15691, 15022, 14400, 13818, 13368, 12975, 12604, 12305,
    11985, 11606, 11201, 10826, 10459, 10105, 9772, 9424, 9113, 8808,
    8444, 8106, 7780, 7462, 7178, 6894, 6640, 6386, 6175, 5961,
    5780, 5602, 5422, 5275, 5099, 4949, 4842, 4699, 4592, 4492,
    4343, 4275, 4165, 4054, 3982, 3873, 3804, 3732, 3654, 3589,
    3524, 3446, 3374, 3305, 3234, 3160, 3085, 3013, 2940, 2873,
    2797, 2729, 2654, 2586, 2514, 2442, 2372, 2299, 2229, 2152,
    2079, 2013, 1943, 1864, 1808, 1725, 1646, 1576, 1510, 1437,
    1360, 1290, 1217, 1147, 1079, 1003, 935, 860, 792, 716,
    649, 576, 504, 429, 359, 284, 215, 147, 84, 63,
];

/// Maps a quantization table payload onto the encoder quality setting that
/// would have produced it.
///
/// Each precision branch sums 63 of the 64 table entries, the window
/// `REFERENCE_SUMS` is derived over, and classifies the sum against the
/// thresholds from the quality-100 end down. A tie rounds toward the lower
/// quality; a sum at or above every threshold is quality 1. 16-bit sums are
/// divided by 256 so both precisions land on the same scale.
pub(crate) fn estimate_quality(payload: &[u8], precision: SamplePrecision) -> u8 {
    debug_assert!(payload.len() >= 65);

    let sum: f64 = match precision {
        SamplePrecision::EightBit => {
            // payload positions 1..64; position 0 is the Pq/Tq byte
            let total: u32 = payload[1..64].iter().map(|&qk| u32::from(qk)).sum();
            f64::from(total)
        }
        SamplePrecision::SixteenBit => {
            debug_assert!(payload.len() >= 129);

            let mut total: u32 = 0;
            // entries at byte offsets 1 + 2k; the k = 0 slot never joins
            for k in 1..64 {
                let at = 1 + 2 * k;
                total += u32::from(u16::from_be_bytes([payload[at], payload[at + 1]]));
            }
            f64::from(total) / 256.0
        }
    };

    for i in 0..100 {
        if sum < f64::from(REFERENCE_SUMS[99 - i]) {
            return (100 - i) as u8;
        }
    }

    1
}
