//! sRGB transfer function
//!
//! The IEC 61966-2-1 piecewise curve: a linear toe near black joined to a
//! 2.4 power segment. Both directions are scalar and applied per channel.
//! Neither direction clamps; callers clamp where a display value is produced.

/// Decode threshold on the encoded axis
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Encode threshold on the linear axis
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// Slope of the linear toe
const TOE_SLOPE: f64 = 12.92;

/// Offset of the power segment
const POWER_OFFSET: f64 = 0.055;

const GAMMA: f64 = 2.4;

/// Display-encoded value to linear light
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    match encoded {
        v if v <= SRGB_DECODE_THRESHOLD => v / TOE_SLOPE,
        v => ((v + POWER_OFFSET) / (1.0 + POWER_OFFSET)).powf(GAMMA),
    }
}

/// Linear light to display-encoded value
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    match linear {
        v if v <= SRGB_ENCODE_THRESHOLD => v * TOE_SLOPE,
        v => (1.0 + POWER_OFFSET) * v.powf(GAMMA.recip()) - POWER_OFFSET,
    }
}

/// Decode all three channels
#[inline]
pub fn srgb_gamma_decode_rgb(encoded: [f64; 3]) -> [f64; 3] {
    encoded.map(srgb_gamma_decode)
}

/// Encode all three channels
#[inline]
pub fn srgb_gamma_encode_rgb(linear: [f64; 3]) -> [f64; 3] {
    linear.map(srgb_gamma_encode)
}
