//! Approximate CMYK with gray component removal
//!
//! CMY is taken as the complement of display-encoded sRGB, the shared
//! achromatic part is pulled out into K, and the remaining chromatic channels
//! are renormalized against (1 − K). This is an educational approximation,
//! not a press-calibrated separation.

use crate::color::{LinearRgb, Rgb};

/// K at or above this is treated as pure black
pub const BLACK_THRESHOLD: f64 = 1.0 - 1e-6;

/// CMYK color, each component in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan
    pub c: f64,
    /// Magenta
    pub m: f64,
    /// Yellow
    pub y: f64,
    /// Key (black)
    pub k: f64,
}

impl Cmyk {
    /// Pure black: no chromatic ink, full K
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Paper white: no ink
    pub const WHITE: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new CMYK color
    #[inline]
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// Separate a linear-light color
    ///
    /// The input is encoded to display sRGB and clamped first, so CMY are
    /// complements of what the screen would show.
    pub fn from_linear_rgb(linear: LinearRgb) -> Self {
        Self::from_rgb(linear.to_encoded())
    }

    /// Separate a display-encoded color (clamped to [0, 1] first)
    pub fn from_rgb(rgb: Rgb) -> Self {
        let Rgb { r, g, b } = rgb.clamp();
        let (c, m, y) = (1.0 - r, 1.0 - g, 1.0 - b);
        let k = c.min(m).min(y);

        if k >= BLACK_THRESHOLD {
            return Self::BLACK;
        }

        let scale = 1.0 - k;
        Self::new((c - k) / scale, (m - k) / scale, (y - k) / scale, k)
    }

    /// Recombine into display-encoded sRGB, clamped to [0, 1]
    #[inline]
    pub fn to_rgb(&self) -> Rgb {
        let white = 1.0 - self.k;
        Rgb::new(
            (1.0 - self.c) * white,
            (1.0 - self.m) * white,
            (1.0 - self.y) * white,
        )
        .clamp()
    }

    /// Check if approximately equal to another CMYK color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_black_and_white() {
        assert_eq!(Cmyk::from_linear_rgb(LinearRgb::new(0.0, 0.0, 0.0)), Cmyk::BLACK);
        // The OETF lands one ulp under 1.0 at full scale
        let white = Cmyk::from_linear_rgb(LinearRgb::new(1.0, 1.0, 1.0));
        assert!(white.approx_eq(&Cmyk::WHITE, EPSILON), "{:?}", white);
        assert_eq!(Cmyk::BLACK.to_rgb(), Rgb::BLACK);
        assert_eq!(Cmyk::WHITE.to_rgb(), Rgb::WHITE);
    }

    #[test]
    fn test_near_black_threshold() {
        // Just inside the threshold collapses to pure K
        let nearly = Cmyk::from_rgb(Rgb::new(1e-7, 2e-7, 5e-7));
        assert_eq!(nearly, Cmyk::BLACK);

        // Just outside keeps its chromatic ratio
        let dark = Cmyk::from_rgb(Rgb::new(1e-3, 0.0, 0.0));
        assert!((dark.k - 0.999).abs() < EPSILON);
        assert!((dark.m - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_gray_is_k_only() {
        let gray = Cmyk::from_rgb(Rgb::new(0.25, 0.25, 0.25));
        assert_eq!(gray.c, 0.0);
        assert_eq!(gray.m, 0.0);
        assert_eq!(gray.y, 0.0);
        assert!((gray.k - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_primary() {
        let red = Cmyk::from_rgb(Rgb::new(1.0, 0.0, 0.0));
        assert!(red.approx_eq(&Cmyk::new(0.0, 1.0, 1.0, 0.0), EPSILON));
    }

    #[test]
    fn test_one_channel_is_zero() {
        // Gray removal leaves at least one of C, M, Y at zero
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            let rgb = Rgb::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            let cmyk = Cmyk::from_rgb(rgb);
            assert!(cmyk.c.min(cmyk.m).min(cmyk.y).abs() < EPSILON, "{:?}", cmyk);
        }
    }

    #[test]
    fn test_roundtrip() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..1000 {
            let rgb = Rgb::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            let back = Cmyk::from_rgb(rgb).to_rgb();
            assert!(rgb.approx_eq(&back, 1e-9), "{:?} -> {:?}", rgb, back);
        }
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        let cmyk = Cmyk::from_linear_rgb(LinearRgb::new(1.3, -0.2, 0.5));
        for v in cmyk.to_array() {
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
