//! Reference white points
//!
//! A white point is the XYZ tristimulus value of "white" under an illuminant,
//! normalized to Y = 1.0. Only the two whites the pipeline needs are defined:
//! D65 for sRGB and D50 for Lab.
//!
//! Each illuminant exists twice: as a runtime [`WhitePoint`] value for the
//! generic adaptation math, and as a zero-sized marker type that tags
//! [`Xyz`](crate::color::Xyz) values so that tristimulus values under
//! different whites cannot be mixed.

use std::fmt;

/// Named reference white
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub name: &'static str,
    /// Tristimulus value with Y = 1
    pub xyz: [f64; 3],
}

impl WhitePoint {
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: [x, y, z],
        }
    }

    /// CIE 1931 (x, y); (0, 0) for a zero vector
    pub fn chromaticity(&self) -> (f64, f64) {
        let [x, y, z] = self.xyz;
        let sum = x + y + z;
        if sum > 0.0 { (x / sum, y / sum) } else { (0.0, 0.0) }
    }
}

/// CIE Standard Illuminant D65 (noon daylight), the sRGB white
pub const D65_WHITE: WhitePoint = WhitePoint::new("D65", 0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D50 (horizon light), the Lab and print viewing white
pub const D50_WHITE: WhitePoint = WhitePoint::new("D50", 0.96422, 1.0, 0.82521);

/// Compile-time tag for a reference white
pub trait Illuminant: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// The tristimulus value of this white
    const WHITE: WhitePoint;
}

/// Tags values relative to D65
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct D65;

/// Tags values relative to D50
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct D50;

impl Illuminant for D65 {
    const WHITE: WhitePoint = D65_WHITE;
}

impl Illuminant for D50 {
    const WHITE: WhitePoint = D50_WHITE;
}
