//! Hex color codes
//!
//! Accepted shape: an optional single leading `#` followed by exactly six
//! hexadecimal digits, in either case. Anything else is rejected before any
//! conversion runs. Formatting always produces lowercase `#rrggbb`.

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::{Error, Result};

/// An 8-bit-per-channel sRGB color as written in `#rrggbb` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl HexColor {
    /// Create a new hex color from 8-bit channels
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `rrggbb` or `#rrggbb`
    pub fn parse(input: &str) -> Result<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        // The ASCII check also guarantees the byte slices below fall on char boundaries
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(input.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidHex(input.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Quantize a display color: each channel is `round(clamp(c, 0, 1) * 255)`
    #[inline]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_u8();
        Self::new(r, g, b)
    }

    /// Normalize to [0, 1] display sRGB
    #[inline]
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_u8(self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<HexColor> for Rgb {
    fn from(hex: HexColor) -> Self {
        hex.to_rgb()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
