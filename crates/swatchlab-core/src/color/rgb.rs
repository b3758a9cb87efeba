//! RGB triplets: display-encoded sRGB and linear light
//!
//! [`Rgb`] holds gamma-encoded display values, [`LinearRgb`] holds values
//! proportional to light. Linear values may leave [0, 1] after a round trip
//! through Lab; they are clamped only where a display value is produced.

use crate::color::{D65, Xyz};
use crate::math::gamma::{srgb_gamma_decode_rgb, srgb_gamma_encode_rgb};
use crate::math::matrix::{SRGB_TO_XYZ, XYZ_TO_SRGB};

macro_rules! rgb_triplet {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub r: f64,
            pub g: f64,
            pub b: f64,
        }

        impl $name {
            #[inline]
            pub const fn new(r: f64, g: f64, b: f64) -> Self {
                Self { r, g, b }
            }

            #[inline]
            pub const fn from_array([r, g, b]: [f64; 3]) -> Self {
                Self { r, g, b }
            }

            #[inline]
            pub const fn to_array(&self) -> [f64; 3] {
                [self.r, self.g, self.b]
            }

            /// Each channel limited to [0, 1]
            #[inline]
            pub fn clamp(&self) -> Self {
                Self::from_array(self.to_array().map(|c| c.clamp(0.0, 1.0)))
            }

            /// Channel-wise comparison within `epsilon`
            pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
                self.to_array()
                    .iter()
                    .zip(other.to_array())
                    .all(|(a, b)| (a - b).abs() < epsilon)
            }
        }

        impl From<[f64; 3]> for $name {
            fn from(v: [f64; 3]) -> Self {
                Self::from_array(v)
            }
        }
    };
}

rgb_triplet! {
    /// Display-encoded sRGB, nominally in [0, 1]
    Rgb
}

rgb_triplet! {
    /// sRGB with the transfer function removed, proportional to light
    LinearRgb
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Each byte divided by 255
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_array([r, g, b].map(|c| f64::from(c) / 255.0))
    }

    /// `round(clamp(c, 0, 1) * 255)` per channel
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        self.clamp().to_array().map(|c| (c * 255.0).round() as u8)
    }

    #[inline]
    pub fn to_linear(&self) -> LinearRgb {
        LinearRgb::from_array(srgb_gamma_decode_rgb(self.to_array()))
    }
}

impl LinearRgb {
    pub fn is_in_gamut(&self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Re-apply the transfer function; the encoded result is clamped
    #[inline]
    pub fn to_encoded(&self) -> Rgb {
        Rgb::from_array(srgb_gamma_encode_rgb(self.to_array())).clamp()
    }

    #[inline]
    pub fn to_xyz(&self) -> Xyz<D65> {
        Xyz::from_array(SRGB_TO_XYZ * self.to_array())
    }

    /// Unclamped: colors outside the sRGB gamut give channels outside [0, 1]
    #[inline]
    pub fn from_xyz(xyz: Xyz<D65>) -> Self {
        Self::from_array(XYZ_TO_SRGB * xyz.to_array())
    }
}
