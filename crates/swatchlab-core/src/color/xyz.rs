//! CIE XYZ tristimulus values tagged with their reference white
//!
//! `Xyz<D65>` and `Xyz<D50>` are distinct types. The only way from one to the
//! other is [`Xyz::adapt`], so a value can never be fed to a matrix or to the
//! Lab encoder that expects a different white.

use std::marker::PhantomData;

use crate::color::white_point::{Illuminant, WhitePoint};

/// CIE 1931 tristimulus value relative to the white `Wp`, with Y = 1 at white
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz<Wp> {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    white: PhantomData<Wp>,
}

impl<Wp: Illuminant> Xyz<Wp> {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            white: PhantomData,
        }
    }

    #[inline]
    pub const fn from_array([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The reference white itself, as a value of this type
    #[inline]
    pub const fn white() -> Self {
        Self::from_array(Wp::WHITE.xyz)
    }

    /// The reference white this value is expressed against
    #[inline]
    pub const fn white_point(&self) -> WhitePoint {
        Wp::WHITE
    }

    /// Component-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let (a, b) = (self.to_array(), other.to_array());
        (0..3).all(|i| (a[i] - b[i]).abs() < epsilon)
    }
}

impl<Wp: Illuminant> From<[f64; 3]> for Xyz<Wp> {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl<Wp: Illuminant> From<Xyz<Wp>> for [f64; 3] {
    fn from(xyz: Xyz<Wp>) -> Self {
        xyz.to_array()
    }
}
