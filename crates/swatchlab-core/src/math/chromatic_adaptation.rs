//! Bradford chromatic adaptation
//!
//! Re-expresses a tristimulus value seen under one reference white as the
//! corresponding value under another. The input and both whites are projected
//! into the Bradford cone response space, the input is scaled per channel by
//! the ratio of destination to source white, and the result is projected back.
//!
//! References:
//! - ICC.1:2022 Annex E
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use crate::color::{Illuminant, WhitePoint, Xyz};
use crate::math::matrix::{BRADFORD_LMS_TO_XYZ, BRADFORD_XYZ_TO_LMS, Matrix3x3};

/// Per-channel cone response gain taking `src_white` to `dst_white`
#[inline]
fn cone_gains(src_white: &WhitePoint, dst_white: &WhitePoint) -> [f64; 3] {
    let src_lms = BRADFORD_XYZ_TO_LMS.multiply_vec(src_white.xyz);
    let dst_lms = BRADFORD_XYZ_TO_LMS.multiply_vec(dst_white.xyz);
    [
        dst_lms[0] / src_lms[0],
        dst_lms[1] / src_lms[1],
        dst_lms[2] / src_lms[2],
    ]
}

/// Adapt an XYZ triplet from `src_white` to `dst_white`
///
/// Swapping the whites gives the exact inverse transform.
pub fn adapt_xyz(xyz: [f64; 3], src_white: &WhitePoint, dst_white: &WhitePoint) -> [f64; 3] {
    let gains = cone_gains(src_white, dst_white);
    let lms = BRADFORD_XYZ_TO_LMS.multiply_vec(xyz);
    BRADFORD_LMS_TO_XYZ.multiply_vec([lms[0] * gains[0], lms[1] * gains[1], lms[2] * gains[2]])
}

/// The Bradford adaptation as a single matrix: `M_A⁻¹ × diag(gains) × M_A`
///
/// Equivalent to [`adapt_xyz`] up to rounding.
pub fn bradford_matrix(src_white: &WhitePoint, dst_white: &WhitePoint) -> Matrix3x3 {
    let [g0, g1, g2] = cone_gains(src_white, dst_white);
    BRADFORD_LMS_TO_XYZ.multiply(&Matrix3x3::diagonal(g0, g1, g2).multiply(&BRADFORD_XYZ_TO_LMS))
}

impl<Src: Illuminant> Xyz<Src> {
    /// Adapt this value to the white point `Dst`
    ///
    /// ```
    /// use swatchlab_core::color::{Xyz, D50, D65};
    ///
    /// let d65_white = Xyz::<D65>::white();
    /// let adapted: Xyz<D50> = d65_white.adapt();
    /// assert!(adapted.approx_eq(&Xyz::<D50>::white(), 1e-4));
    /// ```
    #[inline]
    pub fn adapt<Dst: Illuminant>(self) -> Xyz<Dst> {
        Xyz::from_array(adapt_xyz(self.to_array(), &Src::WHITE, &Dst::WHITE))
    }
}
