//! Reference conversion through `palette`
//!
//! palette derives its sRGB matrix from the primaries rather than using the
//! 7-digit published table, so agreement is expected to within a small
//! fraction of a deltaE, not bit-for-bit.

use palette::chromatic_adaptation::AdaptInto;
use palette::white_point::{D50, D65};
use palette::{FromColor, LinSrgb, Srgb};
use swatchlab_core::{HexColor, Lab};

/// hex → Lab (D50) with Bradford adaptation, computed by palette
pub fn palette_hex_to_lab(hex: HexColor) -> Lab {
    let srgb = Srgb::new(hex.r, hex.g, hex.b).into_format::<f64>();
    let linear: LinSrgb<f64> = srgb.into_linear();
    let xyz_d65 = palette::Xyz::<D65, f64>::from_color(linear);
    let xyz_d50: palette::Xyz<D50, f64> = xyz_d65.adapt_into();
    let lab = palette::Lab::<D50, f64>::from_color(xyz_d50);
    Lab::new(lab.l, lab.a, lab.b)
}

/// Lab (D50) → XYZ (D50) computed by palette
pub fn palette_lab_to_xyz(lab: Lab) -> [f64; 3] {
    let xyz = palette::Xyz::<D50, f64>::from_color(palette::Lab::<D50, f64>::new(lab.l, lab.a, lab.b));
    [xyz.x, xyz.y, xyz.z]
}
