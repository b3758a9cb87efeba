//! CIELAB (L*a*b*) relative to D50
//!
//! L* runs from 0 (black) to 100 (diffuse white); a* is the green/red
//! opponent axis and b* the blue/yellow one, both signed and unbounded.
//!
//! The companding function uses the exact CIE rationals for the breakpoint
//! (ε = 216/24389) and the linear slope (κ = 24389/27), which keeps the two
//! pieces continuous instead of the rounded 0.008856 / 903.3 pair.

use crate::color::{D50, Xyz};

/// CIE ε: the cube of 6/29
pub const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// CIE κ: slope of the linear segment, scaled to L*
pub const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// CIELAB color coordinates (D50 white)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub const fn from_array([l, a, b]: [f64; 3]) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Convert from XYZ relative to D50
    pub fn from_xyz(xyz: Xyz<D50>) -> Self {
        let white = xyz.white_point().xyz;
        let fx = lab_f(xyz.x / white[0]);
        let fy = lab_f(xyz.y / white[1]);
        let fz = lab_f(xyz.z / white[2]);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Inverse of [`Lab::from_xyz`]
    pub fn to_xyz(&self) -> Xyz<D50> {
        let f_y = (self.l + 16.0) / 116.0;
        let f = [f_y + self.a / 500.0, f_y, f_y - self.b / 200.0];
        let white = Xyz::<D50>::white().to_array();
        Xyz::from_array([0, 1, 2].map(|i: usize| lab_f_inv(f[i]) * white[i]))
    }

    /// Distance from the neutral axis, `hypot(a, b)`
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Hue angle in degrees, [0, 360); 0 for neutral colors
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        hue_angle(self.a, self.b)
    }

    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let [dl, da, db] = [self.l - other.l, self.a - other.a, self.b - other.b];
        dl.abs() < epsilon && da.abs() < epsilon && db.abs() < epsilon
    }
}

impl From<Xyz<D50>> for Lab {
    fn from(xyz: Xyz<D50>) -> Self {
        Self::from_xyz(xyz)
    }
}

impl From<Lab> for Xyz<D50> {
    fn from(value: Lab) -> Self {
        value.to_xyz()
    }
}

/// Forward companding: XYZ ratio → f
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

/// Inverse companding: f → XYZ ratio
#[inline]
fn lab_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > CIE_EPSILON {
        cubed
    } else {
        (116.0 * t - 16.0) / CIE_KAPPA
    }
}

/// Hue angle of (a, b) in degrees, in [0, 360)
#[inline]
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

/// CIEDE2000 color difference (kL = kC = kH = 1)
///
/// A difference of about 1.0 is a just-noticeable difference.
/// Reference: Sharma, Wu, Dalal (2005), "The CIEDE2000 Color-Difference Formula".
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    const POW25_7: f64 = 6_103_515_625.0; // 25^7

    let c_mean = (lab1.chroma() + lab2.chroma()) / 2.0;
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt());

    // a* is stretched so that neutral colors keep their hue behaviour
    let a1 = lab1.a * (1.0 + g);
    let a2 = lab2.a * (1.0 + g);
    let c1 = a1.hypot(lab1.b);
    let c2 = a2.hypot(lab2.b);
    let h1 = hue_angle(a1, lab1.b);
    let h2 = hue_angle(a2, lab2.b);

    let chroma_product = c1 * c2;
    let dh = if chroma_product == 0.0 {
        0.0
    } else {
        match h2 - h1 {
            d if d > 180.0 => d - 360.0,
            d if d < -180.0 => d + 360.0,
            d => d,
        }
    };

    let dl = lab2.l - lab1.l;
    let dc = c2 - c1;
    let dh_big = 2.0 * chroma_product.sqrt() * (dh.to_radians() / 2.0).sin();

    let l_mean = (lab1.l + lab2.l) / 2.0;
    let c_mean_prime = (c1 + c2) / 2.0;
    let h_mean = if chroma_product == 0.0 {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let l50 = (l_mean - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
    let s_c = 1.0 + 0.045 * c_mean_prime;
    let s_h = 1.0 + 0.015 * c_mean_prime * t;

    let c_mean_prime7 = c_mean_prime.powi(7);
    let r_c = 2.0 * (c_mean_prime7 / (c_mean_prime7 + POW25_7)).sqrt();
    let d_theta = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let r_t = -(2.0 * d_theta).to_radians().sin() * r_c;

    let tl = dl / s_l;
    let tc = dc / s_c;
    let th = dh_big / s_h;
    (tl * tl + tc * tc + th * th + r_t * tc * th).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_white_is_100() {
        let lab = Lab::from_xyz(Xyz::<D50>::white());
        assert!((lab.l - 100.0).abs() < 1e-12);
        assert!(lab.a.abs() < 1e-12);
        assert!(lab.b.abs() < 1e-12);
    }

    #[test]
    fn test_black_is_0() {
        let lab = Lab::from_xyz(Xyz::new(0.0, 0.0, 0.0));
        assert_eq!(lab.to_array(), [0.0, 0.0, 0.0]);
        assert_eq!(lab.to_xyz().to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_companding_is_continuous() {
        let below = (CIE_KAPPA * CIE_EPSILON + 16.0) / 116.0;
        let above = CIE_EPSILON.cbrt();
        assert!((below - above).abs() < 1e-12);
    }

    #[test]
    fn test_linear_segment_roundtrip() {
        // Very dark values go through the linear branch both ways
        let xyz = Xyz::<D50>::new(0.001, 0.002, 0.0015);
        let back = Lab::from_xyz(xyz).to_xyz();
        assert!(xyz.approx_eq(&back, 1e-12));
    }

    #[test]
    fn test_lab_roundtrip() {
        let original = Lab::new(50.0, 25.0, -30.0);
        let roundtrip = Lab::from_xyz(original.to_xyz());
        assert!(original.approx_eq(&roundtrip, 1e-9));
    }

    #[test]
    fn test_xyz_roundtrip_from_srgb() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let rgb = Rgb::from_u8(rng.r#gen(), rng.r#gen(), rng.r#gen());
            let xyz: Xyz<D50> = rgb.to_linear().to_xyz().adapt::<D50>();
            let back = Lab::from_xyz(xyz).to_xyz();
            assert!(
                xyz.approx_eq(&back, EPSILON),
                "XYZ roundtrip failed for {:?}: {:?} vs {:?}",
                rgb,
                xyz,
                back
            );
        }
    }

    #[test]
    fn test_srgb_green_reference() {
        // #629c67 through D65 → D50 Bradford
        let xyz = Rgb::from_u8(0x62, 0x9c, 0x67).to_linear().to_xyz();
        let lab = Lab::from_xyz(xyz.adapt::<D50>());
        assert!((lab.l - 59.3176).abs() < 1e-3, "{:?}", lab);
        assert!((lab.a + 28.3333).abs() < 1e-3, "{:?}", lab);
        assert!((lab.b - 21.6066).abs() < 1e-3, "{:?}", lab);
    }

    #[test]
    fn test_chroma_and_hue() {
        let lab = Lab::new(50.0, 3.0, 4.0);
        assert!((lab.chroma() - 5.0).abs() < EPSILON);
        assert!(Lab::new(50.0, 1.0, 0.0).hue_degrees().abs() < EPSILON);
        assert!((Lab::new(50.0, 0.0, 1.0).hue_degrees() - 90.0).abs() < EPSILON);
        assert!((Lab::new(50.0, 0.0, -1.0).hue_degrees() - 270.0).abs() < EPSILON);
    }

    #[test]
    fn test_delta_e_identical() {
        let lab = Lab::new(50.0, 25.0, -30.0);
        assert!(delta_e_2000(lab, lab).abs() < EPSILON);
    }

    #[test]
    fn test_delta_e_sharma_pairs() {
        // Pairs 1, 7 and 17 from the Sharma et al. test data
        let cases = [
            (Lab::new(50.0, 2.6772, -79.7751), Lab::new(50.0, 0.0, -82.7485), 2.0425),
            (Lab::new(50.0, 0.0, 0.0), Lab::new(50.0, -1.0, 2.0), 2.3669),
            (Lab::new(50.0, 2.5, 0.0), Lab::new(73.0, 25.0, -18.0), 27.1492),
        ];
        for (a, b, expected) in cases {
            let de = delta_e_2000(a, b);
            assert!((de - expected).abs() < 1e-4, "ΔE({:?}, {:?}) = {}", a, b, de);
            // Symmetric
            assert!((delta_e_2000(b, a) - de).abs() < 1e-9);
        }
    }
}
