//! 3x3 matrices and the fixed conversion constants
//!
//! Every conversion in the pipeline is a 3x3 matrix applied to a triplet:
//! sRGB ↔ XYZ(D65) and XYZ ↔ Bradford cone response. The constants are
//! published values, not derived at runtime.

use std::ops::Mul;

#[inline]
fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Row-major 3x3 matrix, `m[row][col]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::diagonal(1.0, 1.0, 1.0)
    }

    /// Per-axis scale, used for von Kries style cone gains
    #[inline]
    pub const fn diagonal(x: f64, y: f64, z: f64) -> Self {
        Self::new([[x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, z]])
    }

    #[inline]
    fn column(&self, j: usize) -> [f64; 3] {
        [self.m[0][j], self.m[1][j], self.m[2][j]]
    }

    /// `M · v`
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        self.m.map(|row| dot(row, v))
    }

    /// `self · other`: applying the result equals applying `other` first
    pub fn multiply(&self, other: &Self) -> Self {
        let cols = [other.column(0), other.column(1), other.column(2)];
        Self::new(self.m.map(|row| cols.map(|col| dot(row, col))))
    }

    /// Scalar triple product of the rows
    pub fn determinant(&self) -> f64 {
        dot(self.m[0], cross(self.m[1], self.m[2]))
    }

    /// `None` when the matrix is (numerically) singular
    pub fn inverse(&self) -> Option<Self> {
        let [r0, r1, r2] = self.m;
        // Columns of the adjugate are the cross products of row pairs
        let c0 = cross(r1, r2);
        let c1 = cross(r2, r0);
        let c2 = cross(r0, r1);
        let det = dot(r0, c0);
        if det.abs() < 1e-12 {
            return None;
        }
        let s = det.recip();
        Some(Self::new([0usize, 1, 2].map(|i| [c0[i] * s, c1[i] * s, c2[i] * s])))
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> [f64; 3] {
        self.multiply_vec(rhs)
    }
}

// Conversion constants

/// Linear sRGB → XYZ under D65, IEC 61966-2-1 at 7 digits
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ under D65 → linear sRGB
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Bradford cone response: XYZ → LMS
pub const BRADFORD_XYZ_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.8951000, 0.2664000, -0.1614000],
    [-0.7502000, 1.7135000, 0.0367000],
    [0.0389000, -0.0685000, 1.0296000],
]);

/// Bradford inverse: LMS → XYZ
///
/// Carried at full double precision so that adapting there and back stays
/// well inside 1e-6.
pub const BRADFORD_LMS_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.9869929054667123, -0.14705425642099013, 0.15996265166373125],
    [0.43230526972339456, 0.5183602715367776, 0.0492912282128556],
    [-0.008528664575177328, 0.04004282165408487, 0.9684866957875502],
]);
