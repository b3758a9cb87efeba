//! Approximate rendering intents
//!
//! Each intent is a fixed affine remap of Lab:
//!
//! | Intent                | L'            | a'      | b'      |
//! |-----------------------|---------------|---------|---------|
//! | Perceptual            | 0.96·L + 0.9  | 0.96·a  | 0.93·b  |
//! | Relative colorimetric | 0.96·L + 0.9  | 1.09·a  | 1.08·b  |
//! | Saturation            | 0.96·L + 1.1  | 1.09·a  | 1.08·b  |
//! | Absolute colorimetric | 1.11·L + 0.2  | 1.17·a  | 1.05·b  |
//! | Naive                 | L             | a       | b       |
//!
//! These are illustrative constants showing how the intents tend to differ,
//! not a profile-driven gamut mapping.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::Lab;

/// Rendering intent applied in Lab space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RenderIntent {
    /// Compresses lightness and chroma, pulling b* in the hardest
    #[default]
    Perceptual,
    /// Expands chroma around a compressed lightness
    RelativeColorimetric,
    /// As relative colorimetric with a slightly brighter lift
    Saturation,
    /// Expands lightness and chroma
    AbsoluteColorimetric,
    /// Identity; the source color unchanged
    Naive,
}

/// Affine coefficients of one intent: `L' = l_scale·L + l_offset`, `a' = a_scale·a`, `b' = b_scale·b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentCoefficients {
    pub l_scale: f64,
    pub l_offset: f64,
    pub a_scale: f64,
    pub b_scale: f64,
}

impl IntentCoefficients {
    const fn new(l_scale: f64, l_offset: f64, a_scale: f64, b_scale: f64) -> Self {
        Self {
            l_scale,
            l_offset,
            a_scale,
            b_scale,
        }
    }
}

impl RenderIntent {
    /// All intents, in evaluation and presentation order
    pub const ALL: [RenderIntent; 5] = [
        Self::Perceptual,
        Self::RelativeColorimetric,
        Self::Saturation,
        Self::AbsoluteColorimetric,
        Self::Naive,
    ];

    /// Human readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Perceptual => "Perceptual",
            Self::RelativeColorimetric => "Relative colorimetric",
            Self::Saturation => "Saturation",
            Self::AbsoluteColorimetric => "Absolute colorimetric",
            Self::Naive => "Naive",
        }
    }

    /// The affine coefficients for this intent
    pub const fn coefficients(&self) -> IntentCoefficients {
        match self {
            Self::Perceptual => IntentCoefficients::new(0.96, 0.9, 0.96, 0.93),
            Self::RelativeColorimetric => IntentCoefficients::new(0.96, 0.9, 1.09, 1.08),
            Self::Saturation => IntentCoefficients::new(0.96, 1.1, 1.09, 1.08),
            Self::AbsoluteColorimetric => IntentCoefficients::new(1.11, 0.2, 1.17, 1.05),
            Self::Naive => IntentCoefficients::new(1.0, 0.0, 1.0, 1.0),
        }
    }

    /// Apply this intent to a Lab color
    ///
    /// `Naive` returns its input untouched.
    pub fn apply(&self, lab: Lab) -> Lab {
        if let Self::Naive = self {
            return lab;
        }
        let k = self.coefficients();
        Lab::new(
            k.l_scale * lab.l + k.l_offset,
            k.a_scale * lab.a,
            k.b_scale * lab.b,
        )
    }
}

impl fmt::Display for RenderIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an intent name is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown rendering intent: {0:?} (expected perceptual, relative, saturation, absolute or naive)")]
pub struct ParseIntentError(pub String);

impl FromStr for RenderIntent {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "perceptual" => Ok(Self::Perceptual),
            "relative" | "relative-colorimetric" => Ok(Self::RelativeColorimetric),
            "saturation" => Ok(Self::Saturation),
            "absolute" | "absolute-colorimetric" => Ok(Self::AbsoluteColorimetric),
            "naive" | "none" => Ok(Self::Naive),
            _ => Err(ParseIntentError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_naive_is_identity() {
        for lab in [
            Lab::new(59.3, -28.1, 21.6),
            Lab::new(0.0, 0.0, 0.0),
            Lab::new(-0.0, 1e-300, -1e300),
            Lab::new(100.0, 127.0, -128.0),
        ] {
            let out = RenderIntent::Naive.apply(lab);
            assert_eq!(out.l.to_bits(), lab.l.to_bits());
            assert_eq!(out.a.to_bits(), lab.a.to_bits());
            assert_eq!(out.b.to_bits(), lab.b.to_bits());
        }
    }

    #[test]
    fn test_coefficients() {
        let lab = Lab::new(50.0, 10.0, -20.0);

        let p = RenderIntent::Perceptual.apply(lab);
        assert!(p.approx_eq(&Lab::new(48.9, 9.6, -18.6), EPSILON), "{:?}", p);

        let r = RenderIntent::RelativeColorimetric.apply(lab);
        assert!(r.approx_eq(&Lab::new(48.9, 10.9, -21.6), EPSILON), "{:?}", r);

        let s = RenderIntent::Saturation.apply(lab);
        assert!(s.approx_eq(&Lab::new(49.1, 10.9, -21.6), EPSILON), "{:?}", s);

        let a = RenderIntent::AbsoluteColorimetric.apply(lab);
        assert!(a.approx_eq(&Lab::new(55.7, 11.7, -21.0), EPSILON), "{:?}", a);
    }

    #[test]
    fn test_saturation_and_relative_share_chroma() {
        let lab = Lab::new(40.0, -30.0, 12.0);
        let s = RenderIntent::Saturation.apply(lab);
        let r = RenderIntent::RelativeColorimetric.apply(lab);
        assert_eq!(s.a, r.a);
        assert_eq!(s.b, r.b);
        assert!((s.l - r.l - 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_order_and_names() {
        let names: Vec<_> = RenderIntent::ALL.iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            [
                "Perceptual",
                "Relative colorimetric",
                "Saturation",
                "Absolute colorimetric",
                "Naive"
            ]
        );
        assert_eq!(RenderIntent::default(), RenderIntent::Perceptual);
        assert_eq!(RenderIntent::Saturation.to_string(), "Saturation");
    }

    #[test]
    fn test_parse() {
        assert_eq!("perceptual".parse(), Ok(RenderIntent::Perceptual));
        assert_eq!("Relative".parse(), Ok(RenderIntent::RelativeColorimetric));
        assert_eq!("relative_colorimetric".parse(), Ok(RenderIntent::RelativeColorimetric));
        assert_eq!("Absolute colorimetric".parse(), Ok(RenderIntent::AbsoluteColorimetric));
        assert_eq!("NAIVE".parse(), Ok(RenderIntent::Naive));
        assert!("vivid".parse::<RenderIntent>().is_err());

        for intent in RenderIntent::ALL {
            assert_eq!(intent.name().parse(), Ok(intent));
        }
    }
}
