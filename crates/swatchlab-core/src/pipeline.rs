//! Hex → Lab → intent → CMYK → display pipeline
//!
//! # Pipeline Architecture
//!
//! Forward, once per input:
//! 1. Parse `#rrggbb` and normalize to [0, 1] sRGB
//! 2. Remove the sRGB transfer function
//! 3. Linear sRGB → XYZ (D65)
//! 4. Bradford adaptation D65 → D50
//! 5. XYZ (D50) → Lab
//!
//! Back, once per rendering intent:
//! 1. Apply the intent's affine Lab remap
//! 2. Lab → XYZ (D50) → XYZ (D65) → linear sRGB, clamped to [0, 1]
//! 3. Linear sRGB → CMYK with gray component removal
//! 4. CMYK → display sRGB, clamped, quantized to `#rrggbb`
//!
//! Every stage is a pure function of its input. Parsing is the only step that
//! can fail and it runs before any arithmetic.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::Result;
use crate::color::{Cmyk, D50, D65, HexColor, Lab, LinearRgb, Rgb, Xyz, delta_e_2000};
use crate::intent::RenderIntent;

/// Every intermediate of the forward conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabConversion {
    /// Parsed input
    pub hex: HexColor,
    /// Display-encoded input, [0, 1]
    pub srgb: Rgb,
    /// Linear-light input
    pub linear_rgb: LinearRgb,
    /// Tristimulus value under the sRGB white
    pub xyz_d65: Xyz<D65>,
    /// Tristimulus value adapted to the Lab white
    pub xyz_d50: Xyz<D50>,
    /// The base Lab color, before any intent
    pub lab: Lab,
}

/// Every intermediate of rendering one intent back to a display color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentRendering {
    /// Intent that was applied
    pub intent: RenderIntent,
    /// Lab after the intent's remap
    pub lab: Lab,
    /// The remapped color under D50
    pub xyz_d50: Xyz<D50>,
    /// The remapped color adapted back to D65
    pub xyz_d65: Xyz<D65>,
    /// Linear sRGB, clamped to [0, 1]
    pub linear_rgb: LinearRgb,
    /// Separation of the clamped color
    pub cmyk: Cmyk,
    /// CMYK recombined for the swatch, clamped to [0, 1]
    pub display_rgb: Rgb,
    /// `display_rgb` quantized to 8 bits per channel
    pub display: HexColor,
}

/// One row of the evaluation result
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IntentResult {
    /// Intent display name
    pub name: &'static str,
    /// Intent that produced this row
    pub intent: RenderIntent,
    /// Swatch color
    pub display: HexColor,
    /// Lab after the intent's remap
    pub lab: Lab,
    /// CMYK separation behind the swatch
    pub cmyk: Cmyk,
    /// CIEDE2000 distance from the base Lab color
    pub delta_e: f64,
}

/// Forward conversion of an already parsed color
pub fn hex_color_to_lab(hex: HexColor) -> LabConversion {
    let srgb = hex.to_rgb();
    let linear_rgb = srgb.to_linear();
    let xyz_d65 = linear_rgb.to_xyz();
    let xyz_d50: Xyz<D50> = xyz_d65.adapt();
    let lab = Lab::from_xyz(xyz_d50);

    LabConversion {
        hex,
        srgb,
        linear_rgb,
        xyz_d65,
        xyz_d50,
        lab,
    }
}

/// Parse a hex string and convert it to Lab (D50)
///
/// Fails with [`Error::InvalidHex`](crate::Error::InvalidHex) before any
/// arithmetic if the input is not six hex digits with an optional `#`.
pub fn hex_to_lab(hex: &str) -> Result<LabConversion> {
    Ok(hex_color_to_lab(HexColor::parse(hex)?))
}

/// Apply `intent` to a base Lab color and render it back to a display color
pub fn render_intent(lab: Lab, intent: RenderIntent) -> IntentRendering {
    let adjusted = intent.apply(lab);
    let xyz_d50 = adjusted.to_xyz();
    let xyz_d65: Xyz<D65> = xyz_d50.adapt();
    let linear_rgb = LinearRgb::from_xyz(xyz_d65).clamp();
    let cmyk = Cmyk::from_linear_rgb(linear_rgb);
    let display_rgb = cmyk.to_rgb();

    IntentRendering {
        intent,
        lab: adjusted,
        xyz_d50,
        xyz_d65,
        linear_rgb,
        cmyk,
        display_rgb,
        display: HexColor::from_rgb(display_rgb),
    }
}

/// Evaluate every rendering intent for a hex color
///
/// The base conversion runs once; the result has one entry per intent in
/// [`RenderIntent::ALL`] order.
pub fn evaluate_all_intents(hex: &str) -> Result<Vec<IntentResult>> {
    let base = hex_to_lab(hex)?;
    debug!(
        input = hex,
        l = base.lab.l,
        a = base.lab.a,
        b = base.lab.b,
        "converted to Lab"
    );

    let results = RenderIntent::ALL
        .iter()
        .map(|&intent| {
            let rendering = render_intent(base.lab, intent);
            trace!(
                intent = intent.name(),
                display = %rendering.display,
                l = rendering.lab.l,
                k = rendering.cmyk.k,
                "rendered intent"
            );
            IntentResult {
                name: intent.name(),
                intent,
                display: rendering.display,
                lab: rendering.lab,
                cmyk: rendering.cmyk,
                delta_e: delta_e_2000(base.lab, rendering.lab),
            }
        })
        .collect();

    Ok(results)
}

/// The external entry point: hex string in, one result per intent out
#[inline]
pub fn evaluate(hex: &str) -> Result<Vec<IntentResult>> {
    evaluate_all_intents(hex)
}

/// Evaluate many inputs in parallel
///
/// Results are returned in input order; each input fails or succeeds on its own.
pub fn evaluate_batch<S>(inputs: &[S]) -> Vec<Result<Vec<IntentResult>>>
where
    S: AsRef<str> + Sync,
{
    debug!(count = inputs.len(), "evaluating batch");
    inputs
        .par_iter()
        .map(|input| evaluate_all_intents(input.as_ref()))
        .collect()
}
