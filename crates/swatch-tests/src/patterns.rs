//! Sample sets
//!
//! Deterministic lists of input colors covering the regions where the
//! pipeline's piecewise math changes behaviour.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use swatchlab_core::HexColor;

/// Sample set kinds
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Every gray level 0-255
    Grayscale,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Fully saturated hue ramp
    HueRamp,
    /// Very dark colors, exercising the linear toe and Lab's linear segment
    NearBlack,
    /// Skin tone samples
    SkinTones,
    /// Random colors with seed
    Random(u64),
}

/// Generate `count` colors for a pattern
///
/// Fixed-size patterns repeat to fill `count`.
pub fn generate_pattern(pattern: TestPattern, count: usize) -> Vec<HexColor> {
    match pattern {
        TestPattern::Grayscale => (0..count)
            .map(|i| {
                let v = (i * 255 / count.max(2).saturating_sub(1)).min(255) as u8;
                HexColor::new(v, v, v)
            })
            .collect(),
        TestPattern::ColorCube => {
            let corners = [
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ];
            cycle(&corners, count)
        }
        TestPattern::HueRamp => (0..count)
            .map(|i| {
                let hue = i as f64 / count as f64 * 360.0;
                let [r, g, b] = hue_to_rgb(hue);
                HexColor::new(r, g, b)
            })
            .collect(),
        TestPattern::NearBlack => (0..count)
            .map(|i| {
                let v = (i % 12) as u8;
                HexColor::new(v, (v * 2) % 12, (v * 5) % 12)
            })
            .collect(),
        TestPattern::SkinTones => {
            let tones = [
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ];
            cycle(&tones, count)
        }
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    let mut rgb = [0u8; 3];
                    rng.fill_bytes(&mut rgb);
                    HexColor::new(rgb[0], rgb[1], rgb[2])
                })
                .collect()
        }
    }
}

fn cycle(colors: &[[u8; 3]], count: usize) -> Vec<HexColor> {
    colors
        .iter()
        .cycle()
        .take(count)
        .map(|&[r, g, b]| HexColor::new(r, g, b))
        .collect()
}

/// Full saturation, half lightness
fn hue_to_rgb(hue: f64) -> [u8; 3] {
    let x = 1.0 - ((hue / 60.0) % 2.0 - 1.0).abs();
    let (r, g, b) = match (hue / 60.0) as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    [r, g, b].map(|c: f64| (c * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_spans_range() {
        let grays = generate_pattern(TestPattern::Grayscale, 256);
        assert_eq!(grays[0], HexColor::new(0, 0, 0));
        assert_eq!(grays[255], HexColor::new(255, 255, 255));
        assert!(grays.iter().all(|c| c.r == c.g && c.g == c.b));
    }

    #[test]
    fn test_random_is_seeded() {
        let a = generate_pattern(TestPattern::Random(9), 32);
        let b = generate_pattern(TestPattern::Random(9), 32);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hue_ramp_primaries() {
        let ramp = generate_pattern(TestPattern::HueRamp, 6);
        assert_eq!(ramp[0], HexColor::new(255, 0, 0));
        assert_eq!(ramp[2], HexColor::new(0, 255, 0));
        assert_eq!(ramp[4], HexColor::new(0, 0, 255));
    }

    #[test]
    fn test_cycle_fills_count() {
        assert_eq!(generate_pattern(TestPattern::ColorCube, 20).len(), 20);
        assert_eq!(generate_pattern(TestPattern::NearBlack, 5).len(), 5);
    }
}
