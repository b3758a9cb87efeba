//! Parity against palette
//!
//! The base hex → Lab conversion is compared with palette's sRGB → XYZ →
//! Bradford → Lab chain over every sample set. Differences come from the
//! matrix precision only and must stay far below a just noticeable difference.

use swatch_tests::reference::{palette_hex_to_lab, palette_lab_to_xyz};
use swatch_tests::{TestPattern, compare_lab, generate_pattern};
use swatchlab_core::pipeline::hex_color_to_lab;
use swatchlab_core::{HexColor, Lab};

fn compare_pattern(pattern: TestPattern, count: usize) -> swatch_tests::DeltaEStats {
    let colors = generate_pattern(pattern, count);
    let ours: Vec<Lab> = colors.iter().map(|&c| hex_color_to_lab(c).lab).collect();
    let reference: Vec<Lab> = colors.iter().map(|&c| palette_hex_to_lab(c)).collect();
    compare_lab(&ours, &reference)
}

#[test]
fn test_base_lab_matches_palette_all_patterns() {
    let patterns = [
        (TestPattern::Grayscale, 256, "grayscale"),
        (TestPattern::ColorCube, 8, "color cube"),
        (TestPattern::HueRamp, 360, "hue ramp"),
        (TestPattern::NearBlack, 64, "near black"),
        (TestPattern::SkinTones, 6, "skin tones"),
        (TestPattern::Random(0x5eed), 2000, "random"),
    ];

    eprintln!("\nBase Lab vs palette (deltaE2000):");
    for (pattern, count, name) in patterns {
        let stats = compare_pattern(pattern, count);
        eprintln!(
            "  {:<12} n={:<5} mean={:.5} p95={:.5} max={:.5}",
            name, stats.count, stats.mean, stats.p95, stats.max
        );
        assert_eq!(stats.count, count);
        assert!(stats.is_excellent(), "{name}: {stats:?}");
        assert!(stats.max < 0.05, "{name}: {stats:?}");
    }
}

#[test]
fn test_reference_swatch_matches_palette() {
    let hex = HexColor::new(0x62, 0x9c, 0x67);
    let ours = hex_color_to_lab(hex).lab;
    let reference = palette_hex_to_lab(hex);
    eprintln!("#629c67 ours={:?} palette={:?}", ours, reference);
    assert!(ours.approx_eq(&reference, 0.01), "{ours:?} vs {reference:?}");
}

#[test]
fn test_lab_to_xyz_matches_palette() {
    let samples = [
        Lab::new(0.0, 0.0, 0.0),
        Lab::new(100.0, 0.0, 0.0),
        Lab::new(50.0, 20.0, -30.0),
        Lab::new(5.0, 1.0, -1.0),
        Lab::new(57.8449, -27.1999, 20.0942),
        Lab::new(75.0, 60.0, 80.0),
    ];

    for lab in samples {
        let ours = lab.to_xyz().to_array();
        let reference = palette_lab_to_xyz(lab);
        for (o, r) in ours.iter().zip(reference.iter()) {
            assert!((o - r).abs() < 1e-4, "{lab:?}: {ours:?} vs {reference:?}");
        }
    }
}

#[test]
fn test_lab_roundtrip_through_palette_xyz() {
    for hex in generate_pattern(TestPattern::Random(17), 500) {
        let conv = hex_color_to_lab(hex);
        let reference = palette_lab_to_xyz(conv.lab);
        let ours = conv.xyz_d50.to_array();
        for (o, r) in ours.iter().zip(reference.iter()) {
            assert!((o - r).abs() < 1e-4, "{hex}: {ours:?} vs {reference:?}");
        }
    }
}
