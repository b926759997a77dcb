//! Tests for intensity to color mapping.

use footmap_common::{ColorSpec, HeatmapError};
use renderer::gradient::{adjusted_intensity, blob_radius, default_gradient, Color, ColorRamp};
use test_utils::{assert_approx_eq, DEFAULT_GRADIENT_RGB};

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::rgb(r, g, b)
}

// ============================================================================
// Boundary exactness
// ============================================================================

#[test]
fn test_zero_and_one_hit_first_and_last_stop() {
    let ramp = ColorRamp::new(&default_gradient()).unwrap();
    assert_eq!(ramp.color_at(0.0), rgb(DEFAULT_GRADIENT_RGB[0]));
    assert_eq!(ramp.color_at(1.0), rgb(DEFAULT_GRADIENT_RGB[4]));
}

#[test]
fn test_boundaries_for_custom_gradients() {
    let gradients: Vec<Vec<ColorSpec>> = vec![
        vec![ColorSpec::hex("#123456"), ColorSpec::hex("#abcdef")],
        vec![
            ColorSpec::hex("#000000"),
            ColorSpec::hex("#808080"),
            ColorSpec::hex("#FFFFFF"),
        ],
        vec![
            ColorSpec::hex("#FF0000"),
            ColorSpec::hex("#00FF00"),
            ColorSpec::hex("#0000FF"),
            ColorSpec::hex("#FFFF00"),
            ColorSpec::hex("#00FFFF"),
            ColorSpec::hex("#FF00FF"),
            ColorSpec::hex("#101010"),
        ],
    ];

    for specs in gradients {
        let ramp = ColorRamp::new(&specs).unwrap();
        let first = *ramp.stops().first().unwrap();
        let last = *ramp.stops().last().unwrap();
        assert_eq!(ramp.color_at(0.0), first);
        assert_eq!(ramp.color_at(1.0), last);
    }
}

#[test]
fn test_out_of_range_clamps() {
    let ramp = ColorRamp::default();
    assert_eq!(ramp.color_at(-0.5), ramp.color_at(0.0));
    assert_eq!(ramp.color_at(7.0), ramp.color_at(1.0));
    assert_eq!(ramp.color_at(f32::NAN), ramp.color_at(0.0));
}

// ============================================================================
// Interpolation
// ============================================================================

#[test]
fn test_interpolates_within_segment() {
    let ramp = ColorRamp::default();
    // Halfway between blue and cyan.
    assert_eq!(ramp.color_at(0.125), Color::rgb(0, 128, 255));
    // Halfway between yellow and red.
    assert_eq!(ramp.color_at(0.875), Color::rgb(255, 128, 0));
}

#[test]
fn test_ramp_is_continuous() {
    let ramp = ColorRamp::default();
    let mut prev = ramp.color_at(0.0);
    for i in 1..=1000 {
        let next = ramp.color_at(i as f32 / 1000.0);
        let jump = [
            prev.r.abs_diff(next.r),
            prev.g.abs_diff(next.g),
            prev.b.abs_diff(next.b),
        ];
        assert!(jump.iter().all(|&d| d <= 2), "jump at step {}: {:?}", i, jump);
        prev = next;
    }
}

// ============================================================================
// Degenerate gradients
// ============================================================================

#[test]
fn test_single_stop_is_constant() {
    let ramp = ColorRamp::new(&[ColorSpec::hex("#336699")]).unwrap();
    for t in [0.0, 0.3, 0.5, 1.0] {
        assert_eq!(ramp.color_at(t), Color::rgb(0x33, 0x66, 0x99));
    }
}

#[test]
fn test_empty_gradient_is_an_error() {
    assert!(matches!(
        ColorRamp::new(&[]),
        Err(HeatmapError::InvalidGradient(_))
    ));
}

#[test]
fn test_unparseable_stop_is_an_error() {
    let specs = vec![ColorSpec::hex("#000000"), ColorSpec::hex("not-a-color")];
    assert!(matches!(
        ColorRamp::new(&specs),
        Err(HeatmapError::InvalidGradient(_))
    ));
}

// ============================================================================
// Blob sizing
// ============================================================================

#[test]
fn test_zero_intensity_still_has_half_radius() {
    assert_approx_eq!(blob_radius(30.0, 0.0), 15.0, 1e-6);
    assert_approx_eq!(blob_radius(30.0, 0.5), 22.5, 1e-6);
}

#[test]
fn test_intensity_factor_damps_and_caps() {
    assert_approx_eq!(adjusted_intensity(1.0, 0.6), 0.6, 1e-6);
    assert_approx_eq!(adjusted_intensity(0.9, 2.0), 1.0, 1e-6);
}
