//! Tests for the regional load summary.

use footmap_common::{create_standard_pressure_points, FootSide, Sample};
use renderer::{summarize, FootRegion};
use test_utils::assert_approx_eq;

#[test]
fn test_standard_points_percentages_sum_to_100() {
    for side in [FootSide::Left, FootSide::Right] {
        let d = summarize(&create_standard_pressure_points(side), side);

        assert_eq!(d.sample_count, 14);
        assert_approx_eq!(
            d.forefoot_percent + d.midfoot_percent + d.rearfoot_percent,
            100.0,
            1e-3
        );
        assert_approx_eq!(d.medial_percent + d.lateral_percent, 100.0, 1e-3);
        assert_eq!(d.peak.as_ref().unwrap().location.as_deref(), Some("Heel Center"));
    }
}

#[test]
fn test_mirrored_feet_have_same_distribution() {
    let left = summarize(&create_standard_pressure_points(FootSide::Left), FootSide::Left);
    let right = summarize(&create_standard_pressure_points(FootSide::Right), FootSide::Right);

    assert_approx_eq!(left.forefoot_percent, right.forefoot_percent, 1e-4);
    assert_approx_eq!(left.rearfoot_percent, right.rearfoot_percent, 1e-4);
    assert_approx_eq!(left.mean_intensity, right.mean_intensity, 1e-6);
    assert_approx_eq!(left.medial_percent, right.medial_percent, 1e-3);
    assert_approx_eq!(left.lateral_percent, right.lateral_percent, 1e-3);
    assert_approx_eq!(
        left.medial_lateral_ratio.unwrap(),
        right.medial_lateral_ratio.unwrap(),
        1e-4
    );
}

#[test]
fn test_mirrored_samples_keep_medial_share() {
    let left = vec![
        Sample::new(0.5, 0.9, 0.9),
        Sample::new(0.5, 0.5, 0.4),
        Sample::new(0.2, 0.2, 0.7),
        Sample::new(0.8, 0.6, 0.3),
    ];
    let right: Vec<Sample> = left.iter().map(Sample::mirrored).collect();

    let l = summarize(&left, FootSide::Left);
    let r = summarize(&right, FootSide::Right);

    assert_approx_eq!(l.medial_percent, r.medial_percent, 1e-4);
    assert_approx_eq!(l.lateral_percent, r.lateral_percent, 1e-4);
    // 0.7 + (0.9 + 0.4) / 2 of 2.3
    assert_approx_eq!(l.medial_percent, 1.35 / 2.3 * 100.0, 1e-3);
}

#[test]
fn test_region_percentages() {
    let samples = vec![
        Sample::new(0.4, 0.1, 0.5),
        Sample::new(0.4, 0.5, 0.25),
        Sample::new(0.6, 0.9, 0.25),
    ];
    let d = summarize(&samples, FootSide::Left);

    assert_approx_eq!(d.region_percent(FootRegion::Forefoot), 50.0, 1e-4);
    assert_approx_eq!(d.region_percent(FootRegion::Midfoot), 25.0, 1e-4);
    assert_approx_eq!(d.region_percent(FootRegion::Rearfoot), 25.0, 1e-4);
    assert_approx_eq!(d.medial_percent, 75.0, 1e-4);
    assert_approx_eq!(d.medial_lateral_ratio.unwrap(), 3.0, 1e-4);
}

#[test]
fn test_zero_load_reports_zero() {
    let samples = vec![Sample::new(0.2, 0.2, 0.0), Sample::new(0.8, 0.8, 0.0)];
    let d = summarize(&samples, FootSide::Right);

    assert_eq!(d.sample_count, 2);
    assert_eq!(d.forefoot_percent, 0.0);
    assert_eq!(d.lateral_percent, 0.0);
    assert!(d.medial_lateral_ratio.is_none());
}

#[test]
fn test_summary_serializes() {
    let d = summarize(&create_standard_pressure_points(FootSide::Left), FootSide::Left);
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["side"], "left");
    assert_eq!(json["sample_count"], 14);
}
