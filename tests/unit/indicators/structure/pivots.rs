//! Unit tests for pivot points

use tickerlens::indicators::structure::{calculate_pivot_points, classify_position};
use tickerlens::models::pivots::{PivotLevel, PivotPosition};

#[test]
fn test_classic_pivot_levels() {
    let pivots = calculate_pivot_points(110.0, 90.0, 100.0);
    assert_eq!(pivots.pp, 100.0);
    assert_eq!(pivots.r1, 110.0);
    assert_eq!(pivots.s1, 90.0);
    assert_eq!(pivots.r2, 120.0);
    assert_eq!(pivots.s2, 80.0);
    assert_eq!(pivots.r3, 130.0);
    assert_eq!(pivots.s3, 70.0);
}

#[test]
fn test_pivot_levels_are_rounded() {
    let pivots = calculate_pivot_points(101.37, 99.11, 100.02);
    for value in [pivots.pp, pivots.r1, pivots.r2, pivots.r3, pivots.s1, pivots.s2, pivots.s3] {
        assert_eq!(value, (value * 100.0).round() / 100.0);
    }
    assert!((pivots.r1 + pivots.s1 - 2.0 * pivots.pp).abs() <= 0.011);
    assert!(pivots.pp >= 99.11 && pivots.pp <= 101.37);
}

#[test]
fn test_position_thresholds() {
    let pivots = calculate_pivot_points(110.0, 90.0, 100.0);
    assert_eq!(classify_position(&pivots, 100.3).position, PivotPosition::AbovePivot);
    assert_eq!(classify_position(&pivots, 99.7).position, PivotPosition::BelowPivot);
    assert_eq!(classify_position(&pivots, 100.1).position, PivotPosition::AtPivot);
    assert_eq!(classify_position(&pivots, 100.2).position, PivotPosition::AtPivot);
}

#[test]
fn test_nearest_levels() {
    let pivots = calculate_pivot_points(110.0, 90.0, 100.0);

    let inside = classify_position(&pivots, 105.0);
    assert_eq!(inside.nearest_resistance, Some(PivotLevel::R1));
    assert_eq!(inside.nearest_support, Some(PivotLevel::S1));

    let between = classify_position(&pivots, 115.0);
    assert_eq!(between.nearest_resistance, Some(PivotLevel::R2));
    assert_eq!(between.nearest_support, Some(PivotLevel::S1));

    let below_all = classify_position(&pivots, 60.0);
    assert_eq!(below_all.nearest_resistance, Some(PivotLevel::R1));
    assert_eq!(below_all.nearest_support, None);

    let above_all = classify_position(&pivots, 140.0);
    assert_eq!(above_all.nearest_resistance, None);
    assert_eq!(above_all.nearest_support, Some(PivotLevel::S1));
}

#[test]
fn test_level_equal_to_price_is_not_nearest() {
    let pivots = calculate_pivot_points(110.0, 90.0, 100.0);
    let at_r1 = classify_position(&pivots, 110.0);
    assert_eq!(at_r1.nearest_resistance, Some(PivotLevel::R2));
}

#[test]
fn test_classification_serialization() {
    let pivots = calculate_pivot_points(110.0, 90.0, 100.0);
    let json = serde_json::to_value(classify_position(&pivots, 140.0)).unwrap();
    assert_eq!(json["position"], "above_pivot");
    assert_eq!(json["nearest_support"], "S1");
    assert!(json.get("nearest_resistance").is_none());
}
