//! Classic pivot points with support and resistance levels

use crate::common::math::round2;
use crate::models::pivots::{PivotClassification, PivotLevel, PivotPosition, PivotSet};

/// A price above `PP * ABOVE_PIVOT_FACTOR` is above the pivot.
pub const ABOVE_PIVOT_FACTOR: f64 = 1.002;
/// A price below `PP * BELOW_PIVOT_FACTOR` is below the pivot.
pub const BELOW_PIVOT_FACTOR: f64 = 0.998;

/// Calculate pivot points from the previous session's high, low and close
///
/// PP = (H + L + C) / 3
/// R1 = 2PP - L, R2 = PP + (H - L), R3 = H + 2(PP - L)
/// S1 = 2PP - H, S2 = PP - (H - L), S3 = L - 2(H - PP)
///
/// Levels are derived from the unrounded PP and rounded individually.
/// Inputs with `high < low` produce meaningless but finite levels.
pub fn calculate_pivot_points(high: f64, low: f64, close: f64) -> PivotSet {
    let pp = (high + low + close) / 3.0;
    let range = high - low;

    PivotSet {
        pp: round2(pp),
        r1: round2(2.0 * pp - low),
        r2: round2(pp + range),
        r3: round2(high + 2.0 * (pp - low)),
        s1: round2(2.0 * pp - high),
        s2: round2(pp - range),
        s3: round2(low - 2.0 * (high - pp)),
    }
}

/// Classify `current_price` against a pivot set
///
/// Nearest resistance is the lowest R level strictly above the price, nearest
/// support the highest S level strictly below it.
pub fn classify_position(pivots: &PivotSet, current_price: f64) -> PivotClassification {
    let position = if current_price > pivots.pp * ABOVE_PIVOT_FACTOR {
        PivotPosition::AbovePivot
    } else if current_price < pivots.pp * BELOW_PIVOT_FACTOR {
        PivotPosition::BelowPivot
    } else {
        PivotPosition::AtPivot
    };

    let nearest_resistance = PivotLevel::RESISTANCES
        .into_iter()
        .filter(|&level| pivots.price(level) > current_price)
        .min_by(|&a, &b| pivots.price(a).total_cmp(&pivots.price(b)));

    let nearest_support = PivotLevel::SUPPORTS
        .into_iter()
        .filter(|&level| pivots.price(level) < current_price)
        .max_by(|&a, &b| pivots.price(a).total_cmp(&pivots.price(b)));

    PivotClassification {
        position,
        nearest_resistance,
        nearest_support,
    }
}
