//! EMA (Exponential Moving Average) indicator

use crate::common::math;

/// Calculate EMA for a specific period
///
/// Seeded with the first price of the series, not with an SMA of the first
/// `period` prices. Values therefore differ from most charting packages.
pub fn calculate_ema(prices: &[f64], period: u32) -> Option<f64> {
    math::ema(prices, period as usize)
}

/// Calculate multiple EMAs at once, skipping periods without enough history
pub fn calculate_emas(prices: &[f64], periods: &[u32]) -> Vec<(u32, f64)> {
    periods
        .iter()
        .filter_map(|&period| calculate_ema(prices, period).map(|value| (period, value)))
        .collect()
}
