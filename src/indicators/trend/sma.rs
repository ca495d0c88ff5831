//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Mean of the last `period` prices, `None` while fewer are available
pub fn calculate_sma(prices: &[f64], period: u32) -> Option<f64> {
    math::sma(prices, period as usize)
}
