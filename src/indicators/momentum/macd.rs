//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::indicators::MacdIndicator;

pub const MACD_FAST_PERIOD: usize = 12;
pub const MACD_SLOW_PERIOD: usize = 26;

/// Calculate MACD indicator
///
/// MACD = EMA(12) - EMA(26), both seeded from the first price.
///
/// Only the MACD line is produced. The signal line (EMA(9) of the MACD
/// history) and the histogram are always `None` because no MACD history is
/// retained.
pub fn calculate_macd(prices: &[f64]) -> MacdIndicator {
    if prices.len() < MACD_SLOW_PERIOD {
        return MacdIndicator::unavailable();
    }

    let fast_ema = math::ema(prices, MACD_FAST_PERIOD);
    let slow_ema = math::ema(prices, MACD_SLOW_PERIOD);

    match (fast_ema, slow_ema) {
        (Some(fast), Some(slow)) => MacdIndicator {
            macd: Some(fast - slow),
            signal: None,
            histogram: None,
        },
        _ => MacdIndicator::unavailable(),
    }
}
