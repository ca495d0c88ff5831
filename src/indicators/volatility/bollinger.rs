//! Bollinger Bands indicator

use crate::common::math;
use crate::models::indicators::BollingerBandsIndicator;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// The deviation is the population form (divides by `period`).
pub fn calculate_bollinger_bands(
    prices: &[f64],
    period: u32,
    std_dev: f64,
) -> Option<BollingerBandsIndicator> {
    if period == 0 || prices.len() < period as usize {
        return None;
    }

    let middle = math::sma(prices, period as usize)?;
    let std = math::population_std_dev(prices, period as usize)?;

    let upper = middle + (std * std_dev);
    let lower = middle - (std * std_dev);

    Some(BollingerBandsIndicator {
        upper,
        middle,
        lower,
        period,
        std_dev,
    })
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(prices: &[f64]) -> Option<BollingerBandsIndicator> {
    calculate_bollinger_bands(prices, 20, 2.0)
}
