//! Full technical analysis report over a closing-price series

use crate::common::math::{round2, round2_opt};
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_sma;
use crate::indicators::volatility::calculate_bollinger_bands_default;
use crate::models::indicators::{IndicatorReport, Trend};

/// Closes a caller should hold before asking for a full analysis.
///
/// The engine itself degrades gracefully below this, it only drops fields.
pub const MIN_ANALYSIS_PRICES: usize = 20;

/// Build an [`IndicatorReport`] from chronological closing prices
///
/// Computes RSI(14), MACD(12, 26), SMA 20/50/200 and Bollinger(20, 2σ), then
/// rounds every present value to two decimals. Indicators whose lookback is
/// not met are left out.
pub fn perform_technical_analysis(prices: &[f64]) -> IndicatorReport {
    let current_price = prices.last().copied();

    let rsi = calculate_rsi(prices, 14);
    let macd = calculate_macd(prices);
    let sma_20 = calculate_sma(prices, 20);
    let sma_50 = calculate_sma(prices, 50);
    let sma_200 = calculate_sma(prices, 200);
    let bollinger = calculate_bollinger_bands_default(prices);

    let trend = match current_price {
        Some(price) => classify_trend(price, sma_50, sma_200),
        None => Trend::Neutral,
    };

    IndicatorReport {
        rsi_14: round2_opt(rsi),
        macd: round2_opt(macd.macd),
        macd_signal: round2_opt(macd.signal),
        macd_histogram: round2_opt(macd.histogram),
        sma_20: round2_opt(sma_20),
        sma_50: round2_opt(sma_50),
        sma_200: round2_opt(sma_200),
        bollinger_upper: bollinger.map(|b| round2(b.upper)),
        bollinger_middle: bollinger.map(|b| round2(b.middle)),
        bollinger_lower: bollinger.map(|b| round2(b.lower)),
        current_price: round2_opt(current_price),
        trend,
    }
}

/// Golden/death-cross style trend label
///
/// Bullish when SMA50 > SMA200 and price > SMA50, bearish when both
/// inequalities flip, neutral otherwise or when either average is missing.
/// Compares unrounded values.
pub fn classify_trend(current_price: f64, sma_50: Option<f64>, sma_200: Option<f64>) -> Trend {
    match (sma_50, sma_200) {
        (Some(fast), Some(slow)) if fast > slow && current_price > fast => Trend::Bullish,
        (Some(fast), Some(slow)) if fast < slow && current_price < fast => Trend::Bearish,
        _ => Trend::Neutral,
    }
}
