//! Shared numeric helpers for indicator calculations

/// Arithmetic mean of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Exponential moving average over the whole series.
///
/// Seeded with the first value rather than an SMA warm-up, then smoothed with
/// `k = 2 / (period + 1)` from index 1 onward. For long series this diverges
/// from the textbook EMA that most charting libraries report.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let k = smoothing_factor(period);
    let (first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold(*first, |prev, &price| ema_from_previous(price, prev, k)),
    )
}

/// Smoothing factor `2 / (period + 1)`.
pub fn smoothing_factor(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// One EMA step given the previous value.
pub fn ema_from_previous(price: f64, previous: f64, k: f64) -> f64 {
    price * k + previous * (1.0 - k)
}

/// Population standard deviation (divides by `period`) of the last `period`
/// values around their mean.
pub fn population_std_dev(values: &[f64], period: usize) -> Option<f64> {
    let mean = sma(values, period)?;
    let window = &values[values.len() - period..];
    let variance = window
        .iter()
        .map(|price| (price - mean).powi(2))
        .sum::<f64>()
        / period as f64;
    Some(variance.sqrt())
}

/// Round to two decimal places.
///
/// Rounds on the exact decimal value of the float, with exact ties going away
/// from zero, so `1.005` (stored as 1.00499..) becomes `1.0` while `0.125`
/// becomes `0.13`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scaled = value * 100.0;
    // Multiples of 1/8 are the only exact binary ties at two decimals.
    if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        return scaled.round() / 100.0;
    }

    let rounded: f64 = format!("{:.2}", value).parse().unwrap_or(value);
    // "-0.00" parses to -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// `round2` lifted over an optional value.
pub fn round2_opt(value: Option<f64>) -> Option<f64> {
    value.map(round2)
}
