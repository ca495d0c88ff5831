//! RSI (Relative Strength Index) indicator

/// Calculate RSI with Wilder smoothing
///
/// The first `period` changes seed the average gain/loss; every later change
/// updates them as `avg = (avg * (period - 1) + current) / period`.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// An average loss of exactly zero yields 100.
pub fn calculate_rsi(prices: &[f64], period: u32) -> Option<f64> {
    let period = period as usize;
    if period == 0 || prices.len() < period + 1 {
        return None;
    }

    let changes: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let (seed, rest) = changes.split_at(period);

    let (gains, losses) = seed.iter().fold((0.0, 0.0), |(gains, losses), &change| {
        let (gain, loss) = split_change(change);
        (gains + gain, losses + loss)
    });

    let smoothing = period as f64;
    let mut avg_gain = gains / smoothing;
    let mut avg_loss = losses / smoothing;

    for &change in rest {
        let (gain, loss) = split_change(change);
        avg_gain = (avg_gain * (smoothing - 1.0) + gain) / smoothing;
        avg_loss = (avg_loss * (smoothing - 1.0) + loss) / smoothing;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &[f64]) -> Option<f64> {
    calculate_rsi(prices, 14)
}

// A flat change counts as a zero gain.
fn split_change(change: f64) -> (f64, f64) {
    if change >= 0.0 {
        (change, 0.0)
    } else {
        (0.0, -change)
    }
}
