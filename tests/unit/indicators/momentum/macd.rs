//! Unit tests for MACD indicator

use tickerlens::common::math::ema;
use tickerlens::indicators::momentum::calculate_macd;

#[test]
fn test_macd_unavailable_below_26_prices() {
    let prices = vec![100.0; 25];
    let macd = calculate_macd(&prices);
    assert!(macd.macd.is_none());
    assert!(macd.signal.is_none());
    assert!(macd.histogram.is_none());
}

#[test]
fn test_macd_is_fast_minus_slow_ema() {
    let prices: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 0.5).collect();
    let macd = calculate_macd(&prices);
    let expected = ema(&prices, 12).unwrap() - ema(&prices, 26).unwrap();
    assert_eq!(macd.macd, Some(expected));
    assert!(expected > 0.0);
}

#[test]
fn test_macd_signal_and_histogram_never_computed() {
    for len in [26, 50, 300] {
        let prices: Vec<f64> = (0..len).map(|i| 50.0 + (i as f64).cos()).collect();
        let macd = calculate_macd(&prices);
        assert!(macd.macd.is_some());
        assert!(macd.signal.is_none());
        assert!(macd.histogram.is_none());
    }
}
