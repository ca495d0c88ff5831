//! Unit tests for EMA indicator

use tickerlens::indicators::trend::{calculate_ema, calculate_emas};

fn create_test_prices(count: usize, base_price: f64) -> Vec<f64> {
    (0..count).map(|i| base_price + i as f64 * 0.1).collect()
}

#[test]
fn test_ema_insufficient_data() {
    let prices = create_test_prices(10, 100.0);
    assert!(calculate_ema(&prices, 20).is_none());
}

#[test]
fn test_ema_sufficient_data() {
    let prices = create_test_prices(50, 100.0);
    let ema = calculate_ema(&prices, 12).unwrap();
    assert!(ema.is_finite());
    assert!(ema > 100.0 && ema < 104.9);
}

#[test]
fn test_ema_constant_series_stays_constant() {
    let prices = vec![250.0; 40];
    let ema = calculate_ema(&prices, 10).unwrap();
    assert!((ema - 250.0).abs() < 1e-9);
}

#[test]
fn test_ema_is_seeded_with_first_price_not_sma() {
    // Textbook seeding would start at SMA(2) = 15; first-element seeding starts at 10.
    // k = 2/3: 10 -> 16.67 -> 25.56
    let ema = calculate_ema(&[10.0, 20.0, 30.0], 2).unwrap();
    let expected = {
        let k = 2.0 / 3.0;
        let step1 = 20.0 * k + 10.0 * (1.0 - k);
        30.0 * k + step1 * (1.0 - k)
    };
    assert!((ema - expected).abs() < 1e-12);
    let sma_seeded = 30.0 * (2.0 / 3.0) + 15.0 * (1.0 / 3.0);
    assert!((ema - sma_seeded).abs() > 0.5);
}

#[test]
fn test_calculate_multiple_emas() {
    let prices = create_test_prices(250, 100.0);
    let emas = calculate_emas(&prices, &[12, 26, 50, 200]);
    assert_eq!(emas.len(), 4);
    assert_eq!(emas[0].0, 12);
}

#[test]
fn test_calculate_emas_skips_unavailable_periods() {
    let prices = create_test_prices(30, 100.0);
    let emas = calculate_emas(&prices, &[12, 26, 50]);
    let periods: Vec<u32> = emas.iter().map(|(period, _)| *period).collect();
    assert_eq!(periods, vec![12, 26]);
}
