//! Unit tests for environment configuration

use std::collections::HashMap;
use std::time::Duration;

use tickerlens::config::{AppConfig, ConfigError, DEFAULT_MARKET_DATA_BASE_URL};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults_when_unset() {
    let config = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.environment, "sandbox");
    assert_eq!(config.port, 8080);
    assert_eq!(config.batch_max_tickers, 50);
    assert_eq!(config.provider.base_url.as_str(), "https://query1.finance.yahoo.com/");
    assert_eq!(config.provider.timeout, Duration::from_secs(10));
    assert_eq!(config.provider.max_retries, 3);
    assert!(DEFAULT_MARKET_DATA_BASE_URL.starts_with("https://"));
}

#[test]
fn test_overrides_from_environment() {
    let config = AppConfig::from_lookup(lookup(&[
        ("ENVIRONMENT", "production"),
        ("PORT", "9090"),
        ("MARKET_DATA_BASE_URL", "http://127.0.0.1:4000"),
        ("MARKET_DATA_TIMEOUT_SECS", "3"),
        ("MARKET_DATA_MAX_RETRIES", "0"),
        ("BATCH_MAX_TICKERS", " 5 "),
    ]))
    .unwrap();

    assert_eq!(config.environment, "production");
    assert_eq!(config.port, 9090);
    assert_eq!(config.provider.base_url.as_str(), "http://127.0.0.1:4000/");
    assert_eq!(config.provider.timeout, Duration::from_secs(3));
    assert_eq!(config.provider.max_retries, 0);
    assert_eq!(config.batch_max_tickers, 5);
}

#[test]
fn test_malformed_values_are_rejected() {
    let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    match err {
        ConfigError::InvalidValue { key, value, .. } => {
            assert_eq!(key, "PORT");
            assert_eq!(value, "eighty");
        }
    }

    assert!(AppConfig::from_lookup(lookup(&[("MARKET_DATA_BASE_URL", "not a url")])).is_err());
}
