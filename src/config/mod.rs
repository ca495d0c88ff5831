//! Environment-driven configuration.
//!
//! Values come from the process environment (optionally seeded from `.env`
//! by the binaries via dotenvy). Missing values fall back to defaults,
//! malformed values are rejected.

use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MARKET_DATA_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: usize = 3;
pub const DEFAULT_BATCH_MAX_TICKERS: usize = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Deployment environment name (`production`, `sandbox`, ...)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn is_production() -> bool {
    matches!(get_environment().as_str(), "production" | "prod")
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub base_url: Url,
    pub timeout: Duration,
    pub max_retries: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_MARKET_DATA_BASE_URL)
                .expect("default market data URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: String,
    pub port: u16,
    pub provider: ProviderConfig,
    pub batch_max_tickers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            port: DEFAULT_PORT,
            provider: ProviderConfig::default(),
            batch_max_tickers: DEFAULT_BATCH_MAX_TICKERS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, used by `from_env` and tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = match lookup("MARKET_DATA_BASE_URL") {
            Some(raw) => Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
                key: "MARKET_DATA_BASE_URL",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.provider.base_url,
        };

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            provider: ProviderConfig {
                base_url,
                timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "MARKET_DATA_TIMEOUT_SECS",
                    DEFAULT_TIMEOUT_SECS,
                )?),
                max_retries: parse_or(&lookup, "MARKET_DATA_MAX_RETRIES", DEFAULT_MAX_RETRIES)?,
            },
            batch_max_tickers: parse_or(&lookup, "BATCH_MAX_TICKERS", defaults.batch_max_tickers)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
