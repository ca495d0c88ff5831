//! Argument decoding shared by the tool handlers

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::error::ToolError;
use crate::services::ticker::normalize_ticker;

/// Decode a tool's argument object; `null` counts as `{}`.
pub fn parse_args<T: DeserializeOwned>(args: &Value) -> Result<T, ToolError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args.clone()
    };
    serde_json::from_value(args).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

#[derive(Debug, Deserialize)]
pub struct TickerArgs {
    pub ticker: String,
}

impl TickerArgs {
    pub fn symbol(&self) -> String {
        normalize_ticker(&self.ticker)
    }
}

/// `tickers` array of a batch tool.
///
/// `Err(message)` is a user-facing rejection (not an array, too many entries)
/// that is reported as plain text rather than as a tool error.
pub fn batch_tickers(args: &Value, max: usize) -> Result<Vec<String>, String> {
    let Some(items) = args.get("tickers").and_then(Value::as_array) else {
        return Err("Invalid tickers array".to_string());
    };

    if items.len() > max {
        return Err(format!("Maximum {} tickers allowed", max));
    }

    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err("Invalid tickers array".to_string()),
        })
        .collect()
}

/// Lookback in days for `get_market_data`.
pub fn market_data_lookback_days(period: &str) -> i64 {
    match period {
        "1d" => 1,
        "5d" => 5,
        "1mo" => 30,
        "3mo" => 90,
        "6mo" => 180,
        "1y" => 365,
        "2y" => 2 * 365,
        "5y" => 5 * 365,
        _ => 365,
    }
}

/// Lookback in days for the technical analysis tools.
pub fn analysis_lookback_days(period: &str) -> i64 {
    match period {
        "1mo" => 30,
        "3mo" => 90,
        "6mo" => 180,
        "1y" => 365,
        _ => 180,
    }
}
