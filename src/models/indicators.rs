use serde::{Deserialize, Serialize};

/// MACD line with its (currently unavailable) signal and histogram.
///
/// `signal` and `histogram` stay `None` for every input: no MACD history is
/// kept, so the 9-period signal EMA cannot be formed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

impl MacdIndicator {
    pub fn unavailable() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: u32,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

/// Output of a full technical analysis pass.
///
/// Every numeric field is rounded to two decimals. A field is omitted when its
/// lookback was not met, so "no data" never reads as a zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rsi_14: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub macd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub macd_signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub macd_histogram: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sma_20: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sma_50: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sma_200: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bollinger_upper: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bollinger_middle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bollinger_lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub current_price: Option<f64>,
    pub trend: Trend,
}

/// An [`IndicatorReport`] tagged with the ticker it was computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerReport {
    pub ticker: String,
    #[serde(flatten)]
    pub report: IndicatorReport,
}
