//! Wire shapes of the Yahoo Finance JSON endpoints.
//!
//! Only the fields the tools read are modelled; everything else is ignored.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Error object shared by every endpoint (`{"code": .., "description": ..}`).
#[derive(Debug, Clone, Deserialize)]
pub struct YahooError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl YahooError {
    pub fn message(&self) -> String {
        match (&self.code, &self.description) {
            (Some(code), Some(description)) => format!("{}: {}", code, description),
            (Some(code), None) => code.clone(),
            (None, Some(description)) => description.clone(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

/// `{"result": [..], "error": ..}` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultEnvelope<T> {
    pub result: Option<Vec<T>>,
    pub error: Option<YahooError>,
}

// --- /v8/finance/chart ------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ResultEnvelope<ChartResult>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<ChartQuote>,
    #[serde(default)]
    pub adjclose: Vec<ChartAdjClose>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartQuote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartAdjClose {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

// --- /v10/finance/quoteSummary ----------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    pub quote_summary: ResultEnvelope<Map<String, Value>>,
}

// --- /ws/fundamentals-timeseries --------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TimeseriesResponse {
    pub timeseries: ResultEnvelope<Value>,
}

/// One entry of a timeseries array such as `annualTotalRevenue`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeseriesPoint {
    pub as_of_date: String,
    pub reported_value: Option<Value>,
}

// --- /v1/finance/search -----------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub news: Vec<SearchNews>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNews {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    pub provider_publish_time: Option<i64>,
}

// --- /v7/finance/options ----------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub option_chain: ResultEnvelope<OptionsResult>,
}

#[derive(Debug, Deserialize)]
pub struct OptionsResult {
    #[serde(default)]
    pub options: Vec<OptionsExpiry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsExpiry {
    pub expiration_date: Option<i64>,
    #[serde(default)]
    pub calls: Vec<OptionsContract>,
    #[serde(default)]
    pub puts: Vec<OptionsContract>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsContract {
    pub strike: f64,
    pub last_price: Option<f64>,
    pub volume: Option<u64>,
}

// --- /v1/finance/screener and /v6/finance/recommendationsbysymbol -----------

#[derive(Debug, Deserialize)]
pub struct FinanceResponse<T> {
    pub finance: ResultEnvelope<T>,
}

#[derive(Debug, Deserialize)]
pub struct ScreenerPayload {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(default)]
    pub quotes: Vec<ScreenerPayloadQuote>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerPayloadQuote {
    pub symbol: String,
    pub short_name: Option<String>,
    pub regular_market_price: Option<Value>,
    pub regular_market_change_percent: Option<Value>,
    pub regular_market_volume: Option<Value>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<Value>,
    pub market_cap: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsPayload {
    #[serde(default)]
    pub recommended_symbols: Vec<RecommendedSymbol>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendedSymbol {
    pub symbol: String,
    #[serde(default)]
    pub score: f64,
}
