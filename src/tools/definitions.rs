//! Tool catalogue advertised to clients

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetMarketData,
    GetFinancials,
    GetCompanyInfo,
    GetHolders,
    GetExtraData,
    GetTechnicalAnalysis,
    GetPivotPoints,
    BatchCompanyInfo,
    BatchTechnicalAnalysis,
    GetScreener,
    GetPeers,
    FilterStocks,
    GetEarnings,
}

impl ToolName {
    pub const ALL: [ToolName; 13] = [
        ToolName::GetMarketData,
        ToolName::GetFinancials,
        ToolName::GetCompanyInfo,
        ToolName::GetHolders,
        ToolName::GetExtraData,
        ToolName::GetTechnicalAnalysis,
        ToolName::GetPivotPoints,
        ToolName::BatchCompanyInfo,
        ToolName::BatchTechnicalAnalysis,
        ToolName::GetScreener,
        ToolName::GetPeers,
        ToolName::FilterStocks,
        ToolName::GetEarnings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetMarketData => "get_market_data",
            ToolName::GetFinancials => "get_financials",
            ToolName::GetCompanyInfo => "get_company_info",
            ToolName::GetHolders => "get_holders",
            ToolName::GetExtraData => "get_extra_data",
            ToolName::GetTechnicalAnalysis => "get_technical_analysis",
            ToolName::GetPivotPoints => "get_pivot_points",
            ToolName::BatchCompanyInfo => "batch_company_info",
            ToolName::BatchTechnicalAnalysis => "batch_technical_analysis",
            ToolName::GetScreener => "get_screener",
            ToolName::GetPeers => "get_peers",
            ToolName::FilterStocks => "filter_stocks",
            ToolName::GetEarnings => "get_earnings",
        }
    }

    pub fn definition(&self) -> ToolDefinition {
        let ticker = json!({ "type": "string", "description": "Ticker symbol (e.g. AAPL, THYAO)" });
        let tickers = json!({
            "type": "array",
            "items": { "type": "string" },
            "description": "Ticker symbols (max 50)"
        });
        let analysis_period = json!({
            "type": "string",
            "enum": ["1mo", "3mo", "6mo", "1y"],
            "default": "6mo"
        });

        let (description, schema) = match self {
            ToolName::GetMarketData => (
                "OHLCV price history as compact rows",
                object_schema(
                    json!({
                        "ticker": ticker,
                        "period": {
                            "type": "string",
                            "enum": ["1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y"],
                            "default": "1d"
                        },
                        "interval": {
                            "type": "string",
                            "enum": ["1m", "2m", "5m", "15m", "30m", "60m", "90m", "1h", "1d", "5d", "1wk", "1mo", "3mo"],
                            "default": "1d"
                        }
                    }),
                    &["ticker"],
                ),
            ),
            ToolName::GetFinancials => (
                "Income, balance sheet or cash flow statement",
                object_schema(
                    json!({
                        "ticker": ticker,
                        "type": { "type": "string", "enum": ["income", "balance", "cashflow"] },
                        "frequency": {
                            "type": "string",
                            "enum": ["annual", "quarterly"],
                            "default": "annual"
                        }
                    }),
                    &["ticker", "type"],
                ),
            ),
            ToolName::GetCompanyInfo => (
                "Company profile and valuation ratios",
                object_schema(json!({ "ticker": ticker }), &["ticker"]),
            ),
            ToolName::GetHolders => (
                "Major, institutional and fund holders",
                object_schema(json!({ "ticker": ticker }), &["ticker"]),
            ),
            ToolName::GetExtraData => (
                "Options, calendar events, news or analyst recommendations",
                object_schema(
                    json!({
                        "ticker": ticker,
                        "type": {
                            "type": "string",
                            "enum": ["options", "events", "news", "recommendations"]
                        }
                    }),
                    &["ticker", "type"],
                ),
            ),
            ToolName::GetTechnicalAnalysis => (
                "RSI, MACD, SMA 20/50/200, Bollinger Bands and trend",
                object_schema(
                    json!({ "ticker": ticker, "period": analysis_period }),
                    &["ticker"],
                ),
            ),
            ToolName::GetPivotPoints => (
                "Classic pivot points with nearest support and resistance",
                object_schema(json!({ "ticker": ticker }), &["ticker"]),
            ),
            ToolName::BatchCompanyInfo => (
                "Company snapshots for several tickers in parallel",
                object_schema(json!({ "tickers": tickers }), &["tickers"]),
            ),
            ToolName::BatchTechnicalAnalysis => (
                "Technical analysis for several tickers in parallel",
                object_schema(
                    json!({ "tickers": tickers, "period": analysis_period }),
                    &["tickers"],
                ),
            ),
            ToolName::GetScreener => (
                "Predefined stock screener (day_gainers, day_losers, most_actives, ...)",
                object_schema(
                    json!({
                        "scrId": { "type": "string", "default": "day_gainers" },
                        "count": { "type": "integer", "default": 10, "maximum": 50 }
                    }),
                    &[],
                ),
            ),
            ToolName::GetPeers => (
                "Similar companies recommended for a ticker",
                object_schema(json!({ "ticker": ticker }), &["ticker"]),
            ),
            ToolName::FilterStocks => (
                "Filter tickers by P/E, market cap (billions) and price",
                object_schema(
                    json!({
                        "tickers": tickers,
                        "criteria": {
                            "type": "object",
                            "properties": {
                                "min_pe": { "type": "number" },
                                "max_pe": { "type": "number" },
                                "min_mc": { "type": "number" },
                                "max_mc": { "type": "number" },
                                "min_price": { "type": "number" },
                                "max_price": { "type": "number" }
                            }
                        }
                    }),
                    &["tickers", "criteria"],
                ),
            ),
            ToolName::GetEarnings => (
                "Upcoming earnings estimates and earnings history",
                object_schema(json!({ "ticker": ticker }), &["ticker"]),
            ),
        };

        ToolDefinition {
            name: self.as_str().to_string(),
            description: description.to_string(),
            input_schema: schema,
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

fn object_schema(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Every tool, in catalogue order.
pub fn list_tools() -> Vec<ToolDefinition> {
    ToolName::ALL.iter().map(ToolName::definition).collect()
}
