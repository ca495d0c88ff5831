//! Vendor-agnostic market data shapes returned by a
//! [`MarketDataProvider`](crate::services::market_data::MarketDataProvider).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One OHLCV bar. Providers report gaps as `None` instead of a sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
    pub adj_close: Option<f64>,
}

impl Bar {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            open: None,
            high: None,
            low: None,
            close: None,
            volume: None,
            adj_close: None,
        }
    }

    pub fn with_ohlc(mut self, open: f64, high: f64, low: f64, close: f64) -> Self {
        self.open = Some(open);
        self.high = Some(high);
        self.low = Some(low);
        self.close = Some(close);
        self
    }

    pub fn with_volume(mut self, volume: u64) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_adj_close(mut self, adj_close: f64) -> Self {
        self.adj_close = Some(adj_close);
        self
    }
}

/// Chronological closing prices with missing or non-finite closes removed.
pub fn closing_prices(bars: &[Bar]) -> Vec<f64> {
    bars.iter()
        .filter_map(|bar| bar.close)
        .filter(|close| close.is_finite())
        .collect()
}

/// Bar interval accepted by the chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interval {
    OneMinute,
    TwoMinutes,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    SixtyMinutes,
    NinetyMinutes,
    OneHour,
    #[default]
    OneDay,
    FiveDays,
    OneWeek,
    OneMonth,
    ThreeMonths,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::TwoMinutes => "2m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::ThirtyMinutes => "30m",
            Interval::SixtyMinutes => "60m",
            Interval::NinetyMinutes => "90m",
            Interval::OneHour => "1h",
            Interval::OneDay => "1d",
            Interval::FiveDays => "5d",
            Interval::OneWeek => "1wk",
            Interval::OneMonth => "1mo",
            Interval::ThreeMonths => "3mo",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Interval::OneMinute),
            "2m" => Ok(Interval::TwoMinutes),
            "5m" => Ok(Interval::FiveMinutes),
            "15m" => Ok(Interval::FifteenMinutes),
            "30m" => Ok(Interval::ThirtyMinutes),
            "60m" => Ok(Interval::SixtyMinutes),
            "90m" => Ok(Interval::NinetyMinutes),
            "1h" => Ok(Interval::OneHour),
            "1d" => Ok(Interval::OneDay),
            "5d" => Ok(Interval::FiveDays),
            "1wk" => Ok(Interval::OneWeek),
            "1mo" => Ok(Interval::OneMonth),
            "3mo" => Ok(Interval::ThreeMonths),
            other => Err(format!("unsupported interval '{}'", other)),
        }
    }
}

/// Bars from `start` up to `end` (or now) at `interval`.
#[derive(Debug, Clone, PartialEq)]
pub struct BarsRequest {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub interval: Interval,
}

impl BarsRequest {
    /// Daily bars covering the last `days` days.
    pub fn daily_lookback(days: i64) -> Self {
        Self::lookback(days, Interval::OneDay)
    }

    pub fn lookback(days: i64, interval: Interval) -> Self {
        Self {
            start: Utc::now() - chrono::Duration::days(days),
            end: None,
            interval,
        }
    }
}

/// Quote-summary modules keyed by module name (`summaryDetail`, `price`, ...).
///
/// Vendors wrap numbers either as bare values or as `{"raw": n, "fmt": ".."}`;
/// the accessors accept both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub modules: Map<String, Value>,
}

impl QuoteSummary {
    pub fn new(modules: Map<String, Value>) -> Self {
        Self { modules }
    }

    pub fn module(&self, name: &str) -> Option<&Value> {
        self.modules.get(name).filter(|value| !value.is_null())
    }

    /// Walks `path` inside `module`.
    pub fn value(&self, module: &str, path: &[&str]) -> Option<&Value> {
        let mut current = self.module(module)?;
        for key in path {
            current = current.get(key)?;
        }
        (!current.is_null()).then_some(current)
    }

    pub fn number(&self, module: &str, path: &[&str]) -> Option<f64> {
        self.value(module, path).and_then(raw_number)
    }

    pub fn text(&self, module: &str, path: &[&str]) -> Option<String> {
        self.value(module, path)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Array at `path`, empty when missing.
    pub fn list(&self, module: &str, path: &[&str]) -> &[Value] {
        self.value(module, path)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Reads a number that may be wrapped as `{"raw": n}`.
pub fn raw_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Object(map) => map.get("raw").and_then(Value::as_f64),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    Income,
    Balance,
    Cashflow,
}

impl StatementKind {
    /// Logical field names reported for this statement, in output order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            StatementKind::Income => &[
                "totalRevenue",
                "grossProfit",
                "netIncome",
                "operatingExpense",
            ],
            StatementKind::Balance => &[
                "totalAssets",
                "totalLiabilitiesNetMinorityInterest",
                "totalEquityGrossMinorityInterest",
                "cashAndCashEquivalents",
            ],
            StatementKind::Cashflow => &[
                "operatingCashFlow",
                "investingCashFlow",
                "financingCashFlow",
                "freeCashFlow",
            ],
        }
    }

    /// Compact column header, date first.
    pub fn header(&self) -> [&'static str; 5] {
        match self {
            StatementKind::Income => ["Date", "Rev", "GrPrf", "NetInc", "OpExp"],
            StatementKind::Balance => ["Date", "Assets", "Liab", "Eq", "Cash"],
            StatementKind::Cashflow => ["Date", "Op", "Inv", "Fin", "FreeCF"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Annual,
    Quarterly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Annual => "annual",
            Frequency::Quarterly => "quarterly",
        }
    }
}

/// One reporting period of a financial statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementPeriod {
    pub date: DateTime<Utc>,
    pub values: BTreeMap<String, f64>,
}

impl StatementPeriod {
    pub fn get(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub provider_publish_time: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    pub strike: f64,
    pub last_price: Option<f64>,
    pub volume: Option<u64>,
}

/// Contracts for the nearest expiration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChain {
    pub expiration_date: Option<DateTime<Utc>>,
    pub calls: Vec<OptionContract>,
    pub puts: Vec<OptionContract>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenerQuote {
    pub symbol: String,
    pub short_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub regular_market_volume: Option<u64>,
    pub trailing_pe: Option<f64>,
    pub market_cap: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenerResult {
    pub id: String,
    pub title: Option<String>,
    pub quotes: Vec<ScreenerQuote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerRecommendation {
    pub symbol: String,
    pub score: f64,
}
