//! Price history and financial statement tools

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::args::{market_data_lookback_days, parse_args};
use super::error::ToolError;
use super::format::{fmt, iso_timestamp};
use super::ToolContext;
use crate::models::market::{BarsRequest, Frequency, Interval, StatementKind};
use crate::services::ticker::normalize_ticker;

pub const NO_DATA: &str = "No data found";

const BAR_HEADER: [&str; 7] = ["D", "O", "H", "L", "C", "V", "AC"];

#[derive(Debug, Deserialize)]
struct MarketDataArgs {
    ticker: String,
    #[serde(default = "default_market_period")]
    period: String,
    #[serde(default = "default_interval")]
    interval: String,
}

fn default_market_period() -> String {
    "1d".to_string()
}

fn default_interval() -> String {
    "1d".to_string()
}

/// `get_market_data`: `[[D,O,H,L,C,V,AC], [iso, o, h, l, c, v, ac], ..]`
pub async fn get_market_data(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let args: MarketDataArgs = parse_args(args)?;
    let symbol = normalize_ticker(&args.ticker);
    let interval: Interval = args.interval.parse().map_err(ToolError::InvalidArguments)?;
    let request = BarsRequest::lookback(market_data_lookback_days(&args.period), interval);

    let bars = ctx.provider.get_bars(&symbol, &request).await?;
    if bars.is_empty() {
        return Ok(NO_DATA.to_string());
    }

    debug!(symbol = %symbol, count = bars.len(), "get_market_data: rows");

    let mut rows: Vec<Value> = Vec::with_capacity(bars.len() + 1);
    rows.push(json!(BAR_HEADER));
    rows.extend(bars.iter().map(|bar| {
        json!([
            iso_timestamp(&bar.timestamp),
            fmt(bar.open),
            fmt(bar.high),
            fmt(bar.low),
            fmt(bar.close),
            bar.volume,
            fmt(bar.adj_close),
        ])
    }));

    Ok(serde_json::to_string(&rows)?)
}

#[derive(Debug, Deserialize)]
struct FinancialsArgs {
    ticker: String,
    #[serde(rename = "type")]
    kind: StatementKind,
    #[serde(default)]
    frequency: Option<String>,
}

/// `get_financials`: statement periods, most recent first.
pub async fn get_financials(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let args: FinancialsArgs = parse_args(args)?;
    let symbol = normalize_ticker(&args.ticker);
    let frequency = match args.frequency.as_deref() {
        Some("quarterly") => Frequency::Quarterly,
        _ => Frequency::Annual,
    };

    let mut periods = ctx
        .provider
        .get_financial_statements(&symbol, args.kind, frequency)
        .await?;
    if periods.is_empty() {
        return Ok(NO_DATA.to_string());
    }
    periods.sort_by(|a, b| b.date.cmp(&a.date));

    let mut rows: Vec<Value> = Vec::with_capacity(periods.len() + 1);
    rows.push(json!(args.kind.header()));
    rows.extend(periods.iter().map(|period| {
        let mut row = vec![json!(iso_timestamp(&period.date))];
        row.extend(args.kind.fields().iter().map(|field| json!(period.get(field))));
        Value::Array(row)
    }));

    Ok(serde_json::to_string(&rows)?)
}
