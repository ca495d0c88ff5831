//! Company profile, ownership, events and multi-ticker quote tools

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::args::{batch_tickers, parse_args, TickerArgs};
use super::batch::fan_out;
use super::error::ToolError;
use super::format::{fmt, iso_from_unix, iso_timestamp, truncate_summary};
use super::{SharedProvider, ToolContext};
use crate::models::market::{raw_number, QuoteSummary};
use crate::services::ticker::normalize_ticker;

const PROFILE_MODULES: [&str; 4] = [
    "summaryDetail",
    "defaultKeyStatistics",
    "price",
    "summaryProfile",
];
const SUMMARY_LENGTH: usize = 200;
const TOP_HOLDERS: usize = 5;
const TOP_CONTRACTS: usize = 5;
const NEWS_COUNT: usize = 5;

/// `get_company_info`: compact profile and valuation snapshot.
pub async fn get_company_info(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let args: TickerArgs = parse_args(args)?;
    let summary = ctx
        .provider
        .get_quote_summary(&args.symbol(), &PROFILE_MODULES)
        .await?;

    let info = json!({
        "name": summary.text("price", &["shortName"]),
        "sec": summary.text("summaryProfile", &["sector"]),
        "ind": summary.text("summaryProfile", &["industry"]),
        "pe": fmt(summary.number("summaryDetail", &["trailingPE"])),
        "fPe": fmt(summary.number("summaryDetail", &["forwardPE"])),
        "mc": summary.number("summaryDetail", &["marketCap"]),
        "eps": fmt(summary.number("defaultKeyStatistics", &["trailingEps"])),
        "pb": fmt(summary.number("defaultKeyStatistics", &["priceToBook"])),
        "peg": fmt(summary.number("defaultKeyStatistics", &["pegRatio"])),
        "beta": fmt(summary.number("summaryDetail", &["beta"])),
        "hi52": fmt(summary.number("summaryDetail", &["fiftyTwoWeekHigh"])),
        "lo52": fmt(summary.number("summaryDetail", &["fiftyTwoWeekLow"])),
        "divY": fmt(summary.number("summaryDetail", &["dividendYield"])),
        "web": summary.text("summaryProfile", &["website"]),
        "desc": summary
            .text("summaryProfile", &["longBusinessSummary"])
            .map(|text| truncate_summary(&text, SUMMARY_LENGTH)),
    });

    Ok(serde_json::to_string(&info)?)
}

/// `get_holders`: insider/institution split plus the top holders.
pub async fn get_holders(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let args: TickerArgs = parse_args(args)?;
    let summary = ctx
        .provider
        .get_quote_summary(
            &args.symbol(),
            &["majorHoldersBreakdown", "institutionOwnership", "fundOwnership"],
        )
        .await?;

    let major = json!([
        ["Insiders", fmt(summary.number("majorHoldersBreakdown", &["insidersPercentHeld"]))],
        ["Inst", fmt(summary.number("majorHoldersBreakdown", &["institutionsPercentHeld"]))],
    ]);

    let payload = json!({
        "major": major,
        "inst": top_holders(&summary, "institutionOwnership"),
        "fund": top_holders(&summary, "fundOwnership"),
    });

    Ok(serde_json::to_string(&payload)?)
}

/// `[[organization, pctHeld, position], ..]`
fn top_holders(summary: &QuoteSummary, module: &str) -> Vec<Value> {
    summary
        .list(module, &["ownershipList"])
        .iter()
        .take(TOP_HOLDERS)
        .map(|holder| {
            json!([
                holder.get("organization").and_then(Value::as_str),
                fmt(holder.get("pctHeld").and_then(raw_number)),
                holder.get("position").and_then(raw_number),
            ])
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct ExtraDataArgs {
    ticker: String,
    #[serde(rename = "type")]
    kind: String,
}

/// `get_extra_data`: options, events, news or analyst recommendations.
pub async fn get_extra_data(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let args: ExtraDataArgs = parse_args(args)?;
    let symbol = normalize_ticker(&args.ticker);

    let payload = match args.kind.as_str() {
        "news" => {
            let news = ctx.provider.get_news(&symbol, NEWS_COUNT).await?;
            let headlines: Vec<Value> = news
                .iter()
                .map(|item| {
                    json!([
                        item.title,
                        item.link,
                        item.provider_publish_time.and_then(iso_from_unix),
                    ])
                })
                .collect();
            json!(headlines)
        }
        "recommendations" => {
            let summary = ctx
                .provider
                .get_quote_summary(&symbol, &["recommendationTrend", "financialData"])
                .await?;
            json!({
                "rec": summary.list("recommendationTrend", &["trend"]).first(),
                "target": {
                    "low": summary.number("financialData", &["targetLowPrice"]),
                    "high": summary.number("financialData", &["targetHighPrice"]),
                    "mean": summary.number("financialData", &["targetMeanPrice"]),
                    "median": summary.number("financialData", &["targetMedianPrice"]),
                },
            })
        }
        "events" => {
            let summary = ctx
                .provider
                .get_quote_summary(&symbol, &["calendarEvents"])
                .await?;
            summary.module("calendarEvents").cloned().unwrap_or(Value::Null)
        }
        "options" => {
            let chain = ctx.provider.get_option_chain(&symbol).await?;
            let contracts = |contracts: &[crate::models::market::OptionContract]| -> Vec<Value> {
                contracts
                    .iter()
                    .take(TOP_CONTRACTS)
                    .map(|c| json!([c.strike, c.last_price, c.volume]))
                    .collect()
            };
            json!({
                "exp": chain.expiration_date.as_ref().map(iso_timestamp),
                "calls": contracts(&chain.calls),
                "puts": contracts(&chain.puts),
            })
        }
        _ => return Ok("Unknown type".to_string()),
    };

    Ok(serde_json::to_string(&payload)?)
}

/// `get_earnings`: next earnings window and historical earnings charts.
pub async fn get_earnings(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let args: TickerArgs = parse_args(args)?;
    let summary = ctx
        .provider
        .get_quote_summary(&args.symbol(), &["calendarEvents", "earnings"])
        .await?;

    let payload = json!({
        "earnings_date": summary.value("calendarEvents", &["earnings", "earningsDate"]),
        "earnings_avg": fmt(summary.number("calendarEvents", &["earnings", "earningsAverage"])),
        "earnings_low": fmt(summary.number("calendarEvents", &["earnings", "earningsLow"])),
        "earnings_high": fmt(summary.number("calendarEvents", &["earnings", "earningsHigh"])),
        "revenue_avg": summary.number("calendarEvents", &["earnings", "revenueAverage"]),
        "financials_chart": summary.value("earnings", &["financialsChart"]),
        "earnings_chart": summary.value("earnings", &["earningsChart"]),
    });

    Ok(serde_json::to_string(&payload)?)
}

/// One row of `batch_company_info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySnapshot {
    pub ticker: String,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub price: Option<f64>,
    pub pe: Option<f64>,
    pub mc: Option<f64>,
    pub change: Option<f64>,
}

async fn company_snapshot(
    provider: SharedProvider,
    ticker: String,
) -> Result<CompanySnapshot, ToolError> {
    let summary = provider
        .get_quote_summary(&normalize_ticker(&ticker), &PROFILE_MODULES)
        .await?;

    Ok(CompanySnapshot {
        name: summary.text("price", &["shortName"]),
        sector: summary.text("summaryProfile", &["sector"]),
        price: fmt(market_price(&summary)),
        pe: fmt(summary.number("summaryDetail", &["trailingPE"])),
        mc: summary.number("summaryDetail", &["marketCap"]),
        change: fmt(summary.number("summaryDetail", &["regularMarketChangePercent"])),
        ticker,
    })
}

// summaryDetail first, price module as fallback (a zero counts as missing).
fn market_price(summary: &QuoteSummary) -> Option<f64> {
    summary
        .number("summaryDetail", &["regularMarketPrice"])
        .filter(|price| *price != 0.0)
        .or_else(|| summary.number("price", &["regularMarketPrice"]))
}

/// `batch_company_info`: snapshots for many tickers in parallel.
pub async fn batch_company_info(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let tickers = match batch_tickers(args, ctx.batch_max_tickers) {
        Ok(tickers) => tickers,
        Err(message) => return Ok(message),
    };

    let provider = ctx.provider.clone();
    let outcome = fan_out(tickers, move |ticker| {
        company_snapshot(provider.clone(), ticker)
    })
    .await;

    Ok(serde_json::to_string(&outcome.to_payload())?)
}

/// Bounds for `filter_stocks`; market caps are in billions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterCriteria {
    pub min_pe: Option<f64>,
    pub max_pe: Option<f64>,
    pub min_mc: Option<f64>,
    pub max_mc: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Quote fields compared by [`FilterCriteria`].
#[derive(Debug, Clone, PartialEq)]
pub struct StockQuote {
    pub symbol: String,
    pub price: Option<f64>,
    pub pe: Option<f64>,
    pub mc: Option<f64>,
}

impl FilterCriteria {
    /// A present bound rejects stocks that lack the compared value.
    pub fn matches(&self, stock: &StockQuote) -> bool {
        const BILLION: f64 = 1e9;

        within(stock.pe, self.min_pe, self.max_pe)
            && within(
                stock.mc,
                self.min_mc.map(|v| v * BILLION),
                self.max_mc.map(|v| v * BILLION),
            )
            && within(stock.price, self.min_price, self.max_price)
    }
}

fn within(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(value) = value else {
        return false;
    };
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

#[derive(Debug, Deserialize)]
struct FilterArgs {
    #[serde(default)]
    criteria: FilterCriteria,
}

async fn stock_quote(provider: SharedProvider, ticker: String) -> Result<StockQuote, ToolError> {
    let summary = provider
        .get_quote_summary(
            &normalize_ticker(&ticker),
            &["summaryDetail", "defaultKeyStatistics", "price"],
        )
        .await?;

    Ok(StockQuote {
        price: market_price(&summary),
        pe: summary.number("summaryDetail", &["trailingPE"]),
        mc: summary.number("summaryDetail", &["marketCap"]),
        symbol: ticker,
    })
}

/// `filter_stocks`: screen a ticker list by P/E, market cap and price.
pub async fn filter_stocks(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let tickers = match batch_tickers(args, ctx.batch_max_tickers) {
        Ok(tickers) => tickers,
        Err(message) => return Ok(message),
    };
    let FilterArgs { criteria }: FilterArgs = parse_args(args)?;

    let provider = ctx.provider.clone();
    let outcome = fan_out(tickers, move |ticker| stock_quote(provider.clone(), ticker)).await;

    let results: Vec<Value> = outcome
        .successes
        .iter()
        .filter(|stock| criteria.matches(stock))
        .map(|stock| {
            json!({
                "symbol": stock.symbol,
                "price": fmt(stock.price),
                "pe": fmt(stock.pe),
                "mc": stock.mc,
            })
        })
        .collect();

    let payload = json!({
        "total_checked": outcome.successes.len(),
        "matches": results.len(),
        "results": results,
    });

    Ok(serde_json::to_string(&payload)?)
}
