//! Technical analysis and pivot point tools

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::args::{analysis_lookback_days, batch_tickers, parse_args, TickerArgs};
use super::batch::fan_out;
use super::error::ToolError;
use super::format::iso_date;
use super::{SharedProvider, ToolContext};
use crate::common::math::round2;
use crate::indicators::analysis::{perform_technical_analysis, MIN_ANALYSIS_PRICES};
use crate::indicators::structure::{calculate_pivot_points, classify_position};
use crate::models::indicators::{IndicatorReport, TickerReport};
use crate::models::market::{closing_prices, Bar, BarsRequest};
use crate::models::pivots::PivotReport;
use crate::services::ticker::normalize_ticker;

pub const INSUFFICIENT_ANALYSIS_DATA: &str = "Insufficient data for technical analysis";
pub const INSUFFICIENT_PIVOT_DATA: &str = "Insufficient data for pivot points";

const PIVOT_LOOKBACK_DAYS: i64 = 5;

#[derive(Debug, Deserialize)]
struct AnalysisArgs {
    ticker: String,
    #[serde(default = "default_analysis_period")]
    period: String,
}

#[derive(Debug, Deserialize)]
struct BatchAnalysisArgs {
    #[serde(default = "default_analysis_period")]
    period: String,
}

fn default_analysis_period() -> String {
    "6mo".to_string()
}

/// Fetch daily closes for `ticker` and run the indicator engine.
///
/// Fewer than [`MIN_ANALYSIS_PRICES`] usable closes is an
/// [`ToolError::InsufficientData`].
pub async fn analyze_ticker(
    provider: SharedProvider,
    ticker: &str,
    period: &str,
) -> Result<IndicatorReport, ToolError> {
    let symbol = normalize_ticker(ticker);
    let request = BarsRequest::daily_lookback(analysis_lookback_days(period));
    let bars = provider.get_bars(&symbol, &request).await?;

    let prices = closing_prices(&bars);
    if prices.len() < MIN_ANALYSIS_PRICES {
        debug!(symbol = %symbol, closes = prices.len(), "Not enough closes for analysis");
        return Err(ToolError::insufficient_data(INSUFFICIENT_ANALYSIS_DATA));
    }

    Ok(perform_technical_analysis(&prices))
}

/// `get_technical_analysis`: serialized [`IndicatorReport`].
pub async fn get_technical_analysis(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let args: AnalysisArgs = parse_args(args)?;

    match analyze_ticker(ctx.provider.clone(), &args.ticker, &args.period).await {
        Ok(report) => Ok(serde_json::to_string(&report)?),
        Err(ToolError::InsufficientData(message)) => Ok(message),
        Err(e) => Err(e),
    }
}

/// Pivot report from the second-to-last complete bar, priced at the last close.
pub fn pivot_report(bars: &[Bar]) -> Option<PivotReport> {
    let complete: Vec<(&Bar, f64, f64, f64)> = bars
        .iter()
        .filter_map(|bar| Some((bar, bar.high?, bar.low?, bar.close?)))
        .collect();

    let [.., previous, current] = complete.as_slice() else {
        return None;
    };

    let (reference, high, low, close) = *previous;
    let current_price = round2(current.3);
    let pivots = calculate_pivot_points(high, low, close);

    Some(PivotReport {
        pivots,
        current_price,
        classification: classify_position(&pivots, current_price),
        reference_date: iso_date(&reference.timestamp),
    })
}

/// `get_pivot_points`: classic pivots over the last few daily sessions.
pub async fn get_pivot_points(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let args: TickerArgs = parse_args(args)?;
    let bars = ctx
        .provider
        .get_bars(&args.symbol(), &BarsRequest::daily_lookback(PIVOT_LOOKBACK_DAYS))
        .await?;

    match pivot_report(&bars) {
        Some(report) => Ok(serde_json::to_string(&report)?),
        None => Ok(INSUFFICIENT_PIVOT_DATA.to_string()),
    }
}

/// `batch_technical_analysis`: one [`TickerReport`] per ticker with enough history.
pub async fn batch_technical_analysis(
    ctx: &ToolContext,
    args: &Value,
) -> Result<String, ToolError> {
    let tickers = match batch_tickers(args, ctx.batch_max_tickers) {
        Ok(tickers) => tickers,
        Err(message) => return Ok(message),
    };
    let BatchAnalysisArgs { period }: BatchAnalysisArgs = parse_args(args)?;

    let provider = ctx.provider.clone();
    let outcome = fan_out(tickers, move |ticker| {
        let provider = provider.clone();
        let period = period.clone();
        async move {
            let report = analyze_ticker(provider, &ticker, &period).await?;
            Ok::<_, ToolError>(TickerReport { ticker, report })
        }
    })
    .await;

    Ok(serde_json::to_string(&outcome.to_payload())?)
}
