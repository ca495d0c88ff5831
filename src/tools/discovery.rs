//! Screeners and similar-symbol discovery

use serde::Deserialize;
use serde_json::{json, Value};

use super::args::{parse_args, TickerArgs};
use super::error::ToolError;
use super::format::fmt;
use super::ToolContext;

const DEFAULT_SCREENER: &str = "day_gainers";
const DEFAULT_SCREENER_COUNT: usize = 10;
const MAX_SCREENER_COUNT: usize = 50;

#[derive(Debug, Deserialize)]
struct ScreenerArgs {
    #[serde(rename = "scrId", default = "default_screener")]
    scr_id: String,
    #[serde(default)]
    count: Option<usize>,
}

fn default_screener() -> String {
    DEFAULT_SCREENER.to_string()
}

/// `get_screener`: quotes from a predefined screener, at most 50.
pub async fn get_screener(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let args: ScreenerArgs = parse_args(args)?;
    let count = args
        .count
        .unwrap_or(DEFAULT_SCREENER_COUNT)
        .min(MAX_SCREENER_COUNT);

    let screener = ctx.provider.get_screener(&args.scr_id, count).await?;

    let quotes: Vec<Value> = screener
        .quotes
        .iter()
        .take(count)
        .map(|quote| {
            json!({
                "symbol": quote.symbol,
                "name": quote.short_name,
                "price": fmt(quote.regular_market_price),
                "change": fmt(quote.regular_market_change_percent),
                "volume": quote.regular_market_volume,
                "pe": fmt(quote.trailing_pe),
                "mc": quote.market_cap,
            })
        })
        .collect();

    let payload = json!({
        "id": screener.id,
        "title": screener.title,
        "count": quotes.len(),
        "quotes": quotes,
    });

    Ok(serde_json::to_string(&payload)?)
}

/// `get_peers`: vendor-recommended similar symbols with their scores.
pub async fn get_peers(ctx: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let args: TickerArgs = parse_args(args)?;
    let symbol = args.symbol();
    let peers = ctx.provider.get_peers(&symbol).await?;

    let payload = json!({
        "ticker": symbol,
        "peers": peers
            .iter()
            .map(|peer| json!({ "symbol": peer.symbol, "score": fmt(Some(peer.score)) }))
            .collect::<Vec<_>>(),
    });

    Ok(serde_json::to_string(&payload)?)
}
