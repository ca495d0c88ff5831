//! Yahoo Finance market data provider implementation

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use tracing::debug;

use super::client::YahooClient;
use super::response::{
    ChartResponse, FinanceResponse, OptionsContract, OptionsResponse, QuoteSummaryResponse,
    RecommendationsPayload, ResultEnvelope, ScreenerPayload, SearchResponse, TimeseriesPoint,
    TimeseriesResponse,
};
use crate::config::ProviderConfig;
use crate::models::market::{
    raw_number, Bar, BarsRequest, Frequency, NewsItem, OptionChain, OptionContract,
    PeerRecommendation, QuoteSummary, ScreenerQuote, ScreenerResult, StatementKind,
    StatementPeriod,
};
use crate::services::market_data::{MarketDataProvider, ProviderError};

/// Earliest period requested from the fundamentals timeseries (1985-08-23).
///
/// The endpoint holds no statements older than this, so an earlier `period1`
/// returns the same rows.
const FUNDAMENTALS_PERIOD_START: i64 = 493_590_046;

pub struct YahooMarketDataProvider {
    client: YahooClient,
}

impl YahooMarketDataProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Ok(Self::with_client(YahooClient::new(config)?))
    }

    pub fn with_client(client: YahooClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &YahooClient {
        &self.client
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_bars(
        &self,
        symbol: &str,
        request: &BarsRequest,
    ) -> Result<Vec<Bar>, ProviderError> {
        let url = self.client.endpoint(&["v8", "finance", "chart", symbol])?;
        let end = request.end.unwrap_or_else(Utc::now);
        let query = [
            ("period1", request.start.timestamp().to_string()),
            ("period2", end.timestamp().to_string()),
            ("interval", request.interval.to_string()),
            ("includeAdjustedClose", "true".to_string()),
        ];

        let response: ChartResponse = self.client.get_json(url, &query).await?;
        let chart = first_result(response.chart, symbol)?;

        let quote = chart.indicators.quote.into_iter().next().unwrap_or_default();
        let adjclose = chart
            .indicators
            .adjclose
            .into_iter()
            .next()
            .unwrap_or_default()
            .adjclose;

        let mut bars: Vec<Bar> = chart
            .timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let timestamp = DateTime::from_timestamp(ts, 0)?;
                Some(Bar {
                    timestamp,
                    open: at(&quote.open, i),
                    high: at(&quote.high, i),
                    low: at(&quote.low, i),
                    close: at(&quote.close, i),
                    volume: at(&quote.volume, i),
                    adj_close: at(&adjclose, i),
                })
            })
            .collect();
        bars.sort_by_key(|bar| bar.timestamp);

        debug!(symbol = %symbol, count = bars.len(), interval = %request.interval, "Fetched bars");
        Ok(bars)
    }

    async fn get_quote_summary(
        &self,
        symbol: &str,
        modules: &[&str],
    ) -> Result<QuoteSummary, ProviderError> {
        let url = self
            .client
            .endpoint(&["v10", "finance", "quoteSummary", symbol])?;
        let query = [("modules", modules.join(","))];

        let response: QuoteSummaryResponse = self.client.get_json(url, &query).await?;
        let modules = first_result(response.quote_summary, symbol)?;
        Ok(QuoteSummary::new(modules))
    }

    async fn get_financial_statements(
        &self,
        symbol: &str,
        kind: StatementKind,
        frequency: Frequency,
    ) -> Result<Vec<StatementPeriod>, ProviderError> {
        let url = self.client.endpoint(&[
            "ws",
            "fundamentals-timeseries",
            "v1",
            "finance",
            "timeseries",
            symbol,
        ])?;
        let types: Vec<String> = kind
            .fields()
            .iter()
            .map(|field| timeseries_type(frequency, field))
            .collect();
        let query = [
            ("type", types.join(",")),
            ("period1", FUNDAMENTALS_PERIOD_START.to_string()),
            ("period2", Utc::now().timestamp().to_string()),
        ];

        let response: TimeseriesResponse = self.client.get_json(url, &query).await?;
        if let Some(error) = response.timeseries.error {
            return Err(ProviderError::NotFound(error.message()));
        }

        let mut by_date: BTreeMap<NaiveDate, BTreeMap<String, f64>> = BTreeMap::new();
        for series in response.timeseries.result.unwrap_or_default() {
            let Some(type_name) = series
                .pointer("/meta/type/0")
                .and_then(Value::as_str)
                .map(str::to_string)
            else {
                continue;
            };
            let Some(field) = logical_field(frequency, &type_name) else {
                continue;
            };
            let points = series
                .get(&type_name)
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();

            for point in points.into_iter().filter(|p| !p.is_null()) {
                let point: TimeseriesPoint = serde_json::from_value(point)
                    .map_err(|e| ProviderError::Decode(format!("{}: {}", type_name, e)))?;
                let Ok(date) = NaiveDate::parse_from_str(&point.as_of_date, "%Y-%m-%d") else {
                    continue;
                };
                if let Some(value) = point.reported_value.as_ref().and_then(raw_number) {
                    by_date.entry(date).or_default().insert(field.clone(), value);
                }
            }
        }

        Ok(by_date
            .into_iter()
            .filter_map(|(date, values)| {
                let date = date.and_hms_opt(0, 0, 0)?.and_utc();
                Some(StatementPeriod { date, values })
            })
            .collect())
    }

    async fn get_news(&self, symbol: &str, count: usize) -> Result<Vec<NewsItem>, ProviderError> {
        let url = self.client.endpoint(&["v1", "finance", "search"])?;
        let query = [
            ("q", symbol.to_string()),
            ("newsCount", count.to_string()),
            ("quotesCount", "0".to_string()),
        ];

        let response: SearchResponse = self.client.get_json(url, &query).await?;
        Ok(response
            .news
            .into_iter()
            .take(count)
            .map(|news| NewsItem {
                title: news.title,
                link: news.link,
                provider_publish_time: news.provider_publish_time,
            })
            .collect())
    }

    async fn get_option_chain(&self, symbol: &str) -> Result<OptionChain, ProviderError> {
        let url = self.client.endpoint(&["v7", "finance", "options", symbol])?;

        let response: OptionsResponse = self.client.get_json(url, &[]).await?;
        let result = first_result(response.option_chain, symbol)?;
        let expiry = result
            .options
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NotFound(format!("no option expirations for {}", symbol)))?;

        Ok(OptionChain {
            expiration_date: expiry
                .expiration_date
                .and_then(|ts| DateTime::from_timestamp(ts, 0)),
            calls: expiry.calls.into_iter().map(to_contract).collect(),
            puts: expiry.puts.into_iter().map(to_contract).collect(),
        })
    }

    async fn get_screener(
        &self,
        screener_id: &str,
        count: usize,
    ) -> Result<ScreenerResult, ProviderError> {
        let url = self
            .client
            .endpoint(&["v1", "finance", "screener", "predefined", "saved"])?;
        let query = [
            ("scrIds", screener_id.to_string()),
            ("count", count.to_string()),
        ];

        let response: FinanceResponse<ScreenerPayload> = self.client.get_json(url, &query).await?;
        let payload = first_result(response.finance, screener_id)?;

        Ok(ScreenerResult {
            id: payload.id.unwrap_or_else(|| screener_id.to_string()),
            title: payload.title,
            quotes: payload
                .quotes
                .into_iter()
                .map(|q| ScreenerQuote {
                    symbol: q.symbol,
                    short_name: q.short_name,
                    regular_market_price: q.regular_market_price.as_ref().and_then(raw_number),
                    regular_market_change_percent: q
                        .regular_market_change_percent
                        .as_ref()
                        .and_then(raw_number),
                    regular_market_volume: q
                        .regular_market_volume
                        .as_ref()
                        .and_then(raw_number)
                        .map(|v| v as u64),
                    trailing_pe: q.trailing_pe.as_ref().and_then(raw_number),
                    market_cap: q.market_cap.as_ref().and_then(raw_number),
                })
                .collect(),
        })
    }

    async fn get_peers(&self, symbol: &str) -> Result<Vec<PeerRecommendation>, ProviderError> {
        let url = self
            .client
            .endpoint(&["v6", "finance", "recommendationsbysymbol", symbol])?;

        let response: FinanceResponse<RecommendationsPayload> =
            self.client.get_json(url, &[]).await?;
        let payload = first_result(response.finance, symbol)?;

        Ok(payload
            .recommended_symbols
            .into_iter()
            .map(|r| PeerRecommendation {
                symbol: r.symbol,
                score: r.score,
            })
            .collect())
    }
}

fn first_result<T>(envelope: ResultEnvelope<T>, symbol: &str) -> Result<T, ProviderError> {
    if let Some(error) = envelope.error {
        return Err(ProviderError::NotFound(error.message()));
    }
    envelope
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| ProviderError::NotFound(format!("no data for {}", symbol)))
}

fn at<T: Copy>(values: &[Option<T>], index: usize) -> Option<T> {
    values.get(index).copied().flatten()
}

fn to_contract(contract: OptionsContract) -> OptionContract {
    OptionContract {
        strike: contract.strike,
        last_price: contract.last_price,
        volume: contract.volume,
    }
}

/// `annual` + `totalRevenue` -> `annualTotalRevenue`
fn timeseries_type(frequency: Frequency, field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => format!(
            "{}{}{}",
            frequency.as_str(),
            first.to_ascii_uppercase(),
            chars.as_str()
        ),
        None => frequency.as_str().to_string(),
    }
}

/// `annualTotalRevenue` -> `totalRevenue`
fn logical_field(frequency: Frequency, type_name: &str) -> Option<String> {
    let rest = type_name.strip_prefix(frequency.as_str())?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    Some(format!("{}{}", first.to_ascii_lowercase(), chars.as_str()))
}
