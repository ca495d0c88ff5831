//! Market data provider interface.
//!
//! The engine never talks to a vendor directly. Callers build a provider and
//! hand it to the tool dispatcher, which keeps the vendor swappable and lets
//! tests substitute a double.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::market::{
    Bar, BarsRequest, Frequency, NewsItem, OptionChain, PeerRecommendation, QuoteSummary,
    ScreenerResult, StatementKind, StatementPeriod,
};

/// Errors that can occur within a [`MarketDataProvider`] implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network failure, timeout or an undecodable body.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The vendor answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The vendor answered but had nothing for the symbol.
    #[error("not found: {0}")]
    NotFound(String),

    /// The response parsed as JSON but not in the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The request could not be built (bad base URL, bad symbol).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ProviderError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Request(e) => e.is_timeout() || e.is_connect(),
            ProviderError::Api { status, .. } => *status == 429 || *status >= 500,
            ProviderError::NotFound(_)
            | ProviderError::Decode(_)
            | ProviderError::InvalidRequest(_) => false,
        }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Chronological bars for a symbol
    async fn get_bars(&self, symbol: &str, request: &BarsRequest)
        -> Result<Vec<Bar>, ProviderError>;

    /// Quote-summary modules (`summaryDetail`, `price`, ...) for a symbol
    async fn get_quote_summary(
        &self,
        symbol: &str,
        modules: &[&str],
    ) -> Result<QuoteSummary, ProviderError>;

    /// Statement periods keyed by logical field name, in any order
    async fn get_financial_statements(
        &self,
        symbol: &str,
        kind: StatementKind,
        frequency: Frequency,
    ) -> Result<Vec<StatementPeriod>, ProviderError>;

    async fn get_news(&self, symbol: &str, count: usize) -> Result<Vec<NewsItem>, ProviderError>;

    /// Option chain for the nearest expiration
    async fn get_option_chain(&self, symbol: &str) -> Result<OptionChain, ProviderError>;

    /// Predefined screener such as `day_gainers`
    async fn get_screener(
        &self,
        screener_id: &str,
        count: usize,
    ) -> Result<ScreenerResult, ProviderError>;

    /// Symbols the vendor considers similar
    async fn get_peers(&self, symbol: &str) -> Result<Vec<PeerRecommendation>, ProviderError>;
}
