//! HTTP client for the Yahoo Finance JSON endpoints

use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ProviderConfig;
use crate::services::market_data::ProviderError;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// GETs JSON documents relative to a base URL, retrying transient failures
/// with exponential backoff.
#[derive(Clone)]
pub struct YahooClient {
    http: Client,
    base_url: Url,
    backoff: ExponentialBuilder,
}

impl YahooClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self::with_client(config.base_url.clone(), http, config.max_retries))
    }

    /// Use a pre-built reqwest client (tests point this at a mock server).
    pub fn with_client(base_url: Url, http: Client, max_retries: usize) -> Self {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(200))
            .with_max_delay(Duration::from_secs(2))
            .with_max_times(max_retries);

        Self {
            http,
            base_url,
            backoff,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL extended with percent-encoded path segments.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::InvalidRequest(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get_json<T>(&self, url: Url, query: &[(&str, String)]) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        let fetch = || self.get_once::<T>(&url, query);

        fetch
            .retry(self.backoff.clone())
            .when(|e: &ProviderError| e.is_transient())
            .notify(|e: &ProviderError, delay: Duration| {
                warn!(
                    url = %url.path(),
                    error = %e,
                    delay_ms = delay.as_millis() as u64,
                    "Market data request failed, retrying"
                );
            })
            .await
    }

    async fn get_once<T>(&self, url: &Url, query: &[(&str, String)]) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url.path(), "Market data request");

        let response = self.http.get(url.clone()).query(query).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound(url.path().to_string()));
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}
