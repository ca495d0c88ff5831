//! TickerLens API Server
//!
//! HTTP API exposing the tool catalogue plus health and metrics endpoints.
//! Stateless; can be horizontally scaled.

use std::sync::Arc;

use dotenvy::dotenv;
use tickerlens::config::AppConfig;
use tickerlens::core::http::{start_server, AppState};
use tickerlens::logging::{self, LogTarget};
use tickerlens::metrics::Metrics;
use tickerlens::services::yahoo::YahooMarketDataProvider;
use tickerlens::tools::ToolDispatcher;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging(LogTarget::Stdout);

    let config = AppConfig::from_env()?;
    let port = config.port;

    info!("Starting TickerLens API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);
    info!(base_url = %config.provider.base_url, "Market data provider");

    let metrics = Arc::new(Metrics::new()?);
    let provider = Arc::new(YahooMarketDataProvider::new(&config.provider)?);
    let dispatcher =
        ToolDispatcher::new(provider, config.batch_max_tickers).with_metrics(metrics.clone());
    let state = AppState::new(dispatcher, metrics);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
            info!("API server stopped");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
