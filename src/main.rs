//! TickerLens stdio tool server
//!
//! Speaks line-delimited JSON-RPC on stdin/stdout. Logs go to stderr.

use std::sync::Arc;

use dotenvy::dotenv;
use tickerlens::config::AppConfig;
use tickerlens::core::StdioServer;
use tickerlens::logging::{self, LogTarget};
use tickerlens::services::yahoo::YahooMarketDataProvider;
use tickerlens::tools::ToolDispatcher;
use tokio::io::{self, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    logging::init_logging(LogTarget::Stderr);

    let config = AppConfig::from_env()?;
    info!(
        environment = %config.environment,
        base_url = %config.provider.base_url,
        "Starting TickerLens stdio server"
    );

    let provider = Arc::new(YahooMarketDataProvider::new(&config.provider)?);
    let dispatcher = ToolDispatcher::new(provider, config.batch_max_tickers);

    StdioServer::new(dispatcher)
        .serve(BufReader::new(io::stdin()), io::stdout())
        .await?;

    Ok(())
}
