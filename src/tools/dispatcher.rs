//! Routes tool calls by name and converts failures into error outputs

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::definitions::{list_tools, ToolDefinition, ToolName};
use super::error::ToolError;
use super::{analysis, company, discovery, market, SharedProvider, ToolContext, ToolOutput};
use crate::metrics::Metrics;

#[derive(Clone)]
pub struct ToolDispatcher {
    context: ToolContext,
    metrics: Option<Arc<Metrics>>,
}

impl ToolDispatcher {
    pub fn new(provider: SharedProvider, batch_max_tickers: usize) -> Self {
        Self {
            context: ToolContext {
                provider,
                batch_max_tickers,
            },
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn context(&self) -> &ToolContext {
        &self.context
    }

    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        list_tools()
    }

    /// Run a tool. Never fails: errors come back as `isError` outputs.
    pub async fn call(&self, name: &str, args: Value) -> ToolOutput {
        let start = Instant::now();
        let result = self.try_call(name, &args).await;
        let elapsed = start.elapsed();

        if let Some(metrics) = &self.metrics {
            // Unknown names share one label to keep cardinality bounded.
            let label = name
                .parse::<ToolName>()
                .map(|tool| tool.as_str())
                .unwrap_or("unknown");
            metrics.record_tool_call(label, result.is_ok(), elapsed.as_secs_f64());
        }

        match result {
            Ok(text) => {
                debug!(
                    tool = %name,
                    bytes = text.len(),
                    duration_ms = elapsed.as_millis(),
                    "Tool call completed"
                );
                ToolOutput::text(text)
            }
            Err(e) => {
                warn!(tool = %name, error = %e, "Tool call failed");
                ToolOutput::error(e)
            }
        }
    }

    /// Run a tool and return its text or the error that ended it.
    pub async fn try_call(&self, name: &str, args: &Value) -> Result<String, ToolError> {
        let tool: ToolName = name.parse()?;
        info!(tool = %tool, "Calling tool");

        let ctx = &self.context;
        match tool {
            ToolName::GetMarketData => market::get_market_data(ctx, args).await,
            ToolName::GetFinancials => market::get_financials(ctx, args).await,
            ToolName::GetCompanyInfo => company::get_company_info(ctx, args).await,
            ToolName::GetHolders => company::get_holders(ctx, args).await,
            ToolName::GetExtraData => company::get_extra_data(ctx, args).await,
            ToolName::GetTechnicalAnalysis => analysis::get_technical_analysis(ctx, args).await,
            ToolName::GetPivotPoints => analysis::get_pivot_points(ctx, args).await,
            ToolName::BatchCompanyInfo => company::batch_company_info(ctx, args).await,
            ToolName::BatchTechnicalAnalysis => {
                analysis::batch_technical_analysis(ctx, args).await
            }
            ToolName::GetScreener => discovery::get_screener(ctx, args).await,
            ToolName::GetPeers => discovery::get_peers(ctx, args).await,
            ToolName::FilterStocks => company::filter_stocks(ctx, args).await,
            ToolName::GetEarnings => company::get_earnings(ctx, args).await,
        }
    }
}
