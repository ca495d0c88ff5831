//! Tool layer: catalogue, argument handling and per-tool handlers
//!
//! Every tool takes a JSON argument object and answers with a single text
//! block. Handlers return `Result<String, ToolError>`; the dispatcher turns
//! errors into `isError` outputs so transports never see a Rust error.

pub mod analysis;
pub mod args;
pub mod batch;
pub mod company;
pub mod definitions;
pub mod discovery;
pub mod dispatcher;
pub mod error;
pub mod format;
pub mod market;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::services::market_data::MarketDataProvider;

pub use batch::{fan_out, BatchFailure, BatchOutcome};
pub use definitions::{list_tools, ToolDefinition, ToolName};
pub use dispatcher::ToolDispatcher;
pub use error::ToolError;

pub type SharedProvider = Arc<dyn MarketDataProvider>;

/// What a handler needs to serve a call.
#[derive(Clone)]
pub struct ToolContext {
    pub provider: SharedProvider,
    pub batch_max_tickers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Result of a tool call as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    pub content: Vec<TextContent>,
    #[serde(rename = "isError", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent::new(text)],
            is_error: false,
        }
    }

    /// `Error: <message>` with `isError` set.
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            content: vec![TextContent::new(format!("Error: {}", message))],
            is_error: true,
        }
    }

    /// Text of the first content block.
    pub fn first_text(&self) -> &str {
        self.content
            .first()
            .map(|content| content.text.as_str())
            .unwrap_or_default()
    }
}
