//! Tool error types.

use thiserror::Error;

use crate::services::market_data::ProviderError;

/// Errors that end a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Not enough history for the requested computation.
    #[error("{0}")]
    InsufficientData(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// A batch unit panicked or was cancelled.
    #[error("task failed: {0}")]
    Task(String),

    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ToolError {
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        ToolError::InvalidArguments(msg.into())
    }

    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        ToolError::InsufficientData(msg.into())
    }
}
