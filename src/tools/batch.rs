//! Fan-out/fan-in for per-ticker work
//!
//! Each unit runs as its own tokio task. Units are joined together and
//! partitioned into successes and failures; an error or panic in one unit
//! never cancels or poisons its siblings.

use std::future::Future;

use futures_util::future::join_all;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::error::ToolError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchFailure {
    pub key: String,
    pub error: String,
}

/// Joined results of a fan-out; successes keep input order.
#[derive(Debug, Clone)]
pub struct BatchOutcome<T> {
    pub total: usize,
    pub successes: Vec<T>,
    pub failures: Vec<BatchFailure>,
}

impl<T: Serialize> BatchOutcome<T> {
    /// `{total, successful, failed, data}`
    pub fn to_payload(&self) -> Value {
        json!({
            "total": self.total,
            "successful": self.successes.len(),
            "failed": self.failures.len(),
            "data": self.successes,
        })
    }
}

/// Run `task` once per key concurrently and collect every outcome.
pub async fn fan_out<K, T, F, Fut>(keys: Vec<K>, task: F) -> BatchOutcome<T>
where
    K: ToString,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<T, ToolError>> + Send + 'static,
    T: Send + 'static,
{
    let total = keys.len();
    let (labels, handles): (Vec<String>, Vec<_>) = keys
        .into_iter()
        .map(|key| {
            let label = key.to_string();
            (label, tokio::spawn(task(key)))
        })
        .unzip();

    let results = join_all(handles).await;

    let mut successes = Vec::with_capacity(total);
    let mut failures = Vec::new();
    for (key, result) in labels.into_iter().zip(results) {
        let error = match result {
            Ok(Ok(value)) => {
                successes.push(value);
                continue;
            }
            Ok(Err(e)) => e,
            Err(join_error) => ToolError::Task(join_error.to_string()),
        };

        warn!(key = %key, error = %error, "Batch unit failed");
        failures.push(BatchFailure {
            key,
            error: error.to_string(),
        });
    }

    debug!(
        total = total,
        successful = successes.len(),
        failed = failures.len(),
        "Batch completed"
    );

    BatchOutcome {
        total,
        successes,
        failures,
    }
}
