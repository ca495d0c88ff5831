//! Compact payload helpers

use chrono::{DateTime, SecondsFormat, Utc};

use crate::common::math::round2_opt;

/// Two-decimal rounding for optional payload numbers.
pub fn fmt(value: Option<f64>) -> Option<f64> {
    round2_opt(value)
}

/// `2024-01-02T14:30:00.000Z`
pub fn iso_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `2024-01-02`
pub fn iso_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Unix seconds as an ISO timestamp; out-of-range values become `None`.
pub fn iso_from_unix(seconds: i64) -> Option<String> {
    DateTime::from_timestamp(seconds, 0).map(|ts| iso_timestamp(&ts))
}

/// First `max_chars` characters followed by an ellipsis.
pub fn truncate_summary(text: &str, max_chars: usize) -> String {
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
