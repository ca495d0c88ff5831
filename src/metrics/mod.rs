//! Prometheus metrics for the HTTP transport and tool calls

use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    /// Labelled by `tool` and `outcome` (`ok` | `error`).
    pub tool_calls_total: IntCounterVec,
    pub tool_call_duration_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight = IntGauge::new(
            "http_requests_in_flight",
            "Number of HTTP requests currently being served",
        )?;
        let tool_calls_total = IntCounterVec::new(
            Opts::new("tool_calls_total", "Total number of tool calls"),
            &["tool", "outcome"],
        )?;
        let tool_call_duration_seconds = HistogramVec::new(
            HistogramOpts::new("tool_call_duration_seconds", "Tool call latency in seconds")
                .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
            &["tool"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(tool_calls_total.clone()))?;
        registry.register(Box::new(tool_call_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            tool_calls_total,
            tool_call_duration_seconds,
        })
    }

    pub fn record_tool_call(&self, tool: &str, success: bool, seconds: f64) {
        let outcome = if success { "ok" } else { "error" };
        self.tool_calls_total
            .with_label_values(&[tool, outcome])
            .inc();
        self.tool_call_duration_seconds
            .with_label_values(&[tool])
            .observe(seconds);
    }

    /// Text exposition format.
    pub fn export(&self) -> Result<String, Box<dyn std::error::Error>> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
