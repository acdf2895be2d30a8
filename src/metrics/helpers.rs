//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{
    HOST_METRIC_FAILURES_TOTAL, MISSING_REPLACER_TOTAL, PLACEHOLDERS_COMPUTED_TOTAL,
    PLACEHOLDERS_COMPUTE_SECONDS,
};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording placeholder metrics
pub struct PlaceholderMetrics;

impl PlaceholderMetrics {
    /// Record one computed placeholder set
    pub fn record_computed(elapsed: Duration) {
        PLACEHOLDERS_COMPUTED_TOTAL.inc();
        PLACEHOLDERS_COMPUTE_SECONDS.observe(elapsed.as_secs_f64());
    }

    /// Record a request without a replacer
    pub fn record_missing_replacer() {
        MISSING_REPLACER_TOTAL.inc();
    }
}

/// Helper struct for recording host metric lookup failures
pub struct HostMetricFailures;

impl HostMetricFailures {
    pub fn record(metric: &str) {
        HOST_METRIC_FAILURES_TOTAL.with_label_values(&[metric]).inc();
    }
}
