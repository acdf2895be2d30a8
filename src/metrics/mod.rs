//! Prometheus metrics for the placeholder middleware.
//!
//! - Placeholder computations (count, duration)
//! - Host metric lookup failures by metric
//! - Requests rejected because no replacer was attached

mod helpers;

pub use helpers::{encode_metrics, HostMetricFailures, PlaceholderMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "extra";

lazy_static! {
    /// Total placeholder sets computed
    pub static ref PLACEHOLDERS_COMPUTED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_placeholders_computed_total", METRIC_PREFIX),
        "Total placeholder sets computed"
    ).unwrap();

    /// Time spent computing one placeholder set
    pub static ref PLACEHOLDERS_COMPUTE_SECONDS: Histogram = register_histogram!(
        format!("{}_placeholders_compute_seconds", METRIC_PREFIX),
        "Placeholder computation duration in seconds",
        vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01]
    ).unwrap();

    /// Host metric lookups that failed, by metric (loadavg, uptime)
    pub static ref HOST_METRIC_FAILURES_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_host_metric_failures_total", METRIC_PREFIX),
        "Total failed host metric lookups",
        &["metric"]
    ).unwrap();

    /// Requests that reached the middleware without a replacer
    pub static ref MISSING_REPLACER_TOTAL: IntCounter = register_int_counter!(
        format!("{}_missing_replacer_total", METRIC_PREFIX),
        "Total requests rejected because no replacer was attached"
    ).unwrap();
}
