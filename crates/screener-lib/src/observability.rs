//! Observability infrastructure for the screening service
//!
//! Provides:
//! - Prometheus metrics (inference latency, per-screen prediction counts)
//! - Structured JSON logging with tracing

use prometheus::{
    register_gauge_vec, register_histogram, register_int_gauge, register_int_gauge_vec, GaugeVec,
    Histogram, IntGauge, IntGaugeVec,
};
use std::sync::OnceLock;
use tracing::{info, warn};

/// Default histogram buckets for latency measurements (in seconds)
const LATENCY_BUCKETS: &[f64] = &[
    0.0001, 0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<ScreenerMetricsInner> = OnceLock::new();

/// Inner metrics structure that holds the actual Prometheus metrics
struct ScreenerMetricsInner {
    inference_latency_seconds: Histogram,
    predictions_total: IntGaugeVec,
    prediction_errors_total: IntGaugeVec,
    screens_registered: IntGauge,
    schema_version_info: GaugeVec,
}

impl ScreenerMetricsInner {
    fn new() -> Self {
        Self {
            inference_latency_seconds: register_histogram!(
                "screener_inference_latency_seconds",
                "Time spent running one classifier inference",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register inference_latency_seconds"),

            predictions_total: register_int_gauge_vec!(
                "screener_predictions_total",
                "Total number of diagnoses generated, per screen",
                &["screen"]
            )
            .expect("Failed to register predictions_total"),

            prediction_errors_total: register_int_gauge_vec!(
                "screener_prediction_errors_total",
                "Total number of failed screening cycles, per screen",
                &["screen"]
            )
            .expect("Failed to register prediction_errors_total"),

            screens_registered: register_int_gauge!(
                "screener_screens_registered",
                "Number of screens with a loaded classifier"
            )
            .expect("Failed to register screens_registered"),

            schema_version_info: register_gauge_vec!(
                "screener_schema_version_info",
                "Schema version bound to each screen's classifier",
                &["screen", "schema_version"]
            )
            .expect("Failed to register schema_version_info"),
        }
    }
}

/// Screener metrics for Prometheus exposition
///
/// This is a lightweight handle to the global metrics instance.
/// Multiple clones share the same underlying metrics.
#[derive(Clone)]
pub struct ScreenerMetrics {
    _private: (),
}

impl Default for ScreenerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenerMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(ScreenerMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &ScreenerMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    /// Record an inference latency observation
    pub fn observe_inference_latency(&self, duration_secs: f64) {
        self.inner().inference_latency_seconds.observe(duration_secs);
    }

    /// Increment the diagnosis counter for a screen
    pub fn inc_predictions(&self, screen: &str) {
        self.inner().predictions_total.with_label_values(&[screen]).inc();
    }

    /// Increment the error counter for a screen
    pub fn inc_prediction_errors(&self, screen: &str) {
        self.inner()
            .prediction_errors_total
            .with_label_values(&[screen])
            .inc();
    }

    /// Update the number of screens with a loaded classifier
    pub fn set_screens_registered(&self, count: i64) {
        self.inner().screens_registered.set(count);
    }

    /// Record the schema version bound to a screen
    pub fn set_schema_version(&self, screen: &str, schema_version: &str) {
        self.inner()
            .schema_version_info
            .with_label_values(&[screen, schema_version])
            .set(1.0);
    }
}

/// Structured logger for service events
///
/// Provides consistent JSON-formatted logging for startup, shutdown,
/// diagnoses and prediction failures.
#[derive(Clone)]
pub struct StructuredLogger {
    instance: String,
}

impl StructuredLogger {
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
        }
    }

    /// Log service startup
    pub fn log_startup(&self, version: &str, screens: usize) {
        info!(
            event = "service_started",
            instance = %self.instance,
            service_version = %version,
            screens = screens,
            "Screening service started"
        );
    }

    /// Log service shutdown
    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "service_shutdown",
            instance = %self.instance,
            reason = %reason,
            "Screening service shutting down"
        );
    }

    /// Log a generated diagnosis
    pub fn log_diagnosis(&self, screen: &str, class_label: i64, outcome: &str) {
        info!(
            event = "diagnosis_generated",
            instance = %self.instance,
            screen = %screen,
            class_label = class_label,
            outcome = %outcome,
            "Diagnosis generated"
        );
    }

    /// Log a failed screening cycle
    pub fn log_prediction_failure(&self, screen: &str, error: &str) {
        warn!(
            event = "prediction_failed",
            instance = %self.instance,
            screen = %screen,
            error = %error,
            "Screening cycle failed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screener_metrics_creation() {
        // Metrics register against the process-wide Prometheus registry, so
        // this only exercises the handle paths.
        let metrics = ScreenerMetrics::new();

        metrics.observe_inference_latency(0.001);
        metrics.inc_predictions("diabetes");
        metrics.inc_prediction_errors("diabetes");
        metrics.set_screens_registered(4);
        metrics.set_schema_version("diabetes", "diabetes/v1");
    }

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new("test-instance");
        assert_eq!(logger.instance, "test-instance");
    }
}
