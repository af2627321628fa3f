use prometheus::{Encoder, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

// Global registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

// Metrics
pub static HTTP_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static HTTP_REQUEST_DURATION_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static DOCUMENT_API_REQUESTS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Register the console's collectors. Until this runs, recording is a no-op.
/// Later calls keep the first registry.
pub fn init_metrics() -> Result<(), prometheus::Error> {
    if REGISTRY.get().is_some() {
        tracing::debug!("Metrics already initialized");
        return Ok(());
    }

    let registry = Registry::new();

    let requests_total = IntCounterVec::new(
        Opts::new("http_requests_total", "Total number of HTTP requests"),
        &["method", "path", "status"],
    )?;

    let request_duration = HistogramVec::new(
        prometheus::HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request duration in seconds",
        ),
        &["method", "path", "status"],
    )?;

    let api_requests = IntCounterVec::new(
        Opts::new(
            "document_api_requests_total",
            "Calls made to the document-storage API",
        ),
        &["operation", "outcome"],
    )?;

    registry.register(Box::new(requests_total.clone()))?;
    registry.register(Box::new(request_duration.clone()))?;
    registry.register(Box::new(api_requests.clone()))?;

    // Lost a race with a concurrent init; the winner's collectors stay.
    if REGISTRY.set(registry).is_err() {
        tracing::warn!("Metrics registry was initialized concurrently; keeping the first");
        return Ok(());
    }
    let _ = HTTP_REQUESTS_TOTAL.set(requests_total);
    let _ = HTTP_REQUEST_DURATION_SECONDS.set(request_duration);
    let _ = DOCUMENT_API_REQUESTS_TOTAL.set(api_requests);
    Ok(())
}

pub fn record_http_request(method: &str, path: &str, status: &str, seconds: f64) {
    let labels = [method, path, status];
    if let Some(counter) = HTTP_REQUESTS_TOTAL.get() {
        counter.with_label_values(&labels).inc();
    }
    if let Some(histogram) = HTTP_REQUEST_DURATION_SECONDS.get() {
        histogram.with_label_values(&labels).observe(seconds);
    }
}

pub fn record_api_call(operation: &str, success: bool) {
    if let Some(counter) = DOCUMENT_API_REQUESTS_TOTAL.get() {
        let outcome = if success { "success" } else { "failure" };
        counter.with_label_values(&[operation, outcome]).inc();
    }
}

/// Prometheus text exposition of everything registered so far.
pub fn get_metrics() -> String {
    let Some(registry) = REGISTRY.get() else {
        return String::new();
    };

    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&registry.gather(), &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
