//! Metrics collection and exposition.
//!
//! # Metrics
//! - `flight_mock_requests_total` (counter): requests by method, path, status
//! - `flight_mock_request_duration_seconds` (histogram): latency distribution
//! - `flight_mock_results_generated_total` (counter): search results produced
//! - `flight_mock_airport_lookups_total` (counter): external lookups by outcome
//! - `flight_mock_feed_polls_total` (counter): background polls by outcome
//!
//! Recording is a no-op until [`init_metrics`] installs the Prometheus recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    ::metrics::counter!("flight_mock_requests_total", &labels).increment(1);
    ::metrics::histogram!("flight_mock_request_duration_seconds", &labels)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_results_generated(count: usize) {
    ::metrics::counter!("flight_mock_results_generated_total").increment(count as u64);
}

/// `outcome` is one of `resolved`, `unnamed`, `failed`.
pub fn record_airport_lookup(outcome: &'static str) {
    ::metrics::counter!("flight_mock_airport_lookups_total", "outcome" => outcome).increment(1);
}

/// `outcome` is one of `ok`, `failed`.
pub fn record_feed_poll(outcome: &'static str) {
    ::metrics::counter!("flight_mock_feed_polls_total", "outcome" => outcome).increment(1);
}
