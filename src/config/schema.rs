//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the flight mock service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request hardening.
    pub security: SecurityConfig,

    /// Outbound airport name lookup.
    pub airport_lookup: AirportLookupConfig,

    /// Background feed poller.
    pub poller: PollerConfig,

    /// Synthetic data generation knobs.
    pub generation: GenerationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024,
        }
    }
}

/// Airport name lookup service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AirportLookupConfig {
    /// Search endpoint; the airport code is sent as the `name` query parameter.
    pub base_url: String,

    /// Per-lookup timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AirportLookupConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.sharetrip.net/api/v1/flight/search/airport".to_string(),
            timeout_secs: 5,
        }
    }
}

/// Background poller configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Enable the poller.
    pub enabled: bool,

    /// URL fetched on every tick.
    pub url: String,

    /// Poll interval in seconds.
    pub interval_secs: u64,

    /// Per-fetch timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "https://flight-data-source.onrender.com/".to_string(),
            interval_secs: 10 * 60,
            timeout_secs: 30,
        }
    }
}

/// Inclusive integer range used for random draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RangeConfig {
    pub min: u32,
    pub max: u32,
}

impl RangeConfig {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Synthetic data generation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Results generated per airline code.
    pub results_per_airline: usize,

    /// Currency reported on every result.
    pub currency: String,

    /// Departure hour of day (UTC).
    pub departure_hours: RangeConfig,

    /// Whole hours of flight time, within 1..=24; minutes are drawn from 0..=59 on top.
    pub duration_hours: RangeConfig,

    pub base_fare: RangeConfig,
    pub tax: RangeConfig,
    pub discount: RangeConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            results_per_airline: 3,
            currency: "BDT".to_string(),
            departure_hours: RangeConfig::new(6, 22),
            duration_hours: RangeConfig::new(4, 7),
            base_fare: RangeConfig::new(600, 1000),
            tax: RangeConfig::new(100, 200),
            discount: RangeConfig::new(0, 100),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
