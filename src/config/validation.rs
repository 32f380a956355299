//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and URLs parse
//! - Validate value ranges (intervals > 0, hours within a day)
//! - Keep leg durations between one hour and a day so arrival follows departure
//! - Reject fare ranges that could produce a negative total
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::{RangeConfig, ServiceConfig};

const MIN_DURATION_HOURS: u32 = 1;
const MAX_DURATION_HOURS: u32 = 24;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid URL '{value}'")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{field}: invalid socket address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field}: min {min} exceeds max {max}")]
    EmptyRange { field: &'static str, min: u32, max: u32 },

    #[error("{field}: hour {hour} is outside 0..=23")]
    HourOutOfRange { field: &'static str, hour: u32 },

    #[error("{field}: {value} is outside {min}..={max}")]
    OutOfBounds { field: &'static str, value: u32, min: u32, max: u32 },

    #[error("generation.discount max {discount_max} exceeds the lowest base fare plus tax ({floor})")]
    NegativeFare { discount_max: u32, floor: u32 },
}

/// Validate a deserialized configuration, collecting every violation.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    check_url(&mut errors, "airport_lookup.base_url", &config.airport_lookup.base_url);
    check_nonzero(&mut errors, "airport_lookup.timeout_secs", config.airport_lookup.timeout_secs);
    check_nonzero(&mut errors, "timeouts.request_secs", config.timeouts.request_secs);
    check_nonzero(&mut errors, "security.max_body_size", config.security.max_body_size as u64);

    if config.poller.enabled {
        check_url(&mut errors, "poller.url", &config.poller.url);
        check_nonzero(&mut errors, "poller.interval_secs", config.poller.interval_secs);
        check_nonzero(&mut errors, "poller.timeout_secs", config.poller.timeout_secs);
    }

    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    let generation = &config.generation;
    check_nonzero(
        &mut errors,
        "generation.results_per_airline",
        generation.results_per_airline as u64,
    );
    if generation.currency.trim().is_empty() {
        errors.push(ValidationError::Empty { field: "generation.currency" });
    }

    check_range(&mut errors, "generation.departure_hours", generation.departure_hours);
    if generation.departure_hours.max > 23 {
        errors.push(ValidationError::HourOutOfRange {
            field: "generation.departure_hours",
            hour: generation.departure_hours.max,
        });
    }
    check_range(&mut errors, "generation.duration_hours", generation.duration_hours);
    for value in [generation.duration_hours.min, generation.duration_hours.max] {
        if !(MIN_DURATION_HOURS..=MAX_DURATION_HOURS).contains(&value) {
            errors.push(ValidationError::OutOfBounds {
                field: "generation.duration_hours",
                value,
                min: MIN_DURATION_HOURS,
                max: MAX_DURATION_HOURS,
            });
        }
    }
    check_range(&mut errors, "generation.base_fare", generation.base_fare);
    check_range(&mut errors, "generation.tax", generation.tax);
    check_range(&mut errors, "generation.discount", generation.discount);

    let floor = generation.base_fare.min.saturating_add(generation.tax.min);
    if generation.discount.max > floor {
        errors.push(ValidationError::NegativeFare {
            discount_max: generation.discount.max,
            floor,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if Url::parse(value).is_err() {
        errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }
}

fn check_nonzero(errors: &mut Vec<ValidationError>, field: &'static str, value: u64) {
    if value == 0 {
        errors.push(ValidationError::Zero { field });
    }
}

fn check_range(errors: &mut Vec<ValidationError>, field: &'static str, range: RangeConfig) {
    if range.min > range.max {
        errors.push(ValidationError::EmptyRange {
            field,
            min: range.min,
            max: range.max,
        });
    }
}
