//! Search request and synthetic result types.
//!
//! Field names serialize in camelCase to match the JSON clients already
//! consume.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Incoming search payload. Only the dates are checked, since timestamps are
/// built from them; everything else is echoed back as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    /// Passenger counts are not interpreted, so any JSON value is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_of_adult: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_of_children: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_of_infant: Option<serde_json::Value>,
}

/// Errors raised while preparing a search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("{field} is required")]
    MissingDate { field: &'static str },

    #[error("{field} '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { field: &'static str, value: String },
}

/// A request with its dates parsed, shared by every generation task.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub request: SearchRequest,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl SearchQuery {
    pub fn trip_type(&self) -> TripType {
        if self.return_date.is_some() {
            TripType::RoundTrip
        } else {
            TripType::OneWay
        }
    }
}

impl TryFrom<SearchRequest> for SearchQuery {
    type Error = GenerationError;

    fn try_from(request: SearchRequest) -> Result<Self, Self::Error> {
        let departure_date = match request.departure_date.as_deref() {
            Some(value) => parse_date("departureDate", value)?,
            None => return Err(GenerationError::MissingDate { field: "departureDate" }),
        };
        // An empty returnDate means one-way.
        let return_date = match request.return_date.as_deref() {
            Some(value) if !value.is_empty() => Some(parse_date("returnDate", value)?),
            _ => None,
        };

        Ok(Self {
            request,
            departure_date,
            return_date,
        })
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, GenerationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| GenerationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripType {
    OneWay,
    RoundTrip,
}

/// One directional flight segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightLeg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_airport_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_airport_name: Option<String>,
    pub layover_time: Option<String>,
    pub marketing_carrier_code: String,
    pub marketing_carrier_name: String,
    pub flight_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_code: Option<String>,
    #[serde(with = "iso_millis")]
    pub departure_time: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub arrival_time: DateTime<Utc>,
    pub duration: String,
    pub operating_carrier_code: String,
    pub operating_carrier_name: Option<String>,
    pub operating_flight_number: String,
    pub origin_terminal: String,
    pub destination_terminal: String,
    pub booking_class: String,
    pub booking_availability: String,
    pub cabin_class: String,
    pub baggage_allowance: String,
    pub aircraft_type: String,
    pub baggage_details: Vec<serde_json::Value>,
}

/// Monetary breakdown for one result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fare {
    pub discount_amount: i64,
    pub markup_fee: i64,
    pub service_fee: i64,
    pub passenger_type: String,
    pub total_fare: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_count: Option<serde_json::Value>,
    pub base_fare: i64,
    pub tax_amount: i64,
    pub ait: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDuration {
    pub layover_duration: String,
    pub total_duration: String,
    pub stop_count: u32,
}

impl JourneyDuration {
    pub fn direct(leg: &FlightLeg) -> Self {
        Self {
            layover_duration: "0".to_string(),
            total_duration: leg.duration.clone(),
            stop_count: 0,
        }
    }
}

/// One synthetic offer: onward leg, optional return leg and a fare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub journey_durations: Vec<JourneyDuration>,
    pub fare_details: Vec<Fare>,
    pub onward_flights: Vec<FlightLeg>,
    pub return_flights: Vec<FlightLeg>,
    pub total_discount: i64,
    pub total_ait: i64,
    pub total_markup: i64,
    pub total_price: i64,
    pub base_fare: i64,
    pub ait: i64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adult_count: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child_count: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infant_count: Option<serde_json::Value>,
    pub is_refundable: bool,
    pub is_bookable: bool,
    pub total_tax: i64,
    pub fare_type: String,
    pub trip_type: TripType,
    pub segment_code: String,
    pub internal_ref_id: String,
    pub provider_key: String,
}

/// `2024-05-01T06:00:00.000Z` timestamps.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
