//! Synthetic flight leg generation.

use chrono::{Duration, NaiveDate, NaiveTime};
use rand::Rng;

use crate::airlines::carrier_name;
use crate::config::GenerationConfig;
use crate::generator::types::FlightLeg;

/// An airport as it appears on a leg. Both halves are absent when the
/// request named no airport for this end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// The requested city pair with resolved names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: Endpoint,
    pub destination: Endpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Onward,
    /// Flies destination → origin.
    Return,
}

/// What distinguishes one leg from another within a search.
#[derive(Debug, Clone, Copy)]
pub struct LegSpec<'a> {
    pub airline: &'a str,
    pub flight_number: &'a str,
    pub date: NaiveDate,
    pub direction: Direction,
}

/// Build one leg. Departure is on the hour within the configured window;
/// arrival is departure plus a random duration. Config validation keeps the
/// duration at one hour or more.
pub fn generate_leg<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenerationConfig,
    route: &Route,
    spec: LegSpec<'_>,
) -> FlightLeg {
    let dep_hour = rng.gen_range(config.departure_hours.min..=config.departure_hours.max);
    let duration_hours = rng.gen_range(config.duration_hours.min..=config.duration_hours.max);
    let duration_mins = rng.gen_range(0..=59u32);

    let departure = spec.date.and_time(NaiveTime::MIN).and_utc() + Duration::hours(dep_hour as i64);
    let arrival = departure
        + Duration::hours(duration_hours as i64)
        + Duration::minutes(duration_mins as i64);

    let (from, to) = match spec.direction {
        Direction::Onward => (&route.origin, &route.destination),
        Direction::Return => (&route.destination, &route.origin),
    };

    FlightLeg {
        origin_airport_name: from.name.clone(),
        destination_airport_name: to.name.clone(),
        layover_time: None,
        marketing_carrier_code: spec.airline.to_string(),
        marketing_carrier_name: carrier_name(spec.airline),
        flight_number: spec.flight_number.to_string(),
        origin_code: from.code.clone(),
        destination_code: to.code.clone(),
        departure_time: departure,
        arrival_time: arrival,
        duration: format!("{}h {}m", duration_hours, duration_mins),
        operating_carrier_code: spec.airline.to_string(),
        operating_carrier_name: None,
        operating_flight_number: spec.flight_number.to_string(),
        origin_terminal: "Terminal 1".to_string(),
        destination_terminal: "Terminal 2".to_string(),
        booking_class: "O".to_string(),
        booking_availability: "9".to_string(),
        cabin_class: "ECONOMY".to_string(),
        baggage_allowance: "20kg".to_string(),
        aircraft_type: "73H".to_string(),
        baggage_details: Vec::new(),
    }
}
