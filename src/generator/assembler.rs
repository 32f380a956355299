//! Search result assembly.

use std::sync::Arc;

use rand::Rng;
use uuid::Uuid;

use crate::airports::AirportNameResolver;
use crate::config::GenerationConfig;
use crate::generator::fare::generate_fare;
use crate::generator::leg::{generate_leg, Direction, Endpoint, LegSpec, Route};
use crate::generator::types::{JourneyDuration, SearchQuery, SearchResult};

const ONWARD_FLIGHT_BASE: usize = 100;
const RETURN_FLIGHT_BASE: usize = 200;

/// Builds one [`SearchResult`] per (airline, index) pair.
#[derive(Clone)]
pub struct SearchAssembler {
    resolver: Arc<AirportNameResolver>,
    config: Arc<GenerationConfig>,
}

impl SearchAssembler {
    pub fn new(resolver: Arc<AirportNameResolver>, config: Arc<GenerationConfig>) -> Self {
        Self { resolver, config }
    }

    pub async fn assemble(&self, query: &SearchQuery, airline: &str, index: usize) -> SearchResult {
        let route = self.resolve_route(query).await;

        // ThreadRng is !Send; keep it out of any await.
        let mut rng = rand::thread_rng();
        build_result(&mut rng, &self.config, query, &route, airline, index)
    }

    async fn resolve_route(&self, query: &SearchQuery) -> Route {
        let (origin, destination) = tokio::join!(
            self.resolve_endpoint(query.request.origin.as_deref()),
            self.resolve_endpoint(query.request.destination.as_deref()),
        );
        Route { origin, destination }
    }

    async fn resolve_endpoint(&self, code: Option<&str>) -> Endpoint {
        match code {
            Some(code) => Endpoint {
                code: Some(code.to_string()),
                name: Some(self.resolver.resolve(code).await),
            },
            None => Endpoint::default(),
        }
    }
}

/// Synchronous half of assembly: all random draws happen here.
pub fn build_result<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenerationConfig,
    query: &SearchQuery,
    route: &Route,
    airline: &str,
    index: usize,
) -> SearchResult {
    let onward_number = format!("{}{}", airline, index + ONWARD_FLIGHT_BASE);
    let onward = generate_leg(
        rng,
        config,
        route,
        LegSpec {
            airline,
            flight_number: &onward_number,
            date: query.departure_date,
            direction: Direction::Onward,
        },
    );

    let return_leg = query.return_date.map(|date| {
        let return_number = format!("{}{}", airline, index + RETURN_FLIGHT_BASE);
        generate_leg(
            rng,
            config,
            route,
            LegSpec {
                airline,
                flight_number: &return_number,
                date,
                direction: Direction::Return,
            },
        )
    });

    let request = &query.request;
    let fare = generate_fare(rng, config, request.no_of_adult.clone());

    let mut journey_durations = vec![JourneyDuration::direct(&onward)];
    journey_durations.extend(return_leg.iter().map(JourneyDuration::direct));

    SearchResult {
        journey_durations,
        total_discount: fare.discount_amount,
        total_ait: fare.ait,
        total_markup: 0,
        total_price: fare.total_fare,
        base_fare: fare.base_fare,
        ait: 0,
        currency: config.currency.clone(),
        adult_count: request.no_of_adult.clone(),
        child_count: request.no_of_children.clone(),
        infant_count: request.no_of_infant.clone(),
        is_refundable: false,
        is_bookable: true,
        total_tax: fare.tax_amount,
        fare_type: "Regular".to_string(),
        trip_type: query.trip_type(),
        segment_code: Uuid::new_v4().to_string(),
        internal_ref_id: format!("IGG-{}", short_id()),
        provider_key: format!("PROVIDER-{}", short_id()),
        fare_details: vec![fare],
        onward_flights: vec![onward],
        return_flights: return_leg.into_iter().collect(),
    }
}

/// First eight hex digits of a fresh v4 UUID.
fn short_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
