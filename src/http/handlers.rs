//! Route handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tokio::task::JoinSet;

use crate::airlines::AIRLINE_CODES;
use crate::generator::{SearchQuery, SearchRequest, SearchResult};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

pub async fn root() -> &'static str {
    "Hello"
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub cached_airports: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cached_airports: state.resolver.len(),
    })
}

/// Fan out one generation task per (airline, index) pair and return them
/// all, in airline order, once every task has finished. Dropping the
/// handler (client gone, request timeout) aborts the tasks still running.
pub async fn get_flight(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let query = Arc::new(SearchQuery::try_from(request)?);
    let per_airline = state.results_per_airline;
    let total = AIRLINE_CODES.len() * per_airline;

    tracing::info!(
        origin = ?query.request.origin,
        destination = ?query.request.destination,
        departure_date = %query.departure_date,
        trip_type = ?query.trip_type(),
        results = total,
        "Generating flight search results"
    );

    let mut join_set = JoinSet::new();
    for (airline_pos, &airline) in AIRLINE_CODES.iter().enumerate() {
        for index in 0..per_airline {
            let assembler = state.assembler.clone();
            let query = query.clone();
            let slot = airline_pos * per_airline + index;
            join_set.spawn(async move { (slot, assembler.assemble(&query, airline, index).await) });
        }
    }

    let mut slots: Vec<Option<SearchResult>> = vec![None; total];
    while let Some(joined) = join_set.join_next().await {
        let (slot, result) = joined?;
        slots[slot] = Some(result);
    }

    let results: Vec<SearchResult> = slots.into_iter().flatten().collect();
    metrics::record_results_generated(results.len());

    Ok(Json(results))
}
