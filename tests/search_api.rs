//! End-to-end tests for the flight search API.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use flight_mock::Shutdown;
use serde_json::{json, Value};

mod common;

fn airport_name(code: &str) -> Option<&'static str> {
    match code {
        "DXB" => Some("Dubai International Airport"),
        "JFK" => Some("John F Kennedy International Airport"),
        _ => None,
    }
}

/// Lookup backend that knows two airports and counts every hit.
async fn start_lookup_backend(hits: Arc<AtomicU32>) -> std::net::SocketAddr {
    common::start_programmable_backend(move |request_line| {
        let hits = hits.clone();
        async move {
            hits.fetch_add(1, Ordering::SeqCst);
            let code = common::requested_code(&request_line);
            let body = match airport_name(&code) {
                Some(name) => json!({ "response": [{ "name": name, "iata": code }] }),
                None => json!({ "response": [] }),
            };
            (200, body.to_string())
        }
    })
    .await
}

fn timestamp(leg: &Value, field: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(leg[field].as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_one_way_search() {
    let hits = Arc::new(AtomicU32::new(0));
    let lookup_addr = start_lookup_backend(hits.clone()).await;
    let shutdown = Shutdown::new();
    let addr = common::start_service(common::test_config(lookup_addr), &shutdown).await;

    let res = common::client()
        .post(format!("http://{}/getFlight", addr))
        .json(&json!({
            "origin": "DXB",
            "destination": "JFK",
            "departureDate": "2024-05-01",
            "noOfAdult": 1
        }))
        .send()
        .await
        .expect("service unreachable");

    assert_eq!(res.status(), 200);
    let results: Vec<Value> = res.json().await.unwrap();
    assert_eq!(results.len(), 420);

    for result in &results {
        assert_eq!(result["currency"], "BDT");
        assert_eq!(result["tripType"], "OneWay");
        assert_eq!(result["onwardFlights"].as_array().unwrap().len(), 1);
        assert_eq!(result["returnFlights"].as_array().unwrap().len(), 0);
        assert_eq!(result["adultCount"], 1);

        let total = result["totalPrice"].as_i64().unwrap();
        let base = result["baseFare"].as_i64().unwrap();
        let tax = result["totalTax"].as_i64().unwrap();
        let discount = result["totalDiscount"].as_i64().unwrap();
        assert_eq!(total, base + tax - discount);

        let fare = &result["fareDetails"][0];
        assert_eq!(
            fare["totalFare"].as_i64().unwrap(),
            fare["baseFare"].as_i64().unwrap() + fare["taxAmount"].as_i64().unwrap()
                - fare["discountAmount"].as_i64().unwrap()
        );

        let leg = &result["onwardFlights"][0];
        assert!(timestamp(leg, "arrivalTime") > timestamp(leg, "departureTime"));
        assert_eq!(leg["originCode"], "DXB");
        assert_eq!(leg["originAirportName"], "Dubai International Airport");
        assert_eq!(leg["destinationAirportName"], "John F Kennedy International Airport");
    }

    // One external lookup per distinct airport, however many tasks asked.
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    shutdown.trigger();
}

#[tokio::test]
async fn test_round_trip_search() {
    let hits = Arc::new(AtomicU32::new(0));
    let lookup_addr = start_lookup_backend(hits.clone()).await;
    let shutdown = Shutdown::new();
    let addr = common::start_service(common::test_config(lookup_addr), &shutdown).await;

    let res = common::client()
        .post(format!("http://{}/getFlight", addr))
        .json(&json!({
            "origin": "DXB",
            "destination": "JFK",
            "departureDate": "2024-05-01",
            "returnDate": "2024-05-10",
            "noOfAdult": 2,
            "noOfChildren": 1,
            "noOfInfant": 0
        }))
        .send()
        .await
        .unwrap();

    let results: Vec<Value> = res.json().await.unwrap();
    assert_eq!(results.len(), 420);

    for result in &results {
        assert_eq!(result["tripType"], "RoundTrip");
        assert_eq!(result["journeyDurations"].as_array().unwrap().len(), 2);
        assert_eq!(result["childCount"], 1);

        let back = &result["returnFlights"][0];
        assert_eq!(back["originCode"], "JFK");
        assert_eq!(back["destinationCode"], "DXB");
        assert!(back["departureTime"].as_str().unwrap().starts_with("2024-05-10T"));
        assert!(timestamp(back, "arrivalTime") > timestamp(back, "departureTime"));
    }

    let first = &results[0];
    assert_eq!(first["onwardFlights"][0]["flightNumber"], "2A100");
    assert_eq!(first["returnFlights"][0]["flightNumber"], "2A200");

    shutdown.trigger();
}

#[tokio::test]
async fn test_cache_survives_across_requests() {
    let hits = Arc::new(AtomicU32::new(0));
    let lookup_addr = start_lookup_backend(hits.clone()).await;
    let shutdown = Shutdown::new();
    let addr = common::start_service(common::test_config(lookup_addr), &shutdown).await;
    let client = common::client();

    for destination in ["JFK", "JFK", "LHR"] {
        let res = client
            .post(format!("http://{}/getFlight", addr))
            .json(&json!({
                "origin": "DXB",
                "destination": destination,
                "departureDate": "2024-05-01"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
    }

    // DXB, JFK, LHR: each looked up exactly once.
    assert_eq!(hits.load(Ordering::SeqCst), 3);

    let health: Value = client
        .get(format!("http://{}/health", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["cachedAirports"], 3);

    shutdown.trigger();
}

#[tokio::test]
async fn test_unknown_airport_uses_code() {
    let hits = Arc::new(AtomicU32::new(0));
    let lookup_addr = start_lookup_backend(hits).await;
    let shutdown = Shutdown::new();
    let addr = common::start_service(common::test_config(lookup_addr), &shutdown).await;

    let results: Vec<Value> = common::client()
        .post(format!("http://{}/getFlight", addr))
        .json(&json!({
            "origin": "CGP",
            "destination": "DXB",
            "departureDate": "2024-05-01"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let leg = &results[0]["onwardFlights"][0];
    assert_eq!(leg["originAirportName"], "CGP");
    assert_eq!(leg["destinationAirportName"], "Dubai International Airport");
    assert!(results[0].get("adultCount").is_none());

    shutdown.trigger();
}

#[tokio::test]
async fn test_passenger_counts_are_echoed_as_given() {
    let lookup_addr = common::closed_port().await;
    let shutdown = Shutdown::new();
    let addr = common::start_service(common::test_config(lookup_addr), &shutdown).await;

    let res = common::client()
        .post(format!("http://{}/getFlight", addr))
        .json(&json!({
            "origin": "DXB",
            "destination": "JFK",
            "departureDate": "2024-05-01",
            "noOfAdult": "1",
            "noOfChildren": -1
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let results: Vec<Value> = res.json().await.unwrap();
    assert_eq!(results.len(), 420);
    for result in &results {
        assert_eq!(result["adultCount"], "1");
        assert_eq!(result["childCount"], -1);
        assert!(result.get("infantCount").is_none());
        assert_eq!(result["fareDetails"][0]["passengerCount"], "1");
    }

    shutdown.trigger();
}

#[tokio::test]
async fn test_missing_airports_still_search() {
    let hits = Arc::new(AtomicU32::new(0));
    let lookup_addr = start_lookup_backend(hits.clone()).await;
    let shutdown = Shutdown::new();
    let addr = common::start_service(common::test_config(lookup_addr), &shutdown).await;

    let res = common::client()
        .post(format!("http://{}/getFlight", addr))
        .json(&json!({
            "destination": "JFK",
            "departureDate": "2024-05-01",
            "noOfAdult": "1"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let results: Vec<Value> = res.json().await.unwrap();
    assert_eq!(results.len(), 420);
    for result in &results {
        let leg = &result["onwardFlights"][0];
        assert!(leg.get("originCode").is_none());
        assert!(leg.get("originAirportName").is_none());
        assert_eq!(leg["destinationCode"], "JFK");
        assert_eq!(leg["destinationAirportName"], "John F Kennedy International Airport");
    }

    // Only the airport that was named gets looked up.
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_missing_departure_date_is_rejected() {
    let lookup_addr = common::closed_port().await;
    let shutdown = Shutdown::new();
    let addr = common::start_service(common::test_config(lookup_addr), &shutdown).await;

    let res = common::client()
        .post(format!("http://{}/getFlight", addr))
        .json(&json!({ "origin": "DXB", "destination": "JFK" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "departureDate is required");

    shutdown.trigger();
}

#[tokio::test]
async fn test_root_greeting() {
    let lookup_addr = common::closed_port().await;
    let shutdown = Shutdown::new();
    let addr = common::start_service(common::test_config(lookup_addr), &shutdown).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key(flight_mock::http::X_REQUEST_ID));
    assert_eq!(res.text().await.unwrap(), "Hello");

    shutdown.trigger();
}
