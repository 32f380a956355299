//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, timeouts, request ID, metrics)
//! - Own the shared airport name cache and the result assembler
//! - Spawn the background feed poller alongside the listener
//! - Serve until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::airports::{AirportLookup, AirportNameResolver, HttpAirportLookup, LookupError};
use crate::config::ServiceConfig;
use crate::generator::SearchAssembler;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, track_metrics};
use crate::poller::FeedPoller;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub assembler: SearchAssembler,
    pub resolver: Arc<AirportNameResolver>,
    pub results_per_airline: usize,
}

/// HTTP server for the flight mock.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server that resolves airport names over HTTP.
    pub fn new(config: ServiceConfig) -> Result<Self, LookupError> {
        let lookup = HttpAirportLookup::new(&config.airport_lookup)?;
        Ok(Self::with_lookup(config, Arc::new(lookup)))
    }

    /// Create a server with a caller-supplied airport name source.
    pub fn with_lookup(config: ServiceConfig, lookup: Arc<dyn AirportLookup>) -> Self {
        let resolver = Arc::new(AirportNameResolver::new(lookup));
        let assembler = SearchAssembler::new(resolver.clone(), Arc::new(config.generation.clone()));

        let state = AppState {
            assembler,
            resolver,
            results_per_airline: config.generation.results_per_airline,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/getFlight", post(handlers::get_flight))
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        if self.config.poller.enabled {
            match FeedPoller::new(self.config.poller.clone()) {
                Ok(poller) => {
                    let poller_shutdown = shutdown.resubscribe();
                    tokio::spawn(poller.run(poller_shutdown));
                }
                Err(e) => tracing::error!(error = %e, "Feed poller not started"),
            }
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
