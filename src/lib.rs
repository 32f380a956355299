//! Mock flight-search service.
//!
//! Synthesizes plausible flight offers for any city pair across a fixed list
//! of airline codes and serves them as JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!     POST /getFlight
//!     ───────────────▶ http ──▶ generator::assembler ──┬──▶ generator::leg
//!                       │        (one task per          ├──▶ generator::fare
//!                       │         airline × index)      └──▶ airports (single-flight cache)
//!                       │                                         │
//!                       │                                         ▼
//!                       │                                 external name lookup
//!                       │
//!     poller ───────────┴── fixed-interval GET, logged only
//!
//!     config · observability · lifecycle: cross-cutting
//! ```

pub mod airlines;
pub mod airports;
pub mod config;
pub mod generator;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod poller;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
