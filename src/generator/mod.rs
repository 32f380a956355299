//! Synthetic search data.
//!
//! # Data Flow
//! ```text
//! SearchRequest
//!     → types.rs (parse dates into a SearchQuery)
//!     → assembler.rs (resolve airport names, then draw)
//!         → leg.rs (onward leg, optional return leg)
//!         → fare.rs (fare breakdown)
//!     → SearchResult
//! ```

pub mod assembler;
pub mod fare;
pub mod leg;
pub mod types;

pub use assembler::SearchAssembler;
pub use types::{
    FlightLeg, Fare, GenerationError, JourneyDuration, SearchQuery, SearchRequest, SearchResult,
    TripType,
};
