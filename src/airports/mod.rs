//! Airport display names.
//!
//! # Data Flow
//! ```text
//! resolve(code)
//!     → resolver.rs (cache hit? await the shared cell)
//!     → lookup.rs (first caller only: external GET)
//!     → name, or the code itself on any failure
//! ```

pub mod lookup;
pub mod resolver;

pub use lookup::{AirportLookup, HttpAirportLookup, LookupError};
pub use resolver::AirportNameResolver;
