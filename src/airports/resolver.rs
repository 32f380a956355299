//! Memoizing, single-flight airport name resolver.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::OnceCell;

use crate::airports::lookup::AirportLookup;
use crate::observability::metrics;

/// Process-wide airport name cache.
///
/// Each code maps to a cell that is either pending or resolved. The first
/// caller for a code drives the lookup; concurrent callers await the same
/// cell. Failed lookups resolve to the code itself and stay cached.
pub struct AirportNameResolver {
    lookup: Arc<dyn AirportLookup>,
    entries: DashMap<String, Arc<OnceCell<String>>>,
}

impl AirportNameResolver {
    pub fn new(lookup: Arc<dyn AirportLookup>) -> Self {
        Self {
            lookup,
            entries: DashMap::new(),
        }
    }

    /// Display name for an airport code, falling back to the code.
    pub async fn resolve(&self, code: &str) -> String {
        // Clone the cell out so the shard lock is released before awaiting.
        let cell = self
            .entries
            .entry(code.to_string())
            .or_default()
            .value()
            .clone();

        cell.get_or_init(|| self.fetch(code)).await.clone()
    }

    /// Number of codes seen so far (pending or resolved).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    async fn fetch(&self, code: &str) -> String {
        match self.lookup.lookup(code).await {
            Ok(Some(name)) => {
                tracing::debug!(code = %code, name = %name, "Resolved airport name");
                metrics::record_airport_lookup("resolved");
                name
            }
            Ok(None) => {
                tracing::debug!(code = %code, "No airport name found, using code");
                metrics::record_airport_lookup("unnamed");
                code.to_string()
            }
            Err(e) => {
                tracing::warn!(code = %code, error = %e, "Failed to fetch airport name");
                metrics::record_airport_lookup("failed");
                code.to_string()
            }
        }
    }
}
