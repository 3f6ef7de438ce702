//! Shared runtime state for cvd-daemon.
//!
//! Handlers receive `State<Arc<AppState>>` from Axum. The state holds no
//! mutable data of its own: every request reads its own copy from the store.

use std::sync::Arc;

use cvd_sources::{CountryResolver, CountryTable};
use cvd_store::{KeyValueStore, MemoryStore};
use serde::{Deserialize, Serialize};

/// Static build metadata included in health responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuildInfo {
    pub service: &'static str,
    pub version: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            service: "cvd-daemon",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Cloneable (Arc) handle shared across all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache written by the scraper, read by every data endpoint.
    pub store: Arc<dyn KeyValueStore>,
    pub resolver: Arc<dyn CountryResolver>,
    pub build: BuildInfo,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, resolver: Arc<dyn CountryResolver>) -> Self {
        Self {
            store,
            resolver,
            build: BuildInfo::current(),
        }
    }

    /// Empty in-memory store and the embedded country table.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::new()),
            Arc::new(CountryTable::embedded().clone()),
        )
    }
}
