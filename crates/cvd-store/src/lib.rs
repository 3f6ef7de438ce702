//! Key-value cache boundary.
//!
//! The cache stores opaque JSON blobs under the fixed [`CacheKey`]s. Writers
//! replace a value with a single `set`, so readers observe either the previous
//! or the new blob and never a partial one. Readers deserialize their own copy;
//! nothing is shared mutably between requests.

use std::collections::HashMap;
use std::fmt;

use cvd_config::CacheKey;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum StoreError {
    /// The backend itself failed (connection, I/O).
    Backend(String),
    /// A stored blob did not decode into the requested type.
    Decode { key: CacheKey, message: String },
    /// A value could not be encoded for storage.
    Encode { key: CacheKey, message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Backend(msg) => write!(f, "store backend error: {msg}"),
            StoreError::Decode { key, message } => {
                write!(f, "cached value under '{key}' failed to decode: {message}")
            }
            StoreError::Encode { key, message } => {
                write!(f, "value for '{key}' failed to encode: {message}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

// ---------------------------------------------------------------------------
// Store trait
// ---------------------------------------------------------------------------

/// Get/set store keyed by [`CacheKey`].
///
/// Object-safe so the daemon and scraper can share an `Arc<dyn KeyValueStore>`.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: CacheKey) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key` wholesale.
    async fn set(&self, key: CacheKey, value: String) -> Result<(), StoreError>;
}

/// Process-local store. Used by the daemon (scraper and server share one
/// process) and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<CacheKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: CacheKey) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(&key).cloned())
    }

    async fn set(&self, key: CacheKey, value: String) -> Result<(), StoreError> {
        self.entries.write().await.insert(key, value);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Typed helpers
// ---------------------------------------------------------------------------

/// Read and decode the blob under `key`. `Ok(None)` when nothing is stored yet.
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: CacheKey,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StoreError::Decode {
            key,
            message: e.to_string(),
        })
}

/// Encode `value` and replace the blob under `key`.
pub async fn set_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: CacheKey,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|e| StoreError::Encode {
        key,
        message: e.to_string(),
    })?;
    store.set(key, raw).await
}
