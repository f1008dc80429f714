//! In-memory snapshot store for tests and volatile embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

/// Thread-safe in-memory key-value store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    state: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with entries, for restore tests.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            state: Arc::new(RwLock::new(entries.into_iter().collect())),
        }
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn get(&self, key: &str) -> SnapshotStoreResult<Option<String>> {
        let state = self.state.read().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> SnapshotStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> SnapshotStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.remove(key);
        Ok(())
    }
}
