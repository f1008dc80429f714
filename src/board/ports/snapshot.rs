//! Durable key-value port for board snapshots and preferences.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Durable key-value persistence contract.
///
/// Values are opaque strings; callers own the encoding. A missing key is
/// `None`, not an error.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Returns the stored value for a key, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the backing store
    /// cannot be read.
    async fn get(&self, key: &str) -> SnapshotStoreResult<Option<String>>;

    /// Stores a value under a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the backing store
    /// cannot be written.
    async fn set(&self, key: &str, value: &str) -> SnapshotStoreResult<()>;

    /// Removes a key; removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the backing store
    /// cannot be written.
    async fn remove(&self, key: &str) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// The key contains characters the backing store cannot accept.
    #[error("invalid snapshot key: {0}")]
    InvalidKey(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
