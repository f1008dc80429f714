//! Directory-backed snapshot store using capability-scoped filesystem access.

use async_trait::async_trait;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

/// Snapshot store keeping one file per key inside a directory.
///
/// The directory handle is capability-scoped: the store can never touch
/// anything outside it. Keys are restricted to `[A-Za-z0-9_-]` so a key can
/// never name a path. Values are small (a serialized board snapshot), so
/// reads and writes run inline.
#[derive(Debug, Clone)]
pub struct DirSnapshotStore {
    dir: Arc<Dir>,
}

impl DirSnapshotStore {
    /// Creates a store over an opened directory handle.
    #[must_use]
    pub fn new(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }

    fn checked_key(key: &str) -> SnapshotStoreResult<&str> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(key)
        } else {
            Err(SnapshotStoreError::InvalidKey(key.to_owned()))
        }
    }
}

#[async_trait]
impl SnapshotStore for DirSnapshotStore {
    async fn get(&self, key: &str) -> SnapshotStoreResult<Option<String>> {
        let file = Self::checked_key(key)?;
        match self.dir.read_to_string(file) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotStoreError::persistence(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> SnapshotStoreResult<()> {
        let file = Self::checked_key(key)?;
        self.dir
            .write(file, value)
            .map_err(SnapshotStoreError::persistence)
    }

    async fn remove(&self, key: &str) -> SnapshotStoreResult<()> {
        let file = Self::checked_key(key)?;
        match self.dir.remove_file(file) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SnapshotStoreError::persistence(err)),
        }
    }
}
