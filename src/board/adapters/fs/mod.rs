//! Filesystem adapters for durable snapshot storage.

mod snapshot;

pub use snapshot::DirSnapshotStore;
