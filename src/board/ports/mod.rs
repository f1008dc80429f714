//! Port contracts for the todo board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod service;
pub mod snapshot;

pub use service::{TaskDraft, TaskPatch, TaskService, TaskServiceError, TaskServiceResult};
pub use snapshot::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
