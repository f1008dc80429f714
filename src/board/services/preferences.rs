//! Durable filter-criteria preferences.
//!
//! Each criterion is stored under its own key and restored independently, so
//! one corrupted entry never takes the others down with it.

use crate::board::domain::{FilterCriteria, StatusFilter, TaskColor};
use crate::board::ports::{SnapshotStore, SnapshotStoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Key under which the status filter is stored.
pub const STATUS_FILTER_KEY: &str = "statusFilter";
/// Key under which the search text is stored.
pub const SEARCH_KEY: &str = "search";
/// Key under which the color set is stored.
pub const COLORS_KEY: &str = "colors";

/// Service-level errors for preference persistence.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// Snapshot store operation failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotStoreError),
    /// Preference encoding failed.
    #[error("preference encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type for preference operations.
pub type PreferencesResult<T> = Result<T, PreferencesError>;

/// Durable filter criteria.
///
/// Owns the current [`FilterCriteria`] and writes the changed criterion to
/// the store after every mutation.
#[derive(Clone)]
pub struct FilterPreferences<S>
where
    S: SnapshotStore,
{
    store: Arc<S>,
    criteria: FilterCriteria,
}

impl<S> FilterPreferences<S>
where
    S: SnapshotStore,
{
    /// Creates preferences with pass-through criteria, without touching the
    /// store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            criteria: FilterCriteria::new(),
        }
    }

    /// Restores criteria from the store.
    ///
    /// Each entry falls back to its default independently: a malformed
    /// value is discarded and its key removed, while the other criteria
    /// keep their stored values.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError::Snapshot`] when the store cannot be read
    /// or a faulty entry cannot be removed.
    pub async fn load(store: Arc<S>) -> PreferencesResult<Self> {
        let status: StatusFilter = restore_entry(&*store, STATUS_FILTER_KEY).await?;
        let search: String = restore_entry(&*store, SEARCH_KEY).await?;
        let colors: BTreeSet<TaskColor> = restore_entry(&*store, COLORS_KEY).await?;
        let criteria = FilterCriteria::new()
            .with_status(status)
            .with_search(search)
            .with_colors(colors);
        Ok(Self { store, criteria })
    }

    /// Returns the current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Sets the status filter and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError`] when the value cannot be written.
    pub async fn set_status(&mut self, status: StatusFilter) -> PreferencesResult<()> {
        self.criteria.set_status(status);
        self.persist(STATUS_FILTER_KEY, &status).await
    }

    /// Sets the search text and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError`] when the value cannot be written.
    pub async fn set_search(&mut self, search: impl Into<String>) -> PreferencesResult<()> {
        self.criteria.set_search(search);
        self.persist(SEARCH_KEY, &self.criteria.search().to_owned())
            .await
    }

    /// Replaces the color set and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError`] when the value cannot be written.
    pub async fn set_colors(
        &mut self,
        colors: impl IntoIterator<Item = TaskColor>,
    ) -> PreferencesResult<()> {
        self.criteria.set_colors(colors);
        self.persist(COLORS_KEY, &self.criteria.colors().clone())
            .await
    }

    /// Adds or removes a single color and persists the set; returns whether
    /// the set changed.
    ///
    /// # Errors
    ///
    /// Returns [`PreferencesError`] when the value cannot be written.
    pub async fn toggle_color(&mut self, color: TaskColor) -> PreferencesResult<bool> {
        let changed = if self.criteria.colors().contains(&color) {
            self.criteria.remove_color(color)
        } else {
            self.criteria.add_color(color)
        };
        if changed {
            self.persist(COLORS_KEY, &self.criteria.colors().clone())
                .await?;
        }
        Ok(changed)
    }

    async fn persist<T: Serialize>(&self, key: &str, value: &T) -> PreferencesResult<()> {
        let encoded = serde_json::to_string(value)?;
        self.store.set(key, &encoded).await?;
        Ok(())
    }
}

/// Reads one preference entry, discarding a malformed value.
async fn restore_entry<T>(store: &impl SnapshotStore, key: &str) -> Result<T, SnapshotStoreError>
where
    T: DeserializeOwned + Default,
{
    match store.get(key).await? {
        Some(raw) => match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(key, %err, "discarding malformed preference entry");
                store.remove(key).await?;
                Ok(T::default())
            }
        },
        None => Ok(T::default()),
    }
}
