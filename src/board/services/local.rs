//! Service layer for the local, snapshot-persisted board variant.

use crate::board::domain::{
    BoardView, FilterCriteria, Task, TaskColor, TaskId, TaskList, TaskText, Transition,
};
use crate::board::ports::{SnapshotStore, SnapshotStoreError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Key under which the board snapshot is stored.
pub const TASKS_KEY: &str = "tasks";

/// Service-level errors for local board operations.
#[derive(Debug, Error)]
pub enum LocalBoardError {
    /// Snapshot store operation failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotStoreError),
    /// Snapshot encoding failed.
    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type for local board service operations.
pub type LocalBoardResult<T> = Result<T, LocalBoardError>;

/// Reducer-driven board with durable snapshots.
///
/// Owns the task collection, applies transitions through
/// [`TaskList::apply`], and writes a fresh snapshot under [`TASKS_KEY`]
/// after every applied transition.
#[derive(Clone)]
pub struct LocalBoardService<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    list: TaskList,
}

impl<S, C> LocalBoardService<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    /// Creates a board service over an empty collection, without touching
    /// the store.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            list: TaskList::new(),
        }
    }

    /// Restores a board from the stored snapshot.
    ///
    /// A missing snapshot yields `initial`. A malformed snapshot is
    /// discarded: the faulty entry is removed from the store and `initial`
    /// is used instead, matching the load behavior of the original
    /// application. Restore never fails on bad data, only on store errors.
    ///
    /// # Errors
    ///
    /// Returns [`LocalBoardError::Snapshot`] when the store cannot be read
    /// or the faulty entry cannot be removed.
    pub async fn load(store: Arc<S>, clock: Arc<C>, initial: TaskList) -> LocalBoardResult<Self> {
        let list = match store.get(TASKS_KEY).await? {
            Some(raw) => match serde_json::from_str::<TaskList>(&raw) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!(key = TASKS_KEY, %err, "discarding malformed board snapshot");
                    store.remove(TASKS_KEY).await?;
                    initial
                }
            },
            None => initial,
        };
        Ok(Self { store, clock, list })
    }

    /// Returns the current collection.
    #[must_use]
    pub const fn list(&self) -> &TaskList {
        &self.list
    }

    /// Projects the derived view for the given criteria.
    #[must_use]
    pub fn view(&self, criteria: &FilterCriteria) -> BoardView {
        self.list.view(criteria)
    }

    /// Applies a transition and persists the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`LocalBoardError`] when the snapshot cannot be encoded or
    /// written; the in-memory collection keeps the pre-transition state in
    /// that case.
    pub async fn apply(&mut self, transition: &Transition) -> LocalBoardResult<()> {
        let next = self.list.apply(transition, &*self.clock);
        let snapshot = serde_json::to_string(&next)?;
        self.store.set(TASKS_KEY, &snapshot).await?;
        self.list = next;
        Ok(())
    }

    /// Adds a task from raw input.
    ///
    /// The input is trimmed; when the trim is empty, no transition is
    /// applied and `Ok(None)` is returned. Otherwise returns the new
    /// task's identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LocalBoardError`] when persisting the snapshot fails.
    pub async fn add_task(&mut self, raw: &str) -> LocalBoardResult<Option<TaskId>> {
        let Ok(text) = TaskText::new(raw) else {
            return Ok(None);
        };
        self.apply(&Transition::Add { text }).await?;
        Ok(self.list.tasks().last().map(Task::id))
    }

    /// Replaces a task's text from raw input.
    ///
    /// The input is trimmed; when the trim is empty, no transition is
    /// applied and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`LocalBoardError`] when persisting the snapshot fails.
    pub async fn edit_task(&mut self, id: TaskId, raw: &str) -> LocalBoardResult<bool> {
        let Ok(text) = TaskText::new(raw) else {
            return Ok(false);
        };
        self.apply(&Transition::Edit { id, text }).await?;
        Ok(true)
    }

    /// Removes a task; a no-op when the identifier is absent.
    ///
    /// # Errors
    ///
    /// Returns [`LocalBoardError`] when persisting the snapshot fails.
    pub async fn delete_task(&mut self, id: TaskId) -> LocalBoardResult<()> {
        self.apply(&Transition::Delete { id }).await
    }

    /// Flips a task's completion flag; a no-op when the identifier is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`LocalBoardError`] when persisting the snapshot fails.
    pub async fn toggle_task(&mut self, id: TaskId) -> LocalBoardResult<()> {
        self.apply(&Transition::Toggle { id }).await
    }

    /// Sets or clears a task's color; a no-op when the identifier is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`LocalBoardError`] when persisting the snapshot fails.
    pub async fn recolor_task(&mut self, id: TaskId, color: Option<TaskColor>) -> LocalBoardResult<()> {
        self.apply(&Transition::Recolor { id, color }).await
    }

    /// Marks every task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`LocalBoardError`] when persisting the snapshot fails.
    pub async fn mark_all_completed(&mut self) -> LocalBoardResult<()> {
        self.apply(&Transition::MarkAllCompleted).await
    }

    /// Removes every completed task.
    ///
    /// # Errors
    ///
    /// Returns [`LocalBoardError`] when persisting the snapshot fails.
    pub async fn clear_completed(&mut self) -> LocalBoardResult<()> {
        self.apply(&Transition::ClearCompleted).await
    }
}
