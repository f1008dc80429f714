//! Service layer for the remote, service-backed board variant.

use crate::board::domain::{BoardView, FilterCriteria, TaskColor, TaskId, TaskList, TaskText};
use crate::board::ports::{TaskDraft, TaskPatch, TaskService, TaskServiceError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for remote board operations.
#[derive(Debug, Error)]
pub enum RemoteBoardError {
    /// Remote service call failed.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
}

/// Result type for remote board service operations.
pub type RemoteBoardResult<T> = Result<T, RemoteBoardError>;

/// Board mirroring a remote service's collection.
///
/// The mirror is replaced wholesale by [`RemoteBoardService::refresh`] and
/// updated per task as round trips complete. Merging is last-write-wins
/// with one guard: a server response for a task no longer present in the
/// mirror is discarded rather than resurrected.
///
/// Mark-all and clear-completed are deliberately absent here: the remote
/// protocol has no bulk operation, and the source application does not fan
/// them out as individual updates either.
#[derive(Clone)]
pub struct RemoteBoardService<T, C>
where
    T: TaskService,
    C: Clock + Send + Sync,
{
    service: Arc<T>,
    clock: Arc<C>,
    mirror: TaskList,
}

impl<T, C> RemoteBoardService<T, C>
where
    T: TaskService,
    C: Clock + Send + Sync,
{
    /// Creates a board with an empty mirror, without touching the service.
    #[must_use]
    pub fn new(service: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            service,
            clock,
            mirror: TaskList::new(),
        }
    }

    /// Returns the mirrored collection.
    #[must_use]
    pub const fn list(&self) -> &TaskList {
        &self.mirror
    }

    /// Projects the derived view for the given criteria.
    #[must_use]
    pub fn view(&self, criteria: &FilterCriteria) -> BoardView {
        self.mirror.view(criteria)
    }

    /// Replaces the mirror with the server's collection.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteBoardError`] when the round trip fails; the mirror
    /// keeps its previous state in that case.
    pub async fn refresh(&mut self) -> RemoteBoardResult<&TaskList> {
        let tasks = self.service.list().await?;
        self.mirror = TaskList::from_tasks(tasks);
        Ok(&self.mirror)
    }

    /// Creates a task from raw input and appends the server's task.
    ///
    /// The input is trimmed; when the trim is empty, no round trip is made
    /// and `Ok(None)` is returned. Otherwise returns the server-assigned
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteBoardError`] when the round trip fails.
    pub async fn add_task(&mut self, raw: &str) -> RemoteBoardResult<Option<TaskId>> {
        let Ok(text) = TaskText::new(raw) else {
            return Ok(None);
        };
        let draft = TaskDraft::new(text, &*self.clock);
        let created = self.service.create(draft).await?;
        let id = created.id();
        self.mirror.append_task(created);
        Ok(Some(id))
    }

    /// Replaces a task's text from raw input.
    ///
    /// The input is trimmed; when the trim is empty, or the task is absent
    /// from the mirror, nothing happens and `Ok(false)` is returned.
    /// Returns whether the mirror changed.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteBoardError`] when the round trip fails.
    pub async fn edit_task(&mut self, id: TaskId, raw: &str) -> RemoteBoardResult<bool> {
        let Ok(text) = TaskText::new(raw) else {
            return Ok(false);
        };
        if self.mirror.find(id).is_none() {
            return Ok(false);
        }
        let patch = TaskPatch::new().with_text(text);
        self.update_and_merge(id, patch).await
    }

    /// Flips a task's completion flag; a no-op when the identifier is
    /// absent from the mirror. Returns whether the mirror changed.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteBoardError`] when the round trip fails.
    pub async fn toggle_task(&mut self, id: TaskId) -> RemoteBoardResult<bool> {
        let Some(task) = self.mirror.find(id) else {
            return Ok(false);
        };
        let patch = TaskPatch::new().with_done(!task.done());
        self.update_and_merge(id, patch).await
    }

    /// Sets or clears a task's color; a no-op when the identifier is
    /// absent from the mirror. Returns whether the mirror changed.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteBoardError`] when the round trip fails.
    pub async fn recolor_task(
        &mut self,
        id: TaskId,
        color: Option<TaskColor>,
    ) -> RemoteBoardResult<bool> {
        if self.mirror.find(id).is_none() {
            return Ok(false);
        }
        let patch = TaskPatch::new().with_color(color);
        self.update_and_merge(id, patch).await
    }

    /// Deletes a task remotely, then drops it from the mirror.
    ///
    /// A no-op returning `Ok(false)` when the identifier is absent from
    /// the mirror. When the remote delete fails, the mirror is left
    /// unchanged and the error is propagated.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteBoardError`] when the round trip fails.
    pub async fn delete_task(&mut self, id: TaskId) -> RemoteBoardResult<bool> {
        if self.mirror.find(id).is_none() {
            return Ok(false);
        }
        self.service.delete(id).await?;
        Ok(self.mirror.remove_task(id))
    }

    /// Merges a server-updated task into the mirror, discarding responses
    /// for tasks that are no longer present.
    async fn update_and_merge(&mut self, id: TaskId, patch: TaskPatch) -> RemoteBoardResult<bool> {
        let updated = self.service.update(id, patch).await?;
        let merged = self.mirror.replace_task(updated);
        if !merged {
            debug!(%id, "discarding update response for task no longer in the mirror");
        }
        Ok(merged)
    }
}
