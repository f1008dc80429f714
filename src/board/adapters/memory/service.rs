//! In-memory task service: a fake remote server for tests and demos.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::domain::{PersistedTaskData, Task, TaskId};
use crate::board::ports::{TaskDraft, TaskPatch, TaskService, TaskServiceError, TaskServiceResult};

/// Thread-safe in-memory task service.
///
/// Behaves like the real server: it owns the collection, assigns strictly
/// increasing identifiers, and honors drafts and patches field by field.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskService {
    state: Arc<RwLock<InMemoryServiceState>>,
}

#[derive(Debug)]
struct InMemoryServiceState {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for InMemoryServiceState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskService {
    /// Creates an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service preloaded with tasks, for drift and restore tests.
    ///
    /// The identifier allocator is positioned past the largest given
    /// identifier.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks
            .iter()
            .map(|task| task.id().value().saturating_add(1))
            .max()
            .unwrap_or(1);
        Self {
            state: Arc::new(RwLock::new(InMemoryServiceState { tasks, next_id })),
        }
    }
}

fn apply_patch(task: &mut Task, patch: &TaskPatch) {
    if let Some(text) = patch.text() {
        task.set_text(text.clone());
    }
    if let Some(done) = patch.done() {
        task.set_done(done);
    }
    if let Some(color) = patch.color() {
        task.set_color(color);
    }
}

#[async_trait]
impl TaskService for InMemoryTaskService {
    async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskServiceError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.tasks.clone())
    }

    async fn create(&self, draft: TaskDraft) -> TaskServiceResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskServiceError::transport(std::io::Error::other(err.to_string())))?;
        let id = TaskId::from_value(state.next_id);
        state.next_id = state.next_id.saturating_add(1);
        let task = Task::from_persisted(PersistedTaskData {
            id,
            text: draft.text().clone(),
            done: draft.done(),
            created_at: draft.created_at(),
            color: draft.color(),
        });
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskServiceError::transport(std::io::Error::other(err.to_string())))?;
        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskServiceError::NotFound(id))?;
        apply_patch(task, &patch);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskServiceError::transport(std::io::Error::other(err.to_string())))?;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id() != id);
        if state.tasks.len() == before {
            return Err(TaskServiceError::NotFound(id));
        }
        Ok(())
    }
}
