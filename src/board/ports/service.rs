//! Remote task service port: CRUD against a server-owned collection.

use crate::board::domain::{Task, TaskColor, TaskId, TaskText};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Client-side fields of a task to be created by the remote service.
///
/// The server assigns the identifier and may override the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    text: TaskText,
    done: bool,
    created_at: DateTime<Utc>,
    color: Option<TaskColor>,
}

impl TaskDraft {
    /// Creates a draft for a fresh task: not done, no color, created now.
    #[must_use]
    pub fn new(text: TaskText, clock: &impl Clock) -> Self {
        Self {
            text,
            done: false,
            created_at: clock.utc(),
            color: None,
        }
    }

    /// Returns the draft text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the draft completion flag.
    #[must_use]
    pub const fn done(&self) -> bool {
        self.done
    }

    /// Returns the draft creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the draft color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<TaskColor> {
        self.color
    }
}

/// Partial update for an existing remote task.
///
/// Absent fields are left untouched by the server. The color field is
/// doubly optional: `Some(None)` clears the highlight, `None` leaves it
/// alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    text: Option<TaskText>,
    done: Option<bool>,
    color: Option<Option<TaskColor>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement text.
    #[must_use]
    pub fn with_text(mut self, text: TaskText) -> Self {
        self.text = Some(text);
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    /// Sets or clears the color.
    #[must_use]
    pub const fn with_color(mut self, color: Option<TaskColor>) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns the replacement text, if patched.
    #[must_use]
    pub const fn text(&self) -> Option<&TaskText> {
        self.text.as_ref()
    }

    /// Returns the completion flag, if patched.
    #[must_use]
    pub const fn done(&self) -> Option<bool> {
        self.done
    }

    /// Returns the color change, if patched.
    #[must_use]
    pub const fn color(&self) -> Option<Option<TaskColor>> {
        self.color
    }

    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none() && self.done.is_none() && self.color.is_none()
    }
}

/// Remote task service contract.
///
/// Each call is an independent round trip; the port neither retries nor
/// sequences calls against each other.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Returns the server's task collection in its order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the round trip fails or the
    /// response cannot be mapped to domain tasks.
    async fn list(&self) -> TaskServiceResult<Vec<Task>>;

    /// Creates a task from a draft; the server assigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the round trip fails or the
    /// response cannot be mapped to a domain task.
    async fn create(&self, draft: TaskDraft) -> TaskServiceResult<Task>;

    /// Applies a partial update and returns the server's updated task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the server does not know
    /// the identifier.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskServiceResult<Task>;

    /// Deletes a task. Success means the caller may drop it locally.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the server does not know
    /// the identifier; any error means the local view must stay unchanged.
    async fn delete(&self, id: TaskId) -> TaskServiceResult<()>;
}

/// Errors returned by task service implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskServiceError {
    /// The server does not know the task identifier.
    #[error("remote task not found: {0}")]
    NotFound(TaskId),

    /// The server answered with a payload that does not map to the domain.
    #[error("invalid remote response: {0}")]
    InvalidResponse(String),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskServiceError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
