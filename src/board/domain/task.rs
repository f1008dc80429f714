//! Task aggregate and persisted-data reconstruction.

use super::{TaskColor, TaskId, TaskText};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Fields change only through the named mutators, which the state store
/// invokes while applying transitions. The creation timestamp is immutable
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    done: bool,
    created_at: DateTime<Utc>,
    color: Option<TaskColor>,
}

/// Parameter object for reconstructing a task from storage or a wire payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task text.
    pub text: TaskText,
    /// Persisted completion flag.
    pub done: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted color, if any.
    pub color: Option<TaskColor>,
}

impl Task {
    /// Creates a fresh task: not done, no color, created now.
    #[must_use]
    pub fn new(id: TaskId, text: TaskText, clock: &impl Clock) -> Self {
        Self {
            id,
            text,
            done: false,
            created_at: clock.utc(),
            color: None,
        }
    }

    /// Reconstructs a task from persisted data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            text: data.text,
            done: data.done,
            created_at: data.created_at,
            color: data.color,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn done(&self) -> bool {
        self.done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the assigned color, if any.
    #[must_use]
    pub const fn color(&self) -> Option<TaskColor> {
        self.color
    }

    /// Replaces the task text.
    pub fn set_text(&mut self, text: TaskText) {
        self.text = text;
    }

    /// Sets the completion flag.
    pub const fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Flips the completion flag.
    pub const fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    /// Sets or clears the assigned color.
    pub const fn set_color(&mut self, color: Option<TaskColor>) {
        self.color = color;
    }
}
