//! Wire model types for the remote task service.
//!
//! These types map the server's JSON payloads to Rust structs. They serve as
//! the boundary between the wire format and domain layers: identifiers are
//! bare numbers, the timestamp field is named `date`, and an absent color is
//! the empty string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::domain::{PersistedTaskData, Task, TaskColor, TaskId, TaskText};
use crate::board::ports::{TaskDraft, TaskPatch, TaskServiceError};

/// Wire representation of a stored task.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskModel {
    /// Server-assigned identifier.
    pub id: u64,
    /// Task text.
    pub text: String,
    /// Completion flag.
    pub done: bool,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
    /// Color name; empty means unset.
    #[serde(default)]
    pub color: String,
}

impl TaskModel {
    /// Maps the wire payload into a domain task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidResponse`] when the text is blank
    /// or the color is not a palette name.
    pub fn into_domain(self) -> Result<Task, TaskServiceError> {
        let text = TaskText::new(self.text)
            .map_err(|err| TaskServiceError::InvalidResponse(err.to_string()))?;
        let color = parse_wire_color(&self.color)?;
        Ok(Task::from_persisted(PersistedTaskData {
            id: TaskId::from_value(self.id),
            text,
            done: self.done,
            created_at: self.date,
            color,
        }))
    }
}

/// Wire payload for creating a task.
#[derive(Debug, Clone, Serialize)]
pub struct NewTaskModel {
    /// Task text.
    pub text: String,
    /// Completion flag.
    pub done: bool,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
    /// Color name; empty means unset.
    pub color: String,
}

impl From<&TaskDraft> for NewTaskModel {
    fn from(draft: &TaskDraft) -> Self {
        Self {
            text: draft.text().as_str().to_owned(),
            done: draft.done(),
            date: draft.created_at(),
            color: wire_color(draft.color()),
        }
    }
}

/// Wire payload for a partial update; absent fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchModel {
    /// Replacement text, if patched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Completion flag, if patched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    /// Color name, if patched; empty clears the highlight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<&TaskPatch> for PatchModel {
    fn from(patch: &TaskPatch) -> Self {
        Self {
            text: patch.text().map(|text| text.as_str().to_owned()),
            done: patch.done(),
            color: patch.color().map(wire_color),
        }
    }
}

/// Encodes an optional color in wire form.
fn wire_color(color: Option<TaskColor>) -> String {
    color.map_or_else(String::new, |value| value.as_str().to_owned())
}

/// Decodes a wire color; the empty string is "unset".
fn parse_wire_color(raw: &str) -> Result<Option<TaskColor>, TaskServiceError> {
    if raw.is_empty() {
        return Ok(None);
    }
    TaskColor::try_from(raw)
        .map(Some)
        .map_err(|err| TaskServiceError::InvalidResponse(err.to_string()))
}
