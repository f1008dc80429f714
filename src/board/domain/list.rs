//! Ordered task collection and the transition state machine.

use super::{Task, TaskColor, TaskId, TaskText};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A named state transition with its payload.
///
/// The set is closed and [`TaskList::apply`] matches it exhaustively, so an
/// unrecognized transition cannot be expressed, let alone dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Appends a fresh task with the given text.
    Add {
        /// Text for the new task.
        text: TaskText,
    },
    /// Removes the task with the given identifier.
    Delete {
        /// Identifier of the task to remove.
        id: TaskId,
    },
    /// Replaces the text of an existing task.
    Edit {
        /// Identifier of the task to edit.
        id: TaskId,
        /// Replacement text.
        text: TaskText,
    },
    /// Flips the completion flag of an existing task.
    Toggle {
        /// Identifier of the task to toggle.
        id: TaskId,
    },
    /// Sets or clears the color of an existing task.
    Recolor {
        /// Identifier of the task to recolor.
        id: TaskId,
        /// New color; `None` clears the highlight.
        color: Option<TaskColor>,
    },
    /// Marks every task as completed.
    MarkAllCompleted,
    /// Removes every completed task.
    ClearCompleted,
}

/// Ordered collection of tasks plus the identifier allocator.
///
/// Insertion order is preserved by every transition; deletion keeps the
/// relative order of the survivors. The allocator only ever increments, so
/// identifiers are unique and never reused, even after deletion.
///
/// Restoring from a snapshot normalizes the allocator to one past the
/// largest stored identifier, so a lagging counter in a tampered snapshot
/// cannot cause reuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TaskListRepr")]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

/// Serde representation of a stored task list.
#[derive(Deserialize)]
struct TaskListRepr {
    tasks: Vec<Task>,
    #[serde(default)]
    next_id: u64,
}

impl From<TaskListRepr> for TaskList {
    fn from(repr: TaskListRepr) -> Self {
        let mut list = Self {
            tasks: repr.tasks,
            next_id: repr.next_id,
        };
        list.normalize_allocator();
        list
    }
}

impl TaskList {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a collection from externally owned tasks.
    ///
    /// Used to mirror a remote service's collection, where the server owns
    /// identifier assignment. The allocator is positioned past the largest
    /// incoming identifier.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut list = Self { tasks, next_id: 1 };
        list.normalize_allocator();
        list
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Applies a transition, producing the next snapshot.
    ///
    /// The receiver is never mutated. Transitions addressing an absent
    /// identifier are no-ops: the output equals the input. The clock is
    /// read only by [`Transition::Add`], for the creation timestamp.
    #[must_use]
    pub fn apply(&self, transition: &Transition, clock: &impl Clock) -> Self {
        let mut next = self.clone();
        match transition {
            Transition::Add { text } => {
                let id = next.allocate_id();
                next.tasks.push(Task::new(id, text.clone(), clock));
            }
            Transition::Delete { id } => {
                next.tasks.retain(|task| task.id() != *id);
            }
            Transition::Edit { id, text } => {
                if let Some(task) = next.find_mut(*id) {
                    task.set_text(text.clone());
                }
            }
            Transition::Toggle { id } => {
                if let Some(task) = next.find_mut(*id) {
                    task.toggle_done();
                }
            }
            Transition::Recolor { id, color } => {
                if let Some(task) = next.find_mut(*id) {
                    task.set_color(*color);
                }
            }
            Transition::MarkAllCompleted => {
                for task in &mut next.tasks {
                    task.set_done(true);
                }
            }
            Transition::ClearCompleted => {
                next.tasks.retain(|task| !task.done());
            }
        }
        next
    }

    /// Appends a server-created task to a mirrored collection.
    ///
    /// Mirror operation for the remote variant: the task arrives with a
    /// server-assigned identifier. Keeps the allocator ahead of it.
    pub fn append_task(&mut self, task: Task) {
        self.next_id = self.next_id.max(task.id().value().saturating_add(1));
        self.tasks.push(task);
    }

    /// Replaces a task in place, preserving its position.
    ///
    /// Mirror operation for the remote variant. Returns `false` without
    /// changing anything when no task has the incoming identifier, which is
    /// how stale server responses for already-deleted tasks are discarded.
    pub fn replace_task(&mut self, task: Task) -> bool {
        self.find_mut(task.id()).is_some_and(|slot| {
            *slot = task;
            true
        })
    }

    /// Removes a task by identifier.
    ///
    /// Mirror operation for the remote variant. Returns whether a task was
    /// removed.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        self.tasks.len() != before
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::from_value(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    fn normalize_allocator(&mut self) {
        let past_largest = self
            .tasks
            .iter()
            .map(|task| task.id().value().saturating_add(1))
            .max()
            .unwrap_or(1);
        self.next_id = self.next_id.max(past_largest).max(1);
    }
}
