//! Derived-view computation: filter criteria, visible tasks, and counts.

use super::{ParseStatusFilterError, Task, TaskColor, TaskList};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Completion-status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Show every task.
    #[default]
    All,
    /// Show only tasks that are not done.
    Active,
    /// Show only tasks that are done.
    Completed,
}

impl StatusFilter {
    /// Returns the filter name in canonical storage format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Returns whether a task's completion flag satisfies this filter.
    #[must_use]
    pub const fn admits(self, done: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !done,
            Self::Completed => done,
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseStatusFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseStatusFilterError(value.to_owned())),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Independent criteria determining which tasks are visible.
///
/// Criteria are owned by the caller, never by the state store. The search
/// text is kept as typed; trimming and case folding happen at match time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    status: StatusFilter,
    search: String,
    colors: BTreeSet<TaskColor>,
}

impl FilterCriteria {
    /// Creates pass-through criteria: every task is visible.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status filter.
    #[must_use]
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Sets the free-text search.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the color set; an empty set disables color filtering.
    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = TaskColor>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Returns the status filter.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns the search text as typed.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the color set.
    #[must_use]
    pub const fn colors(&self) -> &BTreeSet<TaskColor> {
        &self.colors
    }

    /// Replaces the status filter.
    pub const fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Replaces the color set.
    pub fn set_colors(&mut self, colors: impl IntoIterator<Item = TaskColor>) {
        self.colors = colors.into_iter().collect();
    }

    /// Adds a color to the set; returns whether the set changed.
    pub fn add_color(&mut self, color: TaskColor) -> bool {
        self.colors.insert(color)
    }

    /// Removes a color from the set; returns whether the set changed.
    pub fn remove_color(&mut self, color: TaskColor) -> bool {
        self.colors.remove(&color)
    }

    /// Returns whether these criteria keep every task visible.
    ///
    /// When true, filtering can skip the per-task predicate entirely; the
    /// result is behaviorally identical either way.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.status == StatusFilter::All && self.colors.is_empty() && self.search.trim().is_empty()
    }

    /// Returns whether a single task satisfies all three criteria.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_status(task) && self.matches_search(task) && self.matches_color(task)
    }

    fn matches_status(&self, task: &Task) -> bool {
        self.status.admits(task.done())
    }

    fn matches_search(&self, task: &Task) -> bool {
        let needle = self.search.trim().to_lowercase();
        needle.is_empty() || task.text().as_str().to_lowercase().contains(&needle)
    }

    fn matches_color(&self, task: &Task) -> bool {
        self.colors.is_empty()
            || task
                .color()
                .is_some_and(|color| self.colors.contains(&color))
    }
}

/// Summary counts over the unfiltered collection.
///
/// Counts always describe the whole collection, independent of the active
/// filter criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    /// Number of tasks in the collection.
    pub total: usize,
    /// Number of tasks with `done == false`.
    pub active: usize,
    /// Number of tasks with `done == true`.
    pub completed: usize,
}

/// The derived view: visible tasks in original order plus summary counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    tasks: Vec<Task>,
    counts: TaskCounts,
}

impl BoardView {
    /// Returns the visible tasks in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the summary counts.
    #[must_use]
    pub const fn counts(&self) -> TaskCounts {
        self.counts
    }
}

impl TaskList {
    /// Returns the tasks visible under the given criteria, in collection
    /// order.
    #[must_use]
    pub fn visible<'a>(&'a self, criteria: &FilterCriteria) -> Vec<&'a Task> {
        if criteria.is_pass_through() {
            return self.tasks().iter().collect();
        }
        self.tasks()
            .iter()
            .filter(|task| criteria.matches(task))
            .collect()
    }

    /// Computes summary counts over the whole collection.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks().iter().filter(|task| task.done()).count();
        TaskCounts {
            total: self.len(),
            active: self.len() - completed,
            completed,
        }
    }

    /// Projects the derived view for the given criteria.
    #[must_use]
    pub fn view(&self, criteria: &FilterCriteria) -> BoardView {
        BoardView {
            tasks: self.visible(criteria).into_iter().cloned().collect(),
            counts: self.counts(),
        }
    }
}
