//! Domain types for the task list.
//!
//! The screen is one ordered list of tasks plus the draft text the user is
//! currently typing. Insertion order is display order, so the list is a
//! `Vec` rather than a map; lookups are linear scans over a short list.

use serde::{Deserialize, Serialize};

/// Unique identifier for a task
///
/// An opaque token assigned at creation time. Identity and lookup only;
/// nothing parses it or relies on its shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Wrap a generated token
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the token as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskId {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task on the list
///
/// `id` and `text` are immutable after creation (there is no edit
/// operation); only `done` changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// User-supplied text, exactly as typed; never empty
    pub text: String,
    /// Completion flag, toggled independently per task
    pub done: bool,
}

impl Task {
    /// Creates a new, not-yet-done task
    #[must_use]
    pub const fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            done: false,
        }
    }
}

/// The full screen state: the ordered task list and the pending draft
///
/// This is the snapshot the presentation layer renders from. It is owned
/// by a single store instance and discarded on process exit; nothing is
/// persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListState {
    /// All tasks, in insertion order
    pub tasks: Vec<Task>,
    /// Text not yet committed to the list
    pub draft: String,
}

impl TaskListState {
    /// Creates an empty state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            draft: String::new(),
        }
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn exists(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// True iff at least one task is done
    ///
    /// The presentation layer uses this to decide whether to offer the
    /// clear-completed action.
    #[must_use]
    pub fn has_completed(&self) -> bool {
        self.tasks.iter().any(|t| t.done)
    }
}
