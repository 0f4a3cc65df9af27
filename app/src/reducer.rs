//! Reducer logic for the task list.
//!
//! Every operation is a total function from current state to next state:
//! invalid input (an empty draft on commit, an unknown id on toggle or
//! remove) is absorbed as a logged no-op, never surfaced as an error.

use crate::types::{Task, TaskId, TaskListState};
use checklist_core::{SmallVec, effect::Effect, environment::IdGenerator, reducer::Reducer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// All gestures the screen can produce
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAction {
    /// Replace the draft text unconditionally
    SetDraft {
        /// The new draft contents
        text: String,
    },

    /// Turn the current draft into a task at the end of the list
    ///
    /// A whitespace-only draft is absorbed as a no-op and left untouched.
    CommitDraft,

    /// Flip the `done` flag on one task
    Toggle {
        /// Task to toggle
        id: TaskId,
    },

    /// Remove one task from the list
    Remove {
        /// Task to remove
        id: TaskId,
    },

    /// Remove every task whose `done` flag is set
    ClearCompleted,
}

/// Environment dependencies for the task reducer
#[derive(Clone)]
pub struct TaskEnvironment {
    /// Generator for fresh task ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TaskEnvironment {
    /// Creates a new `TaskEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl std::fmt::Debug for TaskEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the task list
#[derive(Clone, Debug, Default)]
pub struct TaskReducer;

impl TaskReducer {
    /// Creates a new `TaskReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TaskReducer {
    type State = TaskListState;
    type Action = TaskAction;
    type Environment = TaskEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TaskAction::SetDraft { text } => {
                state.draft = text;
            },

            TaskAction::CommitDraft => {
                if state.draft.trim().is_empty() {
                    tracing::debug!("commit with empty draft absorbed");
                } else {
                    // Text is committed exactly as typed, untrimmed.
                    let id = TaskId::from(env.ids.next_id());
                    tracing::info!(%id, "task committed");
                    state.tasks.push(Task::new(id, std::mem::take(&mut state.draft)));
                }
            },

            TaskAction::Toggle { id } => {
                if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                    task.done = !task.done;
                    tracing::debug!(%id, done = task.done, "task toggled");
                } else {
                    tracing::debug!(%id, "toggle for unknown id absorbed");
                }
            },

            TaskAction::Remove { id } => {
                let before = state.tasks.len();
                state.tasks.retain(|t| t.id != id);
                if state.tasks.len() == before {
                    tracing::debug!(%id, "remove for unknown id absorbed");
                } else {
                    tracing::info!(%id, "task removed");
                }
            },

            TaskAction::ClearCompleted => {
                let before = state.tasks.len();
                state.tasks.retain(|t| !t.done);
                tracing::info!(cleared = before - state.tasks.len(), "completed tasks cleared");
            },
        }

        SmallVec::new()
    }
}
