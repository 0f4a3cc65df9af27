//! Single-screen to-do list built on the Checklist architecture.
//!
//! This crate is the feature itself: domain types, the gesture reducer,
//! and the presentation pieces (theme palettes and a pure renderer). It
//! demonstrates:
//!
//! - A fixed-shape domain model (`Task` with id, text, done)
//! - Total operations - invalid input degrades to a logged no-op
//! - Unique id generation through the injected environment
//! - Theme as explicit context passed into a pure render function
//! - Testing with `ReducerTest` and property tests over action sequences
//!
//! # Quick Start
//!
//! ```no_run
//! use checklist_app::{TaskAction, TaskEnvironment, TaskReducer, TaskListState};
//! use checklist_core::environment::{SystemClock, WallClockIds};
//! use checklist_runtime::Store;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), checklist_runtime::StoreError> {
//! // Create environment and store
//! let env = TaskEnvironment::new(Arc::new(WallClockIds::new(Arc::new(SystemClock))));
//! let mut store = Store::new(TaskListState::new(), TaskReducer::new(), env);
//!
//! // Type and commit a task
//! store.send(TaskAction::SetDraft { text: "Buy milk".to_string() })?;
//! store.send(TaskAction::CommitDraft)?;
//!
//! // Read state
//! let count = store.state(|s| s.count());
//! println!("Tasks: {count}");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod render;
pub mod theme;
pub mod types;

// Re-export commonly used types
pub use reducer::{TaskAction, TaskEnvironment, TaskReducer};
pub use render::render;
pub use theme::{Palette, Rgb, Theme};
pub use types::{Task, TaskId, TaskListState};
