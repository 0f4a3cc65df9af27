//! # Checklist Runtime
//!
//! Runtime implementation for the Checklist architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and snapshot notification.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that owns state and runs the reducer
//! - **Feedback Drain**: Executes effect descriptions and feeds dispatched
//!   actions back into the reducer, in order
//! - **Subscribers**: Observers notified with the new snapshot after every
//!   send (gesture → action → new snapshot → re-render)
//!
//! The store is strictly synchronous and single-threaded: `send` takes
//! `&mut self`, completes before returning, and operations are ordered by
//! the sequence of calls. There are no locks, queues, or coordination
//! primitives because the domain model requires none.
//!
//! ## Example
//!
//! ```ignore
//! use checklist_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use checklist_core::{effect::Effect, reducer::Reducer};
use std::collections::VecDeque;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Domain operations are total, so the only failure the store can
    /// surface is a runaway effect feedback loop.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// The effect feedback loop exceeded the configured drain limit
        ///
        /// A reducer kept dispatching follow-up actions past
        /// `StoreConfig::max_feedback_actions`. This indicates a cycle in
        /// the reducer's effect logic, not bad user input.
        #[error("Effect feedback exceeded limit of {0} actions in one send")]
        FeedbackOverflow(usize),
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::default().with_max_feedback_actions(64);
/// let store = Store::with_config(state, reducer, env, config);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of feedback actions drained in a single `send`
    pub max_feedback_actions: usize,
    /// Whether subscribers are notified even when a send was absorbed as a
    /// no-op
    pub notify_on_noop: bool,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize, notify_on_noop: bool) -> Self {
        Self {
            max_feedback_actions,
            notify_on_noop,
        }
    }

    /// Set the feedback drain limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }

    /// Set whether subscribers are notified on absorbed no-ops
    ///
    /// The presentation layer re-renders on every snapshot change; with
    /// this enabled it re-renders on every gesture instead, which is what
    /// the shipped app does.
    #[must_use]
    pub const fn with_notify_on_noop(mut self, notify: bool) -> Self {
        self.notify_on_noop = notify;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 1024,
            notify_on_noop: true,
        }
    }
}

/// Store module - the synchronous runtime
pub mod store {
    use super::{Effect, Reducer, StoreConfig, StoreError, VecDeque};

    /// Type alias for snapshot subscriber callbacks
    type Subscriber<S> = Box<dyn FnMut(&S)>;

    /// The Store - synchronous runtime for the architecture
    ///
    /// The Store manages:
    /// 1. State (exclusively owned, mutated only through `send`)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Feedback drain (dispatched actions re-enter the reducer in order)
    /// 5. Subscribers (re-render hooks invoked after every send)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut store = Store::new(
    ///     TaskListState::default(),
    ///     TaskReducer::new(),
    ///     production_environment(),
    /// );
    ///
    /// store.send(TaskAction::CommitDraft)?;
    /// let tasks = store.state(|s| s.tasks.len());
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
        subscribers: Vec<Subscriber<S>>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses the default configuration (feedback drain limit 1024,
        /// subscribers notified on every send).
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with custom configuration
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
                subscribers: Vec::new(),
            }
        }

        /// Register a subscriber invoked with the new snapshot after every
        /// send
        ///
        /// This is the re-render hook: the presentation layer registers a
        /// callback here and redraws from the snapshot it receives.
        pub fn subscribe(&mut self, subscriber: impl FnMut(&S) + 'static) {
            self.subscribers.push(Box::new(subscriber));
        }

        /// Read from the current state through a closure
        ///
        /// # Example
        ///
        /// ```ignore
        /// let draft = store.state(|s| s.draft.clone());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Get a clone of the current snapshot
        ///
        /// This is the `(tasks, draft)` pair the presentation layer renders
        /// from.
        #[must_use]
        pub fn snapshot(&self) -> S
        where
            S: Clone,
        {
            self.state.clone()
        }

        fn notify(&mut self) {
            for subscriber in &mut self.subscribers {
                subscriber(&self.state);
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone + PartialEq,
    {
        /// Send an action to the store
        ///
        /// This is the primary way to interact with the store:
        /// 1. Calls the reducer with (state, action, environment)
        /// 2. Drains returned effects - dispatched actions re-enter the
        ///    reducer in FIFO order
        /// 3. Notifies subscribers with the resulting snapshot
        ///
        /// The call is synchronous and atomic with respect to the single
        /// thread of control: when it returns, the action and every
        /// feedback action have been fully reduced.
        ///
        /// Subscribers are notified after every send, or only when the
        /// snapshot actually changed if the store was configured with
        /// `notify_on_noop(false)`.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackOverflow`] if the reducer keeps
        /// dispatching follow-up actions past the configured drain limit.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<(), StoreError> {
            let before = if self.config.notify_on_noop {
                None
            } else {
                Some(self.state.clone())
            };

            let mut queue = VecDeque::new();
            queue.push_back(action);

            let mut drained = 0usize;
            while let Some(next) = queue.pop_front() {
                if drained > self.config.max_feedback_actions {
                    tracing::error!(
                        limit = self.config.max_feedback_actions,
                        "effect feedback loop exceeded drain limit"
                    );
                    return Err(StoreError::FeedbackOverflow(
                        self.config.max_feedback_actions,
                    ));
                }
                drained += 1;

                let effects = self
                    .reducer
                    .reduce(&mut self.state, next, &self.environment);

                let mut followups = Vec::new();
                for effect in effects {
                    effect.drain_into(&mut followups);
                }
                if !followups.is_empty() {
                    tracing::debug!(count = followups.len(), "queueing feedback actions");
                }
                queue.extend(followups);
            }

            tracing::debug!(actions = drained, "send complete");
            if before.is_none_or(|b| b != self.state) {
                self.notify();
            }
            Ok(())
        }
    }

    impl<S, A, E, R> std::fmt::Debug for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .field("config", &self.config)
                .field("subscribers", &self.subscribers.len())
                .finish_non_exhaustive()
        }
    }
}

pub use store::Store;
