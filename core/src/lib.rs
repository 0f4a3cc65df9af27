//! # Checklist Core
//!
//! Core traits and types for the Checklist architecture.
//!
//! This crate provides the fundamental abstractions for building
//! unidirectional-data-flow features using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer (user gestures)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden work inside reducers)
//! - Dependency Injection via Environment
//!
//! Everything here is strictly synchronous. The domain this architecture
//! hosts is a single-screen UI driven by one gesture at a time, so effects
//! are drained inline by the store rather than spawned onto a runtime.

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TaskReducer {
    ///     type State = TaskListState;
    ///     type Action = TaskAction;
    ///     type Environment = TaskEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TaskListState,
    ///         action: TaskAction,
    ///         env: &TaskEnvironment,
    ///     ) -> SmallVec<[Effect<TaskAction>; 4]> {
    ///         match action {
    ///             TaskAction::ClearCompleted => {
    ///                 state.tasks.retain(|t| !t.done);
    ///                 SmallVec::new()
    ///             }
    ///             _ => SmallVec::new(),
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// A vector of effects to be executed by the store
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe work the store should perform after a reduce step.
/// They are values (not execution) and are composable.
pub mod effect {
    /// Effect type - describes follow-up work to be executed by the store
    ///
    /// Effects are NOT executed inside the reducer. They are descriptions of
    /// what should happen next, returned from reducers and drained by the
    /// Store runtime.
    ///
    /// The only effectful thing a synchronous feature can ask for is to feed
    /// another action back into the reducer, so the vocabulary is small:
    /// a no-op, a dispatched action, and an ordered batch of either.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer
        Dispatch(Box<Action>),

        /// Run effects in order
        Batch(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Create a dispatch effect from an action
        #[must_use]
        pub fn dispatch(action: Action) -> Effect<Action> {
            Effect::Dispatch(Box::new(action))
        }

        /// Group effects to run in order
        #[must_use]
        pub const fn batch(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Batch(effects)
        }

        /// Flatten this effect into the actions it dispatches, in order
        ///
        /// `Effect::None` contributes nothing; nested batches are walked
        /// depth-first so dispatch order matches declaration order.
        pub fn drain_into(self, out: &mut Vec<Action>) {
            match self {
                Effect::None => {},
                Effect::Dispatch(action) => out.push(*action),
                Effect::Batch(effects) => {
                    for effect in effects {
                        effect.drain_into(out);
                    }
                },
            }
        }

        /// Check whether this effect dispatches no actions at all
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Dispatch(_) => false,
                Effect::Batch(effects) => effects.iter().all(Effect::is_none),
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter, so reducers stay deterministic under test.
pub mod environment {
    use chrono::{DateTime, Utc};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use checklist_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let now = clock.now();
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Id generator trait - produces opaque tokens that are unique for the
    /// lifetime of the process
    ///
    /// Tokens are used only for identity and lookup; callers must not parse
    /// them or rely on their shape.
    pub trait IdGenerator: Send + Sync {
        /// Produce the next unique token
        fn next_id(&self) -> String;
    }

    /// Production id generator: wall-clock milliseconds plus an
    /// always-incrementing sequence number
    ///
    /// A coarse clock reading alone can collide when two ids are requested
    /// within the same tick, so the sequence number acts as the tie-break.
    /// Uniqueness holds even if the clock is frozen or steps backwards.
    pub struct WallClockIds {
        clock: Arc<dyn Clock>,
        seq: AtomicU64,
    }

    impl WallClockIds {
        /// Create a generator reading milliseconds from the given clock
        #[must_use]
        pub fn new(clock: Arc<dyn Clock>) -> Self {
            Self {
                clock,
                seq: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for WallClockIds {
        fn next_id(&self) -> String {
            let millis = self.clock.now().timestamp_millis();
            let seq = self.seq.fetch_add(1, Ordering::Relaxed);
            format!("{millis}-{seq}")
        }
    }

    impl std::fmt::Debug for WallClockIds {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("WallClockIds")
                .field("seq", &self.seq)
                .finish_non_exhaustive()
        }
    }
}

// Re-export the trait and the production environment at the crate root
pub use effect::Effect;
pub use environment::{Clock, IdGenerator, SystemClock, WallClockIds};
pub use reducer::Reducer;

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use super::environment::{Clock, IdGenerator, SystemClock, WallClockIds};
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::HashSet;
    use std::sync::Arc;

    struct FrozenClock(DateTime<Utc>);

    impl Clock for FrozenClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn frozen_instant() -> DateTime<Utc> {
        match Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0) {
            chrono::LocalResult::Single(t) => t,
            _ => unreachable!("hardcoded timestamp is valid"),
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum TestAction {
        A,
        B,
        C,
    }

    #[test]
    fn effect_none_drains_nothing() {
        let mut out = Vec::new();
        Effect::<TestAction>::None.drain_into(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn effect_dispatch_drains_single_action() {
        let mut out = Vec::new();
        Effect::dispatch(TestAction::A).drain_into(&mut out);
        assert_eq!(out, vec![TestAction::A]);
    }

    #[test]
    fn effect_batch_preserves_order() {
        let effect = Effect::batch(vec![
            Effect::dispatch(TestAction::A),
            Effect::None,
            Effect::batch(vec![Effect::dispatch(TestAction::B)]),
            Effect::dispatch(TestAction::C),
        ]);

        let mut out = Vec::new();
        effect.drain_into(&mut out);
        assert_eq!(out, vec![TestAction::A, TestAction::B, TestAction::C]);
    }

    #[test]
    fn effect_is_none_sees_through_batches() {
        assert!(Effect::<TestAction>::None.is_none());
        assert!(Effect::<TestAction>::batch(vec![Effect::None, Effect::None]).is_none());
        assert!(!Effect::dispatch(TestAction::A).is_none());
        assert!(!Effect::batch(vec![Effect::None, Effect::dispatch(TestAction::B)]).is_none());
    }

    #[test]
    fn system_clock_does_not_go_backwards() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn wall_clock_ids_are_unique_under_a_frozen_clock() {
        // A frozen clock forces every id into the same millisecond, so
        // uniqueness rests entirely on the sequence tie-break.
        let ids = WallClockIds::new(Arc::new(FrozenClock(frozen_instant())));

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next_id()));
        }
    }

    #[test]
    fn wall_clock_ids_embed_the_clock_reading() {
        let frozen = frozen_instant();
        let millis = frozen.timestamp_millis();
        let ids = WallClockIds::new(Arc::new(FrozenClock(frozen)));

        let id = ids.next_id();
        assert!(id.starts_with(&millis.to_string()));
    }
}
