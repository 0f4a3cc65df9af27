//! Scripted demo for the to-do screen.
//!
//! Drives the store through a typical gesture sequence and prints the
//! rendered screen after the interesting steps, in both themes.

use checklist_app::{TaskAction, TaskEnvironment, TaskReducer, TaskListState, Theme, render};
use checklist_core::environment::{SystemClock, WallClockIds};
use checklist_runtime::Store;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checklist_app=debug,checklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== To-Do Screen Demo ===\n");

    // Create environment and store
    let env = TaskEnvironment::new(Arc::new(WallClockIds::new(Arc::new(SystemClock))));
    let mut store = Store::new(TaskListState::new(), TaskReducer::new(), env);

    // Observe every snapshot the way a shell's re-render hook would
    store.subscribe(|snapshot: &TaskListState| {
        tracing::debug!(
            tasks = snapshot.count(),
            draft_len = snapshot.draft.len(),
            "snapshot changed"
        );
    });

    // Type and commit three tasks
    for text in ["Buy milk", "Write documentation", "Water the plants"] {
        store.send(TaskAction::SetDraft {
            text: text.to_string(),
        })?;
        store.send(TaskAction::CommitDraft)?;
    }

    println!("{}", render(&store.snapshot(), Theme::Light));

    // Mark the first two done
    let (first, second) = store.state(|s| (s.tasks[0].id.clone(), s.tasks[1].id.clone()));
    store.send(TaskAction::Toggle { id: first })?;
    store.send(TaskAction::Toggle { id: second.clone() })?;

    // Changed our mind about the second one
    store.send(TaskAction::Toggle { id: second })?;

    println!("{}", render(&store.snapshot(), Theme::Dark));

    // A whitespace draft commits nothing
    store.send(TaskAction::SetDraft {
        text: "   ".to_string(),
    })?;
    store.send(TaskAction::CommitDraft)?;

    // Sweep the finished work away
    store.send(TaskAction::ClearCompleted)?;

    println!("{}", render(&store.snapshot(), Theme::Light));

    let (total, done) = store.state(|s| (s.count(), s.completed_count()));
    println!("Remaining: {total} ({done} done)");

    println!("=== Demo Complete ===");
    Ok(())
}
