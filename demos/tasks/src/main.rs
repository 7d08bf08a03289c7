//! Task-list demo binary
//!
//! Drives the store with typed actions, then with raw tagged records,
//! including one with a tag nobody declared.

use serde_json::json;
use statecell_runtime::{RawAction, Store};
use tasks::{Task, TaskAction, TasksReducer, TasksState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_tasks(state: &TasksState) {
    if state.is_empty() {
        println!("    (no tasks)");
        return;
    }
    for task in &state.tasks {
        let mark = if task.done { 'x' } else { ' ' };
        println!("    [{mark}] #{} {}", task.id, task.text);
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasks=debug,statecell_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Task-List Demo: statecell ===\n");

    let store = Store::new(TasksState::new(), TasksReducer::new());
    store.subscribe(print_tasks);

    println!(">>> Dispatching typed actions");
    store.dispatch(TaskAction::Added {
        id: 1,
        text: "Read the reducer chapter".to_owned(),
        done: false,
    })?;
    store.dispatch(TaskAction::Added {
        id: 2,
        text: "Write one".to_owned(),
        done: false,
    })?;
    store.dispatch(TaskAction::Changed {
        task: Task {
            id: 1,
            text: "Read the reducer chapter".to_owned(),
            done: true,
        },
    })?;

    println!("\n>>> Dispatching a raw tagged record");
    store.dispatch_raw(RawAction::from_value(json!({
        "type": "deleted",
        "id": 2,
    }))?)?;

    println!("\n>>> Dispatching a record with an undeclared tag");
    let raw = RawAction::from_value(json!({
        "type": "added662",
        "id": 3,
        "text": "This never lands",
    }))?;
    match store.dispatch_raw(raw) {
        Ok(()) => println!("    unexpectedly accepted"),
        Err(err) => println!("    rejected: {err}"),
    }

    println!("\nFinal state:");
    print_tasks(&store.snapshot());

    println!("\n=== Demo Complete ===");
    Ok(())
}
