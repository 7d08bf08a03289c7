//! Counter demo binary
//!
//! Walks the dispatch cycle of the statecell state container with a
//! print observer standing in for a presentation layer.

use counter::{CounterAction, CounterReducer, CounterState};
use statecell_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "counter=debug,statecell_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Counter Demo: statecell ===\n");

    let store = Store::new(CounterState::default(), CounterReducer::new());

    // A presentation layer would re-render here; the demo just prints.
    store.subscribe(|state: &CounterState| {
        println!("    observer saw count = {}", state.count);
    });

    println!("Initial count: {}", store.state(|s| s.count));

    for action in [
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Increment,
        CounterAction::Decrement,
        CounterAction::Reset,
    ] {
        println!("\n>>> Dispatching: {action:?}");
        store.dispatch(action)?;
    }

    println!("\nFinal count: {}", store.state(|s| s.count));

    println!("\n=== Demo Complete ===");
    println!("\nKey concepts demonstrated:");
    println!("  • State: CounterState, replaced wholesale on every dispatch");
    println!("  • Action: CounterAction, a tagged transition description");
    println!("  • Reducer: pure function (state, action) → new state");
    println!("  • Store: dispatches actions and notifies explicit observers");

    Ok(())
}
