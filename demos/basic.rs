//! # Example: basic
//!
//! Demonstrates the core register/emit/unregister cycle.
//!
//! Shows how to:
//! - Build identity-comparable [`Listener`] handles.
//! - Emit with typed arguments and read them back via [`Value::downcast_ref`].
//! - Inspect registry state (`listener_count`, `event_names`).
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use eventry::{EventRegistry, Listener, Value};

fn main() -> Result<(), eventry::RegistryError> {
    let registry = EventRegistry::new();

    let logger = Listener::new(|event, args| {
        let job = args
            .first()
            .and_then(|v| v.downcast_ref::<String>())
            .map(String::as_str)
            .unwrap_or("<none>");
        println!("[logger]  {event}: job={job}");
        Ok(())
    });

    let auditor = Listener::new(|event, args| {
        println!("[auditor] {event}: {} argument(s)", args.len());
        Ok(())
    });

    registry.on("job-done", &logger)?.on("job-done", &auditor)?;
    println!(
        "registered {} listener(s) for job-done",
        registry.listener_count("job-done")
    );

    registry.emit("job-done", &[Value::from("reindex".to_string())])?;

    // Duplicate handles are a no-op; distinct handles are distinct listeners.
    registry.on("job-done", &logger)?;
    println!(
        "after duplicate registration: still {}",
        registry.listener_count("job-done")
    );

    registry.unregister("job-done", &logger)?;
    println!(
        "after unregister: {} listener(s), events={:?}",
        registry.listener_count("job-done"),
        registry
            .event_names()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    );

    registry.emit("job-done", &[Value::from("cleanup".to_string())])?;
    Ok(())
}
