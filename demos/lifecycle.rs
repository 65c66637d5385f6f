//! # Example: lifecycle
//!
//! Demonstrates the reserved channels and failure escalation.
//!
//! Shows how to:
//! - Observe registrations and removals via [`NEW_LISTENER`] /
//!   [`REMOVE_LISTENER`].
//! - Use one-shot listeners ([`EventRegistry::once`]).
//! - Route listener failures into an `"error"` listener, and what happens
//!   when nobody handles the `"error"` channel.
//!
//! ## Run
//! ```bash
//! cargo run --example lifecycle
//! ```

use eventry::{
    EventName, EventRegistry, Listener, ListenerOptions, Value, ERROR_EVENT, NEW_LISTENER,
    REMOVE_LISTENER,
};

fn main() -> Result<(), eventry::RegistryError> {
    let registry = EventRegistry::new();

    // Lifecycle observers. Registered first, so the NEW_LISTENER probe also
    // reports its own registration and the ones below.
    let on_add = Listener::new(|_, args| {
        let name = args[0].downcast_ref::<EventName>().unwrap();
        let options = args[2].downcast_ref::<ListenerOptions>().unwrap();
        println!("[lifecycle] + listener on \"{name}\" (once={})", options.once);
        Ok(())
    });
    let on_remove = Listener::new(|_, args| {
        let name = args[0].downcast_ref::<EventName>().unwrap();
        println!("[lifecycle] - listener on \"{name}\"");
        Ok(())
    });
    registry.on(NEW_LISTENER, &on_add)?;
    registry.on(REMOVE_LISTENER, &on_remove)?;

    // A one-shot listener: removed mid-emit after its first invocation,
    // which fires REMOVE_LISTENER before the next listener runs.
    let greet_once = Listener::new(|_, _| {
        println!("[greet] first time only");
        Ok(())
    });
    registry.once("greet", &greet_once)?;

    println!("-- emit greet #1");
    registry.emit("greet", &[])?;
    println!("-- emit greet #2 (no listeners left: {})", {
        let delivered = registry.emit("greet", &[])?;
        !delivered
    });

    // A failing listener is not fatal while an "error" listener exists.
    let on_error = Listener::new(|_, args| {
        let error = args[0].as_error().expect("error payload");
        println!("[error] handled: {error}");
        Ok(())
    });
    registry.on(ERROR_EVENT, &on_error)?;
    registry.on("sync", &Listener::new(|_, _| Err("replica lagging".into())))?;
    registry.emit("sync", &[])?;

    // Without an "error" listener the failure escalates to the caller.
    registry.unregister(ERROR_EVENT, &on_error)?;
    match registry.emit("sync", &[]) {
        Err(err) => println!("emit failed as expected: {err} (label={})", err.as_label()),
        Ok(_) => unreachable!("unhandled listener failure must escalate"),
    }

    // Bulk removal drains most-recently-registered events first, notifying
    // per listener.
    println!("-- unregister_all");
    registry.unregister_all(None)?;
    println!("events left: {}", registry.event_names().len());

    let _ = registry.emit("greet", &[Value::from("ignored".to_string())])?;
    Ok(())
}
