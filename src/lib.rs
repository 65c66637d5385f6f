//! # eventry
//!
//! **Eventry** is a minimal synchronous named-event registry for Rust: an
//! observer-pattern building block in the spirit of the classic platform
//! event-emitter contract, trimmed to its core semantics.
//!
//! ## Architecture
//! ```text
//!                 register / once            emit("job", args)
//!   caller ──────────────┐                        │
//!                        ▼                        ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  EventRegistry                                                │
//! │  - events: EventName → [listener, listener, ...] (ordered)    │
//! │  - max_listeners cap (per event, new listeners only)          │
//! └───────┬───────────────────────────────┬───────────────────────┘
//!         │ "newListener" /               │ snapshot fan-out,
//!         │ "removeListener"              │ registration order
//!         ▼                               ▼
//!   reserved-channel listeners      listener(&event, args)
//!                                         │
//!                                         └─ Err(e) ─► emit("error", e)
//!                                            (unhandled ⇒ fails the call)
//! ```
//!
//! ## Guarantees
//! - **Order**: per-event dispatch order equals registration order; event
//!   enumeration order equals first-registration order.
//! - **Identity**: listeners are deduplicated by handle identity
//!   ([`Listener::same`]), never by structure.
//! - **Snapshot dispatch**: mutations made by listeners never disturb the
//!   round in flight; `once` listeners are removed between visits.
//! - **No silent error drops**: listener failures are re-emitted on the
//!   `"error"` channel, and an unhandled `"error"` emission fails the
//!   operation that caused it.
//!
//! Everything is synchronous and single-flow: no operation suspends, and a
//! listener may freely call back into the registry during its own invocation.
//!
//! ## Features
//! | Area              | Description                                                   | Key types                                 |
//! |-------------------|---------------------------------------------------------------|-------------------------------------------|
//! | **Registration**  | Ordered, identity-deduplicated, capped per event.             | [`EventRegistry`], [`Listener`]           |
//! | **Dispatch**      | Synchronous snapshot fan-out with once-semantics.             | [`EventRegistry::emit`], [`Value`]        |
//! | **Lifecycle**     | Auto-fired add/remove notifications.                          | [`NEW_LISTENER`], [`REMOVE_LISTENER`]     |
//! | **Errors**        | Typed failures; unhandled `"error"` events escalate.          | [`RegistryError`], [`ERROR_EVENT`]        |
//! | **Configuration** | Per-event listener cap.                                       | [`RegistryConfig`], [`DEFAULT_MAX_LISTENERS`] |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use eventry::{EventRegistry, Listener, Value};
//!
//! fn main() -> Result<(), eventry::RegistryError> {
//!     let registry = EventRegistry::new();
//!     let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
//!
//!     let sink = Arc::clone(&seen);
//!     let greeter = Listener::new(move |event, args| {
//!         let who = args
//!             .first()
//!             .and_then(|v| v.downcast_ref::<String>())
//!             .map(String::as_str)
//!             .unwrap_or("world");
//!         sink.lock().push(format!("{event}: hello {who}"));
//!         Ok(())
//!     });
//!
//!     registry.on("greet", &greeter)?;
//!     registry.emit("greet", &[Value::from("eventry")])?;
//!     registry.emit("greet", &[])?;
//!
//!     assert_eq!(
//!         *seen.lock(),
//!         vec!["greet: hello eventry", "greet: hello world"]
//!     );
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod listener;
mod name;
mod registry;
mod value;

// ---- Public re-exports ----

pub use config::{RegistryConfig, DEFAULT_MAX_LISTENERS};
pub use error::RegistryError;
pub use listener::{Listener, ListenerOptions};
pub use name::{EventName, ERROR_EVENT, NEW_LISTENER, REMOVE_LISTENER};
pub use registry::EventRegistry;
pub use value::{BoxError, Value};
