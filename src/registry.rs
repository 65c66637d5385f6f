//! # The event registry: registration, removal, synchronous fan-out.
//!
//! [`EventRegistry`] owns all listener state and exposes the full operation
//! surface: [`register`](EventRegistry::register) /
//! [`unregister`](EventRegistry::unregister) /
//! [`unregister_all`](EventRegistry::unregister_all),
//! [`emit`](EventRegistry::emit), and the introspection calls.
//!
//! ## Rules
//! - **Per-event order**: listeners fire in registration order; event names
//!   enumerate in first-registration order.
//! - **Identity dedup**: registering the same [`Listener`] handle twice for
//!   one event is a no-op.
//! - **Cap**: a genuinely new listener is rejected once the event already
//!   holds `max_listeners` entries.
//! - **Snapshot dispatch**: `emit` iterates a copy of the listener list taken
//!   at call start; mutations made by listeners affect later emits, not the
//!   round in flight (except `once` removal, which is a visit side effect).
//! - **Reserved channels**: [`NEW_LISTENER`] fires after each registration,
//!   [`REMOVE_LISTENER`] before each removal, and an unhandled
//!   [`ERROR_EVENT`] emission fails the call.
//!
//! ## Reentrancy
//! All methods take `&self`; state sits behind one mutex that is released
//! before any listener runs. A listener may therefore call back into the same
//! registry (register, unregister, emit) during its own invocation without
//! deadlock. The registry assumes one logical caller at a time; it is not a
//! cross-thread broadcast primitive.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use eventry::{EventRegistry, Listener, Value};
//!
//! let registry = EventRegistry::new();
//! let seen: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! let on_job = Listener::new(move |_event, args| {
//!     if let Some(id) = args.first().and_then(|v| v.downcast_ref::<i64>()) {
//!         sink.lock().push(*id);
//!     }
//!     Ok(())
//! });
//!
//! registry.on("job", &on_job)?;
//! registry.emit("job", &[Value::new(7i64)])?;
//! registry.unregister("job", &on_job)?;
//!
//! assert_eq!(*seen.lock(), vec![7]);
//! assert_eq!(registry.listener_count("job"), 0);
//! # Ok::<(), eventry::RegistryError>(())
//! ```

use indexmap::IndexMap;
use log::{debug, trace};
use parking_lot::Mutex;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::listener::{Listener, ListenerOptions};
use crate::name::{EventName, ERROR_EVENT, NEW_LISTENER, REMOVE_LISTENER};
use crate::value::Value;

/// One registration: the listener plus its per-registration options.
#[derive(Clone, Debug)]
struct ListenerEntry {
    listener: Listener,
    options: ListenerOptions,
}

/// Listener state, kept behind the registry mutex.
#[derive(Debug)]
struct State {
    /// Event name → listeners in registration order. The outer map preserves
    /// first-registration order of names; empty slots are deleted, so every
    /// key has at least one listener.
    events: IndexMap<EventName, Vec<ListenerEntry>>,
    /// Cap applied when accepting a genuinely new listener.
    max_listeners: usize,
}

/// Synchronous named-event registry.
///
/// Consumers register identity-comparable [`Listener`] handles against
/// [`EventName`] channels and fan events out with [`emit`](Self::emit). See
/// the [module docs](self) for the dispatch rules.
#[derive(Debug)]
pub struct EventRegistry {
    state: Mutex<State>,
}

impl EventRegistry {
    /// Creates a registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates a registry from an explicit [`RegistryConfig`].
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            state: Mutex::new(State {
                events: IndexMap::new(),
                max_listeners: config.max_listeners,
            }),
        }
    }

    /// Registers `listener` for `event` with explicit options.
    ///
    /// - Duplicate handle for this event: no-op, no [`NEW_LISTENER`]
    ///   notification.
    /// - Slot already at the cap: [`RegistryError::TooManyListeners`].
    /// - Otherwise the listener is appended and a [`NEW_LISTENER`] event is
    ///   dispatched through the ordinary emit path, carrying
    ///   `(event name, listener, options)`. There is no recursion guard:
    ///   listeners registered for [`NEW_LISTENER`] are notified of
    ///   registrations on [`NEW_LISTENER`] itself, including their own.
    ///
    /// Returns `Ok(self)` so calls can be chained with `?`.
    pub fn register(
        &self,
        event: impl Into<EventName>,
        listener: &Listener,
        options: ListenerOptions,
    ) -> Result<&Self, RegistryError> {
        let event = event.into();
        {
            let mut state = self.state.lock();
            if let Some(slot) = state.events.get(&event) {
                if slot.iter().any(|entry| entry.listener.same(listener)) {
                    trace!("duplicate registration for \"{event}\" ignored");
                    return Ok(self);
                }
            }
            let limit = state.max_listeners;
            let count = state.events.get(&event).map_or(0, Vec::len);
            if count >= limit {
                return Err(RegistryError::TooManyListeners {
                    event,
                    count,
                    limit,
                });
            }
            state.events.entry(event.clone()).or_default().push(ListenerEntry {
                listener: listener.clone(),
                options,
            });
            debug!("listener registered for \"{event}\" ({} total)", count + 1);
        }
        self.emit(
            NEW_LISTENER,
            &[
                Value::new(event),
                Value::new(listener.clone()),
                Value::new(options),
            ],
        )?;
        Ok(self)
    }

    /// Registers a persistent listener ([`register`](Self::register) with
    /// default options).
    pub fn on(
        &self,
        event: impl Into<EventName>,
        listener: &Listener,
    ) -> Result<&Self, RegistryError> {
        self.register(event, listener, ListenerOptions::default())
    }

    /// Registers a one-shot listener, removed right after its first
    /// invocation.
    pub fn once(
        &self,
        event: impl Into<EventName>,
        listener: &Listener,
    ) -> Result<&Self, RegistryError> {
        self.register(event, listener, ListenerOptions { once: true })
    }

    /// Removes one listener from one event.
    ///
    /// Returns `Ok(false)` when the event is unknown or the listener is not
    /// among its entries, with no mutation and no notification. Otherwise a
    /// [`REMOVE_LISTENER`] event fires *before* the entry is removed, and the
    /// call returns `Ok(true)`.
    pub fn unregister(
        &self,
        event: impl Into<EventName>,
        listener: &Listener,
    ) -> Result<bool, RegistryError> {
        let event = event.into();
        let present = {
            let state = self.state.lock();
            state
                .events
                .get(&event)
                .is_some_and(|slot| slot.iter().any(|entry| entry.listener.same(listener)))
        };
        if !present {
            return Ok(false);
        }

        // Notify first; the entry is still registered while handlers run.
        self.emit(
            REMOVE_LISTENER,
            &[Value::new(event.clone()), Value::new(listener.clone())],
        )?;

        // The notification may have mutated the slot reentrantly, so search
        // again and tolerate the entry already being gone.
        let mut state = self.state.lock();
        if let Some(slot) = state.events.get_mut(&event) {
            if let Some(pos) = slot.iter().position(|entry| entry.listener.same(listener)) {
                slot.remove(pos);
            }
            if slot.is_empty() {
                state.events.shift_remove(&event);
            }
        }
        drop(state);
        debug!("listener unregistered from \"{event}\"");
        Ok(true)
    }

    /// Removes every listener from one event, or from all events.
    ///
    /// - `Some(event)`: deletes the event's slot, then fires one
    ///   [`REMOVE_LISTENER`] per removed listener, last-registered first.
    ///   `Ok(false)` if the event was unknown.
    /// - `None`: drains every event by repeated single-event removal,
    ///   most-recently-registered event name first. `Ok(true)` iff anything
    ///   was removed.
    pub fn unregister_all(&self, event: Option<&EventName>) -> Result<bool, RegistryError> {
        match event {
            Some(event) => self.drain(event),
            None => {
                let names: Vec<EventName> =
                    self.state.lock().events.keys().rev().cloned().collect();
                let mut removed_any = false;
                for name in &names {
                    removed_any |= self.drain(name)?;
                }
                Ok(removed_any)
            }
        }
    }

    /// Removes one event's slot, then notifies per listener in reverse
    /// registration order. The slot is gone before the first notification.
    fn drain(&self, event: &EventName) -> Result<bool, RegistryError> {
        let drained = {
            let mut state = self.state.lock();
            state.events.shift_remove(event)
        };
        let Some(drained) = drained else {
            return Ok(false);
        };
        debug!("removing {} listener(s) from \"{event}\"", drained.len());
        for entry in drained.iter().rev() {
            self.emit(
                REMOVE_LISTENER,
                &[Value::new(event.clone()), Value::new(entry.listener.clone())],
            )?;
        }
        Ok(true)
    }

    /// Dispatches `event` synchronously to all currently registered
    /// listeners, in registration order, each invoked as
    /// `listener(&event, args)`.
    ///
    /// The listener list is snapshotted at call start: registrations and
    /// removals performed by listeners take effect for later emits, not this
    /// round. A `once` entry is unregistered right after its invocation
    /// (firing [`REMOVE_LISTENER`]) before the next snapshot listener runs.
    ///
    /// A listener returning `Err` does not stop the loop directly: the
    /// failure is re-emitted as an [`ERROR_EVENT`]. When *that* has no
    /// listener the failure escalates — an error-value payload is rethrown
    /// as [`RegistryError::Unhandled`], anything else becomes
    /// [`RegistryError::UnhandledNonError`] — aborting the remaining
    /// listeners of the original dispatch.
    ///
    /// Returns `Ok(true)` iff the snapshot held at least one listener;
    /// `Ok(false)` for an unknown non-[`ERROR_EVENT`] event.
    pub fn emit(
        &self,
        event: impl Into<EventName>,
        args: &[Value],
    ) -> Result<bool, RegistryError> {
        let event = event.into();
        let snapshot: Vec<ListenerEntry> = {
            let state = self.state.lock();
            state.events.get(&event).cloned().unwrap_or_default()
        };

        if snapshot.is_empty() {
            if event.is_error() {
                return Err(Self::unhandled(args));
            }
            trace!("emit \"{event}\": no listeners");
            return Ok(false);
        }

        trace!("emit \"{event}\" to {} listener(s)", snapshot.len());
        for entry in &snapshot {
            if let Err(fault) = entry.listener.call(&event, args) {
                debug!("listener for \"{event}\" failed: {fault}");
                self.emit(ERROR_EVENT, &[Value::from_boxed(fault)])?;
            }
            if entry.options.once {
                self.unregister(&event, &entry.listener)?;
            }
        }
        Ok(true)
    }

    /// Builds the failure for an `"error"` emission that found no listener.
    fn unhandled(args: &[Value]) -> RegistryError {
        match args.first().and_then(Value::error_arc) {
            Some(error) => RegistryError::Unhandled(error),
            None => RegistryError::UnhandledNonError {
                detail: if args.is_empty() {
                    "no arguments".to_string()
                } else {
                    format!("{} non-error argument(s)", args.len())
                },
            },
        }
    }

    /// Event names with at least one listener, in first-registration order.
    pub fn event_names(&self) -> Vec<EventName> {
        self.state.lock().events.keys().cloned().collect()
    }

    /// Number of listeners registered for `event` (0 if unknown).
    pub fn listener_count(&self, event: impl Into<EventName>) -> usize {
        let event = event.into();
        self.state.lock().events.get(&event).map_or(0, Vec::len)
    }

    /// Total listener count across all events.
    pub fn total_listeners(&self) -> usize {
        self.state.lock().events.values().map(Vec::len).sum()
    }

    /// True if `listener` is registered for `event`.
    pub fn has_listener(&self, event: impl Into<EventName>, listener: &Listener) -> bool {
        let event = event.into();
        self.state
            .lock()
            .events
            .get(&event)
            .is_some_and(|slot| slot.iter().any(|entry| entry.listener.same(listener)))
    }

    /// Snapshot copy of `event`'s listeners, in registration order.
    pub fn listeners(&self, event: impl Into<EventName>) -> Vec<Listener> {
        let event = event.into();
        self.state
            .lock()
            .events
            .get(&event)
            .map(|slot| slot.iter().map(|entry| entry.listener.clone()).collect())
            .unwrap_or_default()
    }

    /// Current per-event listener cap.
    pub fn max_listeners(&self) -> usize {
        self.state.lock().max_listeners
    }

    /// Replaces the per-event cap.
    ///
    /// Affects only future registrations; existing listeners are never
    /// evicted, even when the new cap is below a slot's current count.
    pub fn set_max_listeners(&self, limit: usize) {
        self.state.lock().max_listeners = limit;
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}
