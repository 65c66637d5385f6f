//! # Listener handles and per-registration options.
//!
//! [`Listener`] wraps a callback in a clonable, identity-comparable handle.
//! Identity is pointer identity of the shared allocation: clones of one
//! handle are the *same* listener (register once, unregister with any clone),
//! while two handles built from structurally identical closures are
//! *different* listeners.
//!
//! A listener reports failure by returning `Err`; the registry routes that
//! into an `"error"` emission rather than aborting the dispatch loop (see
//! [`EventRegistry::emit`](crate::EventRegistry::emit)).
//!
//! ## Example
//! ```rust
//! use eventry::Listener;
//!
//! let a = Listener::new(|_event, _args| Ok(()));
//! let b = a.clone();
//! let c = Listener::new(|_event, _args| Ok(()));
//!
//! assert!(a.same(&b));   // clone: one identity
//! assert!(!a.same(&c));  // identical body, distinct identity
//! ```

use std::fmt;
use std::sync::Arc;

use crate::name::EventName;
use crate::value::{BoxError, Value};

type ListenerFn = dyn Fn(&EventName, &[Value]) -> Result<(), BoxError> + Send + Sync;

/// Identity-comparable callback handle.
///
/// Invoked as `f(&event, args)` — the event name is prepended to the
/// caller-supplied argument list, so one listener can serve several channels.
#[derive(Clone)]
pub struct Listener(Arc<ListenerFn>);

impl Listener {
    /// Wraps a callback into a new listener identity.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&EventName, &[Value]) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Listener(Arc::new(f))
    }

    /// True if both handles refer to the same registration identity.
    pub fn same(&self, other: &Listener) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Invokes the callback.
    pub(crate) fn call(&self, event: &EventName, args: &[Value]) -> Result<(), BoxError> {
        (self.0)(event, args)
    }
}

/// Identity equality (same as [`Listener::same`]).
impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Arc::as_ptr(&self.0))
    }
}

/// Per-registration behavior flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Remove the listener right after its first invocation (success or
    /// failure), before the next listener in the same emit runs.
    pub once: bool,
}
