//! # Error types raised by the registry.
//!
//! [`RegistryError`] covers the two failure modes with real semantics:
//!
//! - [`RegistryError::TooManyListeners`] — `register` would push a genuinely
//!   new listener past the per-event cap.
//! - [`RegistryError::Unhandled`] / [`RegistryError::UnhandledNonError`] —
//!   an `"error"` event was emitted with nobody listening. When the first
//!   argument was an error value it is carried back out as-is; otherwise the
//!   generic variant describes what was dropped.
//!
//! The type provides [`RegistryError::as_label`] for logs/metrics.

use std::sync::Arc;

use thiserror::Error;

use crate::name::EventName;

/// # Errors produced by registry operations.
///
/// Every operation that can transitively dispatch (`register`, `unregister`,
/// `unregister_all`, `emit`) reports failure through this type; nothing is
/// deferred or delivered out-of-band.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The per-event cap would be exceeded by a new distinct listener.
    ///
    /// Never raised for a duplicate registration — those are no-ops.
    #[error("\"{event}\" already has {count} listeners (limit {limit})")]
    TooManyListeners {
        /// Event whose slot is full.
        event: EventName,
        /// Listener count at the moment of rejection.
        count: usize,
        /// The cap in force.
        limit: usize,
    },

    /// An `"error"` event carrying an error value found no listener.
    ///
    /// The payload is the exact value that was emitted, rethrown to the
    /// caller.
    #[error("unhandled \"error\" event: {0}")]
    Unhandled(Arc<dyn std::error::Error + Send + Sync>),

    /// An `"error"` event with a non-error (or missing) payload found no
    /// listener.
    #[error("unhandled \"error\" event ({detail})")]
    UnhandledNonError {
        /// Short description of the dropped payload.
        detail: String,
    },
}

impl RegistryError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventry::{EventRegistry, Listener, RegistryConfig};
    ///
    /// let registry = EventRegistry::with_config(RegistryConfig { max_listeners: 0 });
    /// let err = registry.on("job", &Listener::new(|_, _| Ok(()))).unwrap_err();
    /// assert_eq!(err.as_label(), "too_many_listeners");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::TooManyListeners { .. } => "too_many_listeners",
            RegistryError::Unhandled(_) => "unhandled_error",
            RegistryError::UnhandledNonError { .. } => "unhandled_non_error",
        }
    }

    /// Borrows the rethrown error value, if this is [`RegistryError::Unhandled`].
    pub fn rethrown(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            RegistryError::Unhandled(source) => Some(&**source),
            _ => None,
        }
    }
}
