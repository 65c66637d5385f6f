//! # Registry configuration.
//!
//! Provides [`RegistryConfig`], the settings consumed by
//! [`EventRegistry::with_config`](crate::EventRegistry::with_config).
//!
//! ## Field semantics
//! - `max_listeners`: per-event cap on *distinct* listeners. `0` means no
//!   listener can be registered at all; duplicate registrations never count
//!   against the cap.

/// Default per-event listener cap.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// Configuration for an [`EventRegistry`](crate::EventRegistry).
///
/// All fields are public; construct with struct-update syntax over
/// [`Default`]:
///
/// ```rust
/// use eventry::{EventRegistry, RegistryConfig};
///
/// let registry = EventRegistry::with_config(RegistryConfig { max_listeners: 64 });
/// assert_eq!(registry.max_listeners(), 64);
/// ```
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Per-event cap applied when a genuinely new listener is registered.
    ///
    /// Lowering the cap later never evicts listeners already registered; it
    /// only constrains future registrations.
    pub max_listeners: usize,
}

impl Default for RegistryConfig {
    /// Returns a config with `max_listeners = 10`.
    fn default() -> Self {
        Self {
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }
}
