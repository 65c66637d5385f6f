//! # Event names and reserved channels.
//!
//! [`EventName`] is the key type for every registry map. Two flavors exist:
//! - **Named**: interned string (`"job-done"`), compared by value.
//! - **Token**: opaque handle minted by [`EventName::unique`], compared by
//!   identity. Tokens never collide with named events or with each other.
//!
//! ## Reserved names
//! Three names get extra behavior from the registry (see
//! [`EventRegistry`](crate::EventRegistry)):
//! - [`NEW_LISTENER`] — auto-fired after each successful registration.
//! - [`REMOVE_LISTENER`] — auto-fired before each removal.
//! - [`ERROR_EVENT`] — emitting it with no listeners is a failure, not a no-op.
//!
//! They are otherwise ordinary events: they occupy regular map slots and count
//! against the max-listener cap.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Reserved event fired after a listener is registered.
///
/// Carries `(event name, listener, options)` as dispatch arguments.
pub const NEW_LISTENER: &str = "newListener";

/// Reserved event fired before a listener is removed.
///
/// Carries `(event name, listener)` as dispatch arguments.
pub const REMOVE_LISTENER: &str = "removeListener";

/// Reserved event for failure delivery.
///
/// Emitting it with no registered listeners fails the `emit` call instead of
/// returning `false` — an error delivered into the void is a program error.
pub const ERROR_EVENT: &str = "error";

/// Counter for minting unique tokens.
static TOKEN_SEQ: AtomicU64 = AtomicU64::new(0);

/// Key identifying one event channel.
///
/// Cheap to clone (`Arc<str>` or a `u64`). Named events compare by string
/// value; tokens compare by the minted id.
///
/// # Example
/// ```rust
/// use eventry::EventName;
///
/// let a: EventName = "tick".into();
/// let b: EventName = String::from("tick").into();
/// assert_eq!(a, b);
///
/// let t1 = EventName::unique();
/// let t2 = EventName::unique();
/// assert_ne!(t1, t2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventName {
    /// String-keyed channel, compared by value.
    Named(Arc<str>),
    /// Opaque channel handle, compared by identity. Mint via [`EventName::unique`].
    Token(u64),
}

impl EventName {
    /// Mints a fresh opaque name, distinct from every other name.
    ///
    /// The analog of keying an event by a symbol rather than a string: the
    /// only way to address the channel is to hold a clone of the token.
    pub fn unique() -> Self {
        EventName::Token(TOKEN_SEQ.fetch_add(1, Ordering::Relaxed))
    }

    /// The string form of a named event, `None` for tokens.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EventName::Named(s) => Some(s),
            EventName::Token(_) => None,
        }
    }

    /// True for the reserved [`ERROR_EVENT`] channel.
    pub(crate) fn is_error(&self) -> bool {
        matches!(self, EventName::Named(s) if &**s == ERROR_EVENT)
    }
}

impl From<&str> for EventName {
    fn from(s: &str) -> Self {
        EventName::Named(Arc::from(s))
    }
}

impl From<String> for EventName {
    fn from(s: String) -> Self {
        EventName::Named(Arc::from(s))
    }
}

impl From<&EventName> for EventName {
    fn from(name: &EventName) -> Self {
        name.clone()
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventName::Named(s) => f.write_str(s),
            EventName::Token(id) => write!(f, "#{id}"),
        }
    }
}
