//! # Opaque dispatch arguments.
//!
//! [`Value`] is the argument type handed to listeners on every emit. It keeps
//! the wire dynamic (any payload type, any arity) while staying cheap to
//! clone for snapshot-based fan-out.
//!
//! A value is either a **plain payload** (any `Any + Send + Sync` type) or an
//! **error payload** (any `std::error::Error` type). The split matters on one
//! path: `emit("error", args)` with no listeners rethrows `args[0]` when it
//! is an error payload and reports a generic unhandled failure otherwise.
//!
//! ## Example
//! ```rust
//! use eventry::Value;
//!
//! let n = Value::new(42u32);
//! assert_eq!(n.downcast_ref::<u32>(), Some(&42));
//! assert!(!n.is_error());
//!
//! let e = Value::error(std::io::Error::other("disk on fire"));
//! assert!(e.is_error());
//! assert_eq!(e.as_error().unwrap().to_string(), "disk on fire");
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Failure type returned by listeners.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

#[derive(Clone)]
enum Inner {
    Plain(Arc<dyn Any + Send + Sync>),
    Fault(Arc<dyn Error + Send + Sync>),
}

/// One type-erased dispatch argument.
///
/// Clones share the underlying payload (`Arc`), so snapshotting an argument
/// list per listener costs refcount bumps only.
#[derive(Clone)]
pub struct Value(Inner);

impl Value {
    /// Wraps an arbitrary payload.
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Value(Inner::Plain(Arc::new(payload)))
    }

    /// Wraps an error value.
    ///
    /// Error values are what the unhandled-`"error"` rule rethrows; use this
    /// constructor when emitting failures so the registry can recognize them.
    pub fn error<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Value(Inner::Fault(Arc::new(error)))
    }

    /// Wraps an already-boxed listener failure.
    pub(crate) fn from_boxed(error: BoxError) -> Self {
        Value(Inner::Fault(Arc::from(error)))
    }

    /// Borrows a plain payload as `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match &self.0 {
            Inner::Plain(payload) => payload.downcast_ref::<T>(),
            Inner::Fault(_) => None,
        }
    }

    /// Borrows the error payload, if this value carries one.
    pub fn as_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match &self.0 {
            Inner::Plain(_) => None,
            Inner::Fault(error) => Some(&**error),
        }
    }

    /// True if this value carries an error payload.
    pub fn is_error(&self) -> bool {
        matches!(self.0, Inner::Fault(_))
    }

    /// Shares the error payload for rethrowing.
    pub(crate) fn error_arc(&self) -> Option<Arc<dyn Error + Send + Sync>> {
        match &self.0 {
            Inner::Plain(_) => None,
            Inner::Fault(error) => Some(Arc::clone(error)),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Plain(_) => f.write_str("Value(..)"),
            Inner::Fault(error) => write!(f, "Value(error: {error})"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::new(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::new(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::new(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::new(b)
    }
}
