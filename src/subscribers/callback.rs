//! # Callback handles with identity semantics.
//!
//! The host engine this design comes from compares delegates by their bound
//! (object, function) pair. Rust closures have no intrinsic identity, so
//! [`Callback`] supplies one: the handle wraps its closure in an `Rc`, and
//! equality is pointer identity of that allocation. Clones of one `Callback`
//! compare equal; two callbacks built from separate `Callback::new` calls
//! never do, even if their bodies are identical.
//!
//! ## Rules
//! - Keep the `Callback` (or the whole [`Subscription`]) you bound if you
//!   intend to unbind that exact binding later.
//! - [`EventRegistry::unbind_all_by_name`](crate::EventRegistry::unbind_all_by_name)
//!   and friends only need the receiver's [`ObjectId`], not the callback.

use std::fmt;
use std::rc::Rc;

use crate::events::{EventContext, ObjectId};

/// A cloneable handle to a subscriber closure.
///
/// Equality is identity of the underlying allocation, not of the closure's
/// behavior.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn(&EventContext)>);

impl Callback {
    /// Wraps a closure into an identity-carrying handle.
    pub fn new(f: impl Fn(&EventContext) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub(crate) fn invoke(&self, ctx: &EventContext) {
        (self.0)(ctx);
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", Rc::as_ptr(&self.0))
    }
}

/// A `(receiver, callback)` pair — the unit the registry binds, dedups, and
/// invokes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Subscription {
    receiver: ObjectId,
    callback: Callback,
}

impl Subscription {
    /// Creates a subscription for `receiver` backed by `callback`.
    pub fn new(receiver: ObjectId, callback: Callback) -> Self {
        Self { receiver, callback }
    }

    /// Identity of the receiving object.
    pub fn receiver(&self) -> ObjectId {
        self.receiver
    }

    pub(crate) fn invoke(&self, ctx: &EventContext) {
        self.callback.invoke(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_of_one_callback_are_equal() {
        let cb = Callback::new(|_| {});
        assert_eq!(cb, cb.clone());
    }

    #[test]
    fn test_separately_built_callbacks_differ() {
        let a = Callback::new(|_| {});
        let b = Callback::new(|_| {});
        assert_ne!(a, b);
    }

    #[test]
    fn test_subscription_equality_needs_both_halves() {
        let receiver = ObjectId::next();
        let other = ObjectId::next();
        let cb = Callback::new(|_| {});

        let sub = Subscription::new(receiver, cb.clone());
        assert_eq!(sub, Subscription::new(receiver, cb.clone()));
        assert_ne!(sub, Subscription::new(other, cb.clone()));
        assert_ne!(sub, Subscription::new(receiver, Callback::new(|_| {})));
    }
}
