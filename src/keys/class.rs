//! # Type-identifier event keys.
//!
//! [`EventClass`] addresses an event by the Rust type of its payload. Any
//! type implementing the [`GlobalEvent`] marker trait can serve as an event
//! kind; the key wraps its [`TypeId`] so it supports equality and hashing
//! without holding the payload itself.
//!
//! The abstract marker ([`EventClass::base`]) is deliberately *not* a usable
//! key: binding or publishing against the bare marker is rejected, the same
//! way the base event class is rejected by the other two key kinds' emptiness
//! checks.
//!
//! ## Example
//! ```rust
//! use rpgbus::{EventClass, EventKey, GlobalEvent};
//!
//! struct BossDefeated;
//! impl GlobalEvent for BossDefeated {}
//!
//! let key = EventClass::of::<BossDefeated>();
//! assert!(key.is_valid());
//! assert!(key.is::<BossDefeated>());
//! assert!(!EventClass::base().is_valid());
//! ```

use std::any::{type_name, Any, TypeId};
use std::fmt;

use crate::keys::key::EventKey;

/// Marker trait for payload types usable as class-addressed events.
///
/// Implementors need no methods; the trait exists so that [`EventClass`] can
/// only be built from types the author declared to be events, and so that
/// payloads can be downcast on delivery via
/// [`EventContext::payload_as`](crate::EventContext::payload_as).
pub trait GlobalEvent: Any {}

/// A class-addressed event key: the [`TypeId`] of a [`GlobalEvent`] type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventClass {
    id: TypeId,
    name: &'static str,
}

impl EventClass {
    /// Returns the key for event type `E`.
    pub fn of<E: GlobalEvent>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: type_name::<E>(),
        }
    }

    /// Returns the key of the abstract event marker itself.
    ///
    /// This is the one invalid class key: the registry rejects it everywhere,
    /// since "any event" is not a publishable kind.
    pub fn base() -> Self {
        Self {
            id: TypeId::of::<dyn GlobalEvent>(),
            name: "GlobalEvent",
        }
    }

    /// Returns whether this key identifies event type `E`.
    pub fn is<E: GlobalEvent>(&self) -> bool {
        self.id == TypeId::of::<E>()
    }

    /// Returns the type name the key was built from (diagnostic only; not
    /// stable across compiler versions).
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl EventKey for EventClass {
    const KIND: &'static str = "class";

    fn is_valid(&self) -> bool {
        self.id != TypeId::of::<dyn GlobalEvent>()
    }
}

impl fmt::Debug for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventClass").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Opened;
    impl GlobalEvent for Opened {}

    struct Closed;
    impl GlobalEvent for Closed {}

    #[test]
    fn test_distinct_types_yield_distinct_keys() {
        assert_ne!(EventClass::of::<Opened>(), EventClass::of::<Closed>());
        assert_eq!(EventClass::of::<Opened>(), EventClass::of::<Opened>());
    }

    #[test]
    fn test_base_marker_is_invalid() {
        assert!(!EventClass::base().is_valid());
        assert!(EventClass::of::<Opened>().is_valid());
    }

    #[test]
    fn test_is_checks_type_identity() {
        let key = EventClass::of::<Opened>();
        assert!(key.is::<Opened>());
        assert!(!key.is::<Closed>());
    }
}
