//! # The delivery context handed to subscriber callbacks.
//!
//! Every publish builds one [`EventContext`] and passes it, by reference, to
//! each subscription in bind order. The context is cheap to clone: payload
//! and metadata are reference-counted, so the snapshot taken for re-entrancy
//! safety never copies the payload itself.
//!
//! ## Example
//! ```rust
//! use rpgbus::{EventContext, GlobalEvent, ObjectId};
//!
//! struct BossDefeated { boss_hp_overkill: u32 }
//! impl GlobalEvent for BossDefeated {}
//!
//! let ctx = EventContext::new(ObjectId::next())
//!     .with_payload(BossDefeated { boss_hp_overkill: 42 })
//!     .with_metadata(vec!["arena=catacombs".to_string()]);
//!
//! assert_eq!(ctx.payload_as::<BossDefeated>().unwrap().boss_hp_overkill, 42);
//! assert!(ctx.payload_as::<u32>().is_none());
//! ```

use std::any::Any;
use std::rc::Rc;

use crate::events::object::ObjectId;

/// Optional type-erased payload attached to a publish.
pub type Payload = Option<Rc<dyn Any>>;

/// What a subscriber receives on delivery.
#[derive(Clone)]
pub struct EventContext {
    /// Identity of the publishing object.
    pub publisher: ObjectId,
    /// Optional type-erased payload; downcast via [`EventContext::payload_as`].
    pub payload: Payload,
    /// Free-form metadata strings chosen by the publisher.
    pub metadata: Rc<[String]>,
}

impl EventContext {
    /// Creates a context with no payload and no metadata.
    pub fn new(publisher: ObjectId) -> Self {
        Self {
            publisher,
            payload: None,
            metadata: Rc::from(Vec::<String>::new()),
        }
    }

    /// Attaches a typed payload.
    #[inline]
    pub fn with_payload<T: Any>(mut self, payload: T) -> Self {
        self.payload = Some(Rc::new(payload));
        self
    }

    /// Attaches an already type-erased payload (or clears it with `None`).
    #[inline]
    pub fn with_raw_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Attaches metadata strings.
    #[inline]
    pub fn with_metadata(mut self, metadata: Vec<String>) -> Self {
        self.metadata = Rc::from(metadata);
        self
    }

    /// Downcasts the payload to `T`, if present and of that type.
    pub fn payload_as<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref().and_then(|p| p.downcast_ref::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_downcast() {
        let ctx = EventContext::new(ObjectId::next()).with_payload(7u32);
        assert_eq!(ctx.payload_as::<u32>(), Some(&7));
        assert_eq!(ctx.payload_as::<i64>(), None);
    }

    #[test]
    fn test_empty_context() {
        let ctx = EventContext::new(ObjectId::next());
        assert!(ctx.payload.is_none());
        assert!(ctx.metadata.is_empty());
        assert_eq!(ctx.payload_as::<u32>(), None);
    }

    #[test]
    fn test_clone_shares_payload_and_metadata() {
        let ctx = EventContext::new(ObjectId::next())
            .with_payload(String::from("boss"))
            .with_metadata(vec!["a".into(), "b".into()]);
        let copy = ctx.clone();
        assert!(Rc::ptr_eq(&ctx.metadata, &copy.metadata));
        assert_eq!(copy.payload_as::<String>().map(String::as_str), Some("boss"));
    }
}
