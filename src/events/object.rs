//! Non-owning game-object identities.
//!
//! The registry never owns publishers or subscribers; it records who they
//! are. [`ObjectId`] is that record: a process-unique handle allocated from
//! a global counter. `ObjectId::NONE` is the reserved "no object" value and
//! fails every validity guard, so a missing publisher or subscriber turns
//! the operation into a silent no-op.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Global allocator for object identities. 0 is reserved for NONE.
static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a game object.
///
/// Compared and hashed by value; cheap to copy. Allocate one per live game
/// object via [`ObjectId::next`] and reuse it for every bind/publish that
/// object performs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// The reserved "no object" identity. Invalid everywhere.
    pub const NONE: ObjectId = ObjectId(0);

    /// Allocates a fresh process-unique identity.
    pub fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Returns whether this identity refers to an object at all.
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }

    /// Returns the raw numeric value (diagnostic only).
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("#none")
        }
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({self})")
    }
}
