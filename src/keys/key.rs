//! # The key contract shared by all three addressing schemes.
//!
//! [`EventKey`] is the seam that lets the registry's listener index exist
//! once, generically, instead of three hand-copied variants. A key must be cheap to clone,
//! hashable, and able to answer whether it is valid for registry use.
//!
//! ## Rules
//! - Invalid keys never enter an index: every registry operation checks
//!   `is_valid()` first and silently no-ops on failure.
//! - Validity is a property of the key *value*, not of registry state
//!   (an unknown-but-well-formed key is valid; it just has no subscribers).

use std::fmt;
use std::hash::Hash;

/// A map key for one of the registry's three indices.
///
/// Implemented by [`EventClass`](crate::EventClass),
/// [`EventName`](crate::EventName) and [`GameplayTag`](crate::GameplayTag).
pub trait EventKey: Clone + Eq + Hash + fmt::Debug {
    /// Short label of the key kind, used in log lines.
    const KIND: &'static str;

    /// Returns whether this key may be bound, published, or cleared.
    ///
    /// Operations on invalid keys are silent no-ops.
    fn is_valid(&self) -> bool;
}
