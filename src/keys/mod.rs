//! Event keys: the three independent addressing schemes.
//!
//! An event is addressed by exactly one of three key kinds:
//! - [`EventClass`] — a stable type identifier for a payload event type
//! - [`EventName`] — a symbolic name chosen by the author
//! - [`GameplayTag`] — a hierarchical dotted tag
//!
//! The three kinds are **disjoint indices** in the registry: binding under a
//! class never makes a subscriber reachable via an equivalent name or tag.
//!
//! All three implement [`EventKey`], which is what lets the registry carry a
//! single generic implementation instead of three copies of the same logic.

mod class;
mod key;
mod name;
mod tag;

pub use class::{EventClass, GlobalEvent};
pub use key::EventKey;
pub use name::EventName;
pub use tag::GameplayTag;
