//! # The global event registry.
//!
//! One [`EventRegistry`] per running session. It maintains three disjoint
//! indices — by class, by name, by tag — each mapping a key to the ordered
//! list of unique [`Subscription`](crate::Subscription)s bound to it.
//!
//! ## Architecture
//! ```text
//! Publishers (dialogue, quests, AI, UI):           Subscribers:
//!
//!   publish_by_class ──► ListenerIndex<EventClass> ──┐
//!   publish_by_name  ──► ListenerIndex<EventName>  ──┼──► snapshot ──► invoke
//!   publish_by_tag   ──► ListenerIndex<GameplayTag>──┘    (bind order)
//! ```
//!
//! ## Rules
//! - The three indices never cross-trigger; the same logical event reachable
//!   under a name and a tag is two independent registrations.
//! - Delivery order within one key is bind order, first-bound first-notified.
//! - Duplicate binds, invalid keys, and none identities are silent no-ops.
//! - Publish iterates a snapshot: a callback that re-enters the registry
//!   mutates the *next* delivery pass, never the one in flight.

mod core;
mod index;

pub(crate) use index::ListenerIndex;
pub use self::core::EventRegistry;
