//! # Session: the lifetime scope that owns one registry.
//!
//! A [`Session`] corresponds to one running game instance. It owns the
//! [`EventRegistry`] for that run; when the session ends, every subscription
//! in every index is invalidated at once.
//!
//! ## Lifecycle
//! ```text
//! Session::new(config) ──► Rc<Session> ──► registry() handed to game systems
//!        │                                    │  bind / publish / unbind ...
//!        └── end() ──► clear all three indices (all subscriptions dropped)
//! ```
//!
//! Rather than a process global, the registry is reached by threading the
//! session through [`SessionContext`]: any object that can name its owning
//! session can resolve the registry via
//! [`EventRegistry::get`](crate::EventRegistry::get).

use std::rc::Rc;

use crate::registry::EventRegistry;

/// Settings for a new session.
///
/// ## Field semantics
/// - `event_capacity`: how many distinct keys each of the three indices
///   pre-allocates room for (`0` = grow on demand). Purely a sizing hint;
///   no behavior depends on it.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionConfig {
    /// Pre-allocated key capacity per index (`0` = grow on demand).
    pub event_capacity: usize,
}

/// One running game instance's event scope.
pub struct Session {
    registry: Rc<EventRegistry>,
}

impl Session {
    /// Creates a session with a fresh, empty registry.
    pub fn new(config: SessionConfig) -> Rc<Self> {
        Rc::new(Self {
            registry: Rc::new(EventRegistry::new(config.event_capacity)),
        })
    }

    /// The session's registry. Cheap to clone and hand out.
    pub fn registry(&self) -> Rc<EventRegistry> {
        Rc::clone(&self.registry)
    }

    /// Ends the session: drops every subscription in all three indices.
    ///
    /// Objects holding the registry may keep calling it afterwards; they
    /// will find it empty, not poisoned.
    pub fn end(&self) {
        log::debug!("session ending, clearing event registry");
        self.registry.clear_everything();
    }
}

/// Resolves the owning session from an arbitrary live object.
///
/// Game objects implement this so publishers and subscribers can reach "the
/// current session's registry" without a global. Returning `None` means the
/// object is not (or no longer) attached to a session.
pub trait SessionContext {
    /// The session owning this object, if any.
    fn session(&self) -> Option<Rc<Session>>;
}

impl SessionContext for Rc<Session> {
    fn session(&self) -> Option<Rc<Session>> {
        Some(Rc::clone(self))
    }
}
