//! # rpgbus
//!
//! **rpgbus** is a keyed publish/subscribe event registry for game sessions:
//! dialogue nodes, quest triggers, AI and UI raise named events and react to
//! each other's without holding direct references.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//!  │  Dialogue   │   │    Quest    │   │   AI / UI   │
//!  │ (publisher) │   │ (publisher) │   │(subscribers)│
//!  └──────┬──────┘   └──────┬──────┘   └──────┬──────┘
//!         ▼                 ▼                 │ bind / unbind
//! ┌───────────────────────────────────────────▼───────────────┐
//! │  EventRegistry (one per Session)                          │
//! │  ┌─────────────────────┐  keyed three independent ways:   │
//! │  │ ListenerIndex<K>    │   - EventClass (payload type)    │
//! │  │ (generic, x3)       │   - EventName  (symbolic name)   │
//! │  │ key → [Subscription]│   - GameplayTag (dotted tag)     │
//! │  └─────────────────────┘                                  │
//! └──────────────────────────┬────────────────────────────────┘
//!                            │ publish: snapshot, then invoke
//!                            ▼ in bind order
//!                  Subscription callbacks
//!                  (receiver ObjectId + Callback)
//! ```
//!
//! ### Lifecycle
//! ```text
//! Session::new ──► registry handed to game systems
//!   bind ──► appended unless (receiver, callback) already bound (add-unique)
//!   publish ──► snapshot of key's list ──► invoke in bind order
//!               (re-entrant bind/unbind affects the NEXT publish only)
//!   unbind / unbind_all / clear ──► prune key once its list empties
//! Session::end ──► all three indices emptied, every subscription dropped
//! ```
//!
//! ## Features
//! | Area             | Description                                              | Key types / traits                  |
//! |------------------|----------------------------------------------------------|-------------------------------------|
//! | **Keys**         | Three disjoint addressing schemes for events.            | [`EventClass`], [`EventName`], [`GameplayTag`], [`EventKey`] |
//! | **Registry**     | Bind, publish, unbind, enumerate, clear — per key kind.  | [`EventRegistry`]                   |
//! | **Subscriptions**| Identity-carrying callbacks with add-unique semantics.   | [`Subscription`], [`Callback`]      |
//! | **Sessions**     | One registry per running game, explicit context passing. | [`Session`], [`SessionContext`]     |
//! | **Dialogue**     | Authored nodes that raise events by tag or name.         | [`RaiseGlobalEvent`], [`EventAddress`] |
//! | **Errors**       | Session lookup and tag parsing failures.                 | [`SessionError`], [`TagError`]      |
//!
//! ## Contract highlights
//! - Single logical thread per session; re-entrancy (a callback touching the
//!   registry mid-publish) is safe, concurrency is the host's problem.
//! - Invalid keys and none identities make any operation a silent no-op;
//!   the registry never panics or errors for documented input.
//! - Delivery order within one key is bind order. No ordering contract
//!   across keys or across the three indices.
//!
//! ## Example
//! ```rust
//! use rpgbus::{Callback, EventName, ObjectId, Session, SessionConfig, Subscription};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let session = Session::new(SessionConfig::default());
//! let registry = session.registry();
//! let key = EventName::from("OnBossDefeated");
//!
//! // two systems react, in bind order
//! let journal = Rc::new(RefCell::new(Vec::new()));
//! let ui = ObjectId::next();
//! let quests = ObjectId::next();
//! for (who, label) in [(ui, "banner"), (quests, "advance-quest")] {
//!     let journal = Rc::clone(&journal);
//!     registry.bind_by_name(
//!         key.clone(),
//!         Subscription::new(who, Callback::new(move |_| journal.borrow_mut().push(label))),
//!     );
//! }
//!
//! let player = ObjectId::next();
//! registry.publish_by_name(player, key.clone(), None, vec![]);
//! assert_eq!(*journal.borrow(), vec!["banner", "advance-quest"]);
//!
//! // the UI tears down and removes everything it had under this key
//! registry.unbind_all_by_name(ui, &key);
//! assert_eq!(registry.bound_subscribers_by_name(&key), vec![quests]);
//! ```

mod dialogue;
mod error;
mod events;
mod keys;
mod registry;
mod session;
mod subscribers;

// ---- Public re-exports ----

pub use dialogue::{DialogueParticipant, EventAddress, RaiseGlobalEvent};
pub use error::{SessionError, TagError};
pub use events::{EventContext, ObjectId, Payload};
pub use keys::{EventClass, EventKey, EventName, GameplayTag, GlobalEvent};
pub use registry::EventRegistry;
pub use session::{Session, SessionConfig, SessionContext};
pub use subscribers::{Callback, LogWriter, Subscription};
