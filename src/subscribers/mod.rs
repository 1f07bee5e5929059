//! # Subscriptions: who gets called, and how equality works.
//!
//! A [`Subscription`] is a `(receiver, callback)` pair registered against an
//! event key. Two subscriptions are equal iff both the receiver identity and
//! the callback identity match — this is what gives the registry its
//! add-unique semantics: binding the identical pair to the same key twice is
//! a no-op, while the same receiver may hold several distinct callbacks
//! under one key.
//!
//! ## Architecture
//! ```text
//! game object ──► ObjectId (receiver)  ─┐
//!                                       ├──► Subscription ──► bound to key
//! closure     ──► Callback (identity)  ─┘
//! ```
//!
//! [`LogWriter`] is a built-in demo subscriber that logs every delivery.

mod callback;
mod log;

pub use callback::{Callback, Subscription};
pub use log::LogWriter;
