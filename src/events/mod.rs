//! Object identities and the delivery context.
//!
//! This module groups what flows *through* the registry on every publish:
//! - [`ObjectId`] non-owning identity of game objects (publishers, receivers,
//!   payload targets)
//! - [`EventContext`] the argument handed to every subscriber callback
//!
//! The registry holds identities, never the objects themselves. It is the
//! subscriber's responsibility to unbind before its object goes away.

mod context;
mod object;

pub use context::{EventContext, Payload};
pub use object::ObjectId;
