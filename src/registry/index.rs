//! # The generic keyed listener index.
//!
//! [`ListenerIndex`] is the single implementation behind all three of the
//! registry's addressing schemes: an ordered map of key → unique
//! subscription list. The registry instantiates it once per key kind.
//!
//! ## Rules
//! - **Add-unique**: binding an already-present `(receiver, callback)` pair
//!   under the same key is a no-op. Dedup is a linear scan; subscriber
//!   counts per key are small.
//! - **Bind order**: publish notifies subscriptions in insertion order.
//! - **Eager pruning**: a key whose list empties is removed, so
//!   `active_keys` only ever reports keys with at least one subscription.
//! - **Snapshot-then-iterate**: publish clones the subscription list and
//!   releases the borrow before invoking anything, so callbacks may freely
//!   re-enter (bind, unbind, publish) without corrupting the in-flight pass.
//!
//! Interior mutability is `RefCell`, not a lock: the contract is one logical
//! thread per session, with re-entrancy as the only hazard.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::events::{EventContext, ObjectId};
use crate::keys::EventKey;
use crate::subscribers::Subscription;

/// Ordered map of key → unique subscription list, one instance per key kind.
#[derive(Debug)]
pub(crate) struct ListenerIndex<K: EventKey> {
    entries: RefCell<HashMap<K, Vec<Subscription>>>,
}

impl<K: EventKey> ListenerIndex<K> {
    /// Creates an index sized for `capacity` distinct keys (0 = grow on demand).
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RefCell::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Appends `sub` to `key`'s list unless an equal subscription is already
    /// bound there. Invalid keys are dropped silently.
    pub(crate) fn bind(&self, key: K, sub: Subscription) {
        if !key.is_valid() {
            return;
        }
        let mut entries = self.entries.borrow_mut();
        let list = entries.entry(key).or_default();
        if !list.contains(&sub) {
            log::trace!("bind {} receiver={}", K::KIND, sub.receiver());
            list.push(sub);
        }
    }

    /// Removes the subscription equal to `sub` from `key`'s list, if bound.
    pub(crate) fn unbind(&self, key: &K, sub: &Subscription) {
        if !key.is_valid() {
            return;
        }
        let mut entries = self.entries.borrow_mut();
        if let Some(list) = entries.get_mut(key) {
            list.retain(|bound| bound != sub);
            if list.is_empty() {
                entries.remove(key);
            }
        }
    }

    /// Removes every subscription under `key` whose receiver is `receiver`.
    pub(crate) fn unbind_all_for(&self, receiver: ObjectId, key: &K) {
        if !receiver.is_valid() || !key.is_valid() {
            return;
        }
        let mut entries = self.entries.borrow_mut();
        if let Some(list) = entries.get_mut(key) {
            list.retain(|bound| bound.receiver() != receiver);
            if list.is_empty() {
                entries.remove(key);
            }
        }
    }

    /// Invokes every subscription bound to `key`, in bind order, passing `ctx`.
    ///
    /// Iterates a snapshot of the list taken before the first invocation:
    /// re-entrant mutation takes effect for subsequent publishes only.
    pub(crate) fn publish(&self, key: &K, ctx: &EventContext) {
        if !ctx.publisher.is_valid() || !key.is_valid() {
            return;
        }
        let snapshot = match self.entries.borrow().get(key) {
            Some(list) => list.clone(),
            None => return,
        };
        log::debug!(
            "publish {} key={:?} publisher={} subscribers={}",
            K::KIND,
            key,
            ctx.publisher,
            snapshot.len()
        );
        for sub in &snapshot {
            sub.invoke(ctx);
        }
    }

    /// Every key with at least one subscription. Order is map order, no
    /// contract.
    pub(crate) fn active_keys(&self) -> Vec<K> {
        self.entries.borrow().keys().cloned().collect()
    }

    /// Receiver identities bound to `key`, in bind order.
    pub(crate) fn bound_receivers(&self, key: &K) -> Vec<ObjectId> {
        if !key.is_valid() {
            return Vec::new();
        }
        self.entries
            .borrow()
            .get(key)
            .map(|list| list.iter().map(Subscription::receiver).collect())
            .unwrap_or_default()
    }

    /// Drops `key`'s entire subscription list.
    pub(crate) fn clear(&self, key: &K) {
        if !key.is_valid() {
            return;
        }
        if self.entries.borrow_mut().remove(key).is_some() {
            log::trace!("clear {} key={:?}", K::KIND, key);
        }
    }

    /// Drops every key's subscription list.
    pub(crate) fn clear_all(&self) {
        for key in self.active_keys() {
            self.clear(&key);
        }
    }
}
