//! # `EventRegistry`: the public triplicated surface.
//!
//! One registry per session, three disjoint indices inside. Every operation
//! exists once per key kind — `*_by_class`, `*_by_name`, `*_by_tag` — and
//! delegates to the shared generic `ListenerIndex`. The class index
//! additionally gets typed sugar ([`publish_event`](EventRegistry::publish_event),
//! [`bind_class`](EventRegistry::bind_class)) that derives the key from a
//! [`GlobalEvent`] type parameter.
//!
//! ## Failure semantics
//! No operation errors or panics for documented input. Invalid keys, the
//! none publisher/subscriber, duplicate binds, and absent unbinds all no-op
//! silently; only [`EventRegistry::get`] reports anything, and only about
//! session availability. Whatever a subscriber callback does (including
//! panicking) is the caller's concern, not the registry's.
//!
//! ## Example
//! ```rust
//! use rpgbus::{Callback, EventName, ObjectId, Session, SessionConfig, Subscription};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let session = Session::new(SessionConfig::default());
//! let registry = session.registry();
//!
//! let banner_shown = Rc::new(Cell::new(false));
//! let ui = ObjectId::next();
//! let shown = Rc::clone(&banner_shown);
//! registry.bind_by_name(
//!     EventName::from("OnBossDefeated"),
//!     Subscription::new(ui, Callback::new(move |_| shown.set(true))),
//! );
//!
//! registry.publish_by_name(ObjectId::next(), EventName::from("OnBossDefeated"), None, vec![]);
//! assert!(banner_shown.get());
//! ```

use std::rc::Rc;

use crate::error::SessionError;
use crate::events::{EventContext, ObjectId, Payload};
use crate::keys::{EventClass, EventName, GameplayTag, GlobalEvent};
use crate::registry::ListenerIndex;
use crate::session::SessionContext;
use crate::subscribers::Subscription;

/// The session-wide keyed publish/subscribe registry.
///
/// Obtain one from [`Session::registry`](crate::Session::registry) or, from
/// an arbitrary session-attached object, via [`EventRegistry::get`].
#[derive(Debug)]
pub struct EventRegistry {
    by_class: ListenerIndex<EventClass>,
    by_name: ListenerIndex<EventName>,
    by_tag: ListenerIndex<GameplayTag>,
}

impl EventRegistry {
    /// Creates a registry; `capacity` sizes each index (0 = grow on demand).
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            by_class: ListenerIndex::with_capacity(capacity),
            by_name: ListenerIndex::with_capacity(capacity),
            by_tag: ListenerIndex::with_capacity(capacity),
        }
    }

    /// Resolves the registry of the session owning `ctx`.
    ///
    /// # Errors
    /// [`SessionError::NoActiveSession`] if the object cannot reach a live
    /// session.
    pub fn get(ctx: &dyn SessionContext) -> Result<Rc<EventRegistry>, SessionError> {
        ctx.session()
            .map(|session| session.registry())
            .ok_or(SessionError::NoActiveSession)
    }

    fn context(publisher: ObjectId, payload: Payload, metadata: Vec<String>) -> EventContext {
        EventContext::new(publisher)
            .with_raw_payload(payload)
            .with_metadata(metadata)
    }

    // ---- publish ----

    /// Notifies every subscription bound to `class`, in bind order.
    ///
    /// No-op if `publisher` is none or `class` is the base marker.
    pub fn publish_by_class(
        &self,
        publisher: ObjectId,
        class: EventClass,
        payload: Payload,
        metadata: Vec<String>,
    ) {
        self.by_class
            .publish(&class, &Self::context(publisher, payload, metadata));
    }

    /// Notifies every subscription bound to `name`, in bind order.
    pub fn publish_by_name(
        &self,
        publisher: ObjectId,
        name: EventName,
        payload: Payload,
        metadata: Vec<String>,
    ) {
        self.by_name
            .publish(&name, &Self::context(publisher, payload, metadata));
    }

    /// Notifies every subscription bound to `tag` (exact match, no
    /// hierarchy walk), in bind order.
    pub fn publish_by_tag(
        &self,
        publisher: ObjectId,
        tag: GameplayTag,
        payload: Payload,
        metadata: Vec<String>,
    ) {
        self.by_tag
            .publish(&tag, &Self::context(publisher, payload, metadata));
    }

    /// Publishes `event` under its own type's class key, carrying the event
    /// value as the payload.
    pub fn publish_event<E: GlobalEvent>(
        &self,
        publisher: ObjectId,
        event: E,
        metadata: Vec<String>,
    ) {
        let ctx = EventContext::new(publisher)
            .with_payload(event)
            .with_metadata(metadata);
        self.by_class.publish(&EventClass::of::<E>(), &ctx);
    }

    // ---- bind ----

    /// Binds `sub` to `class` unless an equal subscription is already there.
    pub fn bind_by_class(&self, class: EventClass, sub: Subscription) {
        self.by_class.bind(class, sub);
    }

    /// Binds `sub` to `name` unless an equal subscription is already there.
    pub fn bind_by_name(&self, name: EventName, sub: Subscription) {
        self.by_name.bind(name, sub);
    }

    /// Binds `sub` to `tag` unless an equal subscription is already there.
    pub fn bind_by_tag(&self, tag: GameplayTag, sub: Subscription) {
        self.by_tag.bind(tag, sub);
    }

    /// Typed shorthand for [`bind_by_class`](Self::bind_by_class).
    pub fn bind_class<E: GlobalEvent>(&self, sub: Subscription) {
        self.by_class.bind(EventClass::of::<E>(), sub);
    }

    // ---- unbind ----

    /// Removes the subscription equal to `sub` from `class`, if bound.
    pub fn unbind_by_class(&self, class: &EventClass, sub: &Subscription) {
        self.by_class.unbind(class, sub);
    }

    /// Removes the subscription equal to `sub` from `name`, if bound.
    pub fn unbind_by_name(&self, name: &EventName, sub: &Subscription) {
        self.by_name.unbind(name, sub);
    }

    /// Removes the subscription equal to `sub` from `tag`, if bound.
    pub fn unbind_by_tag(&self, tag: &GameplayTag, sub: &Subscription) {
        self.by_tag.unbind(tag, sub);
    }

    /// Typed shorthand for [`unbind_by_class`](Self::unbind_by_class).
    pub fn unbind_class<E: GlobalEvent>(&self, sub: &Subscription) {
        self.by_class.unbind(&EventClass::of::<E>(), sub);
    }

    /// Removes every subscription of `subscriber` under `class`.
    pub fn unbind_all_by_class(&self, subscriber: ObjectId, class: &EventClass) {
        self.by_class.unbind_all_for(subscriber, class);
    }

    /// Removes every subscription of `subscriber` under `name`.
    pub fn unbind_all_by_name(&self, subscriber: ObjectId, name: &EventName) {
        self.by_name.unbind_all_for(subscriber, name);
    }

    /// Removes every subscription of `subscriber` under `tag`.
    pub fn unbind_all_by_tag(&self, subscriber: ObjectId, tag: &GameplayTag) {
        self.by_tag.unbind_all_for(subscriber, tag);
    }

    // ---- introspection ----

    /// Every class key with at least one subscription. Map order, no
    /// ordering contract.
    pub fn active_classes(&self) -> Vec<EventClass> {
        self.by_class.active_keys()
    }

    /// Every name key with at least one subscription.
    pub fn active_names(&self) -> Vec<EventName> {
        self.by_name.active_keys()
    }

    /// Every tag key with at least one subscription.
    pub fn active_tags(&self) -> Vec<GameplayTag> {
        self.by_tag.active_keys()
    }

    /// Receiver identities bound to `class`, in bind order.
    pub fn bound_subscribers_by_class(&self, class: &EventClass) -> Vec<ObjectId> {
        self.by_class.bound_receivers(class)
    }

    /// Receiver identities bound to `name`, in bind order.
    pub fn bound_subscribers_by_name(&self, name: &EventName) -> Vec<ObjectId> {
        self.by_name.bound_receivers(name)
    }

    /// Receiver identities bound to `tag`, in bind order.
    pub fn bound_subscribers_by_tag(&self, tag: &GameplayTag) -> Vec<ObjectId> {
        self.by_tag.bound_receivers(tag)
    }

    // ---- clearing ----

    /// Drops `class`'s entire subscription list.
    pub fn clear_class(&self, class: &EventClass) {
        self.by_class.clear(class);
    }

    /// Drops `name`'s entire subscription list.
    pub fn clear_name(&self, name: &EventName) {
        self.by_name.clear(name);
    }

    /// Drops `tag`'s entire subscription list.
    pub fn clear_tag(&self, tag: &GameplayTag) {
        self.by_tag.clear(tag);
    }

    /// Empties every class key.
    pub fn clear_all_classes(&self) {
        self.by_class.clear_all();
    }

    /// Empties every name key.
    pub fn clear_all_names(&self) {
        self.by_name.clear_all();
    }

    /// Empties every tag key.
    pub fn clear_all_tags(&self) {
        self.by_tag.clear_all();
    }

    /// Session teardown: empties all three indices at once.
    pub(crate) fn clear_everything(&self) {
        self.by_class.clear_all();
        self.by_name.clear_all();
        self.by_tag.clear_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscribers::Callback;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct BossDefeated;
    impl GlobalEvent for BossDefeated {}

    fn recording(journal: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> Subscription {
        let journal = Rc::clone(journal);
        Subscription::new(
            ObjectId::next(),
            Callback::new(move |_| journal.borrow_mut().push(tag)),
        )
    }

    #[test]
    fn test_indices_never_cross_trigger() {
        let registry = EventRegistry::new(0);
        let journal = Rc::new(RefCell::new(Vec::new()));

        registry.bind_by_name(EventName::from("BossDefeated"), recording(&journal, "name"));
        registry.bind_by_tag(
            GameplayTag::parse("BossDefeated").unwrap(),
            recording(&journal, "tag"),
        );
        registry.bind_class::<BossDefeated>(recording(&journal, "class"));

        let publisher = ObjectId::next();
        registry.publish_by_name(publisher, EventName::from("BossDefeated"), None, vec![]);
        assert_eq!(*journal.borrow(), vec!["name"]);

        registry.publish_by_tag(
            publisher,
            GameplayTag::parse("BossDefeated").unwrap(),
            None,
            vec![],
        );
        assert_eq!(*journal.borrow(), vec!["name", "tag"]);

        registry.publish_event(publisher, BossDefeated, vec![]);
        assert_eq!(*journal.borrow(), vec!["name", "tag", "class"]);
    }

    #[test]
    fn test_typed_publish_carries_event_as_payload() {
        struct DamageDealt {
            amount: u32,
        }
        impl GlobalEvent for DamageDealt {}

        let registry = EventRegistry::new(0);
        let seen = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&seen);
        registry.bind_class::<DamageDealt>(Subscription::new(
            ObjectId::next(),
            Callback::new(move |ctx| {
                *sink.borrow_mut() = ctx.payload_as::<DamageDealt>().map(|e| e.amount);
            }),
        ));

        registry.publish_event(ObjectId::next(), DamageDealt { amount: 120 }, vec![]);
        assert_eq!(*seen.borrow(), Some(120));
    }

    #[test]
    fn test_base_class_key_is_rejected() {
        let registry = EventRegistry::new(0);
        let journal = Rc::new(RefCell::new(Vec::new()));

        registry.bind_by_class(EventClass::base(), recording(&journal, "base"));
        assert!(registry.active_classes().is_empty());

        registry.publish_by_class(ObjectId::next(), EventClass::base(), None, vec![]);
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn test_clear_all_is_scoped_to_one_kind() {
        let registry = EventRegistry::new(0);
        let journal = Rc::new(RefCell::new(Vec::new()));

        registry.bind_by_name(EventName::from("a"), recording(&journal, "name"));
        registry.bind_by_tag(GameplayTag::parse("a").unwrap(), recording(&journal, "tag"));

        registry.clear_all_names();

        assert!(registry.active_names().is_empty());
        assert_eq!(registry.active_tags().len(), 1);

        registry.publish_by_tag(ObjectId::next(), GameplayTag::parse("a").unwrap(), None, vec![]);
        assert_eq!(*journal.borrow(), vec!["tag"]);
    }

    #[test]
    fn test_boss_defeated_scenario() {
        // spec'd end-to-end flow: two subscribers in order, then one object
        // unbinds everything it had under the key.
        let registry = EventRegistry::new(0);
        let key = EventName::from("OnBossDefeated");

        let ui_manager = ObjectId::next();
        let quest_system = ObjectId::next();
        let journal = Rc::new(RefCell::new(Vec::new()));

        let banner = {
            let journal = Rc::clone(&journal);
            Subscription::new(
                ui_manager,
                Callback::new(move |ctx| {
                    assert!(ctx.payload_as::<&str>().is_some(), "boss payload expected");
                    journal.borrow_mut().push("ShowVictoryBanner");
                }),
            )
        };
        let advance = {
            let journal = Rc::clone(&journal);
            Subscription::new(
                quest_system,
                Callback::new(move |_| journal.borrow_mut().push("AdvanceQuest")),
            )
        };

        registry.bind_by_name(key.clone(), banner);
        registry.bind_by_name(key.clone(), advance);

        let player_controller = ObjectId::next();
        registry.publish_by_name(
            player_controller,
            key.clone(),
            Some(Rc::new("BossActor")),
            vec![],
        );
        assert_eq!(*journal.borrow(), vec!["ShowVictoryBanner", "AdvanceQuest"]);
        assert_eq!(
            registry.bound_subscribers_by_name(&key),
            vec![ui_manager, quest_system]
        );

        registry.unbind_all_by_name(ui_manager, &key);
        journal.borrow_mut().clear();

        registry.publish_by_name(player_controller, key.clone(), Some(Rc::new("BossActor")), vec![]);
        assert_eq!(*journal.borrow(), vec!["AdvanceQuest"]);
        assert_eq!(registry.bound_subscribers_by_name(&key), vec![quest_system]);
    }

    #[test]
    fn test_metadata_reaches_subscribers() {
        let registry = EventRegistry::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        registry.bind_by_name(
            EventName::from("k"),
            Subscription::new(
                ObjectId::next(),
                Callback::new(move |ctx| sink.borrow_mut().extend(ctx.metadata.iter().cloned())),
            ),
        );

        registry.publish_by_name(
            ObjectId::next(),
            EventName::from("k"),
            None,
            vec!["arena=catacombs".to_string(), "difficulty=hard".to_string()],
        );
        assert_eq!(*seen.borrow(), vec!["arena=catacombs", "difficulty=hard"]);
    }
}
