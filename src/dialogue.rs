//! # Dialogue-driven event publishing.
//!
//! [`RaiseGlobalEvent`] is the bridge from an authored dialogue node to the
//! registry: when the node fires, it resolves the session from whichever
//! participant can provide one (player first, NPC as fallback) and publishes
//! under the address the author configured — a tag or a name, never both.
//!
//! The player is the publisher; the NPC's identity rides along as the
//! payload so subscribers know which actor the dialogue concerned.
//!
//! ## Rules
//! - Every missing link is a silent no-op: no participants, no session,
//!   invalid address — nothing happens, nothing is raised.
//! - With no player, the publish carries the none identity and is dropped
//!   by the registry's publisher guard.

use std::any::Any;
use std::rc::Rc;

use crate::events::{ObjectId, Payload};
use crate::keys::{EventKey, EventName, GameplayTag};
use crate::registry::EventRegistry;
use crate::session::SessionContext;

/// An object that can take part in a dialogue: it has an identity and may
/// know its owning session.
pub trait DialogueParticipant: SessionContext {
    /// Identity of the participating game object.
    fn object_id(&self) -> ObjectId;
}

/// Author-time choice of addressing scheme for a raised event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventAddress {
    /// Publish under a gameplay tag.
    Tag(GameplayTag),
    /// Publish under a symbolic name.
    Name(EventName),
}

/// A dialogue node action that raises a global event when triggered.
///
/// ## Example
/// ```rust
/// use rpgbus::{GameplayTag, RaiseGlobalEvent};
///
/// let node = RaiseGlobalEvent::by_tag(GameplayTag::parse("Dialogue.Quest.Accepted")?)
///     .with_metadata(vec!["quest=catacombs".to_string()]);
/// // node.trigger(Some(&player), Some(&npc)) when the dialogue fires
/// # Ok::<(), rpgbus::TagError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RaiseGlobalEvent {
    address: EventAddress,
    metadata: Vec<String>,
}

impl RaiseGlobalEvent {
    /// Configures a tag-addressed raise.
    pub fn by_tag(tag: GameplayTag) -> Self {
        Self {
            address: EventAddress::Tag(tag),
            metadata: Vec::new(),
        }
    }

    /// Configures a name-addressed raise.
    pub fn by_name(name: EventName) -> Self {
        Self {
            address: EventAddress::Name(name),
            metadata: Vec::new(),
        }
    }

    /// Attaches metadata strings forwarded with every raise.
    pub fn with_metadata(mut self, metadata: Vec<String>) -> Self {
        self.metadata = metadata;
        self
    }

    /// The configured address.
    pub fn address(&self) -> &EventAddress {
        &self.address
    }

    /// Fires the node: resolve the session (player first, NPC fallback) and
    /// publish under the configured address.
    ///
    /// Publisher is the player; payload is the NPC's [`ObjectId`], when
    /// present. Silent no-op if no session is reachable or the address is
    /// invalid.
    pub fn trigger(
        &self,
        player: Option<&dyn DialogueParticipant>,
        npc: Option<&dyn DialogueParticipant>,
    ) {
        let session = player
            .and_then(|p| p.session())
            .or_else(|| npc.and_then(|n| n.session()));
        let Some(session) = session else {
            log::trace!("raise-global-event dropped: no session reachable");
            return;
        };
        let registry = session.registry();

        let publisher = player.map(|p| p.object_id()).unwrap_or(ObjectId::NONE);
        let payload: Payload = npc.map(|n| Rc::new(n.object_id()) as Rc<dyn Any>);

        self.raise(&registry, publisher, payload);
    }

    fn raise(&self, registry: &EventRegistry, publisher: ObjectId, payload: Payload) {
        match &self.address {
            EventAddress::Tag(tag) if tag.is_valid() => {
                registry.publish_by_tag(publisher, tag.clone(), payload, self.metadata.clone());
            }
            EventAddress::Name(name) if name.is_valid() => {
                registry.publish_by_name(publisher, name.clone(), payload, self.metadata.clone());
            }
            _ => {
                log::trace!("raise-global-event dropped: invalid address {:?}", self.address);
            }
        }
    }
}
