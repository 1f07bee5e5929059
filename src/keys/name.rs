//! Name-addressed event keys.
//!
//! [`EventName`] is a cheap-to-clone symbolic name (`Rc<str>` under the
//! hood). The empty name is the "none" value and is invalid as a registry
//! key, mirroring the none-check of the other key kinds.

use std::fmt;
use std::rc::Rc;

use crate::keys::key::EventKey;

/// A name-addressed event key.
///
/// Clones share the underlying string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EventName(Rc<str>);

impl EventName {
    /// Creates a name key. The empty string yields the invalid "none" name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Rc::from(name.as_ref()))
    }

    /// Returns the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the empty "none" name.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }
}

impl EventKey for EventName {
    const KIND: &'static str = "name";

    fn is_valid(&self) -> bool {
        !self.is_none()
    }
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventName").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(EventName::from("OnBossDefeated"), EventName::new("OnBossDefeated"));
        assert_ne!(EventName::from("OnBossDefeated"), EventName::from("OnBossSpawned"));
    }

    #[test]
    fn test_empty_name_is_invalid() {
        assert!(!EventName::from("").is_valid());
        assert!(EventName::from("x").is_valid());
    }
}
