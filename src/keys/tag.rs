//! # Hierarchical gameplay tags.
//!
//! [`GameplayTag`] is a dotted, hierarchical label (`"Combat.Boss.Defeated"`)
//! in the style of designer-authored tag tables. Tags are parsed once via
//! [`GameplayTag::parse`] and are cheap to clone afterwards.
//!
//! ## Rules
//! - A well-formed tag is one or more dot-separated segments, each made of
//!   ASCII alphanumerics or underscores.
//! - The default tag is the empty "none" tag; it is the one invalid value
//!   and is rejected by every registry operation.
//! - Hierarchy helpers ([`matches`](GameplayTag::matches),
//!   [`parent`](GameplayTag::parent), [`depth`](GameplayTag::depth)) are a
//!   capability of the tag type. The registry itself only ever compares tags
//!   for exact equality.
//!
//! ## Example
//! ```rust
//! use rpgbus::GameplayTag;
//!
//! let defeated = GameplayTag::parse("Combat.Boss.Defeated")?;
//! let boss = GameplayTag::parse("Combat.Boss")?;
//!
//! assert!(defeated.matches(&boss));
//! assert!(!boss.matches(&defeated));
//! assert_eq!(defeated.parent(), Some(boss));
//! assert_eq!(defeated.depth(), 3);
//! # Ok::<(), rpgbus::TagError>(())
//! ```

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::TagError;
use crate::keys::key::EventKey;

/// A hierarchical dotted tag.
///
/// Obtain one via [`GameplayTag::parse`]; the [`Default`] value is the
/// invalid "none" tag.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GameplayTag(Rc<str>);

impl GameplayTag {
    /// Returns the empty "none" tag. Invalid as a registry key.
    pub fn none() -> Self {
        Self(Rc::from(""))
    }

    /// Parses a dotted tag, validating its shape.
    ///
    /// # Errors
    /// - [`TagError::Empty`] for the empty string
    /// - [`TagError::EmptySegment`] for leading/trailing/doubled dots
    /// - [`TagError::InvalidCharacter`] for anything outside `[A-Za-z0-9_.]`
    pub fn parse(tag: &str) -> Result<Self, TagError> {
        if tag.is_empty() {
            return Err(TagError::Empty);
        }
        for segment in tag.split('.') {
            if segment.is_empty() {
                return Err(TagError::EmptySegment { tag: tag.to_string() });
            }
            if let Some(ch) = segment.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
                return Err(TagError::InvalidCharacter { tag: tag.to_string(), ch });
            }
        }
        Ok(Self(Rc::from(tag)))
    }

    /// Returns the full dotted name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether this is the empty "none" tag.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments; 0 for the none tag.
    pub fn depth(&self) -> usize {
        if self.is_none() {
            0
        } else {
            self.0.split('.').count()
        }
    }

    /// Returns the tag with the last segment removed, or `None` at the root.
    pub fn parent(&self) -> Option<GameplayTag> {
        let idx = self.0.rfind('.')?;
        Some(Self(Rc::from(&self.0[..idx])))
    }

    /// Hierarchy-aware match: true if `self` equals `parent` or sits below
    /// it (`"Combat.Boss.Defeated"` matches `"Combat.Boss"`).
    ///
    /// The none tag matches nothing and is matched by nothing.
    pub fn matches(&self, parent: &GameplayTag) -> bool {
        if self.is_none() || parent.is_none() {
            return false;
        }
        match self.0.strip_prefix(parent.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('.'),
            None => false,
        }
    }
}

impl Default for GameplayTag {
    fn default() -> Self {
        Self::none()
    }
}

impl EventKey for GameplayTag {
    const KIND: &'static str = "tag";

    fn is_valid(&self) -> bool {
        !self.is_none()
    }
}

impl FromStr for GameplayTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GameplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for GameplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GameplayTag").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_accepts_well_formed_tags() {
        for tag in ["Combat", "Combat.Boss", "Combat.Boss.Defeated", "UI.Hud_2"] {
            assert!(GameplayTag::parse(tag).is_ok(), "{tag} should parse");
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(GameplayTag::parse(""), Err(TagError::Empty));
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        for tag in [".Combat", "Combat.", "Combat..Boss"] {
            assert!(
                matches!(GameplayTag::parse(tag), Err(TagError::EmptySegment { .. })),
                "{tag} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_bad_characters() {
        assert!(matches!(
            GameplayTag::parse("Combat Boss"),
            Err(TagError::InvalidCharacter { ch: ' ', .. })
        ));
    }

    #[test]
    fn test_hierarchy_matching() {
        let child = GameplayTag::parse("Combat.Boss.Defeated").unwrap();
        let parent = GameplayTag::parse("Combat.Boss").unwrap();
        let sibling = GameplayTag::parse("Combat.Bossfight").unwrap();

        assert!(child.matches(&parent));
        assert!(child.matches(&child));
        assert!(!parent.matches(&child));
        // prefix must end on a segment boundary
        assert!(!sibling.matches(&parent));
    }

    #[test]
    fn test_parent_chain() {
        let tag = GameplayTag::parse("A.B.C").unwrap();
        assert_eq!(tag.parent(), Some(GameplayTag::parse("A.B").unwrap()));
        assert_eq!(tag.parent().unwrap().parent(), Some(GameplayTag::parse("A").unwrap()));
        assert_eq!(tag.parent().unwrap().parent().unwrap().parent(), None);
    }

    #[test]
    fn test_none_tag_is_invalid_and_matches_nothing() {
        let none = GameplayTag::none();
        let tag = GameplayTag::parse("Combat").unwrap();
        assert!(!none.is_valid());
        assert!(!none.matches(&tag));
        assert!(!tag.matches(&none));
        assert_eq!(none.depth(), 0);
    }
}
