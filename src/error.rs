//! Error types for session lookup and tag parsing.
//!
//! The registry itself never errors: every documented precondition failure
//! (invalid key, none publisher/subscriber, duplicate bind, unbinding
//! something absent) is a silent no-op by contract. Errors only arise at the
//! edges — resolving a session from an object, and parsing tags.

use thiserror::Error;

/// # Failure to resolve the session-scoped registry.
///
/// Returned by [`EventRegistry::get`](crate::EventRegistry::get) when the
/// context object cannot reach a live session (for example after the session
/// ended, or for an object never attached to one).
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The context object has no owning session.
    #[error("no active session for this object")]
    NoActiveSession,
}

impl SessionError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SessionError::NoActiveSession => "session_unavailable",
        }
    }
}

/// # Malformed gameplay tag.
///
/// Produced by [`GameplayTag::parse`](crate::GameplayTag::parse). A tag must
/// be one or more dot-separated segments of ASCII alphanumerics/underscores.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// The empty string is the "none" tag, not a parseable one.
    #[error("empty tag")]
    Empty,

    /// A leading, trailing, or doubled dot produced an empty segment.
    #[error("empty segment in tag {tag:?}")]
    EmptySegment {
        /// The offending input.
        tag: String,
    },

    /// A character outside `[A-Za-z0-9_.]`.
    #[error("invalid character {ch:?} in tag {tag:?}")]
    InvalidCharacter {
        /// The offending input.
        tag: String,
        /// The first rejected character.
        ch: char,
    },
}

impl TagError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            TagError::Empty => "tag_empty",
            TagError::EmptySegment { .. } => "tag_empty_segment",
            TagError::InvalidCharacter { .. } => "tag_invalid_character",
        }
    }
}
