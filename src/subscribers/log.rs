//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] emits one `log::info!` line per delivery:
//!
//! ```text
//! [event] label=OnBossDefeated publisher=#3 payload=yes metadata=["arena=catacombs"]
//! ```
//!
//! Not intended for production use — bind your own [`Callback`] for
//! structured handling.

use crate::events::ObjectId;
use crate::subscribers::callback::{Callback, Subscription};

/// Demo subscriber that logs every event it receives.
///
/// Each `LogWriter` owns its receiver identity, so one writer can be bound
/// to several keys and later removed in one sweep with the `unbind_all_by_*`
/// operations.
pub struct LogWriter {
    receiver: ObjectId,
}

impl LogWriter {
    pub fn new() -> Self {
        Self {
            receiver: ObjectId::next(),
        }
    }

    /// The identity this writer binds under.
    pub fn receiver(&self) -> ObjectId {
        self.receiver
    }

    /// Builds a subscription that logs deliveries under `label`.
    ///
    /// Each call creates a distinct callback identity: keep the returned
    /// [`Subscription`] if you want to unbind that exact binding later.
    pub fn subscription(&self, label: impl Into<String>) -> Subscription {
        let label = label.into();
        Subscription::new(
            self.receiver,
            Callback::new(move |ctx| {
                log::info!(
                    "[event] label={} publisher={} payload={} metadata={:?}",
                    label,
                    ctx.publisher,
                    if ctx.payload.is_some() { "yes" } else { "no" },
                    ctx.metadata,
                );
            }),
        )
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriptions_share_receiver_but_not_identity() {
        let writer = LogWriter::new();
        let a = writer.subscription("a");
        let b = writer.subscription("b");
        assert_eq!(a.receiver(), writer.receiver());
        assert_eq!(b.receiver(), writer.receiver());
        assert_ne!(a, b);
    }
}
