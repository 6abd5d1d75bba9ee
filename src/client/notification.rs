//! Transient status banners.

use std::time::{Duration, Instant};

/// Styling of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
}

/// A banner that dismisses itself once its lifetime has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    message: String,
    kind: NotificationKind,
    shown_at: Instant,
    ttl: Duration,
}

impl Notification {
    /// Creates a notification shown at `shown_at` for `ttl`.
    pub fn new(
        message: impl Into<String>,
        kind: NotificationKind,
        shown_at: Instant,
        ttl: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at,
            ttl,
        }
    }

    /// Banner text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Banner styling.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// When the banner appeared.
    #[must_use]
    pub const fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Whether the banner is still on screen at `now`.
    #[must_use]
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.ttl
    }
}
