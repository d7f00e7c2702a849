//! Transient status messages ("toasts").
//!
//! A [`NotificationChannel`] belongs to one browser session. Messages expire
//! on their own; nothing here is an audit log.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::types::NotificationId;

/// How long a notification stays visible unless dismissed.
pub const DEFAULT_TTL: TimeDelta = TimeDelta::seconds(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationChannel {
    last_id: i64,
    items: Vec<Notification>,
}

impl NotificationChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a message that expires [`DEFAULT_TTL`] from now.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        self.notify_at(message, kind, Utc::now())
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(message, NotificationKind::Success)
    }

    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(message, NotificationKind::Error)
    }

    /// Post a message as of `now`.
    pub fn notify_at(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> NotificationId {
        self.last_id += 1;
        let id = NotificationId::new(self.last_id);
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            expires_at: now + DEFAULT_TTL,
        });
        id
    }

    /// Unexpired messages in posting order. Expired ones are dropped.
    pub fn active(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        self.items.retain(|n| !n.is_expired(now));
        self.items.clone()
    }

    /// Remove one message. Returns whether it was present.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_messages_expire_after_ttl() {
        let mut channel = NotificationChannel::new();
        channel.notify_at("Property added successfully!", NotificationKind::Success, t0());

        assert_eq!(channel.active(t0() + TimeDelta::seconds(4)).len(), 1);
        assert!(channel.active(t0() + TimeDelta::seconds(5)).is_empty());
        assert!(channel.is_empty());
    }

    #[test]
    fn test_active_keeps_posting_order() {
        let mut channel = NotificationChannel::new();
        channel.notify_at("first", NotificationKind::Success, t0());
        channel.notify_at("second", NotificationKind::Error, t0() + TimeDelta::seconds(1));

        let active = channel.active(t0() + TimeDelta::seconds(2));
        let messages: Vec<_> = active.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn test_expiry_is_per_message() {
        let mut channel = NotificationChannel::new();
        channel.notify_at("old", NotificationKind::Success, t0());
        channel.notify_at("new", NotificationKind::Success, t0() + TimeDelta::seconds(3));

        let active = channel.active(t0() + TimeDelta::seconds(6));
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "new");
    }

    #[test]
    fn test_dismiss_removes_one() {
        let mut channel = NotificationChannel::new();
        let first = channel.notify_at("a", NotificationKind::Success, t0());
        channel.notify_at("b", NotificationKind::Success, t0());

        assert!(channel.dismiss(first));
        assert!(!channel.dismiss(first));
        assert_eq!(channel.active(t0()).len(), 1);
    }

    #[test]
    fn test_channel_survives_serde() {
        let mut channel = NotificationChannel::new();
        channel.notify_at("Enquiry archived", NotificationKind::Success, t0());

        let json = serde_json::to_string(&channel).unwrap();
        let mut restored: NotificationChannel = serde_json::from_str(&json).unwrap();
        let id = restored.notify_at("next", NotificationKind::Error, t0());

        assert_eq!(id, NotificationId::new(2));
    }
}
