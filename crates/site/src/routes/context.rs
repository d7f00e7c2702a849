//! Per-request page chrome: current path and pending notifications.

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::Utc;
use tower_sessions::Session;
use wenz_homez_core::notify::Notification;

use crate::error::AppError;
use crate::models::session::{notifications, save_notifications};

/// Notification view for templates.
#[derive(Debug, Clone)]
pub struct NotificationView {
    pub id: i64,
    pub message: String,
    pub kind: &'static str,
}

impl From<&Notification> for NotificationView {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.as_i64(),
            message: notification.message.clone(),
            kind: notification.kind.as_str(),
        }
    }
}

/// Data every page layout needs.
///
/// Extracting it prunes expired notifications from the session.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub current_path: String,
    /// Path and query, for forms that come back to this page.
    pub return_to: String,
    pub notifications: Vec<NotificationView>,
}

impl PageContext {
    /// Whether the nav link for `prefix` should be highlighted.
    #[must_use]
    pub fn is_current(&self, prefix: &str) -> bool {
        match prefix {
            "/" | "/admin" => self.current_path == prefix,
            _ => self.current_path.starts_with(prefix),
        }
    }
}

impl<S> FromRequestParts<S> for PageContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let current_path = parts.uri.path().to_string();
        let return_to = parts
            .uri
            .path_and_query()
            .map_or_else(|| current_path.clone(), |pq| pq.as_str().to_string());

        let Some(session) = parts.extensions.get::<Session>().cloned() else {
            return Ok(Self {
                current_path,
                return_to,
                notifications: Vec::new(),
            });
        };

        let mut channel = notifications(&session).await?;
        let stored = channel.clone();
        let active = channel.active(Utc::now());
        if channel != stored {
            save_notifications(&session, &channel).await?;
        }

        Ok(Self {
            current_path,
            return_to,
            notifications: active.iter().map(NotificationView::from).collect(),
        })
    }
}

/// Sanitise a post-action redirect target to a local path.
///
/// Browsers drop tabs and newlines inside URLs, so any control character
/// could turn `/\t/host` into `//host`.
#[must_use]
pub fn local_path(next: &str, fallback: &'static str) -> String {
    let next = next.trim();
    if next.starts_with('/')
        && !next.starts_with("//")
        && !next.contains('\\')
        && !next.chars().any(|c| c.is_ascii_control())
    {
        next.to_string()
    } else {
        fallback.to_string()
    }
}
