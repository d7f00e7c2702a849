//! Session-related types and helpers.
//!
//! The cookie session carries three things: the admin flag (through
//! [`CookieStorage`] and the core session guard), the visitor's
//! notifications, and the assets form controller.

use tower_sessions::Session;
use wenz_homez_core::form::{FormController, PropertyDraft};
use wenz_homez_core::notify::{NotificationChannel, NotificationKind};
use wenz_homez_core::session::{SessionGuard, SessionStorage};

/// Session keys for storing data.
pub mod session_keys {
    /// Admin authentication flag.
    pub const ADMIN_AUTH: &str = wenz_homez_core::session::AUTH_KEY;
    /// Pending notifications.
    pub const NOTIFICATIONS: &str = "notifications";
    /// Assets screen form state.
    pub const ASSET_FORM: &str = "asset_form";
}

/// [`SessionStorage`] over the tower-sessions cookie session.
#[derive(Debug, Clone)]
pub struct CookieStorage(pub Session);

impl SessionStorage for CookieStorage {
    type Error = tower_sessions::session::Error;

    async fn contains(&self, key: &str) -> Result<bool, Self::Error> {
        Ok(self.0.get_value(key).await?.is_some())
    }

    async fn insert(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.0.insert(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.0.remove_value(key).await.map(|_| ())
    }
}

/// Session guard bound to this request's cookie session.
#[must_use]
pub fn admin_guard(session: &Session) -> SessionGuard<CookieStorage> {
    SessionGuard::new(CookieStorage(session.clone()))
}

/// Load the visitor's notification channel.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn notifications(
    session: &Session,
) -> Result<NotificationChannel, tower_sessions::session::Error> {
    Ok(session
        .get::<NotificationChannel>(session_keys::NOTIFICATIONS)
        .await?
        .unwrap_or_default())
}

/// Persist the visitor's notification channel.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
pub async fn save_notifications(
    session: &Session,
    channel: &NotificationChannel,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::NOTIFICATIONS, channel).await
}

/// Post a notification to the visitor.
///
/// # Errors
///
/// Returns an error if the session cannot be read or written.
pub async fn notify(
    session: &Session,
    message: impl Into<String>,
    kind: NotificationKind,
) -> Result<(), tower_sessions::session::Error> {
    let mut channel = notifications(session).await?;
    channel.notify(message, kind);
    save_notifications(session, &channel).await
}

/// Load the assets form controller.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn asset_form(
    session: &Session,
) -> Result<FormController<PropertyDraft>, tower_sessions::session::Error> {
    Ok(session
        .get::<FormController<PropertyDraft>>(session_keys::ASSET_FORM)
        .await?
        .unwrap_or_default())
}

/// Persist the assets form controller.
///
/// # Errors
///
/// Returns an error if the session cannot be written.
pub async fn save_asset_form(
    session: &Session,
    form: &FormController<PropertyDraft>,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::ASSET_FORM, form).await
}
