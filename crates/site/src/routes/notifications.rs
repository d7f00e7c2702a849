//! Notification dismissal.

use axum::{Form, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use wenz_homez_core::NotificationId;

use crate::error::Result;
use crate::models::session::{notifications, save_notifications};
use crate::routes::IdPath;
use crate::routes::context::local_path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DismissForm {
    /// Page to return to.
    pub next: String,
}

/// Remove one notification and go back to the page showing it.
///
/// POST /notifications/{id}/dismiss
pub async fn dismiss(
    session: Session,
    IdPath(id): IdPath<NotificationId>,
    Form(form): Form<DismissForm>,
) -> Result<Redirect> {
    let mut channel = notifications(&session).await?;
    if channel.dismiss(id) {
        save_notifications(&session, &channel).await?;
    }
    Ok(Redirect::to(&local_path(&form.next, "/")))
}
