//! Admin panel route handlers.
//!
//! Every path here sits behind the admin guard middleware; handlers can
//! assume the session flag is set.
//!
//! # Route Structure
//!
//! ```text
//! GET  /admin                          - Dashboard
//! GET  /admin/assets                   - Property table (+ form when open)
//! POST /admin/assets/new               - Open an empty form
//! POST /admin/assets/{id}/edit         - Open the form for a listing
//! POST /admin/assets/submit            - Save the open form
//! POST /admin/assets/cancel            - Close the form
//! POST /admin/assets/{id}/delete       - Delete a listing
//! POST /admin/assets/{id}/toggle       - Toggle active/inactive
//! GET  /admin/enquiries                - Enquiry table + stats
//! POST /admin/enquiries/{id}/read      - Mark as read
//! POST /admin/enquiries/{id}/archive   - Archive
//! POST /admin/enquiries/{id}/delete    - Delete
//! GET  /admin/settings                 - Settings form
//! POST /admin/settings                 - Save settings
//! ```

pub mod assets;
pub mod dashboard;
pub mod enquiries;
pub mod settings;

use std::fmt::Display;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;
use wenz_homez_core::notify::NotificationKind;

use crate::error::Result;
use crate::models::session::notify;
use crate::routes::properties::capitalize;
use crate::state::AppState;

/// Build the admin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard::dashboard))
        .route("/admin/assets", get(assets::index))
        .route("/admin/assets/new", post(assets::begin_create))
        .route("/admin/assets/submit", post(assets::submit))
        .route("/admin/assets/cancel", post(assets::cancel))
        .route("/admin/assets/{id}/edit", post(assets::begin_edit))
        .route("/admin/assets/{id}/delete", post(assets::delete))
        .route("/admin/assets/{id}/toggle", post(assets::toggle))
        .route("/admin/enquiries", get(enquiries::index))
        .route("/admin/enquiries/{id}/read", post(enquiries::mark_read))
        .route("/admin/enquiries/{id}/archive", post(enquiries::archive))
        .route("/admin/enquiries/{id}/delete", post(enquiries::delete))
        .route("/admin/settings", get(settings::show).post(settings::save))
}

/// Post the outcome of an admin action as a notification.
///
/// Failures are shown to the admin rather than returned; only session
/// errors propagate.
pub(crate) async fn report<E: Display>(
    session: &Session,
    outcome: std::result::Result<&str, E>,
) -> Result<()> {
    match outcome {
        Ok(message) => notify(session, message, NotificationKind::Success).await?,
        Err(e) => {
            tracing::warn!(error = %e, "admin action failed");
            notify(session, capitalize(&e.to_string()), NotificationKind::Error).await?;
        }
    }
    Ok(())
}
