//! Admin route guard.
//!
//! Every request is resolved through the navigation state machine. Guarded
//! admin pages without the session flag are redirected to the login page
//! before any handler runs, so unknown `/admin/*` paths never reveal
//! whether they exist.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use wenz_homez_core::navigation::{self, LOGIN_PATH, Navigation};

use crate::error::AppError;
use crate::models::admin_guard;

/// Redirect unauthenticated requests for guarded pages to the login page.
///
/// # Errors
///
/// Returns `AppError::Session` if the session cannot be read.
pub async fn admin_guard_middleware(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let guard = admin_guard(&session);
    match navigation::navigate(request.uri().path(), &guard).await? {
        Navigation::RedirectToLogin => {
            tracing::debug!(path = %request.uri().path(), "unauthenticated admin request");
            Ok(Redirect::to(LOGIN_PATH).into_response())
        }
        Navigation::Render(_) => Ok(next.run(request).await),
    }
}
