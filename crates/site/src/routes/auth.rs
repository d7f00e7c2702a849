//! Admin login and logout.
//!
//! There is no credential check: submitting the login form sets the admin
//! flag in the visitor's session. Only suitable for trusted demos.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::models::admin_guard;
use crate::routes::context::PageContext;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/login", get(login_page).post(login))
        .route("/admin/logout", post(logout))
}

/// Render the login page, or skip it when already signed in.
///
/// GET /admin/login
#[instrument(skip(session, ctx))]
async fn login_page(session: Session, ctx: PageContext) -> Result<Response> {
    if admin_guard(&session).is_authenticated().await? {
        return Ok(Redirect::to("/admin").into_response());
    }
    Ok(LoginTemplate { ctx }.into_response())
}

/// Set the admin flag and open the dashboard.
///
/// POST /admin/login
#[instrument(skip(session))]
async fn login(session: Session) -> Result<Redirect> {
    // Fresh session ID on privilege change
    session.cycle_id().await?;
    admin_guard(&session).login().await?;
    add_breadcrumb("auth", "Admin signed in", None);
    Ok(Redirect::to("/admin"))
}

/// Clear the admin flag and return to the public site.
///
/// POST /admin/logout
#[instrument(skip(session))]
async fn logout(session: Session) -> Result<Redirect> {
    admin_guard(&session).logout().await?;
    add_breadcrumb("auth", "Admin signed out", None);
    Ok(Redirect::to("/"))
}
