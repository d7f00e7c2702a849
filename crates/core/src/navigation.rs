//! Path resolution for the public site and the admin panel.
//!
//! [`resolve`] is pure: it maps a request path to a [`Route`]. [`navigate`]
//! adds the session check for guarded admin routes.

use crate::session::{SessionGuard, SessionStorage};
use crate::types::PropertyId;

/// Where unauthenticated admin navigation is sent.
pub const LOGIN_PATH: &str = "/admin/login";

/// Pages anyone can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicPage {
    Home,
    Properties,
    PropertyDetail(PropertyId),
    About,
    Contact,
    Legal,
    Services,
}

/// Pages behind the session guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPage {
    Dashboard,
    Assets,
    Enquiries,
    Settings,
    /// Any other `/admin/*` path. Rendered as not found once admitted.
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Public(PublicPage),
    AdminLogin,
    AdminGuarded(AdminPage),
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn is_guarded(self) -> bool {
        matches!(self, Self::AdminGuarded(_))
    }
}

/// Outcome of [`navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    /// The route is guarded and the session is not authenticated.
    RedirectToLogin,
}

/// Map a request path to a route.
///
/// Any query string is ignored, as is a single trailing slash. Empty
/// segments elsewhere (`/properties//1`) are not found.
#[must_use]
pub fn resolve(path: &str) -> Route {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };

    let rest = path.strip_prefix('/').unwrap_or(path);
    let segments: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('/').collect()
    };
    // Doubled slashes match no route
    if segments.iter().any(|segment| segment.is_empty()) {
        return Route::NotFound;
    }

    match segments.as_slice() {
        [] => Route::Public(PublicPage::Home),
        ["properties"] => Route::Public(PublicPage::Properties),
        ["properties", id] => id
            .parse()
            .map_or(Route::NotFound, |id| {
                Route::Public(PublicPage::PropertyDetail(id))
            }),
        ["about"] => Route::Public(PublicPage::About),
        ["contact"] => Route::Public(PublicPage::Contact),
        ["legal"] => Route::Public(PublicPage::Legal),
        ["services"] => Route::Public(PublicPage::Services),
        ["admin", "login"] => Route::AdminLogin,
        ["admin"] => Route::AdminGuarded(AdminPage::Dashboard),
        ["admin", "assets"] => Route::AdminGuarded(AdminPage::Assets),
        ["admin", "enquiries"] => Route::AdminGuarded(AdminPage::Enquiries),
        ["admin", "settings"] => Route::AdminGuarded(AdminPage::Settings),
        ["admin", ..] => Route::AdminGuarded(AdminPage::Unknown),
        _ => Route::NotFound,
    }
}

/// Resolve `path` and apply the session guard to admin routes.
///
/// The guard is consulted only for [`Route::AdminGuarded`]; public pages,
/// the login page and not-found never read the session.
///
/// # Errors
///
/// Returns the storage error if the session flag cannot be read.
pub async fn navigate<S: SessionStorage>(
    path: &str,
    guard: &SessionGuard<S>,
) -> Result<Navigation, S::Error> {
    let route = resolve(path);
    if route.is_guarded() && !guard.is_authenticated().await? {
        tracing::debug!(path, "unauthenticated admin navigation");
        return Ok(Navigation::RedirectToLogin);
    }
    Ok(Navigation::Render(route))
}
