//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                           - Home page (featured listings)
//! GET  /health                     - Health check
//!
//! # Listings
//! GET  /properties                 - Listing with filters
//! GET  /properties/{id}            - Listing detail + enquiry form
//! POST /properties/{id}/enquire    - Enquire about a listing (rate limited)
//!
//! # Pages
//! GET  /about | /services | /legal - Static pages
//! GET  /contact                    - Contact form
//! POST /contact                    - General enquiry (rate limited)
//!
//! # Admin
//! GET  /admin/login                - Login page
//! POST /admin/login                - Set the admin flag
//! POST /admin/logout               - Clear the admin flag
//! /admin/*                         - See `admin`
//!
//! POST /notifications/{id}/dismiss - Dismiss a notification
//! ```

pub mod admin;
pub mod auth;
pub mod contact;
pub mod context;
pub mod home;
pub mod notifications;
pub mod pages;
pub mod properties;

use axum::{
    Router,
    extract::FromRequestParts,
    routing::{get, post},
};

use crate::error::AppError;
use crate::middleware::enquiry_rate_limiter;
use crate::state::AppState;

/// `Path` whose parse failures render as [`AppError::BadRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct IdPath<T>(pub T);

/// Create the public enquiry routes, rate limited per client.
pub fn enquiry_routes() -> Router<AppState> {
    let routes = Router::new()
        .route("/properties/{id}/enquire", post(properties::enquire))
        .route("/contact", post(contact::submit));

    match enquiry_rate_limiter() {
        Some(limiter) => routes.route_layer(limiter),
        None => {
            tracing::warn!("enquiry rate limiter unavailable, serving unlimited");
            routes
        }
    }
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/properties", get(properties::index))
        .route("/properties/{id}", get(properties::show))
        .route("/about", get(pages::about))
        .route("/services", get(pages::services))
        .route("/legal", get(pages::legal))
        .route("/contact", get(contact::show))
        .merge(enquiry_routes())
        .merge(auth::router())
        .merge(admin::router())
        .route("/notifications/{id}/dismiss", post(notifications::dismiss))
        .fallback(pages::not_found)
}
