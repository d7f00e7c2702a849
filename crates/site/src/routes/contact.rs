//! Contact page route handlers.
//!
//! General enquiries land in the admin enquiries table.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;
use wenz_homez_core::form::EnquiryDraft;

use crate::error::Result;
use crate::filters;
use crate::routes::context::PageContext;
use crate::routes::properties::submit_enquiry;
use crate::state::AppState;

/// A contact channel shown beside the form.
#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub title: &'static str,
    pub details: &'static str,
    pub subtitle: &'static str,
}

const CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        title: "Phone",
        details: "+1 (555) 123-4567",
        subtitle: "Call us anytime",
    },
    ContactChannel {
        title: "Email",
        details: "info@wenzhomez.com",
        subtitle: "Send us a message",
    },
    ContactChannel {
        title: "Office",
        details: "123 Luxury Avenue",
        subtitle: "Premium District, City 12345",
    },
    ContactChannel {
        title: "Hours",
        details: "Mon - Fri: 9AM - 6PM",
        subtitle: "Weekend by appointment",
    },
];

#[derive(Template, WebTemplate)]
#[template(path = "pages/contact.html")]
pub struct ContactTemplate {
    pub ctx: PageContext,
    pub channels: &'static [ContactChannel],
}

pub async fn show(ctx: PageContext) -> ContactTemplate {
    ContactTemplate {
        ctx,
        channels: &CHANNELS,
    }
}

/// Record a general enquiry from the contact form.
#[instrument(skip(state, session, draft))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(mut draft): Form<EnquiryDraft>,
) -> Result<Redirect> {
    draft.property_interest.clear();
    submit_enquiry(&state, &session, draft).await?;
    Ok(Redirect::to("/contact"))
}
