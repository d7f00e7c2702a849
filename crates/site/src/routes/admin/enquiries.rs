//! Enquiry management screen.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;
use wenz_homez_core::actions::{self, EnquiryStats};
use wenz_homez_core::{Enquiry, EnquiryId, EnquiryStatus};

use crate::error::Result;
use crate::filters;
use crate::routes::IdPath;
use crate::routes::admin::report;
use crate::routes::context::PageContext;
use crate::state::AppState;

const ENQUIRIES_PATH: &str = "/admin/enquiries";

/// Enquiry row view for the enquiries table.
#[derive(Debug, Clone)]
pub struct EnquiryRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub property_interest: String,
    pub date: String,
    pub status: &'static str,
    pub can_mark_read: bool,
    pub can_archive: bool,
}

impl From<&Enquiry> for EnquiryRow {
    fn from(enquiry: &Enquiry) -> Self {
        Self {
            id: enquiry.id.as_i64(),
            name: enquiry.name.clone(),
            email: enquiry.email.to_string(),
            phone: enquiry.phone.clone(),
            message: enquiry.message.clone(),
            property_interest: enquiry
                .property_interest
                .clone()
                .unwrap_or_else(|| "General".to_string()),
            date: enquiry.date_display(),
            status: enquiry.status.as_str(),
            can_mark_read: enquiry.status.can_become(EnquiryStatus::Read),
            can_archive: enquiry.status.can_become(EnquiryStatus::Archived),
        }
    }
}

/// Enquiries screen template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/enquiries.html")]
pub struct EnquiriesTemplate {
    pub ctx: PageContext,
    pub stats: EnquiryStats,
    pub enquiries: Vec<EnquiryRow>,
}

/// Enquiry table, newest first.
#[instrument(skip(state, ctx))]
pub async fn index(State(state): State<AppState>, ctx: PageContext) -> Result<EnquiriesTemplate> {
    let mut enquiries = state.store().enquiries.list()?;
    enquiries.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(EnquiriesTemplate {
        ctx,
        stats: EnquiryStats::of(&enquiries),
        enquiries: enquiries.iter().map(EnquiryRow::from).collect(),
    })
}

#[instrument(skip(state, session))]
pub async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    IdPath(id): IdPath<EnquiryId>,
) -> Result<Redirect> {
    report(&session, actions::mark_enquiry_read(&state.store().enquiries, id)).await?;
    Ok(Redirect::to(ENQUIRIES_PATH))
}

#[instrument(skip(state, session))]
pub async fn archive(
    State(state): State<AppState>,
    session: Session,
    IdPath(id): IdPath<EnquiryId>,
) -> Result<Redirect> {
    report(&session, actions::archive_enquiry(&state.store().enquiries, id)).await?;
    Ok(Redirect::to(ENQUIRIES_PATH))
}

#[instrument(skip(state, session))]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    IdPath(id): IdPath<EnquiryId>,
) -> Result<Redirect> {
    report(&session, actions::delete_enquiry(&state.store().enquiries, id)).await?;
    Ok(Redirect::to(ENQUIRIES_PATH))
}
