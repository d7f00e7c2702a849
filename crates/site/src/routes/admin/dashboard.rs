//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;
use wenz_homez_core::actions::EnquiryStats;
use wenz_homez_core::{Enquiry, EnquiryStatus};

use crate::error::Result;
use crate::filters;
use crate::routes::context::PageContext;
use crate::state::AppState;

/// Number of enquiries listed under recent activity.
const RECENT_ACTIVITY_COUNT: usize = 5;

/// Dashboard metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardMetrics {
    pub total_properties: usize,
    pub active_listings: usize,
    pub total_enquiries: usize,
    pub new_enquiries: usize,
}

/// Activity item for dashboard.
#[derive(Debug, Clone)]
pub struct ActivityView {
    pub description: String,
    pub detail: String,
    pub time: String,
    pub is_new: bool,
}

impl From<&Enquiry> for ActivityView {
    fn from(enquiry: &Enquiry) -> Self {
        let detail = enquiry.property_interest.as_ref().map_or_else(
            || "General enquiry".to_string(),
            |title| format!("Interested in {title}"),
        );
        Self {
            description: format!("Enquiry from {}", enquiry.name),
            detail,
            time: enquiry.date_display(),
            is_new: enquiry.status == EnquiryStatus::New,
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub metrics: DashboardMetrics,
    pub recent_activity: Vec<ActivityView>,
}

/// Dashboard page handler.
#[instrument(skip(state, ctx))]
pub async fn dashboard(
    State(state): State<AppState>,
    ctx: PageContext,
) -> Result<DashboardTemplate> {
    let properties = state.store().properties.list()?;
    let mut enquiries = state.store().enquiries.list()?;
    let stats = EnquiryStats::of(&enquiries);

    let metrics = DashboardMetrics {
        total_properties: properties.len(),
        active_listings: properties.iter().filter(|p| p.is_active()).count(),
        total_enquiries: stats.total,
        new_enquiries: stats.new,
    };

    enquiries.sort_by(|a, b| b.date.cmp(&a.date));
    let recent_activity = enquiries
        .iter()
        .take(RECENT_ACTIVITY_COUNT)
        .map(ActivityView::from)
        .collect();

    Ok(DashboardTemplate {
        ctx,
        metrics,
        recent_activity,
    })
}
