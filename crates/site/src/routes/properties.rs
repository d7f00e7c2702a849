//! Property listing and detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use tower_sessions::Session;
use tracing::instrument;
use wenz_homez_core::form::{EnquiryDraft, FormController, SubmitError};
use wenz_homez_core::listing::{LOCATIONS, ListingFilter, PriceRange};
use wenz_homez_core::notify::NotificationKind;
use wenz_homez_core::{Property, PropertyId, PropertyType};

use crate::components::SelectOption;
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::session::notify;
use crate::routes::context::PageContext;
use crate::state::AppState;

/// Minimum-bedroom choices in the filter bar.
const BEDROOM_CHOICES: [(&str, &str); 5] =
    [("1", "1+"), ("2", "2+"), ("3", "3+"), ("4", "4+"), ("5", "5+")];

/// Listing card view for templates.
#[derive(Debug, Clone)]
pub struct PropertyCard {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub property_type: &'static str,
    pub price: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub image: String,
    pub description: String,
}

impl From<&Property> for PropertyCard {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.as_i64(),
            title: property.title.clone(),
            location: property.location.clone(),
            property_type: property.property_type.as_str(),
            price: property.price.display(),
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            image: property.image.clone(),
            description: property.description.clone(),
        }
    }
}

/// Filter bar state for the listing template.
#[derive(Debug, Clone)]
pub struct FilterView {
    pub search: String,
    pub locations: Vec<SelectOption>,
    pub property_types: Vec<SelectOption>,
    pub price_ranges: Vec<SelectOption>,
    pub bedrooms: Vec<SelectOption>,
    pub is_active: bool,
}

impl From<&ListingFilter> for FilterView {
    fn from(filter: &ListingFilter) -> Self {
        let property_type = filter
            .property_type
            .parse::<PropertyType>()
            .map(PropertyType::as_str)
            .unwrap_or_default();

        Self {
            search: filter.search.trim().to_string(),
            locations: SelectOption::list(LOCATIONS, &filter.location),
            property_types: SelectOption::list(
                PropertyType::ALL.iter().map(|t| (t.as_str(), t.as_str())),
                property_type,
            ),
            price_ranges: SelectOption::list(
                PriceRange::ALL.iter().map(|r| (r.as_str(), r.label())),
                &filter.price_range,
            ),
            bedrooms: SelectOption::list(BEDROOM_CHOICES, &filter.bedrooms),
            is_active: !filter.is_empty(),
        }
    }
}

/// Property listing template.
#[derive(Template, WebTemplate)]
#[template(path = "properties/index.html")]
pub struct PropertiesIndexTemplate {
    pub ctx: PageContext,
    pub properties: Vec<PropertyCard>,
    pub filter: FilterView,
}

/// Property detail template.
#[derive(Template, WebTemplate)]
#[template(path = "properties/show.html")]
pub struct PropertyShowTemplate {
    pub ctx: PageContext,
    pub property: PropertyCard,
}

/// Display the active listings matching the query filters.
#[instrument(skip(state, ctx))]
pub async fn index(
    State(state): State<AppState>,
    ctx: PageContext,
    Query(filter): Query<ListingFilter>,
) -> Result<PropertiesIndexTemplate> {
    let properties = filter.apply(state.store().properties.list()?);
    tracing::debug!(matches = properties.len(), "listing filtered");

    Ok(PropertiesIndexTemplate {
        ctx,
        properties: properties.iter().map(PropertyCard::from).collect(),
        filter: FilterView::from(&filter),
    })
}

/// Look up a listing visitors may see. Inactive listings are hidden.
fn public_property(state: &AppState, id: &str) -> Result<Property> {
    let not_found = || AppError::NotFound(format!("property {id}"));
    let id: PropertyId = id.parse().map_err(|_| not_found())?;
    let property = state.store().properties.get(id)?;
    if property.is_active() {
        Ok(property)
    } else {
        Err(not_found())
    }
}

/// Display a single listing with its enquiry form.
#[instrument(skip(state, ctx))]
pub async fn show(
    State(state): State<AppState>,
    ctx: PageContext,
    Path(id): Path<String>,
) -> Result<PropertyShowTemplate> {
    let property = public_property(&state, &id)?;

    Ok(PropertyShowTemplate {
        ctx,
        property: PropertyCard::from(&property),
    })
}

/// Record an enquiry about a listing.
///
/// The enquiry is tagged with the listing's title whatever the form says.
#[instrument(skip(state, session, draft))]
pub async fn enquire(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Form(mut draft): Form<EnquiryDraft>,
) -> Result<Redirect> {
    let property = public_property(&state, &id)?;
    draft.subject.clear();
    draft.property_interest.clone_from(&property.title);

    let back = format!("/properties/{}", property.id);
    submit_enquiry(&state, &session, draft).await?;
    Ok(Redirect::to(&back))
}

/// Create an enquiry from a public form and post the outcome as a
/// notification.
///
/// # Errors
///
/// Validation failures are reported to the visitor, not returned. Store
/// and session failures are returned.
pub async fn submit_enquiry(
    state: &AppState,
    session: &Session,
    draft: EnquiryDraft,
) -> Result<()> {
    let mut form = FormController::<EnquiryDraft>::new();
    form.begin_create();
    form.update_draft(draft);

    match form.submit(&state.store().enquiries) {
        Ok(message) => {
            tracing::info!("enquiry received");
            notify(session, message, NotificationKind::Success).await?;
        }
        Err(SubmitError::Validation(e)) => {
            tracing::debug!(error = %e, "enquiry rejected");
            notify(session, capitalize(&e.to_string()), NotificationKind::Error).await?;
        }
        Err(e) => {
            return Err(AppError::Internal(e.to_string()));
        }
    }
    Ok(())
}

/// Upper-case the first letter of an error message for display.
#[must_use]
pub fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("name is required"), "Name is required");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_filter_view_preselects_parsed_type() {
        let filter = ListingFilter {
            property_type: "villa".to_string(),
            bedrooms: "3".to_string(),
            ..ListingFilter::default()
        };
        let view = FilterView::from(&filter);
        assert!(view.is_active);
        assert!(
            view.property_types
                .iter()
                .any(|option| option.value == "Villa" && option.selected)
        );
        assert!(
            view.bedrooms
                .iter()
                .any(|option| option.value == "3" && option.selected)
        );
    }
}
