//! Property management screen.
//!
//! The add/edit form is driven by a [`FormController`] kept in the admin's
//! session, so an open form survives the redirect after each action.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use wenz_homez_core::actions;
use wenz_homez_core::form::{FormController, PropertyDraft};
use wenz_homez_core::{Property, PropertyId, PropertyType};

use crate::components::{Pagination, SelectOption};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::models::session::{asset_form, save_asset_form};
use crate::routes::IdPath;
use crate::routes::admin::report;
use crate::routes::context::PageContext;
use crate::state::AppState;

const ASSETS_PATH: &str = "/admin/assets";

/// Property row view for the assets table.
#[derive(Debug, Clone)]
pub struct PropertyRow {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub property_type: &'static str,
    pub price: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub image: String,
    pub status: &'static str,
    pub is_active: bool,
}

impl From<&Property> for PropertyRow {
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
            status: property.status.as_str(),
            is_active: property.is_active(),
        }
    }
}

/// The open add/edit form.
#[derive(Debug, Clone)]
pub struct PropertyFormView {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub draft: PropertyDraft,
    pub property_types: Vec<SelectOption>,
}

impl PropertyFormView {
    fn from_controller(form: &FormController<PropertyDraft>) -> Option<Self> {
        let draft = form.draft()?.clone();
        let is_new = form.editing_id().is_none();
        let property_types = SelectOption::list(
            PropertyType::ALL.iter().map(|t| (t.as_str(), t.as_str())),
            &draft.property_type,
        );
        Some(Self {
            heading: if is_new { "Add New Property" } else { "Edit Property" },
            submit_label: if is_new { "Add Property" } else { "Update Property" },
            draft,
            property_types,
        })
    }
}

/// Assets screen template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/assets.html")]
pub struct AssetsTemplate {
    pub ctx: PageContext,
    pub properties: Vec<PropertyRow>,
    pub pagination: Pagination,
    pub sort_label: &'static str,
    pub form: Option<PropertyFormView>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssetsQuery {
    pub page: Option<usize>,
}

/// Property table, sorted and paged per the admin settings.
#[instrument(skip(state, session, ctx))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    ctx: PageContext,
    Query(query): Query<AssetsQuery>,
) -> Result<AssetsTemplate> {
    let settings = state.settings()?;
    let mut properties = state.store().properties.list()?;
    settings.default_sort_order.sort(&mut properties);

    let pagination = Pagination::new(query.page, settings.items_per_page, properties.len());
    let form = asset_form(&session).await?;

    Ok(AssetsTemplate {
        ctx,
        properties: pagination
            .slice(&properties)
            .iter()
            .map(PropertyRow::from)
            .collect(),
        pagination,
        sort_label: settings.default_sort_order.label(),
        form: PropertyFormView::from_controller(&form),
    })
}

/// Open an empty form.
#[instrument(skip(session))]
pub async fn begin_create(session: Session) -> Result<Redirect> {
    let mut form = asset_form(&session).await?;
    form.begin_create();
    save_asset_form(&session, &form).await?;
    Ok(Redirect::to(ASSETS_PATH))
}

/// Open the form pre-filled from a listing.
#[instrument(skip(state, session))]
pub async fn begin_edit(
    State(state): State<AppState>,
    session: Session,
    IdPath(id): IdPath<PropertyId>,
) -> Result<Redirect> {
    match state.store().properties.get(id) {
        Ok(property) => {
            let mut form = asset_form(&session).await?;
            form.begin_edit(&property);
            save_asset_form(&session, &form).await?;
        }
        Err(e) => report(&session, Err(e)).await?,
    }
    Ok(Redirect::to(ASSETS_PATH))
}

/// Validate the posted fields and save them.
///
/// An invalid draft keeps the form open with what was typed.
#[instrument(skip(state, session, draft))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(draft): Form<PropertyDraft>,
) -> Result<Redirect> {
    let mut form = asset_form(&session).await?;
    form.update_draft(draft);

    let outcome = form.submit(&state.store().properties);
    if let Ok(message) = outcome {
        add_breadcrumb("assets", message, None);
    }
    save_asset_form(&session, &form).await?;
    report(&session, outcome).await?;
    Ok(Redirect::to(ASSETS_PATH))
}

/// Close the form without saving.
#[instrument(skip(session))]
pub async fn cancel(session: Session) -> Result<Redirect> {
    let mut form = asset_form(&session).await?;
    form.cancel();
    save_asset_form(&session, &form).await?;
    Ok(Redirect::to(ASSETS_PATH))
}

/// Delete a listing.
#[instrument(skip(state, session))]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    IdPath(id): IdPath<PropertyId>,
) -> Result<Redirect> {
    let outcome = actions::delete_property(&state.store().properties, id);
    if outcome.is_ok() {
        let id = id.to_string();
        add_breadcrumb("assets", "Property deleted", Some(&[("id", id.as_str())]));
    }
    report(&session, outcome).await?;
    Ok(Redirect::to(ASSETS_PATH))
}

/// Flip a listing between active and inactive. Silent on success.
#[instrument(skip(state, session))]
pub async fn toggle(
    State(state): State<AppState>,
    session: Session,
    IdPath(id): IdPath<PropertyId>,
) -> Result<Redirect> {
    if let Err(e) = actions::toggle_property_status(&state.store().properties, id) {
        report(&session, Err(e)).await?;
    }
    Ok(Redirect::to(ASSETS_PATH))
}
