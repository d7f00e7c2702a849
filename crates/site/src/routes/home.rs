//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;
use wenz_homez_core::listing::{self, PriceRange};
use wenz_homez_core::PropertyType;

use crate::components::SelectOption;
use crate::error::Result;
use crate::filters;
use crate::routes::context::PageContext;
use crate::routes::properties::PropertyCard;
use crate::state::AppState;

/// Headline figure in the hero band.
#[derive(Debug, Clone, Copy)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

const HERO_STATS: [HeroStat; 4] = [
    HeroStat {
        value: "500+",
        label: "Premium Properties",
    },
    HeroStat {
        value: "50+",
        label: "Luxury Locations",
    },
    HeroStat {
        value: "98%",
        label: "Client Satisfaction",
    },
    HeroStat {
        value: "10+",
        label: "Years Experience",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub featured: Vec<PropertyCard>,
    pub stats: &'static [HeroStat],
    pub property_types: Vec<SelectOption>,
    pub price_ranges: Vec<SelectOption>,
}

/// Display the home page with the featured listings.
///
/// The hero search form submits to `/properties`.
#[instrument(skip(state, ctx))]
pub async fn home(State(state): State<AppState>, ctx: PageContext) -> Result<HomeTemplate> {
    let featured = listing::featured(state.store().properties.list()?);

    Ok(HomeTemplate {
        ctx,
        featured: featured.iter().map(PropertyCard::from).collect(),
        stats: &HERO_STATS,
        property_types: SelectOption::list(
            PropertyType::ALL.iter().map(|t| (t.as_str(), t.as_str())),
            "",
        ),
        price_ranges: SelectOption::list(
            PriceRange::ALL.iter().map(|r| (r.as_str(), r.label())),
            "",
        ),
    })
}
