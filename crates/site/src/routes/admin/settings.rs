//! Admin settings screen.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use tower_sessions::Session;
use tracing::instrument;

use crate::components::SelectOption;
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::models::settings::{ITEMS_PER_PAGE_CHOICES, SESSION_TIMEOUT_CHOICES};
use crate::models::{SettingsForm, SiteSettings, SortOrder, Theme};
use crate::routes::admin::report;
use crate::routes::context::PageContext;
use crate::state::AppState;

const SETTINGS_PATH: &str = "/admin/settings";

pub const SETTINGS_SAVED: &str = "Settings saved successfully!";

/// Select inputs on the settings form.
#[derive(Debug, Clone)]
pub struct SettingsChoices {
    pub themes: Vec<SelectOption>,
    pub items_per_page: Vec<SelectOption>,
    pub sort_orders: Vec<SelectOption>,
    pub session_timeouts: Vec<SelectOption>,
}

fn number_options<T>(choices: &[T], current: T, label: impl Fn(T) -> String) -> Vec<SelectOption>
where
    T: Copy + PartialEq + std::fmt::Display,
{
    choices
        .iter()
        .map(|&n| SelectOption {
            value: n.to_string(),
            label: label(n),
            selected: n == current,
        })
        .collect()
}

impl From<&SiteSettings> for SettingsChoices {
    fn from(settings: &SiteSettings) -> Self {
        Self {
            themes: SelectOption::list(
                Theme::ALL.iter().map(|t| (t.as_str(), t.label())),
                settings.theme.as_str(),
            ),
            items_per_page: number_options(
                &ITEMS_PER_PAGE_CHOICES,
                settings.items_per_page,
                |n| n.to_string(),
            ),
            sort_orders: SelectOption::list(
                SortOrder::ALL.iter().map(|s| (s.as_str(), s.label())),
                settings.default_sort_order.as_str(),
            ),
            session_timeouts: number_options(
                &SESSION_TIMEOUT_CHOICES,
                settings.session_timeout_minutes,
                |n| format!("{n} minutes"),
            ),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "admin/settings.html")]
pub struct SettingsTemplate {
    pub ctx: PageContext,
    pub settings: SiteSettings,
    pub choices: SettingsChoices,
}

#[instrument(skip(state, ctx))]
pub async fn show(State(state): State<AppState>, ctx: PageContext) -> Result<SettingsTemplate> {
    let settings = state.settings()?;
    Ok(SettingsTemplate {
        ctx,
        choices: SettingsChoices::from(&settings),
        settings,
    })
}

/// Validate and store the settings. Invalid input keeps the old settings.
#[instrument(skip(state, session, form))]
pub async fn save(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SettingsForm>,
) -> Result<Redirect> {
    let outcome = match form.validate() {
        Ok(settings) => {
            state.save_settings(settings)?;
            tracing::info!("settings updated");
            add_breadcrumb("settings", "Settings saved", None);
            Ok(SETTINGS_SAVED)
        }
        Err(e) => Err(e),
    };
    report(&session, outcome).await?;
    Ok(Redirect::to(SETTINGS_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_preselect_current_settings() {
        let choices = SettingsChoices::from(&SiteSettings::default());
        let selected = |options: &[SelectOption]| {
            options
                .iter()
                .find(|option| option.selected)
                .map(|option| option.label.clone())
        };

        assert_eq!(selected(&choices.themes).as_deref(), Some("System"));
        assert_eq!(selected(&choices.items_per_page).as_deref(), Some("10"));
        assert_eq!(
            selected(&choices.session_timeouts).as_deref(),
            Some("120 minutes")
        );
        assert_eq!(
            selected(&choices.sort_orders).as_deref(),
            Some("Newest First")
        );
    }
}
