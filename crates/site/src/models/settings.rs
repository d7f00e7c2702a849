//! Admin panel settings.
//!
//! Settings live in memory for the process lifetime, like the entity store.

use serde::Deserialize;
use thiserror::Error;

use wenz_homez_core::{Email, Property};

/// Page sizes offered for the assets table.
pub const ITEMS_PER_PAGE_CHOICES: [usize; 4] = [5, 10, 25, 50];

/// Session timeouts offered, in minutes.
pub const SESSION_TIMEOUT_CHOICES: [u32; 4] = [30, 60, 120, 240];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("invalid company email: {0}")]
    Email(#[from] wenz_homez_core::EmailError),
    #[error("invalid {field}: {value}")]
    Choice { field: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    PriceHigh,
    PriceLow,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::PriceHigh, Self::PriceLow];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::PriceHigh => "price-high",
            Self::PriceLow => "price-low",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::PriceHigh => "Price: High to Low",
            Self::PriceLow => "Price: Low to High",
        }
    }

    /// Sort listings in place. IDs grow with creation time, so they order
    /// by age.
    pub fn sort(self, properties: &mut [Property]) {
        match self {
            Self::Newest => properties.sort_by(|a, b| b.id.cmp(&a.id)),
            Self::Oldest => properties.sort_by(|a, b| a.id.cmp(&b.id)),
            Self::PriceHigh => properties.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::PriceLow => properties.sort_by(|a, b| a.price.cmp(&b.price)),
        }
    }
}

fn choose<T: Copy>(
    field: &'static str,
    value: &str,
    all: &[T],
    key: impl Fn(T) -> String,
) -> Result<T, SettingsError> {
    all.iter()
        .copied()
        .find(|choice| key(*choice) == value.trim())
        .ok_or_else(|| SettingsError::Choice {
            field,
            value: value.to_string(),
        })
}

/// Everything on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub company_name: String,
    /// Normalised by [`Email::parse`].
    pub company_email: String,
    pub company_phone: String,
    pub company_address: String,
    pub company_description: String,

    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub new_enquiry_alerts: bool,
    pub property_update_alerts: bool,

    pub theme: Theme,
    pub items_per_page: usize,
    pub default_sort_order: SortOrder,

    pub session_timeout_minutes: u32,
    pub require_password_change: bool,
    pub enable_two_factor: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            company_name: "Premium Real Estate".to_string(),
            company_email: "admin@premiumrealestate.com".to_string(),
            company_phone: "+1 (555) 123-4567".to_string(),
            company_address: "123 Business Ave, Suite 100, City, State 12345".to_string(),
            company_description:
                "Leading real estate agency providing premium property services since 2020."
                    .to_string(),
            email_notifications: true,
            sms_notifications: false,
            new_enquiry_alerts: true,
            property_update_alerts: true,
            theme: Theme::System,
            items_per_page: 10,
            default_sort_order: SortOrder::Newest,
            session_timeout_minutes: 120,
            require_password_change: false,
            enable_two_factor: false,
        }
    }
}

/// The settings form as posted. Unchecked checkboxes are absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsForm {
    pub company_name: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_address: String,
    pub company_description: String,

    pub email_notifications: Option<String>,
    pub sms_notifications: Option<String>,
    pub new_enquiry_alerts: Option<String>,
    pub property_update_alerts: Option<String>,

    pub theme: String,
    pub items_per_page: String,
    pub default_sort_order: String,

    pub session_timeout: String,
    pub require_password_change: Option<String>,
    pub enable_two_factor: Option<String>,
}

impl SettingsForm {
    /// # Errors
    ///
    /// Returns the first [`SettingsError`] found.
    pub fn validate(&self) -> Result<SiteSettings, SettingsError> {
        let company_name = self.company_name.trim();
        if company_name.is_empty() {
            return Err(SettingsError::Required("company name"));
        }

        Ok(SiteSettings {
            company_name: company_name.to_string(),
            company_email: Email::parse(&self.company_email)?.into_inner(),
            company_phone: self.company_phone.trim().to_string(),
            company_address: self.company_address.trim().to_string(),
            company_description: self.company_description.trim().to_string(),
            email_notifications: self.email_notifications.is_some(),
            sms_notifications: self.sms_notifications.is_some(),
            new_enquiry_alerts: self.new_enquiry_alerts.is_some(),
            property_update_alerts: self.property_update_alerts.is_some(),
            theme: choose("theme", &self.theme, &Theme::ALL, |t| {
                t.as_str().to_string()
            })?,
            items_per_page: choose(
                "items per page",
                &self.items_per_page,
                &ITEMS_PER_PAGE_CHOICES,
                |n| n.to_string(),
            )?,
            default_sort_order: choose(
                "sort order",
                &self.default_sort_order,
                &SortOrder::ALL,
                |s| s.as_str().to_string(),
            )?,
            session_timeout_minutes: choose(
                "session timeout",
                &self.session_timeout,
                &SESSION_TIMEOUT_CHOICES,
                |n| n.to_string(),
            )?,
            require_password_change: self.require_password_change.is_some(),
            enable_two_factor: self.enable_two_factor.is_some(),
        })
    }
}
