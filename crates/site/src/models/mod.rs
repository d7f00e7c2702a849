//! Site-side models: session glue and admin settings.

pub mod session;
pub mod settings;

pub use session::{CookieStorage, admin_guard, session_keys};
pub use settings::{SettingsError, SettingsForm, SiteSettings, SortOrder, Theme};
