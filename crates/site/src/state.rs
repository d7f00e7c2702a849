//! Application state shared across handlers.

use std::sync::{Arc, RwLock};

use wenz_homez_core::store::EntityStore;

use crate::config::SiteConfig;
use crate::error::AppError;
use crate::models::SiteSettings;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and owns the entity store,
/// the admin settings and the configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    store: EntityStore,
    settings: RwLock<SiteSettings>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The store starts with the demo data when `config.seed` is set.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let store = if config.seed {
            EntityStore::seeded()
        } else {
            EntityStore::new()
        };
        Self::with_store(config, store)
    }

    /// Create application state around an existing store.
    #[must_use]
    pub fn with_store(config: SiteConfig, store: EntityStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                settings: RwLock::new(SiteSettings::default()),
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the entity store.
    #[must_use]
    pub fn store(&self) -> &EntityStore {
        &self.inner.store
    }

    /// Snapshot of the current admin settings.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the settings lock is poisoned.
    pub fn settings(&self) -> Result<SiteSettings, AppError> {
        self.inner
            .settings
            .read()
            .map(|settings| settings.clone())
            .map_err(|_| AppError::Internal("settings lock poisoned".to_string()))
    }

    /// Replace the admin settings.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the settings lock is poisoned.
    pub fn save_settings(&self, settings: SiteSettings) -> Result<(), AppError> {
        let mut current = self
            .inner
            .settings
            .write()
            .map_err(|_| AppError::Internal("settings lock poisoned".to_string()))?;
        *current = settings;
        Ok(())
    }
}
