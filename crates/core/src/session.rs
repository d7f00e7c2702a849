//! Admin session guard.
//!
//! Authentication is a single flag kept in client storage under
//! [`AUTH_KEY`]. Its presence means "logged in". There is no credential
//! check, no expiry of its own and no payload: anyone who reaches the login
//! endpoint can set it. That is only acceptable for a trusted demo
//! deployment.
//!
//! The storage is injected through [`SessionStorage`] so the guard can be
//! exercised against [`MemoryStorage`] in tests and against the cookie
//! session in the web crate.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

/// Storage key whose presence marks the session as authenticated.
pub const AUTH_KEY: &str = "admin-auth";

/// Key-value capability the guard persists its flag in.
pub trait SessionStorage: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Whether `key` is present.
    fn contains(&self, key: &str) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn insert(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Login/logout over a [`SessionStorage`].
///
/// The flag is read from storage on every [`SessionGuard::is_authenticated`]
/// call and never cached, so clearing the key outside the guard takes effect
/// on the next check.
#[derive(Debug, Clone)]
pub struct SessionGuard<S> {
    storage: S,
}

impl<S: SessionStorage> SessionGuard<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Mark the session authenticated.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the flag cannot be written.
    pub async fn login(&self) -> Result<(), S::Error> {
        self.storage.insert(AUTH_KEY, "true").await?;
        tracing::info!("admin session authenticated");
        Ok(())
    }

    /// Clear the flag. Callers navigate back to a public page afterwards.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the flag cannot be removed.
    pub async fn logout(&self) -> Result<(), S::Error> {
        self.storage.remove(AUTH_KEY).await?;
        tracing::info!("admin session logged out");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns the storage error if the flag cannot be read.
    pub async fn is_authenticated(&self) -> Result<bool, S::Error> {
        self.storage.contains(AUTH_KEY).await
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }
}

/// Session storage could not be read or written.
#[derive(Debug, thiserror::Error)]
#[error("session storage unavailable")]
pub struct SessionError;

/// In-process [`SessionStorage`], used by tests and tooling.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    type Error = SessionError;

    async fn contains(&self, key: &str) -> Result<bool, SessionError> {
        let entries = self.entries.lock().map_err(|_| SessionError)?;
        Ok(entries.contains_key(key))
    }

    async fn insert(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.lock().map_err(|_| SessionError)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.lock().map_err(|_| SessionError)?;
        entries.remove(key);
        Ok(())
    }
}

impl<T: SessionStorage> SessionStorage for &T {
    type Error = T::Error;

    fn contains(&self, key: &str) -> impl Future<Output = Result<bool, Self::Error>> + Send {
        (**self).contains(key)
    }

    fn insert(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send {
        (**self).insert(key, value)
    }

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), Self::Error>> + Send {
        (**self).remove(key)
    }
}
