//! End-to-end tests for the Wenz Homez site.
//!
//! Each test starts the full application on an ephemeral port and talks to
//! it over HTTP with a cookie-keeping client, the way a browser would.
//!
//! # Test Categories
//!
//! - `public_site` - Listings, filters, enquiry forms, notifications
//! - `admin_panel` - Login guard, listings CRUD, enquiry triage, settings

use std::net::SocketAddr;

use axum::{ServiceExt, extract::Request};
use reqwest::{Client, Response};
use tokio::net::TcpListener;
use wenz_homez_core::store::EntityStore;
use wenz_homez_site::{app, config::SiteConfig, state::AppState};

/// A running site plus a client holding one visitor's cookies.
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
    pub state: AppState,
}

impl TestServer {
    /// Start a server over the demo data.
    ///
    /// # Panics
    ///
    /// Panics if the listener or client cannot be created.
    pub async fn seeded() -> Self {
        Self::start(EntityStore::seeded()).await
    }

    /// Start a server over `store`.
    ///
    /// # Panics
    ///
    /// Panics if the listener or client cannot be created.
    pub async fn start(store: EntityStore) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let state = AppState::with_store(SiteConfig::default(), store);
        let service = app(state.clone());
        tokio::spawn(async move {
            axum::serve(
                listener,
                ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(service),
            )
            .await
        });

        Self {
            base_url: format!("http://{addr}"),
            client: new_client(),
            state,
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `path`, following redirects.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// GET `path` and return the body text.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn page(&self, path: &str) -> String {
        self.get(path).await.text().await.expect("Failed to read body")
    }

    /// POST a form to `path`, following the redirect.
    ///
    /// # Panics
    ///
    /// Panics if the request fails.
    pub async fn post(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Sign in as the admin.
    ///
    /// # Panics
    ///
    /// Panics if the login does not land on the dashboard.
    pub async fn login(&self) {
        let resp = self.post("/admin/login", &[]).await;
        assert!(resp.status().is_success());
        assert_eq!(resp.url().path(), "/admin");
    }
}

fn new_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
