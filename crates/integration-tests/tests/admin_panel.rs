//! End-to-end tests for the admin panel.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use wenz_homez_core::{EnquiryId, EnquiryStatus, PropertyId, PropertyStatus};
use wenz_homez_integration_tests::TestServer;

fn listing_form<'a>(title: &'a str, price: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("title", title),
        ("description", "Three levels with a lift and a roof garden."),
        ("location", "Miami Beach, FL"),
        ("property_type", "Townhouse"),
        ("price", price),
        ("bedrooms", "3"),
        ("bathrooms", "2"),
        ("image", ""),
    ]
}

// ============================================================================
// Session Guard
// ============================================================================

#[tokio::test]
async fn test_admin_requires_login() {
    let server = TestServer::seeded().await;

    for path in ["/admin", "/admin/assets", "/admin/enquiries", "/admin/settings"] {
        let resp = server.get(path).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.url().path(), "/admin/login", "{path} was not guarded");
    }
}

#[tokio::test]
async fn test_guard_runs_before_not_found() {
    let server = TestServer::seeded().await;
    let resp = server.get("/admin/does-not-exist").await;
    assert_eq!(resp.url().path(), "/admin/login");

    server.login().await;
    let resp = server.get("/admin/does-not-exist").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_and_logout() {
    let server = TestServer::seeded().await;
    server.login().await;

    let body = server.page("/admin").await;
    assert!(body.contains("Dashboard"));

    // Already signed in
    let resp = server.get("/admin/login").await;
    assert_eq!(resp.url().path(), "/admin");

    let resp = server.post("/admin/logout", &[]).await;
    assert_eq!(resp.url().path(), "/");

    let resp = server.get("/admin").await;
    assert_eq!(resp.url().path(), "/admin/login");
}

// ============================================================================
// Listings
// ============================================================================

#[tokio::test]
async fn test_create_listing() {
    let server = TestServer::seeded().await;
    server.login().await;

    let body = server.post("/admin/assets/new", &[]).await.text().await.unwrap();
    assert!(body.contains("Add New Property"));

    let resp = server
        .post(
            "/admin/assets/submit",
            &listing_form("Bayfront Townhouse", "1,200,000"),
        )
        .await;
    assert_eq!(resp.url().path(), "/admin/assets");
    let body = resp.text().await.unwrap();
    assert!(body.contains("Property added successfully!"));
    assert!(body.contains("Bayfront Townhouse"));

    let public = server.page("/properties?search=bayfront").await;
    assert!(public.contains("Bayfront Townhouse"));
    assert_eq!(server.state.store().properties.len().unwrap(), 10);
}

#[tokio::test]
async fn test_invalid_listing_keeps_form_open() {
    let server = TestServer::seeded().await;
    server.login().await;
    server.post("/admin/assets/new", &[]).await;

    let body = server
        .post("/admin/assets/submit", &listing_form("No Price", "lots"))
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Price must be a number"));
    assert!(body.contains("value=\"No Price\""));
    assert_eq!(server.state.store().properties.len().unwrap(), 9);

    let body = server
        .post("/admin/assets/cancel", &[])
        .await
        .text()
        .await
        .unwrap();
    assert!(!body.contains("value=\"No Price\""));
}

#[tokio::test]
async fn test_edit_listing() {
    let server = TestServer::seeded().await;
    server.login().await;

    let body = server
        .post("/admin/assets/1/edit", &[])
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("value=\"Modern Luxury Villa\""));

    let body = server
        .post(
            "/admin/assets/submit",
            &listing_form("Renovated Luxury Villa", "2600000"),
        )
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Property updated successfully!"));

    let property = server
        .state
        .store()
        .properties
        .get(PropertyId::new(1))
        .unwrap();
    assert_eq!(property.title, "Renovated Luxury Villa");
    assert_eq!(server.state.store().properties.len().unwrap(), 9);
}

#[tokio::test]
async fn test_toggle_and_delete_listing() {
    let server = TestServer::seeded().await;
    server.login().await;

    server.post("/admin/assets/2/toggle", &[]).await;
    let property = server
        .state
        .store()
        .properties
        .get(PropertyId::new(2))
        .unwrap();
    assert_eq!(property.status, PropertyStatus::Inactive);
    assert_eq!(
        server.get("/properties/2").await.status(),
        StatusCode::NOT_FOUND
    );

    let body = server
        .post("/admin/assets/1/delete", &[])
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Property deleted successfully!"));
    assert!(
        server
            .state
            .store()
            .properties
            .get(PropertyId::new(1))
            .is_err()
    );
}

#[tokio::test]
async fn test_missing_listing_reports_error() {
    let server = TestServer::seeded().await;
    server.login().await;

    let resp = server.post("/admin/assets/424242/delete", &[]).await;
    assert_eq!(resp.url().path(), "/admin/assets");
    assert!(resp.text().await.unwrap().contains("not found"));
}

// ============================================================================
// Enquiries
// ============================================================================

#[tokio::test]
async fn test_enquiry_triage() {
    let server = TestServer::seeded().await;
    server.login().await;
    let enquiries = &server.state.store().enquiries;

    let body = server
        .post("/admin/enquiries/1/read", &[])
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Enquiry marked as read"));
    assert_eq!(
        enquiries.get(EnquiryId::new(1)).unwrap().status,
        EnquiryStatus::Read
    );

    let body = server
        .post("/admin/enquiries/1/archive", &[])
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Enquiry archived"));
    assert_eq!(
        enquiries.get(EnquiryId::new(1)).unwrap().status,
        EnquiryStatus::Archived
    );

    let body = server
        .post("/admin/enquiries/5/delete", &[])
        .await
        .text()
        .await
        .unwrap();
    assert!(body.contains("Enquiry deleted"));
    assert!(!body.contains("Robert Wilson"));
    assert_eq!(enquiries.len().unwrap(), 4);
}

// ============================================================================
// Settings
// ============================================================================

#[tokio::test]
async fn test_settings_drive_assets_paging() {
    let server = TestServer::seeded().await;
    server.login().await;

    let resp = server
        .post(
            "/admin/settings",
            &[
                ("company_name", "Wenz Homez"),
                ("company_email", "Office@WenzHomez.com"),
                ("company_phone", "+1 (555) 000-1111"),
                ("company_address", "1 Harbour Rd"),
                ("company_description", "Family-run agency."),
                ("email_notifications", "on"),
                ("theme", "dark"),
                ("items_per_page", "5"),
                ("default_sort_order", "price-high"),
                ("session_timeout", "60"),
            ],
        )
        .await;
    assert_eq!(resp.url().path(), "/admin/settings");
    assert!(resp.text().await.unwrap().contains("Settings saved successfully!"));

    let settings = server.state.settings().unwrap();
    assert_eq!(settings.items_per_page, 5);
    assert_eq!(settings.session_timeout_minutes, 60);
    assert!(!settings.new_enquiry_alerts);

    let body = server.page("/admin/assets").await;
    assert!(body.contains("Page 1 of 2"));
    assert!(body.contains("Hillside Luxury Estate"));
    assert!(!body.contains("Suburban House"));
}

#[tokio::test]
async fn test_invalid_settings_are_not_saved() {
    let server = TestServer::seeded().await;
    server.login().await;

    let body = server
        .post(
            "/admin/settings",
            &[
                ("company_name", "Wenz Homez"),
                ("company_email", "not-an-email"),
                ("theme", "dark"),
                ("items_per_page", "5"),
                ("default_sort_order", "newest"),
                ("session_timeout", "60"),
            ],
        )
        .await
        .text()
        .await
        .unwrap();
    assert!(!body.contains("Settings saved successfully!"));
    assert_eq!(server.state.settings().unwrap().items_per_page, 10);
}
