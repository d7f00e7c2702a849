//! End-to-end tests for the public listings site.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use wenz_homez_integration_tests::TestServer;

const SENT: &str = "Thank you! Your message has been sent.";

/// Pull the first notification's dismiss action out of a page.
fn dismiss_action(body: &str) -> Option<String> {
    let start = body.find("/notifications/")?;
    let end = start + body.get(start..)?.find('"')?;
    body.get(start..end).map(str::to_string)
}

// ============================================================================
// Listings
// ============================================================================

#[tokio::test]
async fn test_home_shows_featured_listings() {
    let server = TestServer::seeded().await;
    let resp = server.get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Modern Luxury Villa"));
    assert!(!body.contains("Suburban House"), "inactive listing featured");
}

#[tokio::test]
async fn test_listing_filters() {
    let server = TestServer::seeded().await;

    let body = server.page("/properties?search=penthouse").await;
    assert!(body.contains("2 properties found"));
    assert!(body.contains("Ocean View Penthouse"));
    assert!(body.contains("Modern Downtown Penthouse"));

    let body = server
        .page("/properties?location=miami-beach&bedrooms=5")
        .await;
    assert!(body.contains("1 property found"));
    assert!(body.contains("Waterfront Modern Villa"));

    let body = server.page("/properties?search=nowhere").await;
    assert!(body.contains("No properties match your search"));
}

#[tokio::test]
async fn test_inactive_listing_is_hidden() {
    let server = TestServer::seeded().await;
    assert_eq!(server.get("/properties/2").await.status(), StatusCode::OK);
    assert_eq!(
        server.get("/properties/3").await.status(),
        StatusCode::NOT_FOUND
    );
}

// ============================================================================
// Enquiries
// ============================================================================

#[tokio::test]
async fn test_listing_enquiry_reaches_admin() {
    let server = TestServer::seeded().await;

    let resp = server
        .post(
            "/properties/2/enquire",
            &[
                ("name", "Priya Tester"),
                ("email", "priya@example.com"),
                ("phone", ""),
                ("message", "Is the doorman included?"),
                ("property_interest", "Something else"),
            ],
        )
        .await;
    assert_eq!(resp.url().path(), "/properties/2");
    assert!(resp.text().await.unwrap().contains(SENT));

    server.login().await;
    let body = server.page("/admin/enquiries").await;
    assert!(body.contains("Priya Tester"));
    assert!(body.contains("Is the doorman included?"));

    let newest = server.state.store().enquiries.list().unwrap();
    let enquiry = newest
        .iter()
        .find(|e| e.name == "Priya Tester")
        .unwrap();
    assert_eq!(
        enquiry.property_interest.as_deref(),
        Some("Downtown Apartment")
    );
}

#[tokio::test]
async fn test_contact_enquiry_keeps_subject() {
    let server = TestServer::seeded().await;

    let resp = server
        .post(
            "/contact",
            &[
                ("name", "Tom Contact"),
                ("email", "tom@example.com"),
                ("subject", "Viewing"),
                ("message", "Saturday morning?"),
            ],
        )
        .await;
    assert_eq!(resp.url().path(), "/contact");
    assert!(resp.text().await.unwrap().contains(SENT));

    let enquiries = server.state.store().enquiries.list().unwrap();
    let enquiry = enquiries.iter().find(|e| e.name == "Tom Contact").unwrap();
    assert_eq!(enquiry.message, "Viewing: Saturday morning?");
    assert!(enquiry.property_interest.is_none());
}

#[tokio::test]
async fn test_invalid_enquiry_is_reported() {
    let server = TestServer::seeded().await;
    let before = server.state.store().enquiries.len().unwrap();

    let resp = server
        .post(
            "/contact",
            &[("name", " "), ("email", "a@b.co"), ("message", "Hi")],
        )
        .await;
    let body = resp.text().await.unwrap();
    assert!(body.contains("Name is required"));
    assert!(!body.contains(SENT));
    assert_eq!(server.state.store().enquiries.len().unwrap(), before);
}

#[tokio::test]
async fn test_notification_can_be_dismissed() {
    let server = TestServer::seeded().await;
    let body = server
        .post(
            "/contact",
            &[
                ("name", "Dee"),
                ("email", "dee@example.com"),
                ("message", "Hello"),
            ],
        )
        .await
        .text()
        .await
        .unwrap();

    let action = dismiss_action(&body).unwrap();
    let resp = server.post(&action, &[("next", "/about")]).await;
    assert_eq!(resp.url().path(), "/about");
    assert!(!resp.text().await.unwrap().contains(SENT));
}

#[tokio::test]
async fn test_dismiss_keeps_listing_filters() {
    let server = TestServer::seeded().await;
    server
        .post(
            "/contact",
            &[
                ("name", "Dee"),
                ("email", "dee@example.com"),
                ("message", "Hello"),
            ],
        )
        .await;

    let body = server.page("/properties?search=penthouse").await;
    assert!(body.contains("value=\"/properties?search=penthouse\""));

    let action = dismiss_action(&body).unwrap();
    let resp = server
        .post(&action, &[("next", "/properties?search=penthouse")])
        .await;
    assert_eq!(resp.url().path(), "/properties");
    assert_eq!(resp.url().query(), Some("search=penthouse"));
    assert!(resp.text().await.unwrap().contains("2 properties found"));
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let server = TestServer::seeded().await;
    let resp = server.get("/nothing-here").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
