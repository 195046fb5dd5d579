//! Integration tests for the sitemap endpoint.
//!
//! Run with: `cargo test -p server --features server --test seo_tests`

#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

async fn get(path: &str) -> (StatusCode, Option<String>, String) {
    let app = server::seo::router();
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn sitemap_endpoint_serves_xml() {
    let (status, content_type, body) = get("/sitemap.xml").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/xml"));
    assert!(body.starts_with("<?xml version=\"1.0\""));
    assert!(body.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert_eq!(body.matches("<url>").count(), server::seo::SITE_PATHS.len());
}

#[tokio::test]
async fn sitemap_locations_use_the_configured_base_url() {
    let base = &server::config::site_config().base_url;
    let (_, _, body) = get("/sitemap.xml").await;

    for path in server::seo::SITE_PATHS {
        assert!(body.contains(&format!("<loc>{base}{path}</loc>")), "{path}");
    }
}

#[tokio::test]
async fn unknown_path_is_not_served() {
    let (status, _, _) = get("/robots.txt").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
