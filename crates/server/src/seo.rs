use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

use crate::config;

/// How frequently a page is expected to change, per the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
        }
    }
}

/// One `<url>` record in the generated sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
}

/// Relative paths advertised to crawlers, in emission order.
pub const SITE_PATHS: &[&str] = &[
    "",
    "/admin/dashboard",
    "/head/dashboard",
    "/academic/dashboard",
    "/trainees/documents",
    "/director/dashboard",
];

/// The site root changes weekly; every content page changes daily.
fn change_frequency_for(path: &str) -> ChangeFrequency {
    if path.is_empty() {
        ChangeFrequency::Weekly
    } else {
        ChangeFrequency::Daily
    }
}

/// The root outranks everything; dashboard and document pages outrank the rest.
fn priority_for(path: &str) -> f64 {
    if path.is_empty() {
        1.0
    } else if path.contains("dashboard") || path.contains("documents") {
        0.9
    } else {
        0.7
    }
}

/// Build one record per path in [`SITE_PATHS`], in input order.
///
/// Pure given `now`; `loc` is the exact concatenation of `base_url` and the
/// relative path.
pub fn build_sitemap(base_url: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    SITE_PATHS
        .iter()
        .map(|path| SitemapEntry {
            loc: format!("{base_url}{path}"),
            last_modified: now,
            change_frequency: change_frequency_for(path),
            priority: priority_for(path),
        })
        .collect()
}

/// Render entries as sitemap-protocol XML.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        let _ = write!(
            xml,
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            entry.loc,
            entry.last_modified.format("%Y-%m-%d"),
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }
    xml.push_str("</urlset>\n");
    xml
}

async fn sitemap_handler() -> axum::response::Response {
    let entries = build_sitemap(&config::site_config().base_url, Utc::now());
    (
        [(axum::http::header::CONTENT_TYPE, "application/xml")],
        render_xml(&entries),
    )
        .into_response()
}

/// Router fragment serving `GET /sitemap.xml`; merged into the main router
/// at startup.
pub fn router() -> axum::Router {
    axum::Router::new().route("/sitemap.xml", axum::routing::get(sitemap_handler))
}
