//! Sitemap generation tests against the documented classification rules.

use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use server::config::{resolve_base_url, Environment};
use server::seo::{build_sitemap, render_xml, ChangeFrequency, SITE_PATHS};

fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-15T10:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn production_base_url_feeds_absolute_locations() {
    let base = resolve_base_url(Environment::Production, None);
    let entries = build_sitemap(&base, fixed_now());

    let documents = entries
        .iter()
        .find(|e| e.loc.ends_with("/trainees/documents"))
        .unwrap();
    assert_eq!(
        documents.loc,
        "https://www.idmawa.edu.vn/trainees/documents"
    );
    assert_eq!(documents.change_frequency, ChangeFrequency::Daily);
    assert_eq!(documents.priority, 0.9);
}

#[test]
fn root_entry_is_the_bare_base_url() {
    let base = resolve_base_url(Environment::Production, None);
    let entries = build_sitemap(&base, fixed_now());

    assert_eq!(entries[0].loc, "https://www.idmawa.edu.vn");
    assert_eq!(entries[0].change_frequency, ChangeFrequency::Weekly);
    assert_eq!(entries[0].priority, 1.0);
}

#[test]
fn development_environment_advertises_localhost() {
    let base = resolve_base_url(Environment::Development, None);
    let entries = build_sitemap(&base, fixed_now());
    assert!(entries
        .iter()
        .all(|e| e.loc.starts_with("http://localhost:8080")));
}

#[test]
fn every_path_emitted_exactly_once_in_input_order() {
    let entries = build_sitemap("https://example.test", fixed_now());
    assert_eq!(entries.len(), SITE_PATHS.len());
    for (entry, path) in entries.iter().zip(SITE_PATHS) {
        assert_eq!(entry.loc, format!("https://example.test{path}"));
    }
}

#[test]
fn priorities_follow_the_substring_rules_exactly() {
    let entries = build_sitemap("https://example.test", fixed_now());
    for entry in &entries[1..] {
        let path = entry.loc.trim_start_matches("https://example.test");
        let expected = if path.contains("dashboard") || path.contains("documents") {
            0.9
        } else {
            0.7
        };
        assert_eq!(entry.priority, expected, "path {path}");
        assert_eq!(entry.change_frequency, ChangeFrequency::Daily);
    }
}

#[test]
fn xml_output_is_sitemap_protocol_shaped() {
    let entries = build_sitemap("https://example.test", fixed_now());
    let xml = render_xml(&entries);

    assert!(xml.contains("xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\""));
    assert_eq!(xml.matches("<url>").count(), SITE_PATHS.len());
    assert_eq!(xml.matches("</url>").count(), SITE_PATHS.len());
    assert!(xml.contains("<lastmod>2025-06-15</lastmod>"));
}
