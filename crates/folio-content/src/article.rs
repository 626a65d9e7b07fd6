//! Article metadata records.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Metadata for one article in the catalog.
///
/// Authored once at build time in `articles.json`; immutable at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMeta {
    /// Article title
    pub title: String,

    /// Short summary shown on listing cards and the article header
    #[serde(default)]
    pub description: String,

    /// Header image path, relative to the content directory
    #[serde(default)]
    pub image: Option<String>,

    /// Read-time label, e.g. "4 min read". Estimated from the body when absent.
    #[serde(default)]
    pub read_time: Option<String>,

    /// Publish date in `YYYY-MM-DD` form
    pub date: String,

    /// Tags in authored order (no dedup, no sorting)
    #[serde(default)]
    pub tags: Vec<String>,

    /// URL-safe unique identifier, the lookup key into the catalog
    pub slug: String,

    /// Path to the Markdown body, relative to the content directory
    pub content_file: String,
}

impl ArticleMeta {
    /// Parse the publish date. Returns `None` for malformed dates.
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Human-readable publish date, e.g. "Jan 14, 2021".
    ///
    /// Falls back to the raw string when the date does not parse.
    pub fn display_date(&self) -> String {
        match self.published() {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }
}

/// Check that a slug is URL-safe: lowercase alphanumeric segments joined by
/// single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    static SLUG_RE: OnceLock<Regex> = OnceLock::new();
    let re = SLUG_RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid")
    });
    re.is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn meta(date: &str) -> ArticleMeta {
        ArticleMeta {
            title: "Intro to Kafka".to_string(),
            description: "First of the series".to_string(),
            image: None,
            read_time: Some("4 min read".to_string()),
            date: date.to_string(),
            tags: vec!["Kafka".to_string(), "Distributed Systems".to_string()],
            slug: "intro-to-kafka".to_string(),
            content_file: "intro-to-kafka.md".to_string(),
        }
    }

    #[test]
    fn deserializes_camel_case_catalog_fields() {
        let json = r#"{
            "title": "Intro to Kafka",
            "description": "First of the series",
            "readTime": "4 min read",
            "date": "2021-01-14",
            "tags": ["Kafka", "Distributed Systems"],
            "slug": "intro-to-kafka",
            "contentFile": "intro-to-kafka.md"
        }"#;

        let parsed: ArticleMeta = serde_json::from_str(json).unwrap();

        assert_eq!(parsed, meta("2021-01-14"));
    }

    #[test]
    fn preserves_tag_order() {
        let json = r#"{
            "title": "T",
            "date": "2021-01-14",
            "tags": ["Zeta", "Alpha", "Zeta"],
            "slug": "t",
            "contentFile": "t.md"
        }"#;

        let parsed: ArticleMeta = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.tags, vec!["Zeta", "Alpha", "Zeta"]);
    }

    #[test]
    fn formats_display_date() {
        assert_eq!(meta("2021-01-14").display_date(), "Jan 14, 2021");
        assert_eq!(meta("not-a-date").display_date(), "not-a-date");
    }

    #[test]
    fn validates_slugs() {
        assert!(is_valid_slug("intro-to-kafka"));
        assert!(is_valid_slug("sqs-dispatcher"));
        assert!(is_valid_slug("a"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Intro-To-Kafka"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("space here"));
    }
}
