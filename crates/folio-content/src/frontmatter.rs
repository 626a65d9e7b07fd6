//! Frontmatter extraction and parsing.
//!
//! Article bodies may open with a YAML frontmatter block that overrides
//! fields from the catalog entry. The catalog stays the source of truth for
//! slugs and content paths; frontmatter only refines what is displayed.

use serde::Deserialize;

use crate::article::ArticleMeta;

/// Parsed frontmatter from an article body. Every field is an override.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Frontmatter {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Publish date override, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,

    /// Tag list override (replaces the catalog list wholesale, order kept)
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl Frontmatter {
    /// Apply the overrides to a catalog entry.
    pub fn apply(&self, meta: &mut ArticleMeta) {
        if let Some(title) = &self.title {
            meta.title = title.clone();
        }
        if let Some(description) = &self.description {
            meta.description = description.clone();
        }
        if let Some(date) = &self.date {
            meta.date = date.clone();
        }
        if let Some(tags) = &self.tags {
            meta.tags = tags.clone();
        }
    }
}

/// Extract frontmatter from an article body.
///
/// Returns the parsed frontmatter and the remaining content after the block.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = &after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((Some(frontmatter), remaining.trim_start()))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_override_fields() {
        let source = r#"---
title: Intro to Kafka
description: First of the series
tags:
  - Kafka
  - Distributed Systems
---

# Intro to Kafka
"#;

        let (fm, content) = extract_frontmatter(source).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.title.as_deref(), Some("Intro to Kafka"));
        assert_eq!(fm.description.as_deref(), Some("First of the series"));
        assert_eq!(
            fm.tags,
            Some(vec!["Kafka".to_string(), "Distributed Systems".to_string()])
        );
        assert!(content.starts_with("# Intro to Kafka"));
    }

    #[test]
    fn handles_no_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter here.";

        let (fm, content) = extract_frontmatter(source).unwrap();

        assert!(fm.is_none());
        assert_eq!(content, source);
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let source = "---\ntitle: Test\n# No closing";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let source = "---\ntitle: [invalid yaml\n---\n";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }

    #[test]
    fn applies_overrides_to_catalog_entry() {
        let mut meta = ArticleMeta {
            title: "Old".to_string(),
            description: "Old description".to_string(),
            image: None,
            read_time: None,
            date: "2021-01-14".to_string(),
            tags: vec!["Old".to_string()],
            slug: "old".to_string(),
            content_file: "old.md".to_string(),
        };

        let fm = Frontmatter {
            title: Some("New".to_string()),
            description: None,
            date: None,
            tags: Some(vec!["New".to_string(), "Tags".to_string()]),
        };
        fm.apply(&mut meta);

        assert_eq!(meta.title, "New");
        assert_eq!(meta.description, "Old description");
        assert_eq!(meta.tags, vec!["New", "Tags"]);
        assert_eq!(meta.slug, "old");
    }
}
