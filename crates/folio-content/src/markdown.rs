//! Article body parsing and rendering.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};

/// Words per minute assumed by the read-time estimate.
const READING_WPM: usize = 200;

/// A parsed article body.
#[derive(Debug, Clone)]
pub struct ParsedArticle {
    /// Parsed frontmatter overrides (if present)
    pub frontmatter: Option<Frontmatter>,

    /// Markdown content without the frontmatter block
    pub content: String,

    /// Rendered HTML
    pub html: String,

    /// Table of contents entries
    pub toc: Vec<TocEntry>,

    /// Word count of the prose (code blocks excluded)
    pub word_count: usize,
}

/// A table of contents entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    /// Heading text
    pub title: String,
    /// Anchor ID
    pub id: String,
    /// Heading level (1-6)
    pub level: u8,
}

/// Errors that can occur when parsing an article body.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}

/// Parse an article body.
///
/// Extracts frontmatter, renders the Markdown to HTML with anchored
/// headings, and collects a table of contents. Rendering is deterministic
/// given the text.
pub fn parse_article(source: &str) -> Result<ParsedArticle, ParseError> {
    let (frontmatter, content) = extract_frontmatter(source)?;

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let events: Vec<Event> = Parser::new_ext(content, options).collect();

    // First pass: heading titles (for anchors) and prose word count.
    let mut toc = Vec::new();
    let mut word_count = 0;
    let mut current_heading: Option<(u8, String)> = None;
    let mut in_code_block = false;

    for event in &events {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current_heading = Some((*level as u8, String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title)) = current_heading.take() {
                    let id = slugify(&title);
                    toc.push(TocEntry { title, id, level });
                }
            }
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(text) => {
                if let Some((_, heading_text)) = current_heading.as_mut() {
                    heading_text.push_str(text);
                }
                if !in_code_block {
                    word_count += text.split_whitespace().count();
                }
            }
            Event::Code(code) => {
                if let Some((_, heading_text)) = current_heading.as_mut() {
                    heading_text.push_str(code);
                }
            }
            _ => {}
        }
    }

    // Second pass: give each heading the anchor id computed above.
    let mut heading_index = 0;
    let anchored = events.into_iter().map(|event| match event {
        Event::Start(Tag::Heading {
            level,
            classes,
            attrs,
            ..
        }) => {
            let id: Option<CowStr> = toc
                .get(heading_index)
                .map(|entry| CowStr::from(entry.id.clone()));
            heading_index += 1;
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            })
        }
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, anchored);

    Ok(ParsedArticle {
        frontmatter,
        content: content.to_string(),
        html: html_output,
        toc,
        word_count,
    })
}

/// Read-time label for a word count, e.g. "4 min read".
pub fn read_time_label(word_count: usize) -> String {
    let minutes = word_count.div_ceil(READING_WPM).max(1);
    format!("{} min read", minutes)
}

/// Convert a heading to a URL-safe anchor slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_complete_article() {
        let source = r#"---
title: Intro to Kafka
---

# Intro to Kafka

Kafka is a distributed event streaming platform.

## Topics and Partitions

Messages are appended to partitioned logs.

```bash
kafka-topics.sh --create --topic demo
```
"#;

        let article = parse_article(source).unwrap();

        let fm = article.frontmatter.unwrap();
        assert_eq!(fm.title.as_deref(), Some("Intro to Kafka"));

        assert_eq!(article.toc.len(), 2);
        assert_eq!(article.toc[0].title, "Intro to Kafka");
        assert_eq!(article.toc[0].id, "intro-to-kafka");
        assert_eq!(article.toc[0].level, 1);
        assert_eq!(article.toc[1].title, "Topics and Partitions");
        assert_eq!(article.toc[1].level, 2);

        assert!(article.html.contains(r#"<h1 id="intro-to-kafka">"#));
        assert!(article.html.contains("<p>Kafka is a distributed event streaming platform.</p>"));
    }

    #[test]
    fn parses_without_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter.";

        let article = parse_article(source).unwrap();

        assert!(article.frontmatter.is_none());
        assert_eq!(article.toc.len(), 1);
        assert_eq!(article.toc[0].title, "Just Markdown");
    }

    #[test]
    fn word_count_excludes_code_blocks() {
        let source = "one two three\n\n```\nnot counted here\n```\n\nfour five";

        let article = parse_article(source).unwrap();

        assert_eq!(article.word_count, 5);
    }

    #[test]
    fn renders_tables() {
        let source = "| a | b |\n|---|---|\n| 1 | 2 |";

        let article = parse_article(source).unwrap();

        assert!(article.html.contains("<table>"));
    }

    #[test]
    fn estimates_read_time() {
        assert_eq!(read_time_label(0), "1 min read");
        assert_eq!(read_time_label(199), "1 min read");
        assert_eq!(read_time_label(201), "2 min read");
        assert_eq!(read_time_label(800), "4 min read");
    }

    #[test]
    fn slugify_works() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Topics and Partitions"), "topics-and-partitions");
        assert_eq!(slugify("What's Next?"), "whats-next");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }
}
