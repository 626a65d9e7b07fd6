//! Initialize a site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    let content_dir = Path::new("content");

    if content_dir.exists() {
        if !yes {
            tracing::warn!("content/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(content_dir).context("Failed to create content directory")?;
    }

    // Create default config
    let config_path = Path::new("site.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write site.toml")?;
        tracing::info!("Created site.toml");
    }

    // Create the article catalog
    let catalog_path = content_dir.join("articles.json");
    if !catalog_path.exists() || yes {
        fs::write(&catalog_path, DEFAULT_CATALOG).context("Failed to write articles.json")?;
        tracing::info!("Created content/articles.json");
    }

    // Create the article bodies
    for (file, body) in [
        ("intro-to-kafka.md", INTRO_TO_KAFKA),
        ("kafka-producers.md", KAFKA_PRODUCERS),
        ("kafka-consumers.md", KAFKA_CONSUMERS),
        ("sqs-dispatcher.md", SQS_DISPATCHER),
    ] {
        let path = content_dir.join(file);
        if !path.exists() || yes {
            fs::write(&path, body).with_context(|| format!("Failed to write {}", file))?;
            tracing::info!("Created content/{}", file);
        }
    }

    // Create the images directory
    let images_dir = content_dir.join("images");
    if !images_dir.exists() {
        fs::create_dir_all(&images_dir).context("Failed to create images directory")?;
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio dev' to start the development server.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[site]
# Site title, shown in the header and page titles
title = "My Portfolio"

# Author, shown on article pages and in the feed
author = "Author"

# Base URL (for deployment)
base_url = "/"

[content]
# Directory with articles.json, Markdown bodies and images
dir = "content"

[build]
# Output directory for the built site
output = "dist"

# Enable CSS minification
minify = true
"#;

const DEFAULT_CATALOG: &str = r#"[
  {
    "title": "Intro to Kafka",
    "description": "This is the first article of a series where we will learn about Kafka features and usage.",
    "readTime": "4 min read",
    "date": "2021-01-14",
    "tags": ["Kafka", "Distributed Systems"],
    "slug": "intro-to-kafka",
    "contentFile": "intro-to-kafka.md"
  },
  {
    "title": "Kafka Producers",
    "description": "In this article we'll explore how Kafka producers work.",
    "readTime": "6 min read",
    "date": "2021-01-14",
    "tags": ["Kafka", "Distributed Systems"],
    "slug": "kafka-producers",
    "contentFile": "kafka-producers.md"
  },
  {
    "title": "Kafka Consumers",
    "description": "In this article we'll explore how Kafka consumers work.",
    "readTime": "4 min read",
    "date": "2021-01-14",
    "tags": ["Kafka", "Distributed Systems"],
    "slug": "kafka-consumers",
    "contentFile": "kafka-consumers.md"
  },
  {
    "title": "How to Configure and Use SQS Message Dispatcher",
    "description": "Library to dispatch SQS messages.",
    "readTime": "3 min read",
    "date": "2021-10-25",
    "tags": ["AWS", "AWS SQS", "Cloud"],
    "slug": "sqs-dispatcher",
    "contentFile": "sqs-dispatcher.md"
  }
]
"#;

const INTRO_TO_KAFKA: &str = r#"# Intro to Kafka

Kafka is a distributed event streaming platform. Producers append records to
topics, consumers read them at their own pace, and the broker keeps an ordered,
durable log in between.

## Why a log?

An append-only log makes replication and replay straightforward: every record
has an offset, and a consumer is just a cursor over the log.

## What's next

The next articles in this series cover producers, consumers, and the CLI.
"#;

const KAFKA_PRODUCERS: &str = r#"# Kafka Producers

Producers decide which partition each record lands in, either round-robin or
by key hash.

## Acknowledgements

The `acks` setting trades latency for durability: `0` fires and forgets,
`all` waits for the full in-sync replica set.

## Batching

Records are buffered and sent in batches; `linger.ms` controls how long the
producer waits to fill one.
"#;

const KAFKA_CONSUMERS: &str = r#"# Kafka Consumers

Consumers read partitions in order and commit offsets as they go.

## Consumer groups

Partitions are distributed across the members of a group; adding a member
triggers a rebalance.
"#;

const SQS_DISPATCHER: &str = r#"# How to Configure and Use SQS Message Dispatcher

A small library to dispatch SQS messages to handlers by message type.

## Configuration

Point the dispatcher at a queue URL and register one handler per message
type; unmatched messages go to a dead-letter queue.
"#;
