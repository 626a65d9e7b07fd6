//! Article body loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::article::ArticleMeta;

/// Errors that can occur when loading an article body.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads article bodies from the content directory.
///
/// A missing file is terminal and maps to the not-found view. A transient
/// read failure is retried once before surfacing as [`ContentError::Io`].
#[derive(Debug, Clone)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content directory this store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of an article's body.
    pub fn path_for(&self, meta: &ArticleMeta) -> PathBuf {
        self.root.join(&meta.content_file)
    }

    /// Load the raw Markdown body for an article.
    pub fn load(&self, meta: &ArticleMeta) -> Result<String, ContentError> {
        let path = self.path_for(meta);

        if !path.is_file() {
            return Err(ContentError::Missing(path));
        }

        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(first) => {
                tracing::warn!(
                    "Read of {} failed ({}), retrying once",
                    path.display(),
                    first
                );
                fs::read_to_string(&path).map_err(|e| ContentError::Io { path, source: e })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn meta(content_file: &str) -> ArticleMeta {
        ArticleMeta {
            title: "Intro to Kafka".to_string(),
            description: String::new(),
            image: None,
            read_time: None,
            date: "2021-01-14".to_string(),
            tags: vec![],
            slug: "intro-to-kafka".to_string(),
            content_file: content_file.to_string(),
        }
    }

    #[test]
    fn loads_existing_body() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("intro-to-kafka.md"), "# Intro to Kafka").unwrap();

        let store = ContentStore::new(temp.path());
        let body = store.load(&meta("intro-to-kafka.md")).unwrap();

        assert_eq!(body, "# Intro to Kafka");
    }

    #[test]
    fn missing_body_is_a_distinct_error() {
        let temp = tempdir().unwrap();

        let store = ContentStore::new(temp.path());
        let result = store.load(&meta("gone.md"));

        assert!(matches!(result, Err(ContentError::Missing(_))));
    }

    #[test]
    fn path_for_joins_content_dir() {
        let store = ContentStore::new("/content");

        assert_eq!(
            store.path_for(&meta("intro-to-kafka.md")),
            PathBuf::from("/content/intro-to-kafka.md")
        );
    }
}
