//! The article catalog: an ordered list of article metadata keyed by slug.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::article::{is_valid_slug, ArticleMeta};

/// Number of entries shown by the truncated blog listing.
pub const PREVIEW_COUNT: usize = 3;

/// Errors that can occur when loading or validating the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Invalid catalog JSON: {0}")]
    Json(String),

    #[error("Duplicate slug in catalog: '{0}'")]
    DuplicateSlug(String),

    #[error("Invalid slug '{0}': slugs are lowercase alphanumeric segments joined by hyphens")]
    InvalidSlug(String),

    #[error("Content file for '{slug}' not found: {path}")]
    MissingContent { slug: String, path: PathBuf },
}

/// The static, ordered collection of article metadata.
///
/// Authoring order is preserved; it drives the listing, the feed and the
/// sitemap. Slugs are unique, so `get` is an unambiguous lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<ArticleMeta>,
}

impl Catalog {
    /// Parse a catalog from JSON, enforcing slug invariants.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<ArticleMeta> =
            serde_json::from_str(json).map_err(|e| CatalogError::Json(e.to_string()))?;

        let mut seen = HashSet::new();
        for entry in &entries {
            if !is_valid_slug(&entry.slug) {
                return Err(CatalogError::InvalidSlug(entry.slug.clone()));
            }
            if !seen.insert(entry.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(entry.slug.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// Look up an article by slug. `None` is the explicit not-found path.
    pub fn get(&self, slug: &str) -> Option<&ArticleMeta> {
        self.entries.iter().find(|e| e.slug == slug)
    }

    /// All entries, in authoring order.
    pub fn all(&self) -> &[ArticleMeta] {
        &self.entries
    }

    /// The first [`PREVIEW_COUNT`] entries, for the truncated listing.
    pub fn preview(&self) -> &[ArticleMeta] {
        let n = self.entries.len().min(PREVIEW_COUNT);
        &self.entries[..n]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Verify that every `content_file` exists under `content_dir`.
    ///
    /// Returns the Markdown files present in the directory that no catalog
    /// entry references, so callers can warn about orphaned drafts.
    pub fn verify_content(&self, content_dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
        let mut referenced = HashSet::new();

        for entry in &self.entries {
            let path = content_dir.join(&entry.content_file);
            if !path.is_file() {
                return Err(CatalogError::MissingContent {
                    slug: entry.slug.clone(),
                    path,
                });
            }
            referenced.insert(path);
        }

        let mut orphans = Vec::new();
        for file in WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = file.path();
            if !path.is_file() {
                continue;
            }
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext == "md" && !referenced.contains(path) {
                tracing::warn!("Markdown file not referenced by the catalog: {}", path.display());
                orphans.push(path.to_path_buf());
            }
        }

        Ok(orphans)
    }
}
