//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use folio_content::profile::Profile;
use folio_content::{parse_article, read_time_label, ArticleMeta, Catalog, CatalogError, ContentError, ContentStore};

use crate::assets::AssetPipeline;
use crate::feed::render_feed;
use crate::templates::{ArticleCard, ArticleView, SiteMeta, TemplateEngine, TocEntry};

/// Configuration for building the static site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Content directory: `articles.json`, Markdown bodies, images
    pub content_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Base URL for the site
    pub base_url: String,

    /// Site title
    pub title: String,

    /// Author shown on article pages and in the feed
    pub author: String,

    /// Minify CSS output
    pub minify: bool,

    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("dist"),
            base_url: "/".to_string(),
            title: "Portfolio".to_string(),
            author: "Author".to_string(),
            minify: true,
            styles: vec![],
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated (index, articles, 404)
    pub pages: usize,

    /// Number of article pages among them
    pub articles: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Failed to load body for '{slug}': {source}")]
    Content {
        slug: String,
        #[source]
        source: ContentError,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to read {0}")]
    Read(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// An article whose page has been written, with overrides applied.
#[derive(Debug)]
struct BuiltArticle {
    meta: ArticleMeta,
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    profile: Profile,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a builder with the built-in profile dataset.
    pub fn new(config: BuildConfig) -> Self {
        Self::with_profile(config, Profile::standard())
    }

    /// Create a builder with an explicit profile.
    pub fn with_profile(config: BuildConfig, profile: Profile) -> Self {
        Self {
            config,
            profile,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let catalog = Catalog::load(&self.config.content_dir.join("articles.json"))?;
        let orphans = catalog.verify_content(&self.config.content_dir)?;
        if !orphans.is_empty() {
            tracing::warn!("{} Markdown file(s) not referenced by the catalog", orphans.len());
        }

        let site = SiteMeta {
            title: self.config.title.clone(),
            base_url: self.config.base_url.clone(),
            author: self.config.author.clone(),
        };

        let store = ContentStore::new(&self.config.content_dir);

        // Article pages in parallel
        let built: Vec<BuiltArticle> = catalog
            .all()
            .par_iter()
            .map(|meta| self.build_article(meta, &store, &site))
            .collect::<Result<Vec<_>, _>>()?;

        // Index page, composed from every section plus the listing
        let posts: Vec<ArticleCard> = built
            .iter()
            .enumerate()
            .map(|(i, article)| ArticleCard::from_meta(&article.meta, &site.base_url, i))
            .collect();

        let index_html = self
            .templates
            .render_index(&site, &self.profile, &posts)
            .map_err(|e| BuildError::Template(e.to_string()))?;
        self.write_file(&self.config.output_dir.join("index.html"), &index_html)?;

        // Not-found page, served by static hosts for unknown routes
        let not_found_html = self
            .templates
            .render_not_found(&site)
            .map_err(|e| BuildError::Template(e.to_string()))?;
        self.write_file(&self.config.output_dir.join("404.html"), &not_found_html)?;

        self.generate_assets()?;
        self.copy_images()?;
        self.generate_sitemap(&catalog)?;
        self.write_file(
            &self.config.output_dir.join("feed.xml"),
            &render_feed(&site, &catalog),
        )?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: built.len() + 2,
            articles: built.len(),
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Build one article page: load the body, apply frontmatter overrides,
    /// render, and write `article/<slug>/index.html`.
    fn build_article(
        &self,
        meta: &ArticleMeta,
        store: &ContentStore,
        site: &SiteMeta,
    ) -> Result<BuiltArticle, BuildError> {
        let body = store.load(meta).map_err(|e| BuildError::Content {
            slug: meta.slug.clone(),
            source: e,
        })?;

        let parsed = parse_article(&body).map_err(|e| BuildError::Parse {
            path: store.path_for(meta).display().to_string(),
            message: e.to_string(),
        })?;

        let mut effective = meta.clone();
        if let Some(fm) = &parsed.frontmatter {
            fm.apply(&mut effective);
        }
        if effective.read_time.is_none() {
            effective.read_time = Some(read_time_label(parsed.word_count));
        }

        let view = ArticleView {
            title: effective.title.clone(),
            description: effective.description.clone(),
            date: effective.display_date(),
            read_time: effective.read_time.clone().unwrap_or_default(),
            tags: effective.tags.clone(),
            image: effective.image.clone(),
            content: parsed.html,
            toc: parsed
                .toc
                .iter()
                .map(|e| TocEntry {
                    title: e.title.clone(),
                    id: e.id.clone(),
                    level: e.level,
                })
                .collect(),
        };

        let html = self
            .templates
            .render_article(site, &view)
            .map_err(|e| BuildError::Template(e.to_string()))?;

        let output_path = self
            .config
            .output_dir
            .join("article")
            .join(&effective.slug)
            .join("index.html");
        self.write_file(&output_path, &html)?;

        Ok(BuiltArticle { meta: effective })
    }

    /// Generate CSS and JS assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::Write(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        fs::write(assets_dir.join("main.js"), AssetPipeline::generate_js())
            .map_err(|e| BuildError::Write(e.to_string()))?;

        // Copy configured extra stylesheets
        for style_path in &self.config.styles {
            let source_path = PathBuf::from(style_path);
            if source_path.exists() {
                let filename = source_path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .unwrap_or("style.css");
                let content = fs::read_to_string(&source_path)
                    .map_err(|e| BuildError::Read(format!("{}: {}", style_path, e)))?;
                fs::write(assets_dir.join(filename), content)
                    .map_err(|e| BuildError::Write(e.to_string()))?;
                tracing::info!("Copied stylesheet from {}", style_path);
            } else {
                tracing::warn!("Stylesheet not found: {}", style_path);
            }
        }

        Ok(())
    }

    /// Copy the content directory's images into the output tree.
    fn copy_images(&self) -> Result<(), BuildError> {
        let images_dir = self.config.content_dir.join("images");
        if !images_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(&images_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(&self.config.content_dir).unwrap_or(path);
            let target = self.config.output_dir.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
            }
            fs::copy(path, &target).map_err(|e| BuildError::Write(e.to_string()))?;
        }

        Ok(())
    }

    /// Generate sitemap.xml and robots.txt.
    fn generate_sitemap(&self, catalog: &Catalog) -> Result<(), BuildError> {
        let root = self.config.base_url.trim_end_matches('/');

        let mut urls = vec![format!("  <url>\n    <loc>{}/</loc>\n  </url>", root)];
        urls.extend(catalog.all().iter().map(|meta| {
            format!(
                "  <url>\n    <loc>{}/article/{}/</loc>\n  </url>",
                root, meta.slug
            )
        }));

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), BuildError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
        }
        fs::write(path, contents).map_err(|e| BuildError::Write(e.to_string()))
    }
}
