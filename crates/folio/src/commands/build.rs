//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_site::{BuildConfig, SiteBuilder};

use crate::config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = config::load(config_path)?;

    let build_config = BuildConfig {
        content_dir: PathBuf::from(&file_config.content.dir),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.build.output)),
        base_url: file_config.site.base_url,
        title: file_config.site.title,
        author: file_config.site.author,
        minify: minify.unwrap_or(file_config.build.minify),
        styles: file_config.build.styles,
    };

    let result = SiteBuilder::new(build_config).build().await?;

    tracing::info!(
        "Built {} pages ({} articles) in {}ms",
        result.pages,
        result.articles,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
