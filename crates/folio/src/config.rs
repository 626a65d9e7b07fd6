//! Configuration file structure (site.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub site: SiteConfig,
    pub content: ContentConfig,
    pub build: BuildSettings,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            content: ContentConfig::default(),
            build: BuildSettings::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub author: String,
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: "Author".to_string(),
            base_url: "/".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    pub output: String,
    pub minify: bool,
    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: "dist".to_string(),
            minify: true,
            styles: vec![],
        }
    }
}

/// Load configuration from the given path if it exists.
///
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load(Path::new("/definitely/not/here/site.toml")).unwrap();

        assert_eq!(config.site.title, "Portfolio");
        assert_eq!(config.content.dir, "content");
        assert_eq!(config.build.output, "dist");
        assert!(config.build.minify);
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let parsed: ConfigFile = toml::from_str(
            r#"
            [site]
            title = "Jordan Reeve"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.site.title, "Jordan Reeve");
        assert_eq!(parsed.site.base_url, "/");
        assert_eq!(parsed.content.dir, "content");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "not [ valid toml").unwrap();

        assert!(load(&path).is_err());
    }
}
