//! Development server command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use folio_server::{DevServer, DevServerConfig};

use crate::config;

/// Run the dev server.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting development server on port {}", port);

    let file_config = config::load(config_path)?;

    let server_config = DevServerConfig {
        content_dir: PathBuf::from(&file_config.content.dir),
        port,
        open,
        title: file_config.site.title,
        author: file_config.site.author,
        ..Default::default()
    };

    DevServer::new(server_config).start().await?;

    Ok(())
}
