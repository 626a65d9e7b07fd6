//! Development server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use folio_content::profile::Profile;
use folio_content::{parse_article, read_time_label, Catalog, ContentError, ContentStore};
use folio_site::{render_feed, ArticleCard, ArticleView, AssetPipeline, SiteMeta, TemplateEngine, TocEntry};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{reload_client_script, ReloadHub, ReloadMessage};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Directory containing articles.json, Markdown bodies and images
    pub content_dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Site title
    pub title: String,

    /// Author shown on article pages
    pub author: String,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
            title: "Portfolio".to_string(),
            author: "Author".to_string(),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}: {1}")]
    InvalidAddress(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
struct ServerState {
    config: DevServerConfig,
    reload: ReloadHub,
    templates: TemplateEngine,
    profile: Profile,
}

impl ServerState {
    fn site(&self) -> SiteMeta {
        SiteMeta {
            title: self.config.title.clone(),
            base_url: "/".to_string(),
            author: self.config.author.clone(),
        }
    }
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let raw_addr = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = raw_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ServerError::InvalidAddress(raw_addr, e.to_string()))?;

        let state = Arc::new(ServerState {
            config: self.config.clone(),
            reload: ReloadHub::new(),
            templates: TemplateEngine::new(),
            profile: Profile::standard(),
        });

        // Watch the content directory for changes
        let (watcher, mut rx) = FileWatcher::new(&[self.config.content_dir.clone()])
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event);
            }
            // Keep watcher alive
            drop(watcher);
        });

        let images_dir = self.config.content_dir.join("images");
        let app = Router::new()
            .route("/", get(index_handler))
            .route("/article/{slug}", get(article_handler))
            .route("/article/{slug}/", get(article_handler))
            .route("/assets/main.css", get(css_handler))
            .route("/assets/main.js", get(js_handler))
            .route("/feed.xml", get(feed_handler))
            .route("/__reload", get(ws_handler))
            .route("/__reload.js", get(reload_script_handler))
            .nest_service("/images", ServeDir::new(images_dir))
            .fallback(not_found_handler)
            .with_state(state);

        tracing::info!("Starting dev server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// React to content changes: push a targeted article update when possible,
/// otherwise a full reload.
fn handle_watch_event(state: &Arc<ServerState>, event: WatchEvent) {
    match event {
        WatchEvent::ArticleModified(path) => {
            tracing::info!("Article modified: {}", path.display());

            let changed = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            let catalog = Catalog::load(&state.config.content_dir.join("articles.json"));

            let entry = catalog.as_ref().ok().and_then(|c| {
                c.all()
                    .iter()
                    .find(|meta| {
                        std::path::Path::new(&meta.content_file)
                            .file_name()
                            .and_then(|n| n.to_str())
                            == Some(changed)
                    })
                    .cloned()
            });

            match entry {
                Some(meta) => {
                    let store = ContentStore::new(&state.config.content_dir);
                    let parsed = store
                        .load(&meta)
                        .ok()
                        .and_then(|body| parse_article(&body).ok());

                    match parsed {
                        Some(parsed) => state.reload.send(ReloadMessage::UpdateArticle {
                            slug: meta.slug,
                            html: parsed.html,
                        }),
                        None => state.reload.send(ReloadMessage::Reload),
                    }
                }
                None => state.reload.send(ReloadMessage::Reload),
            }
        }

        WatchEvent::CatalogChanged
        | WatchEvent::Created(_)
        | WatchEvent::Deleted(_)
        | WatchEvent::Modified(_) => {
            state.reload.send(ReloadMessage::Reload);
        }
    }
}

/// Render the index page from the live catalog and profile.
fn render_index_page(state: &ServerState) -> (StatusCode, String) {
    let site = state.site();

    let catalog = match Catalog::load(&state.config.content_dir.join("articles.json")) {
        Ok(catalog) => catalog,
        Err(e) => return error_page(&e.to_string()),
    };

    let posts: Vec<ArticleCard> = catalog
        .all()
        .iter()
        .enumerate()
        .map(|(i, meta)| ArticleCard::from_meta(meta, &site.base_url, i))
        .collect();

    match state.templates.render_index(&site, &state.profile, &posts) {
        Ok(html) => (StatusCode::OK, with_reload_script(html)),
        Err(e) => error_page(&e.to_string()),
    }
}

/// Render an article page for a slug. Unknown slugs and missing bodies get
/// the not-found view; a read failure (after the retry) is a server error.
fn render_article_page(state: &ServerState, slug: &str) -> (StatusCode, String) {
    let site = state.site();

    let catalog = match Catalog::load(&state.config.content_dir.join("articles.json")) {
        Ok(catalog) => catalog,
        Err(e) => return error_page(&e.to_string()),
    };

    let Some(meta) = catalog.get(slug) else {
        return not_found_page(state);
    };

    let store = ContentStore::new(&state.config.content_dir);
    let body = match store.load(meta) {
        Ok(body) => body,
        Err(ContentError::Missing(path)) => {
            tracing::warn!("Body for '{}' missing: {}", slug, path.display());
            return not_found_page(state);
        }
        Err(e) => return error_page(&e.to_string()),
    };

    let parsed = match parse_article(&body) {
        Ok(parsed) => parsed,
        Err(e) => return error_page(&e.to_string()),
    };

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

    match state.templates.render_article(&site, &view) {
        Ok(html) => (StatusCode::OK, with_reload_script(html)),
        Err(e) => error_page(&e.to_string()),
    }
}

fn not_found_page(state: &ServerState) -> (StatusCode, String) {
    match state.templates.render_not_found(&state.site()) {
        Ok(html) => (StatusCode::NOT_FOUND, with_reload_script(html)),
        Err(e) => error_page(&e.to_string()),
    }
}

fn error_page(message: &str) -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("<h1>Server error</h1><pre>{}</pre>", message),
    )
}

/// Inject the live-reload client into a rendered page.
fn with_reload_script(html: String) -> String {
    html.replace(
        "</body>",
        "<script src=\"/__reload.js\"></script>\n</body>",
    )
}

async fn index_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let (status, html) = render_index_page(&state);
    (status, Html(html))
}

async fn article_handler(
    Path(slug): Path<String>,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let (status, html) = render_article_page(&state, &slug);
    (status, Html(html))
}

async fn not_found_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let (status, html) = not_found_page(&state);
    (status, Html(html))
}

async fn css_handler() -> impl IntoResponse {
    (
        [("content-type", "text/css")],
        AssetPipeline::generate_css(),
    )
}

async fn js_handler() -> impl IntoResponse {
    (
        [("content-type", "application/javascript")],
        AssetPipeline::generate_js(),
    )
}

async fn feed_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    match Catalog::load(&state.config.content_dir.join("articles.json")) {
        Ok(catalog) => (
            [("content-type", "application/rss+xml")],
            render_feed(&state.site(), &catalog),
        )
            .into_response(),
        Err(e) => {
            let (status, html) = error_page(&e.to_string());
            (status, Html(html)).into_response()
        }
    }
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Handle a WebSocket connection.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.reload.subscribe();

    // Send connected message
    let Ok(msg) = serde_json::to_string(&ReloadMessage::Connected) else {
        return;
    };
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    // Forward reload messages to the client
    while let Ok(reload_msg) = rx.recv().await {
        let Ok(json) = serde_json::to_string(&reload_msg) else {
            continue;
        };
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the reload client script.
async fn reload_script_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let ws_url = format!(
        "ws://{}:{}/__reload",
        state.config.host, state.config.port
    );
    (
        [("content-type", "application/javascript")],
        reload_client_script(&ws_url),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn state_with_content(content_dir: PathBuf) -> Arc<ServerState> {
        Arc::new(ServerState {
            config: DevServerConfig {
                content_dir,
                open: false,
                ..Default::default()
            },
            reload: ReloadHub::new(),
            templates: TemplateEngine::new(),
            profile: Profile::standard(),
        })
    }

    fn seed_content(dir: &std::path::Path) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join("articles.json"),
            r#"[{"title": "Intro to Kafka", "description": "First of the series",
                 "date": "2021-01-14", "tags": ["Kafka"],
                 "slug": "intro-to-kafka", "contentFile": "intro-to-kafka.md"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("intro-to-kafka.md"),
            "# Intro to Kafka\n\nKafka is a distributed log.",
        )
        .unwrap();
    }

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
    }

    #[test]
    fn known_slug_renders_article() {
        let temp = tempdir().unwrap();
        seed_content(temp.path());
        let state = state_with_content(temp.path().to_path_buf());

        let (status, html) = render_article_page(&state, "intro-to-kafka");

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Intro to Kafka"));
        assert!(html.contains("First of the series"));
        assert!(html.contains("Kafka is a distributed log."));
        assert!(html.contains("__reload.js"));
    }

    #[test]
    fn unknown_slug_renders_not_found_with_recovery_link() {
        let temp = tempdir().unwrap();
        seed_content(temp.path());
        let state = state_with_content(temp.path().to_path_buf());

        let (status, html) = render_article_page(&state, "does-not-exist");

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Article Not Found"));
        assert!(html.contains("#blog"));
    }

    #[test]
    fn missing_body_renders_not_found() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path()).unwrap();
        fs::write(
            temp.path().join("articles.json"),
            r#"[{"title": "A", "date": "2021-01-14", "slug": "a", "contentFile": "gone.md"}]"#,
        )
        .unwrap();
        let state = state_with_content(temp.path().to_path_buf());

        let (status, html) = render_article_page(&state, "a");

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Article Not Found"));
    }

    #[test]
    fn index_lists_catalog_entries() {
        let temp = tempdir().unwrap();
        seed_content(temp.path());
        let state = state_with_content(temp.path().to_path_buf());

        let (status, html) = render_index_page(&state);

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Intro to Kafka"));
        assert!(html.contains("/article/intro-to-kafka/"));
    }
}
