//! Development server with live reload for folio sites.
//!
//! Serves the portfolio index and slug-keyed article pages straight from the
//! content directory, with file watching and WebSocket-based reload.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{ReloadHub, ReloadMessage};
