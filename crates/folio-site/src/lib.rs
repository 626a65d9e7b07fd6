//! Static site builder for folio.
//!
//! Renders the portfolio index (all sections composed top-to-bottom) and one
//! page per catalog article into a directory of plain HTML, CSS and JS.

pub mod assets;
pub mod builder;
pub mod feed;
pub mod templates;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use feed::render_feed;
pub use templates::{ArticleCard, ArticleView, SiteMeta, TemplateEngine, TocEntry};
