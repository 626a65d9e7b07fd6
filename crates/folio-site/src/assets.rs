//! Asset pipeline for CSS and JavaScript generation.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the main JavaScript file.
    ///
    /// This carries the only client-side state the site has: the blog
    /// listing's show-all toggle and scroll-to-top on article navigation.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* Folio portfolio theme */

:root {
  --background: #0d1117;
  --foreground: #e6edf3;
  --muted: #161b22;
  --muted-foreground: #8b949e;
  --card: #161b22;
  --border: #30363d;
  --primary: #58a6ff;
  --primary-hover: #79b8ff;
  --accent: #d2a8ff;
  --success: #3fb950;
  --radius: 0.5rem;
  --content-max-width: 72rem;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

/* Fixed navigation header */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 1.5rem;
  background: color-mix(in srgb, var(--background) 85%, transparent);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
}

.nav-logo {
  font-weight: 700;
  font-size: 1.125rem;
  color: var(--foreground);
  text-decoration: none;
}

.nav-links a {
  margin-left: 1rem;
  color: var(--muted-foreground);
  text-decoration: none;
  font-size: 0.9rem;
}

.nav-links a:hover {
  color: var(--primary);
}

main {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 5rem 1.5rem 3rem;
}

.accent {
  color: var(--primary);
}

/* Hero */
.hero {
  min-height: 70vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
}

.hero h1 {
  font-size: 3rem;
  margin-bottom: 1.5rem;
}

.hero-summary {
  font-size: 1.25rem;
  color: var(--muted-foreground);
  max-width: 42rem;
  margin-bottom: 2rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
}

/* Sections */
.section {
  padding: 4rem 0;
}

.section h2 {
  font-size: 2.25rem;
  text-align: center;
  margin-bottom: 3rem;
}

.section h3 {
  margin: 1.5rem 0 1rem;
  color: var(--primary);
}

.section p {
  color: var(--muted-foreground);
  margin-bottom: 1rem;
}

/* Cards */
.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  margin-bottom: 1.5rem;
}

.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem;
}

.expertise dt {
  font-weight: 600;
  color: var(--accent);
  margin-top: 0.75rem;
}

.expertise dd {
  color: var(--muted-foreground);
  font-size: 0.9rem;
}

.education-list,
.certification-grid {
  display: grid;
  gap: 1rem;
}

.certification-grid {
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
}

.institution {
  color: var(--accent);
  font-weight: 500;
}

.grade,
.recognition {
  color: var(--success);
  font-size: 0.9rem;
}

.experience-head {
  display: flex;
  justify-content: space-between;
  align-items: start;
  gap: 1rem;
  margin-bottom: 1rem;
}

.experience-head h4 {
  color: var(--accent);
  font-weight: 500;
}

/* Badges and tags */
.badge {
  display: inline-block;
  padding: 0.125rem 0.625rem;
  font-size: 0.75rem;
  color: var(--primary);
  border: 1px solid var(--border);
  border-radius: 999px;
  margin-bottom: 0.5rem;
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin: 0.75rem 0;
}

.tag {
  padding: 0.125rem 0.5rem;
  font-size: 0.75rem;
  background: color-mix(in srgb, var(--primary) 12%, transparent);
  color: var(--primary);
  border-radius: 999px;
}

/* Projects and posts */
.project-grid,
.post-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: 1.5rem;
}

.project-card img,
.post-card img {
  width: 100%;
  height: 10rem;
  object-fit: cover;
  border-radius: var(--radius);
  margin-bottom: 1rem;
}

.post-card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  padding: 1.25rem;
}

.post-card h3 a {
  color: var(--primary);
  text-decoration: none;
}

.post-card.hidden-post {
  display: none;
}

.post-meta {
  display: flex;
  gap: 1rem;
  align-items: center;
  font-size: 0.8rem;
  color: var(--muted-foreground);
}

.post-toggle {
  text-align: center;
  margin-top: 2rem;
}

.read-more {
  margin-left: auto;
  color: var(--primary);
  text-decoration: none;
}

/* Buttons */
.button {
  display: inline-block;
  padding: 0.5rem 1.25rem;
  font-size: 0.9rem;
  font-weight: 500;
  background: var(--primary);
  color: var(--background);
  border: 1px solid var(--primary);
  border-radius: var(--radius);
  text-decoration: none;
  cursor: pointer;
}

.button.outline {
  background: transparent;
  color: var(--primary);
}

.button:hover {
  background: var(--primary-hover);
  color: var(--background);
}

/* Contact */
.contact-list {
  list-style: none;
  margin: 1.5rem 0;
}

.contact-list li {
  margin-bottom: 0.75rem;
  color: var(--muted-foreground);
}

.contact-list a {
  color: var(--primary);
}

.social-links {
  display: flex;
  gap: 1rem;
}

/* Article page */
.article {
  max-width: 48rem;
  margin: 0 auto;
}

.article-header h1 {
  font-size: 2.5rem;
  margin-bottom: 1rem;
}

.article-image {
  width: 100%;
  max-height: 20rem;
  object-fit: cover;
  border-radius: var(--radius);
  margin-bottom: 1.5rem;
}

.article-description {
  color: var(--muted-foreground);
  font-size: 1.125rem;
}

.article-meta {
  display: flex;
  gap: 1.5rem;
  color: var(--muted-foreground);
  font-size: 0.875rem;
  margin: 1rem 0;
}

.article-body {
  margin: 2rem 0;
}

.article-body h1,
.article-body h2,
.article-body h3 {
  margin: 2rem 0 1rem;
}

.article-body p,
.article-body li {
  color: var(--foreground);
  margin-bottom: 1rem;
}

.article-body pre {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1rem;
  overflow-x: auto;
  font-size: 0.875rem;
  margin-bottom: 1rem;
}

.article-body code {
  font-family: ui-monospace, monospace;
  font-size: 0.875em;
}

.article-body table {
  border-collapse: collapse;
  margin-bottom: 1rem;
}

.article-body th,
.article-body td {
  border: 1px solid var(--border);
  padding: 0.5rem 0.75rem;
}

.article-footer {
  border-top: 1px solid var(--border);
  padding-top: 2rem;
  margin-top: 3rem;
}

/* Table of contents */
.toc {
  margin-top: 3rem;
}

.toc ul {
  list-style: none;
}

.toc a {
  color: var(--muted-foreground);
  text-decoration: none;
  font-size: 0.875rem;
}

.toc-level-3 {
  margin-left: 1rem;
}

/* Not found */
.not-found {
  min-height: 60vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  gap: 1rem;
}

@media (max-width: 48rem) {
  .about-grid {
    grid-template-columns: 1fr;
  }

  .hero h1 {
    font-size: 2rem;
  }

  .nav-links a {
    margin-left: 0.5rem;
    font-size: 0.8rem;
  }
}
"#;

const DEFAULT_JS: &str = r#"(function () {
  'use strict';

  // Article pages scroll to the top on every navigation.
  if (document.body.dataset.page === 'article') {
    window.scrollTo(0, 0);
  }

  // Show-all toggle for the blog listing. Pure local boolean state;
  // toggling twice restores the truncated view.
  var toggle = document.getElementById('toggle-posts');
  if (toggle) {
    var showAll = false;
    toggle.addEventListener('click', function () {
      showAll = !showAll;
      document.querySelectorAll('.post-card.overflow').forEach(function (card) {
        card.classList.toggle('hidden-post', !showAll);
      });
      toggle.textContent = showAll ? 'Show Less' : 'View All Articles';
    });
  }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_theme_css() {
        let css = AssetPipeline::generate_css();

        assert!(css.contains("scroll-behavior: smooth"));
        assert!(css.contains(".hidden-post"));
    }

    #[test]
    fn minifies_css() {
        let css = "body {  color : red ; }";

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(minified.len() < css.len());
        assert!(minified.contains("red"));
    }

    #[test]
    fn client_js_carries_toggle_and_scroll_behavior() {
        let js = AssetPipeline::generate_js();

        assert!(js.contains("toggle-posts"));
        assert!(js.contains("window.scrollTo(0, 0)"));
        assert!(js.contains("showAll = !showAll"));
    }
}
