//! Template engine for rendering the portfolio pages.

use minijinja::{context, Environment};

use folio_content::profile::Profile;
use folio_content::{ArticleMeta, PREVIEW_COUNT};

/// Site-wide metadata shared by every page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SiteMeta {
    /// Site title
    pub title: String,
    /// Base URL, always ending in a slash
    pub base_url: String,
    /// Author shown in the feed and page footer
    pub author: String,
}

/// A blog listing card.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArticleCard {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub read_time: String,
    pub date: String,
    /// Tags in authored order
    pub tags: Vec<String>,
    pub slug: String,
    /// URL of the article page
    pub url: String,
    /// True for entries past the truncated listing; hidden until toggled
    pub overflow: bool,
}

impl ArticleCard {
    /// Build a card from a catalog entry. `position` is the entry's index in
    /// the catalog; entries past the preview window start out hidden.
    pub fn from_meta(meta: &ArticleMeta, base_url: &str, position: usize) -> Self {
        Self {
            title: meta.title.clone(),
            description: meta.description.clone(),
            image: meta.image.clone(),
            read_time: meta.read_time.clone().unwrap_or_default(),
            date: meta.display_date(),
            tags: meta.tags.clone(),
            slug: meta.slug.clone(),
            url: format!("{}article/{}/", base_url, meta.slug),
            overflow: position >= PREVIEW_COUNT,
        }
    }
}

/// A table of contents entry.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TocEntry {
    /// Heading text
    pub title: String,
    /// Anchor ID
    pub id: String,
    /// Heading level (1-6)
    pub level: u8,
}

/// Everything the article template needs.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArticleView {
    pub title: String,
    pub description: String,
    pub date: String,
    pub read_time: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    /// Rendered body HTML
    pub content: String,
    pub toc: Vec<TocEntry>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for (name, source) in [
            ("base.html", BASE_TEMPLATE),
            ("nav.html", NAV_TEMPLATE),
            ("index.html", INDEX_TEMPLATE),
            ("article.html", ARTICLE_TEMPLATE),
            ("not_found.html", NOT_FOUND_TEMPLATE),
        ] {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("built-in template parses");
        }

        Self { env }
    }

    /// Render the index page: every section composed top-to-bottom.
    pub fn render_index(
        &self,
        site: &SiteMeta,
        profile: &Profile,
        posts: &[ArticleCard],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;

        tmpl.render(context! {
            page => "index",
            title => "Home",
            description => &profile.hero.summary,
            site => site,
            base_url => &site.base_url,
            hero => &profile.hero,
            about => &profile.about,
            education => &profile.education,
            certifications => &profile.certifications,
            experience => &profile.experience,
            featured_projects => profile.featured_projects(),
            secondary_projects => profile.secondary_projects(),
            contact => &profile.contact,
            posts => posts,
            has_more => posts.len() > PREVIEW_COUNT,
        })
    }

    /// Render an article detail page.
    pub fn render_article(
        &self,
        site: &SiteMeta,
        article: &ArticleView,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("article.html")?;

        tmpl.render(context! {
            page => "article",
            title => &article.title,
            description => &article.description,
            site => site,
            base_url => &site.base_url,
            article => article,
        })
    }

    /// Render the not-found view with a recovery link back to the listing.
    pub fn render_not_found(&self, site: &SiteMeta) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("not_found.html")?;

        tmpl.render(context! {
            page => "not-found",
            title => "Article Not Found",
            description => "",
            site => site,
            base_url => &site.base_url,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site.title }}</title>
  {% if description %}<meta name="description" content="{{ description }}">
  {% endif %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
  <link rel="alternate" type="application/rss+xml" title="{{ site.title }}" href="{{ base_url }}feed.xml">
</head>
<body data-page="{{ page }}">
  <header class="site-nav">
    {% include "nav.html" %}
  </header>
  <main>
    {% block content %}{% endblock %}
  </main>
  <script src="{{ base_url }}assets/main.js"></script>
</body>
</html>"##;

const NAV_TEMPLATE: &str = r##"<a href="{{ base_url }}#home" class="nav-logo">{{ site.title }}</a>
<nav class="nav-links">
  <a href="{{ base_url }}#home">Home</a>
  <a href="{{ base_url }}#about">About</a>
  <a href="{{ base_url }}#education">Education</a>
  <a href="{{ base_url }}#experience">Experience</a>
  <a href="{{ base_url }}#work">Work</a>
  <a href="{{ base_url }}#blog">Blog</a>
  <a href="{{ base_url }}#contact">Contact</a>
</nav>"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<section id="home" class="hero">
  <h1><span class="accent">{{ hero.name }}</span><br>{{ hero.tagline }}</h1>
  <p class="hero-summary">{{ hero.summary }}</p>
  <div class="hero-actions">
    <a class="button" href="#about">View My Work</a>
    <a class="button outline" href="#contact">Get In Touch</a>
  </div>
</section>

<section id="about" class="section">
  <h2>About <span class="accent">Me</span></h2>
  <div class="about-grid">
    <div class="about-text">
      <h3>{{ about.heading }}</h3>
      {% for paragraph in about.paragraphs %}
      <p>{{ paragraph }}</p>
      {% endfor %}
    </div>
    <div class="card expertise">
      <h4>Core Expertise</h4>
      <dl>
      {% for area in about.expertise %}
        <dt>{{ area.label }}</dt>
        <dd>{{ area.items }}</dd>
      {% endfor %}
      </dl>
    </div>
  </div>
</section>

<section id="education" class="section">
  <h2>Education &amp; <span class="accent">Certifications</span></h2>
  <div class="education-list">
  {% for item in education %}
    <div class="card">
      <span class="badge">{{ item.period }}</span>
      <h4>{{ item.title }}</h4>
      <p class="institution">{{ item.institution }}</p>
      {% if item.grade %}<p class="grade">{{ item.grade }}</p>{% endif %}
      {% if item.description %}<p>{{ item.description }}</p>{% endif %}
    </div>
  {% endfor %}
  </div>
  <h3>Certifications &amp; Continued Learning</h3>
  <div class="certification-grid">
  {% for item in certifications %}
    <div class="card">
      <span class="badge">{{ item.badge }}</span>
      <h4>{{ item.title }}</h4>
      <p class="institution">{{ item.institution }} &middot; {{ item.period }}</p>
      <p>{{ item.description }}</p>
    </div>
  {% endfor %}
  </div>
</section>

<section id="experience" class="section">
  <h2>Professional <span class="accent">Experience</span></h2>
  {% for exp in experience %}
  <div class="card experience-card">
    <div class="experience-head">
      <div>
        <h3>{{ exp.title }}</h3>
        <h4>{{ exp.company }}</h4>
      </div>
      <span class="badge">{{ exp.period }}</span>
    </div>
    {% for detail in exp.details %}
    <p>{{ detail }}</p>
    {% endfor %}
    {% for recognition in exp.recognitions %}
    <p class="recognition">{{ recognition }}</p>
    {% endfor %}
    <div class="tag-list">
      {% for tech in exp.technologies %}<span class="tag">{{ tech }}</span>{% endfor %}
    </div>
  </div>
  {% endfor %}
</section>

<section id="work" class="section">
  <h2>Featured <span class="accent">Projects</span></h2>
  <div class="project-grid featured">
  {% for project in featured_projects %}
    <div class="card project-card">
      {% if project.image %}<img src="{{ base_url }}{{ project.image }}" alt="{{ project.title }}">{% endif %}
      <h3>{{ project.title }}</h3>
      <p>{{ project.description }}</p>
      <div class="tag-list">
        {% for tech in project.technologies %}<span class="tag">{{ tech }}</span>{% endfor %}
      </div>
      <div class="project-links">
        {% if project.live_url %}<a class="button" href="{{ project.live_url }}">Live</a>{% endif %}
        <a class="button outline" href="{{ project.repo_url }}">Source Code</a>
      </div>
    </div>
  {% endfor %}
  </div>
  <div class="project-grid secondary">
  {% for project in secondary_projects %}
    <div class="card project-card">
      <h3>{{ project.title }}</h3>
      <p>{{ project.description }}</p>
      <div class="tag-list">
        {% for tech in project.technologies %}<span class="tag">{{ tech }}</span>{% endfor %}
      </div>
      <div class="project-links">
        {% if project.live_url %}<a class="button" href="{{ project.live_url }}">Live</a>{% endif %}
        <a class="button outline" href="{{ project.repo_url }}">Source Code</a>
      </div>
    </div>
  {% endfor %}
  </div>
</section>

<section id="blog" class="section">
  <h2>Technical <span class="accent">Blog</span></h2>
  <div class="post-grid">
  {% for post in posts %}
    <article id="post-{{ post.slug }}" class="post-card{% if post.overflow %} overflow hidden-post{% endif %}">
      {% if post.image %}<img src="{{ base_url }}{{ post.image }}" alt="{{ post.title }}">{% endif %}
      <div class="post-body">
        <div class="tag-list">
          {% for tag in post.tags %}<span class="tag">{{ tag }}</span>{% endfor %}
        </div>
        <h3><a href="{{ post.url }}">{{ post.title }}</a></h3>
        <p>{{ post.description }}</p>
        <div class="post-meta">
          <span>{{ post.date }}</span>
          {% if post.read_time %}<span>{{ post.read_time }}</span>{% endif %}
          <a class="read-more" href="{{ post.url }}">Read More</a>
        </div>
      </div>
    </article>
  {% endfor %}
  </div>
  {% if has_more %}
  <div class="post-toggle">
    <button id="toggle-posts" class="button outline" type="button">View All Articles</button>
  </div>
  {% endif %}
</section>

<section id="contact" class="section">
  <h2>Get <span class="accent">In Touch</span></h2>
  <p>{{ contact.blurb }}</p>
  <ul class="contact-list">
    <li><strong>Email</strong> <a href="mailto:{{ contact.email }}">{{ contact.email }}</a></li>
    <li><strong>Location</strong> {{ contact.location }}</li>
  </ul>
  <div class="social-links">
    {% for social in contact.socials %}
    <a class="button outline" href="{{ social.url }}">{{ social.label }}</a>
    {% endfor %}
  </div>
</section>
{% endblock %}"##;

const ARTICLE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="article">
  <header class="article-header">
    {% if article.image %}<img class="article-image" src="{{ base_url }}{{ article.image }}" alt="{{ article.title }}">
    {% endif %}<h1>{{ article.title }}</h1>
    <p class="article-description">{{ article.description }}</p>
    <div class="article-meta">
      <span>{{ site.author }}</span>
      <span>{{ article.date }}</span>
      <span>{{ article.read_time }}</span>
    </div>
    <div class="tag-list">
      {% for tag in article.tags %}<span class="tag">{{ tag }}</span>{% endfor %}
    </div>
  </header>

  <div class="article-body">
    {{ article.content | safe }}
  </div>

  <footer class="article-footer">
    <a class="button outline" href="{{ base_url }}#blog">&larr; Back to All Articles</a>
  </footer>
</article>

{% if article.toc %}
<aside class="toc">
  <h2>On this page</h2>
  <ul>
  {% for entry in article.toc %}
    <li class="toc-level-{{ entry.level }}">
      <a href="#{{ entry.id }}">{{ entry.title }}</a>
    </li>
  {% endfor %}
  </ul>
</aside>
{% endif %}
{% endblock %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<div class="not-found">
  <h1>Article Not Found</h1>
  <p>The article you're looking for doesn't exist.</p>
  <a class="button outline" href="{{ base_url }}#blog">&larr; Back to Blog</a>
</div>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteMeta {
        SiteMeta {
            title: "Jordan Reeve".to_string(),
            base_url: "/".to_string(),
            author: "Jordan Reeve".to_string(),
        }
    }

    fn card(title: &str, slug: &str, position: usize) -> ArticleCard {
        ArticleCard {
            title: title.to_string(),
            description: format!("About {}", title),
            image: None,
            read_time: "4 min read".to_string(),
            date: "Jan 14, 2021".to_string(),
            tags: vec!["Kafka".to_string(), "Distributed Systems".to_string()],
            slug: slug.to_string(),
            url: format!("/article/{}/", slug),
            overflow: position >= PREVIEW_COUNT,
        }
    }

    #[test]
    fn index_composes_all_sections() {
        let engine = TemplateEngine::new();
        let profile = Profile::standard();

        let html = engine
            .render_index(&site(), &profile, &[card("Intro to Kafka", "intro-to-kafka", 0)])
            .unwrap();

        for anchor in ["id=\"home\"", "id=\"about\"", "id=\"education\"",
                       "id=\"experience\"", "id=\"work\"", "id=\"blog\"", "id=\"contact\""] {
            assert!(html.contains(anchor), "missing section {}", anchor);
        }
        assert!(html.contains(&profile.hero.name));
        assert!(html.contains("Intro to Kafka"));
        assert!(html.contains("/article/intro-to-kafka/"));
    }

    #[test]
    fn listing_hides_entries_past_the_preview_window() {
        let engine = TemplateEngine::new();
        let profile = Profile::standard();

        let posts: Vec<ArticleCard> = (0..5)
            .map(|i| card(&format!("Post {}", i), &format!("post-{}", i), i))
            .collect();

        let html = engine.render_index(&site(), &profile, &posts).unwrap();

        assert_eq!(html.matches("hidden-post").count(), 2);
        assert!(html.contains("toggle-posts"));
    }

    #[test]
    fn short_listing_has_no_toggle() {
        let engine = TemplateEngine::new();
        let profile = Profile::standard();

        let posts: Vec<ArticleCard> = (0..2)
            .map(|i| card(&format!("Post {}", i), &format!("post-{}", i), i))
            .collect();

        let html = engine.render_index(&site(), &profile, &posts).unwrap();

        assert!(!html.contains("toggle-posts"));
    }

    #[test]
    fn article_page_renders_metadata_and_body() {
        let engine = TemplateEngine::new();

        let article = ArticleView {
            title: "Intro to Kafka".to_string(),
            description: "First of the series".to_string(),
            date: "Jan 14, 2021".to_string(),
            read_time: "4 min read".to_string(),
            tags: vec!["Zeta".to_string(), "Alpha".to_string()],
            image: None,
            content: "<p>Kafka is a distributed log.</p>".to_string(),
            toc: vec![TocEntry {
                title: "Intro to Kafka".to_string(),
                id: "intro-to-kafka".to_string(),
                level: 1,
            }],
        };

        let html = engine.render_article(&site(), &article).unwrap();

        assert!(html.contains("<title>Intro to Kafka - Jordan Reeve</title>"));
        assert!(html.contains("First of the series"));
        assert!(html.contains("<p>Kafka is a distributed log.</p>"));
        assert!(html.contains("Back to All Articles"));
        assert!(html.contains("data-page=\"article\""));

        // Tags in authored order
        let zeta = html.find("Zeta").unwrap();
        let alpha = html.find("Alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn not_found_offers_recovery_link() {
        let engine = TemplateEngine::new();

        let html = engine.render_not_found(&site()).unwrap();

        assert!(html.contains("Article Not Found"));
        assert!(html.contains("href=\"/#blog\""));
    }

    #[test]
    fn card_builds_url_and_overflow_flag() {
        let meta = ArticleMeta {
            title: "Intro to Kafka".to_string(),
            description: String::new(),
            image: None,
            read_time: Some("4 min read".to_string()),
            date: "2021-01-14".to_string(),
            tags: vec![],
            slug: "intro-to-kafka".to_string(),
            content_file: "intro-to-kafka.md".to_string(),
        };

        let visible = ArticleCard::from_meta(&meta, "/", 2);
        let hidden = ArticleCard::from_meta(&meta, "/", 3);

        assert_eq!(visible.url, "/article/intro-to-kafka/");
        assert!(!visible.overflow);
        assert!(hidden.overflow);
    }
}
