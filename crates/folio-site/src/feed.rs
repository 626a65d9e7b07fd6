//! RSS feed generation for the blog listing.

use chrono::NaiveDate;
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder};

use folio_content::{ArticleMeta, Catalog};

use crate::templates::SiteMeta;

/// Render the catalog as an RSS 2.0 channel, entries in authoring order.
pub fn render_feed(site: &SiteMeta, catalog: &Catalog) -> String {
    let items: Vec<Item> = catalog
        .all()
        .iter()
        .map(|meta| feed_item(site, meta))
        .collect();

    let channel = ChannelBuilder::default()
        .title(site.title.clone())
        .link(site.base_url.clone())
        .description(format!("Articles by {}", site.author))
        .items(items)
        .build();

    channel.to_string()
}

fn feed_item(site: &SiteMeta, meta: &ArticleMeta) -> Item {
    let url = format!("{}article/{}/", site.base_url, meta.slug);

    ItemBuilder::default()
        .title(Some(meta.title.clone()))
        .link(Some(url.clone()))
        .description(Some(meta.description.clone()))
        .guid(Some(GuidBuilder::default().value(url).permalink(true).build()))
        .pub_date(meta.published().and_then(rfc2822))
        .build()
}

fn rfc2822(date: NaiveDate) -> Option<String> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().to_rfc2822())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteMeta {
        SiteMeta {
            title: "Jordan Reeve".to_string(),
            base_url: "https://reeve.dev/".to_string(),
            author: "Jordan Reeve".to_string(),
        }
    }

    #[test]
    fn feed_lists_every_article_in_order() {
        let catalog = Catalog::from_json(
            r#"[
                {"title": "Intro to Kafka", "description": "First of the series",
                 "date": "2021-01-14", "slug": "intro-to-kafka", "contentFile": "intro-to-kafka.md"},
                {"title": "Kafka Producers", "date": "2021-01-14",
                 "slug": "kafka-producers", "contentFile": "kafka-producers.md"}
            ]"#,
        )
        .unwrap();

        let xml = render_feed(&site(), &catalog);

        assert!(xml.contains("<title>Jordan Reeve</title>"));
        assert!(xml.contains("https://reeve.dev/article/intro-to-kafka/"));

        let first = xml.find("Intro to Kafka").unwrap();
        let second = xml.find("Kafka Producers").unwrap();
        assert!(first < second);
    }

    #[test]
    fn items_carry_rfc2822_dates() {
        let catalog = Catalog::from_json(
            r#"[{"title": "A", "date": "2021-01-14", "slug": "a", "contentFile": "a.md"}]"#,
        )
        .unwrap();

        let xml = render_feed(&site(), &catalog);

        assert!(xml.contains("14 Jan 2021"));
    }
}
