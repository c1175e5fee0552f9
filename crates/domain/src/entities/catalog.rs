//! Home screen catalog: hero banner and content rows

use serde::{Deserialize, Serialize};

use crate::value_objects::Link;

/// How a row lays out its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowLayout {
    /// Horizontally scrolling cards with hover previews
    #[default]
    Standard,
    /// A few large tiles with visibility-driven looping previews
    Spotlight,
}

impl RowLayout {
    pub fn is_spotlight(self) -> bool {
        matches!(self, Self::Spotlight)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: String,
    /// Headline (spotlight) or card title (standard)
    pub name: String,
    pub artwork_url: Option<String>,
    pub preview_video_url: Option<String>,
    pub description: Option<String>,
    /// Short caption under the title, e.g. a year or a tech stack
    pub meta: Option<String>,
    pub link: Option<Link>,
}

impl CatalogItem {
    pub fn has_link(&self) -> bool {
        self.link.is_some()
    }

    /// Accessible label for linked standard cards.
    pub fn aria_label(&self) -> Option<String> {
        self.link.as_ref().map(|_| {
            format!(
                "{} ({})",
                self.name,
                self.meta.as_deref().unwrap_or("open link")
            )
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub id: String,
    pub title: String,
    pub layout: RowLayout,
    pub items: Vec<CatalogItem>,
}

impl CatalogRow {
    /// CSS classes for the row section.
    pub fn class_names(&self) -> String {
        let mut classes = vec!["catalog-row".to_string()];
        if self.layout.is_spotlight() {
            classes.push("spotlight-row".to_string());
        }
        classes.push(format!("row-{}", self.id));
        classes.join(" ")
    }
}

/// A labelled call-to-action on the hero banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroAction {
    pub label: String,
    pub link: Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub video_url: String,
    pub fallback_artwork_url: Option<String>,
    pub tags: Vec<String>,
    pub primary_action: Option<HeroAction>,
    pub secondary_action: Option<HeroAction>,
}

impl Hero {
    /// Tags joined for the meta line, `None` when there are none.
    pub fn tag_line(&self) -> Option<String> {
        if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.join(" • "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(link: Option<Link>, meta: Option<&str>) -> CatalogItem {
        CatalogItem {
            id: "card".into(),
            name: "AI Tutor".into(),
            artwork_url: None,
            preview_video_url: None,
            description: None,
            meta: meta.map(str::to_string),
            link,
        }
    }

    #[test]
    fn test_aria_label_only_for_linked_items() {
        assert_eq!(item(None, None).aria_label(), None);
        assert_eq!(
            item(Link::classify("https://x.test"), None).aria_label(),
            Some("AI Tutor (open link)".to_string())
        );
        assert_eq!(
            item(Link::classify("https://x.test"), Some("2024")).aria_label(),
            Some("AI Tutor (2024)".to_string())
        );
    }

    #[test]
    fn test_row_class_names() {
        let mut row = CatalogRow {
            id: "about".into(),
            title: "Top picks".into(),
            layout: RowLayout::Spotlight,
            items: vec![],
        };
        assert_eq!(row.class_names(), "catalog-row spotlight-row row-about");
        row.layout = RowLayout::Standard;
        assert_eq!(row.class_names(), "catalog-row row-about");
    }

    #[test]
    fn test_layout_deserializes_snake_case() {
        let layout: RowLayout = serde_json::from_str("\"spotlight\"").expect("parse");
        assert_eq!(layout, RowLayout::Spotlight);
        assert!(serde_json::from_str::<RowLayout>("\"grid\"").is_err());
    }

    #[test]
    fn test_hero_tag_line() {
        let mut hero = Hero {
            title: "t".into(),
            subtitle: None,
            description: "d".into(),
            video_url: "v".into(),
            fallback_artwork_url: None,
            tags: vec![],
            primary_action: None,
            secondary_action: None,
        };
        assert_eq!(hero.tag_line(), None);
        hero.tags = vec!["Rust".into(), "AI".into()];
        assert_eq!(hero.tag_line(), Some("Rust • AI".into()));
    }
}
