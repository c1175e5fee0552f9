//! Header navigation entries and the derived quick-links footer

use crate::value_objects::Link;

/// A leaf navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub link: Link,
}

/// A header navigation entry: either a direct link or a dropdown group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link(NavLink),
    Group { label: String, children: Vec<NavLink> },
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Link(link) => &link.label,
            Self::Group { label, .. } => label,
        }
    }
}

/// Footer quick links: direct links keep their target, groups collapse to
/// their first child's target, empty groups are dropped.
pub fn quick_links(items: &[NavItem]) -> Vec<NavLink> {
    items
        .iter()
        .filter_map(|item| match item {
            NavItem::Link(link) => Some(link.clone()),
            NavItem::Group { label, children } => children.first().map(|first| NavLink {
                label: label.clone(),
                link: first.link.clone(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(label: &str, target: &str) -> NavLink {
        NavLink {
            label: label.into(),
            link: Link::classify(target).expect("non-blank target"),
        }
    }

    #[test]
    fn test_quick_links_flatten_groups_to_first_child() {
        let items = vec![
            NavItem::Link(leaf("Resume", "https://cdn.test/resume.pdf")),
            NavItem::Group {
                label: "Contact".into(),
                children: vec![leaf("Mail", "mailto:a@b.c"), leaf("Call", "tel:123")],
            },
        ];

        let links = quick_links(&items);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].label, "Resume");
        assert_eq!(links[1].label, "Contact");
        assert_eq!(links[1].link, Link::Mail("mailto:a@b.c".into()));
    }

    #[test]
    fn test_quick_links_drop_empty_groups() {
        let items = vec![NavItem::Group {
            label: "Empty".into(),
            children: vec![],
        }];
        assert!(quick_links(&items).is_empty());
    }

    #[test]
    fn test_label() {
        assert_eq!(NavItem::Link(leaf("LOR", "https://x.test")).label(), "LOR");
    }
}
