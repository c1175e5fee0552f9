//! Detail route table
//!
//! Static, slug-keyed mapping to the title and embedded document of each
//! detail page. Lookups are case-sensitive and return `None` for unknown
//! slugs; callers redirect home in that case.

use std::collections::HashMap;

use crate::error::SiteError;

/// Path prefix shared by every detail route.
pub const DETAILS_PREFIX: &str = "/details/";

/// Build the in-app path for a detail slug.
pub fn path_for(slug: &str) -> String {
    format!("{DETAILS_PREFIX}{slug}")
}

/// Extract the slug from a `/details/<slug>` path.
///
/// Returns `None` for other paths and for nested or empty slugs.
pub fn slug_from_path(path: &str) -> Option<&str> {
    let slug = path.strip_prefix(DETAILS_PREFIX)?;
    if slug.is_empty() || slug.contains('/') {
        return None;
    }
    Some(slug)
}

/// One detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub slug: String,
    pub title: String,
    /// Resolved URL of the static HTML document shown in the frame
    pub document_url: String,
}

impl RouteEntry {
    pub fn path(&self) -> String {
        path_for(&self.slug)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: HashMap<String, RouteEntry>,
    /// Manifest order, for stable iteration
    order: Vec<String>,
}

impl RouteTable {
    /// Build a table, rejecting empty or duplicate slugs.
    pub fn new(entries: impl IntoIterator<Item = RouteEntry>) -> Result<Self, SiteError> {
        let mut table = Self::default();
        for entry in entries {
            if entry.slug.trim().is_empty() || entry.slug.contains('/') {
                return Err(SiteError::validation(format!(
                    "route slug must be a single non-empty path segment: {:?}",
                    entry.slug
                )));
            }
            if table.entries.contains_key(&entry.slug) {
                return Err(SiteError::duplicate("route", entry.slug));
            }
            table.order.push(entry.slug.clone());
            table.entries.insert(entry.slug.clone(), entry);
        }
        Ok(table)
    }

    pub fn lookup(&self, slug: &str) -> Option<&RouteEntry> {
        self.entries.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.order.iter().filter_map(|slug| self.entries.get(slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slug: &str, title: &str) -> RouteEntry {
        RouteEntry {
            slug: slug.to_string(),
            title: title.to_string(),
            document_url: format!("/details/{slug}.html"),
        }
    }

    fn table() -> RouteTable {
        RouteTable::new([
            entry("education", "Education Portfolio"),
            entry("work", "Professional Experience"),
        ])
        .expect("valid table")
    }

    #[test]
    fn test_lookup_known_slug() {
        let table = table();
        let found = table.lookup("education").expect("present");
        assert_eq!(found.title, "Education Portfolio");
        assert_eq!(found.document_url, "/details/education.html");
        assert_eq!(found.path(), "/details/education");
    }

    #[test]
    fn test_lookup_unknown_or_differently_cased_slug() {
        let table = table();
        assert!(table.lookup("nonexistent").is_none());
        assert!(table.lookup("Education").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let err = RouteTable::new([entry("work", "A"), entry("work", "B")])
            .expect_err("duplicate slugs must fail");
        assert!(matches!(err, SiteError::Duplicate { kind: "route", .. }));
    }

    #[test]
    fn test_invalid_slug_rejected() {
        assert!(RouteTable::new([entry("", "Empty")]).is_err());
        assert!(RouteTable::new([entry("a/b", "Nested")]).is_err());
    }

    #[test]
    fn test_iteration_keeps_manifest_order() {
        let slugs: Vec<_> = table().iter().map(|e| e.slug.clone()).collect();
        assert_eq!(slugs, vec!["education", "work"]);
    }

    #[test]
    fn test_slug_from_path() {
        assert_eq!(slug_from_path("/details/work"), Some("work"));
        assert_eq!(slug_from_path("/details/"), None);
        assert_eq!(slug_from_path("/details/a/b"), None);
        assert_eq!(slug_from_path("/other/work"), None);
        assert_eq!(slug_from_path(&path_for("music")), Some("music"));
    }
}
