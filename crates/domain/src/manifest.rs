//! Site manifest loading and validation
//!
//! The whole site (profiles, hero, nav, rows, detail routes and the remote
//! asset map) is described by one JSON document embedded at build time. It is
//! parsed into `Raw*` serde structs and then validated into the typed entities
//! in one pass, resolving every asset path through the [`AssetResolver`].

use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::assets::{AssetResolver, BasePath};
use crate::common::{none_if_blank, some_if_present};
use crate::entities::{
    quick_links, CatalogItem, CatalogRow, Hero, HeroAction, NavItem, NavLink, Profile, RowLayout,
};
use crate::error::SiteError;
use crate::routes::{slug_from_path, RouteEntry, RouteTable, DETAILS_PREFIX};
use crate::value_objects::{AccentColor, Link};

/// Manifest shipped with the binary.
pub const BUILTIN_MANIFEST: &str = include_str!("../assets/site.json");

// =============================================================================
// Wire shape
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    owner: String,
    default_title: String,
    intro_video: String,
    #[serde(default)]
    remote_assets: HashMap<String, String>,
    profiles: Vec<RawProfile>,
    #[serde(default)]
    nav: Vec<RawNavItem>,
    hero: RawHero,
    #[serde(default)]
    routes: Vec<RawRoute>,
    #[serde(default)]
    rows: Vec<RawRow>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    id: String,
    name: String,
    artwork: String,
    accent: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNavLink {
    label: String,
    link: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNavGroup {
    label: String,
    children: Vec<RawNavLink>,
}

/// An entry must be exactly one shape; `link` alongside `children` matches
/// neither.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNavItem {
    Group(RawNavGroup),
    Link(RawNavLink),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAction {
    label: String,
    link: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHero {
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    description: String,
    video: String,
    #[serde(default)]
    fallback_artwork: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    primary_action: Option<RawAction>,
    #[serde(default)]
    secondary_action: Option<RawAction>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRoute {
    slug: String,
    title: String,
    document: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRow {
    id: String,
    title: String,
    #[serde(default)]
    layout: RowLayout,
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawItem {
    id: String,
    name: String,
    #[serde(default)]
    artwork: Option<String>,
    #[serde(default)]
    preview_video: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    meta: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

// =============================================================================
// Validated site
// =============================================================================

/// Immutable, validated site configuration.
#[derive(Debug, Clone)]
pub struct Site {
    pub owner: String,
    pub default_title: String,
    pub intro_video_url: String,
    pub profiles: Vec<Profile>,
    pub nav: Vec<NavItem>,
    pub hero: Hero,
    pub rows: Vec<CatalogRow>,
    routes: RouteTable,
    resolver: AssetResolver,
}

impl Site {
    /// Load the embedded manifest.
    pub fn builtin(base: BasePath) -> Result<Self, SiteError> {
        Self::from_json(BUILTIN_MANIFEST, base)
    }

    /// Parse and validate a manifest document.
    pub fn from_json(json: &str, base: BasePath) -> Result<Self, SiteError> {
        let raw: RawManifest = serde_json::from_str(json)?;
        Self::from_raw(raw, base)
    }

    fn from_raw(raw: RawManifest, base: BasePath) -> Result<Self, SiteError> {
        let resolver = AssetResolver::new(base, raw.remote_assets);

        let routes = RouteTable::new(raw.routes.into_iter().map(|route| RouteEntry {
            document_url: resolver.resolve(&route.document),
            slug: route.slug,
            title: route.title,
        }))?;

        let linker = Linker {
            resolver: &resolver,
            routes: &routes,
        };

        let profiles = build_profiles(raw.profiles, &resolver)?;
        let nav = build_nav(raw.nav, &linker)?;
        let hero = build_hero(raw.hero, &linker)?;
        let rows = build_rows(raw.rows, &linker)?;

        let intro_video_url = resolver.resolve(&raw.intro_video);
        if intro_video_url.is_empty() {
            return Err(SiteError::validation("intro video cannot be empty"));
        }

        Ok(Self {
            owner: require("owner", raw.owner)?,
            default_title: require("default title", raw.default_title)?,
            intro_video_url,
            profiles,
            nav,
            hero,
            rows,
            routes,
            resolver,
        })
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn resolver(&self) -> &AssetResolver {
        &self.resolver
    }

    pub fn quick_links(&self) -> Vec<NavLink> {
        quick_links(&self.nav)
    }

    /// Browser title while a detail page is shown.
    pub fn detail_page_title(&self, entry: &RouteEntry) -> String {
        format!("{} · {}", entry.title, self.owner)
    }
}

/// Resolves manifest link strings into typed [`Link`]s.
struct Linker<'a> {
    resolver: &'a AssetResolver,
    routes: &'a RouteTable,
}

impl Linker<'_> {
    /// Detail paths bypass asset resolution so they stay router paths
    /// regardless of the deployment base.
    fn link(&self, owner: &str, raw: &str) -> Result<Option<Link>, SiteError> {
        let Some(raw) = none_if_blank(raw) else {
            return Ok(None);
        };
        let raw = raw.trim();

        if raw.starts_with(DETAILS_PREFIX) {
            return match slug_from_path(raw) {
                Some(slug) if self.routes.contains(slug) => {
                    Ok(Some(Link::Internal(raw.to_string())))
                }
                _ => Err(SiteError::UnknownRoute {
                    owner: owner.to_string(),
                    link: raw.to_string(),
                }),
            };
        }

        Ok(Link::classify(&self.resolver.resolve(raw)))
    }

    fn required_link(&self, owner: &str, raw: &str) -> Result<Link, SiteError> {
        self.link(owner, raw)?
            .ok_or_else(|| SiteError::validation(format!("{owner} needs a link")))
    }
}

fn require(field: &str, value: String) -> Result<String, SiteError> {
    if value.trim().is_empty() {
        return Err(SiteError::validation(format!("{field} cannot be empty")));
    }
    Ok(value)
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), SiteError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(SiteError::validation(format!("{kind} id cannot be empty")));
        }
        if !seen.insert(id) {
            return Err(SiteError::duplicate(kind, id));
        }
    }
    Ok(())
}

fn build_profiles(
    raw: Vec<RawProfile>,
    resolver: &AssetResolver,
) -> Result<Vec<Profile>, SiteError> {
    if raw.is_empty() {
        return Err(SiteError::validation("at least one profile is required"));
    }
    ensure_unique("profile", raw.iter().map(|p| p.id.as_str()))?;

    raw.into_iter()
        .map(|p| -> Result<Profile, SiteError> {
            Ok(Profile {
                accent: AccentColor::new(&p.id, p.accent)?,
                artwork_url: resolver.resolve(&p.artwork),
                display_name: require("profile name", p.name)?,
                id: p.id,
            })
        })
        .collect()
}

fn build_nav(raw: Vec<RawNavItem>, linker: &Linker<'_>) -> Result<Vec<NavItem>, SiteError> {
    let nav_link = |raw: RawNavLink| -> Result<NavLink, SiteError> {
        let owner = format!("nav item {}", raw.label);
        Ok(NavLink {
            link: linker.required_link(&owner, &raw.link)?,
            label: raw.label,
        })
    };

    raw.into_iter()
        .map(|item| -> Result<NavItem, SiteError> {
            match item {
                RawNavItem::Link(link) => nav_link(link).map(NavItem::Link),
                RawNavItem::Group(group) => Ok(NavItem::Group {
                    label: group.label,
                    children: group
                        .children
                        .into_iter()
                        .map(&nav_link)
                        .collect::<Result<_, _>>()?,
                }),
            }
        })
        .collect()
}

fn build_hero(raw: RawHero, linker: &Linker<'_>) -> Result<Hero, SiteError> {
    let action = |raw: Option<RawAction>| -> Result<Option<HeroAction>, SiteError> {
        raw.map(|a| -> Result<HeroAction, SiteError> {
            let owner = format!("hero action {}", a.label);
            Ok(HeroAction {
                link: linker.required_link(&owner, &a.link)?,
                label: a.label,
            })
        })
        .transpose()
    };

    let video_url = linker.resolver.resolve(&raw.video);
    if video_url.is_empty() {
        return Err(SiteError::validation("hero video cannot be empty"));
    }

    Ok(Hero {
        title: require("hero title", raw.title)?,
        subtitle: some_if_present(raw.subtitle),
        description: raw.description,
        video_url,
        fallback_artwork_url: linker.resolver.resolve_opt(raw.fallback_artwork.as_deref()),
        tags: raw.tags,
        primary_action: action(raw.primary_action)?,
        secondary_action: action(raw.secondary_action)?,
    })
}

fn build_rows(raw: Vec<RawRow>, linker: &Linker<'_>) -> Result<Vec<CatalogRow>, SiteError> {
    ensure_unique("row", raw.iter().map(|r| r.id.as_str()))?;

    raw.into_iter()
        .map(|row| -> Result<CatalogRow, SiteError> {
            ensure_unique("item", row.items.iter().map(|i| i.id.as_str()))?;
            let items = row
                .items
                .into_iter()
                .map(|item| -> Result<CatalogItem, SiteError> {
                    let owner = format!("item {}/{}", row.id, item.id);
                    Ok(CatalogItem {
                        link: match item.link.as_deref() {
                            Some(raw) => linker.link(&owner, raw)?,
                            None => None,
                        },
                        artwork_url: linker.resolver.resolve_opt(item.artwork.as_deref()),
                        preview_video_url: linker
                            .resolver
                            .resolve_opt(item.preview_video.as_deref()),
                        description: some_if_present(item.description),
                        meta: some_if_present(item.meta),
                        name: item.name,
                        id: item.id,
                    })
                })
                .collect::<Result<Vec<_>, SiteError>>()?;

            Ok(CatalogRow {
                id: row.id,
                title: row.title,
                layout: row.layout,
                items,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> serde_json::Value {
        json!({
            "owner": "Ada",
            "default_title": "Ada Portfolio",
            "intro_video": "assets/intro.mp4",
            "remote_assets": {
                "assets/intro.mp4": "https://cdn.test/intro.mp4",
                "assets/cv.pdf": "https://cdn.test/cv.pdf"
            },
            "profiles": [
                { "id": "recruiters", "name": "Recruiters", "artwork": "assets/u1.jpg", "accent": "#e50914" }
            ],
            "nav": [
                { "label": "Resume", "link": "assets/cv.pdf" },
                { "label": "Contact", "children": [
                    { "label": "Mail", "link": "mailto:ada@example.com" },
                    { "label": "Call", "link": "tel:123" }
                ]}
            ],
            "hero": {
                "title": "Ada",
                "description": "Engineer",
                "video": "assets/hero.mp4",
                "primary_action": { "label": "View Resume", "link": "assets/cv.pdf" }
            },
            "routes": [
                { "slug": "education", "title": "Education", "document": "/details/education.html" }
            ],
            "rows": [
                { "id": "about", "title": "Top picks", "layout": "spotlight", "items": [
                    { "id": "edu", "name": "EDUCATION", "preview_video": "assets/e.mp4", "link": "/details/education" },
                    { "id": "gh", "name": "GITHUB", "link": "https://github.com/ada" }
                ]}
            ]
        })
    }

    fn load(value: serde_json::Value, base: &str) -> Result<Site, SiteError> {
        Site::from_json(&value.to_string(), BasePath::new(base))
    }

    #[test]
    fn test_builtin_manifest_is_valid() {
        let site = Site::builtin(BasePath::default()).expect("builtin manifest must validate");
        assert!(!site.profiles.is_empty());
        assert!(site.routes().lookup("education").is_some());
        assert!(site.routes().lookup("nonexistent").is_none());
        assert!(site.intro_video_url.starts_with("https://"));
        assert!(site.rows.iter().any(|r| r.layout.is_spotlight()));
    }

    #[test]
    fn test_builtin_internal_links_target_known_routes() {
        let site = Site::builtin(BasePath::default()).expect("valid");
        for row in &site.rows {
            for item in &row.items {
                if let Some(slug) = item.link.as_ref().and_then(Link::route_slug) {
                    assert!(site.routes().contains(slug), "{slug} missing");
                }
            }
        }
    }

    #[test]
    fn test_minimal_manifest_resolves_assets() {
        let site = load(minimal(), "/folio").expect("valid");
        assert_eq!(site.intro_video_url, "https://cdn.test/intro.mp4");
        assert_eq!(site.hero.video_url, "/folio/assets/hero.mp4");
        assert_eq!(site.profiles[0].artwork_url, "/folio/assets/u1.jpg");
        assert_eq!(
            site.routes().lookup("education").map(|e| e.document_url.as_str()),
            Some("/folio/details/education.html")
        );
    }

    #[test]
    fn test_internal_links_ignore_base_path() {
        let site = load(minimal(), "/folio").expect("valid");
        let edu = &site.rows[0].items[0];
        assert_eq!(edu.link, Some(Link::Internal("/details/education".into())));
        assert_eq!(
            site.rows[0].items[1].link,
            Some(Link::External("https://github.com/ada".into()))
        );
    }

    #[test]
    fn test_nav_and_quick_links() {
        let site = load(minimal(), "/").expect("valid");
        assert_eq!(site.nav.len(), 2);
        assert!(matches!(&site.nav[1], NavItem::Group { children, .. } if children.len() == 2));
        let quick = site.quick_links();
        assert_eq!(quick[0].link, Link::External("https://cdn.test/cv.pdf".into()));
        assert_eq!(quick[1].link, Link::Mail("mailto:ada@example.com".into()));
    }

    #[test]
    fn test_nav_group_with_link_is_parse_error() {
        let mut value = minimal();
        value["nav"][1]["link"] = json!("mailto:ada@example.com");
        assert!(matches!(load(value, "/"), Err(SiteError::Parse(_))));
    }

    #[test]
    fn test_nav_without_targets_has_no_quick_links() {
        let mut value = minimal();
        value["nav"] = json!([]);
        assert!(load(value, "/").expect("valid").quick_links().is_empty());

        let mut value = minimal();
        value["nav"] = json!([{ "label": "Contact", "children": [] }]);
        let site = load(value, "/").expect("valid");
        assert_eq!(site.nav.len(), 1);
        assert!(site.quick_links().is_empty());
    }

    #[test]
    fn test_detail_page_title() {
        let site = load(minimal(), "/").expect("valid");
        let entry = site.routes().lookup("education").expect("present");
        assert_eq!(site.detail_page_title(entry), "Education · Ada");
    }

    #[test]
    fn test_unknown_internal_route_rejected() {
        let mut value = minimal();
        value["rows"][0]["items"][0]["link"] = json!("/details/missing");
        let err = load(value, "/").expect_err("unknown slug");
        assert!(matches!(err, SiteError::UnknownRoute { .. }));
    }

    #[test]
    fn test_duplicate_profile_rejected() {
        let mut value = minimal();
        let profile = value["profiles"][0].clone();
        value["profiles"]
            .as_array_mut()
            .expect("array")
            .push(profile);
        let err = load(value, "/").expect_err("duplicate");
        assert!(matches!(err, SiteError::Duplicate { kind: "profile", .. }));
    }

    #[test]
    fn test_duplicate_item_id_within_row_rejected() {
        let mut value = minimal();
        value["rows"][0]["items"][1]["id"] = json!("edu");
        assert!(matches!(
            load(value, "/"),
            Err(SiteError::Duplicate { kind: "item", .. })
        ));
    }

    #[test]
    fn test_invalid_accent_rejected() {
        let mut value = minimal();
        value["profiles"][0]["accent"] = json!("red");
        assert!(matches!(
            load(value, "/"),
            Err(SiteError::InvalidAccent { .. })
        ));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let mut value = minimal();
        value["hero"]["rating"] = json!("TV-MA");
        assert!(matches!(load(value, "/"), Err(SiteError::Parse(_))));
    }

    #[test]
    fn test_blank_item_link_is_inert() {
        let mut value = minimal();
        value["rows"][0]["items"][1]["link"] = json!("");
        let site = load(value, "/").expect("valid");
        assert_eq!(site.rows[0].items[1].link, None);
    }

    #[test]
    fn test_missing_profiles_rejected() {
        let mut value = minimal();
        value["profiles"] = json!([]);
        assert!(matches!(load(value, "/"), Err(SiteError::Validation(_))));
    }
}
