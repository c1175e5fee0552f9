//! Detail-page navigation decisions

use crate::routes::{RouteEntry, RouteTable};

/// What the detail route should do for a slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome<'a> {
    Render(&'a RouteEntry),
    /// Unknown slug: replace the location with `/`, render nothing
    RedirectHome,
}

pub fn detail_outcome<'a>(routes: &'a RouteTable, slug: &str) -> DetailOutcome<'a> {
    routes
        .lookup(slug)
        .map_or(DetailOutcome::RedirectHome, DetailOutcome::Render)
}

/// How the detail page's back button leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackAction {
    /// Pop the history stack to keep prior scroll/state
    HistoryBack,
    /// Nothing to go back to (direct link); replace with `/`
    ReplaceHome,
}

impl BackAction {
    pub fn choose(can_go_back: bool) -> Self {
        if can_go_back {
            Self::HistoryBack
        } else {
            Self::ReplaceHome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> RouteTable {
        RouteTable::new([RouteEntry {
            slug: "education".into(),
            title: "Education Portfolio".into(),
            document_url: "/details/education.html".into(),
        }])
        .expect("valid")
    }

    #[test]
    fn test_known_slug_renders() {
        let routes = routes();
        match detail_outcome(&routes, "education") {
            DetailOutcome::Render(entry) => assert_eq!(entry.title, "Education Portfolio"),
            DetailOutcome::RedirectHome => panic!("known slug must render"),
        }
    }

    #[test]
    fn test_unknown_slugs_redirect_home() {
        let routes = routes();
        for slug in ["nonexistent", "", "EDUCATION", "education/extra", " education"] {
            assert_eq!(detail_outcome(&routes, slug), DetailOutcome::RedirectHome);
        }
    }

    #[test]
    fn test_back_action() {
        assert_eq!(BackAction::choose(true), BackAction::HistoryBack);
        assert_eq!(BackAction::choose(false), BackAction::ReplaceHome);
    }
}
