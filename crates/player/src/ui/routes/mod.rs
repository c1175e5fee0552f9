//! Client-side routes
//!
//! `/` renders the profile selector or the home view depending on the
//! session phase, `/details/:slug` renders a detail page, and anything else
//! is replaced with `/`.

use dioxus::prelude::*;

use reelfolio_domain::RootView;

use crate::presentation::components::intro_overlay::IntroOverlay;
use crate::presentation::components::profile_select::ProfileSelect;
use crate::presentation::state::use_session_store;
use crate::presentation::views::detail_view::DetailView;
use crate::presentation::views::home_view::HomeView;
use crate::use_site;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    RootRoute {},
    #[route("/details/:slug")]
    DetailRoute { slug: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root route - profile selection, then home with the intro layered on top
#[component]
pub fn RootRoute() -> Element {
    let mut store = use_session_store();
    let site = use_site();

    let view = store.with(|session| match session.root_view() {
        RootView::ProfileSelect => None,
        RootView::Home {
            profile,
            intro_playing,
        } => Some((profile.clone(), intro_playing)),
    });

    match view {
        None => rsx! {
            ProfileSelect {}
        },
        Some((profile, intro_playing)) => rsx! {
            HomeView { profile: profile }
            if intro_playing {
                IntroOverlay {
                    src: site.intro_video_url.clone(),
                    on_close: move |exit| {
                        let _ = store.finish_intro(exit);
                    },
                }
            }
        },
    }
}

/// Detail route - embedded document for a catalog slug
#[component]
pub fn DetailRoute(slug: String) -> Element {
    rsx! {
        DetailView { slug: slug }
    }
}

/// Unknown paths go back to the root
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = segments.join("/");

    use_effect(move || {
        tracing::debug!(path = %path, "Unknown route, redirecting home");
        navigator.replace(Route::RootRoute {});
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn parse(path: &str) -> Option<Route> {
        Route::from_str(path).ok()
    }

    #[test]
    fn test_root_path() {
        assert_eq!(parse("/"), Some(Route::RootRoute {}));
    }

    #[test]
    fn test_detail_path_carries_slug() {
        assert_eq!(
            parse("/details/education"),
            Some(Route::DetailRoute {
                slug: "education".into()
            })
        );
    }

    #[test]
    fn test_unmatched_paths_fall_through_to_not_found() {
        for path in ["/nope", "/nope/x", "/details/a/b", "/details"] {
            assert!(
                matches!(parse(path), Some(Route::NotFound { .. })),
                "{path} should be unmatched"
            );
        }
    }

    #[test]
    fn test_detail_route_renders_domain_path() {
        let route = Route::DetailRoute {
            slug: "education".into(),
        };
        assert_eq!(
            route.to_string(),
            reelfolio_domain::routes::path_for("education")
        );
    }
}
