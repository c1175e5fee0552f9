//! Detail view - a routed page embedding a static HTML document
//!
//! Unknown slugs never render: the view replaces the location with `/`.
//! While mounted the page title names the entry; the title found on mount
//! (or the site's default title) is restored on unmount.

use std::rc::Rc;

use dioxus::prelude::*;

use reelfolio_domain::{detail_outcome, BackAction, DetailOutcome};

use crate::presentation::handlers::{back_action, PageTitleGuard};
use crate::routes::Route;
use crate::{use_platform, use_site};

#[derive(Props, Clone, PartialEq)]
pub struct DetailViewProps {
    pub slug: String,
}

#[component]
pub fn DetailView(props: DetailViewProps) -> Element {
    let site = use_site();
    let platform = use_platform();
    let navigator = use_navigator();
    let mut loaded = use_signal(|| false);
    let page_title = use_hook(|| {
        Rc::new(PageTitleGuard::capture(
            platform.clone(),
            &site.default_title,
        ))
    });

    let entry = match detail_outcome(site.routes(), &props.slug) {
        DetailOutcome::Render(entry) => Some(entry.clone()),
        DetailOutcome::RedirectHome => None,
    };

    // Title follows the current entry; redirect when there is none
    let title = entry.as_ref().map(|entry| site.detail_page_title(entry));
    let slug = props.slug.clone();
    use_effect(use_reactive!(|(title, slug)| {
        loaded.set(false);
        match &title {
            Some(title) => page_title.set(title),
            None => {
                tracing::debug!(slug = %slug, "Unknown detail slug, redirecting home");
                navigator.replace(Route::RootRoute {});
            }
        }
    }));

    let Some(entry) = entry else {
        return rsx! {};
    };

    let frame_class = if *loaded.read() {
        "detail-frame loaded"
    } else {
        "detail-frame loading"
    };

    rsx! {
        div {
            class: "detail-view",

            header {
                class: "detail-header",
                button {
                    class: "back-button",
                    onclick: move |_| match back_action(&platform, navigator.can_go_back()) {
                        BackAction::HistoryBack => navigator.go_back(),
                        BackAction::ReplaceHome => {
                            navigator.replace(Route::RootRoute {});
                        }
                    },
                    "← Back"
                }
                h1 { class: "detail-title", "{entry.title}" }
            }

            iframe {
                class: "{frame_class}",
                title: "{entry.title}",
                src: "{entry.document_url}",
                onload: move |_| loaded.set(true),
            }
        }
    }
}
