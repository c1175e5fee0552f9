use dioxus::prelude::*;

use reelfolio_domain::NavLink;

use crate::presentation::handlers::activate_link;
use crate::{use_platform, use_site};

/// Footer links derived from the header nav; absent when there are none
#[component]
pub fn QuickLinksFooter() -> Element {
    let site = use_site();
    let links = site.quick_links();
    if links.is_empty() {
        return rsx! {};
    }

    rsx! {
        footer {
            class: "home-footer",
            nav {
                class: "quick-links",
                aria_label: "Quick links",
                for link in links {
                    QuickLink { key: "{link.label}", link: link }
                }
            }
            p { class: "footer-owner", "© {site.owner}" }
        }
    }
}

#[component]
fn QuickLink(link: NavLink) -> Element {
    let platform = use_platform();
    let navigator = use_navigator();
    let target = link.link.clone();

    rsx! {
        button {
            class: "quick-link",
            onclick: move |_| {
                if let Some(route) = activate_link(&target, &platform) {
                    navigator.push(route);
                }
            },
            "{link.label}"
        }
    }
}
