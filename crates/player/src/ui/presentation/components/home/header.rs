//! Home header: nav items, contact dropdown, profile thumbnail

use dioxus::prelude::*;

use reelfolio_domain::{NavItem, NavLink, Profile};

use crate::infrastructure::media::OutsideClickGuard;
use crate::presentation::handlers::activate_link;
use crate::presentation::state::use_session_store;
use crate::{use_platform, use_site};

#[derive(Props, Clone, PartialEq)]
pub struct HomeHeaderProps {
    pub profile: Profile,
}

#[component]
pub fn HomeHeader(props: HomeHeaderProps) -> Element {
    let site = use_site();
    let mut store = use_session_store();
    let alt = props.profile.avatar_alt();

    rsx! {
        header {
            class: "home-header",

            span { class: "brand", "{site.owner}" }

            nav {
                class: "home-nav",
                for item in site.nav.iter() {
                    {match item {
                        NavItem::Link(link) => rsx! {
                            NavButton { key: "{link.label}", link: link.clone() }
                        },
                        NavItem::Group { children, .. } => rsx! {
                            NavDropdown {
                                key: "{item.label()}",
                                label: item.label().to_string(),
                                entries: children.clone(),
                            }
                        },
                    }}
                }
            }

            div {
                class: "profile-controls",
                img {
                    class: "profile-thumbnail",
                    src: "{props.profile.artwork_url}",
                    alt: "{alt}",
                    style: "--accent-color: {props.profile.accent.as_str()}",
                }
                button {
                    class: "switch-profile",
                    onclick: move |_| {
                        let _ = store.reset_profile();
                    },
                    "Switch Profile"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavButtonProps {
    link: NavLink,
}

#[component]
fn NavButton(props: NavButtonProps) -> Element {
    let platform = use_platform();
    let navigator = use_navigator();
    let link = props.link.link.clone();

    rsx! {
        button {
            class: "nav-item",
            onclick: move |_| {
                if let Some(route) = activate_link(&link, &platform) {
                    navigator.push(route);
                }
            },
            "{props.link.label}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavDropdownProps {
    label: String,
    entries: Vec<NavLink>,
}

/// Dropdown group: toggles on click, opens on hover, closes on leave or on a
/// mousedown anywhere outside it
#[component]
fn NavDropdown(props: NavDropdownProps) -> Element {
    let mut open = use_signal(|| false);
    let mut outside_click = use_signal(|| None::<OutsideClickGuard>);

    let is_open = *open.read();
    let menu_class = if is_open { "dropdown open" } else { "dropdown" };

    rsx! {
        div {
            class: "{menu_class}",
            onmounted: move |evt| {
                let guard = OutsideClickGuard::new(&evt.data(), move || open.set(false));
                outside_click.set(guard);
            },
            onmouseenter: move |_| open.set(true),
            onmouseleave: move |_| open.set(false),

            button {
                class: "nav-item dropdown-toggle",
                aria_haspopup: "true",
                aria_expanded: "{is_open}",
                onclick: move |_| {
                    let next = !*open.read();
                    open.set(next);
                },
                "{props.label}"
            }

            if is_open {
                div {
                    class: "dropdown-menu",
                    role: "menu",
                    for entry in props.entries.iter() {
                        DropdownEntry {
                            key: "{entry.label}",
                            link: entry.clone(),
                            on_activate: move |_| open.set(false),
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DropdownEntryProps {
    link: NavLink,
    on_activate: EventHandler<()>,
}

#[component]
fn DropdownEntry(props: DropdownEntryProps) -> Element {
    let platform = use_platform();
    let navigator = use_navigator();
    let link = props.link.link.clone();

    rsx! {
        button {
            class: "dropdown-item",
            role: "menuitem",
            onclick: move |_| {
                props.on_activate.call(());
                if let Some(route) = activate_link(&link, &platform) {
                    navigator.push(route);
                }
            },
            "{props.link.label}"
        }
    }
}
