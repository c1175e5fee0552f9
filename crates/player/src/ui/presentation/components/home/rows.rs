//! Catalog rows
//!
//! Standard rows are horizontal card scrollers with hover previews.
//! Spotlight rows show large tiles whose previews play only while mostly on
//! screen; one observer is shared by every tile of the row.

use dioxus::prelude::*;
use std::rc::Rc;

use reelfolio_domain::{CatalogItem, CatalogRow};

use crate::infrastructure::media::{MediaHandle, VisibilityObserver, SPOTLIGHT_THRESHOLD};
use crate::presentation::handlers::activate_link;
use crate::routes::Route;
use crate::use_platform;

#[derive(Props, Clone, PartialEq)]
pub struct CatalogRowViewProps {
    pub row: CatalogRow,
}

#[component]
pub fn CatalogRowView(props: CatalogRowViewProps) -> Element {
    let row = &props.row;
    let spotlight = row.layout.is_spotlight();

    rsx! {
        section {
            id: "{row.id}",
            class: "{row.class_names()}",

            header {
                class: "row-header",
                h2 { "{row.title}" }
                if !spotlight {
                    button {
                        r#type: "button",
                        class: "row-browse",
                        aria_label: "Browse {row.title}",
                        "Browse All ▶"
                    }
                }
            }

            if spotlight {
                SpotlightTiles { row: row.clone() }
            } else {
                div {
                    class: "row-scroller",
                    for item in row.items.iter() {
                        StandardCard {
                            key: "{item.id}",
                            row_id: row.id.clone(),
                            item: item.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StandardCardProps {
    row_id: String,
    item: CatalogItem,
}

/// Card with a hover preview. Linked cards are focusable and activate on
/// click, Enter or Space.
#[component]
fn StandardCard(props: StandardCardProps) -> Element {
    let platform = use_platform();
    let navigator = use_navigator();
    let mut preview = use_signal(|| None::<MediaHandle>);

    let item = &props.item;
    let video_id = format!("preview-{}-{}", props.row_id, item.id);
    let linked = item.has_link();
    let class = if linked { "row-card link-card" } else { "row-card" };

    let activate = {
        let link = item.link.clone();
        move || {
            let Some(link) = &link else {
                return;
            };
            if let Some(route) = activate_link(link, &platform) {
                navigator.push(route);
            }
        }
    };
    let on_click = activate.clone();
    let on_key = activate;

    rsx! {
        article {
            class: "{class}",
            tabindex: if linked { "0" } else { "-1" },
            role: if linked { "button" } else { "article" },
            aria_label: item.aria_label(),
            onmouseenter: move |_| {
                if let Some(video) = preview.read().as_ref() {
                    video.rewind();
                    video.start();
                }
            },
            onmouseleave: move |_| {
                if let Some(video) = preview.read().as_ref() {
                    video.stop();
                }
            },
            onclick: move |_| on_click(),
            onkeydown: move |evt: KeyboardEvent| {
                let key = evt.key();
                if key == Key::Enter || key == Key::Character(" ".to_string()) {
                    evt.prevent_default();
                    on_key();
                }
            },

            div {
                class: "card-artwork",
                if let Some(artwork) = &item.artwork_url {
                    img { src: "{artwork}", alt: "{item.name}" }
                }
                if let Some(src) = &item.preview_video_url {
                    video {
                        id: "{video_id}",
                        class: "card-preview",
                        src: "{src}",
                        muted: true,
                        r#loop: true,
                        playsinline: true,
                        preload: "metadata",
                        onmounted: {
                            let video_id = video_id.clone();
                            move |evt: MountedEvent| {
                                preview.set(MediaHandle::from_mounted(&evt.data(), &video_id));
                            }
                        },
                    }
                }
            }

            div {
                class: "card-info",
                h3 { class: "card-title", "{item.name}" }
                if let Some(meta) = &item.meta {
                    span { class: "card-meta", "{meta}" }
                }
                if let Some(description) = &item.description {
                    p { class: "card-description", "{description}" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SpotlightTilesProps {
    row: CatalogRow,
}

#[component]
fn SpotlightTiles(props: SpotlightTilesProps) -> Element {
    let observer = use_hook(|| {
        Rc::new(VisibilityObserver::new(
            SPOTLIGHT_THRESHOLD,
            |video: &MediaHandle, visible| {
                if visible {
                    video.set_muted(true);
                    video.start();
                } else {
                    video.stop();
                }
            },
        ))
    });

    rsx! {
        div {
            class: "spotlight-wrapper",
            for item in props.row.items.iter() {
                SpotlightTile {
                    key: "{item.id}",
                    row_id: props.row.id.clone(),
                    item: item.clone(),
                    observer: SharedObserver(observer.clone()),
                }
            }
        }
    }
}

/// Row-wide observer handed to each tile; equal when it is the same observer.
#[derive(Clone)]
struct SharedObserver(Rc<VisibilityObserver>);

impl PartialEq for SharedObserver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Props, Clone, PartialEq)]
struct SpotlightTileProps {
    row_id: String,
    item: CatalogItem,
    observer: SharedObserver,
}

#[component]
fn SpotlightTile(props: SpotlightTileProps) -> Element {
    let item = &props.item;
    let video_id = format!("spotlight-{}-{}", props.row_id, item.id);
    let observer = props.observer.0.clone();

    let content = rsx! {
        if let Some(src) = &item.preview_video_url {
            video {
                id: "{video_id}",
                class: "spotlight-video",
                src: "{src}",
                preload: "metadata",
                muted: true,
                r#loop: true,
                playsinline: true,
                onmounted: {
                    let video_id = video_id.clone();
                    move |evt: MountedEvent| {
                        if let Some(video) = MediaHandle::from_mounted(&evt.data(), &video_id) {
                            observer.observe(&video);
                        }
                    }
                },
            }
        }
        div { class: "spotlight-headline", "{item.name}" }
    };

    // Detail routes stay in the router; web links open a new tab
    let slug = item.link.as_ref().and_then(|link| link.route_slug());
    match (&item.link, slug) {
        (Some(_), Some(slug)) => rsx! {
            Link {
                class: "spotlight-card spotlight-link",
                to: Route::DetailRoute { slug: slug.to_string() },
                {content}
            }
        },
        (Some(link), None) => rsx! {
            a {
                class: "spotlight-card spotlight-link",
                href: "{link.href()}",
                target: if link.opens_in_new_tab() { "_blank" },
                rel: if link.opens_in_new_tab() { "noopener noreferrer" },
                {content}
            }
        },
        (None, _) => rsx! {
            div { class: "spotlight-card", {content} }
        },
    }
}
