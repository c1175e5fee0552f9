//! Hero banner
//!
//! A single muted, looping video that plays while at least a quarter of it
//! is on screen. The banner owns its own observer.

use dioxus::prelude::*;
use std::rc::Rc;

use reelfolio_domain::{Hero, HeroAction};

use crate::infrastructure::media::{MediaHandle, VisibilityObserver, HERO_THRESHOLD};
use crate::presentation::handlers::activate_link;
use crate::use_platform;

const HERO_VIDEO_ID: &str = "hero-video";

#[derive(Props, Clone, PartialEq)]
pub struct HeroBannerProps {
    pub hero: Hero,
}

#[component]
pub fn HeroBanner(props: HeroBannerProps) -> Element {
    let observer = use_hook(|| {
        Rc::new(VisibilityObserver::new(
            HERO_THRESHOLD,
            |video: &MediaHandle, visible| {
                if visible {
                    video.set_muted(true);
                    video.start();
                } else {
                    video.pause();
                }
            },
        ))
    });

    let hero = &props.hero;
    let tag_line = hero.tag_line();

    rsx! {
        section {
            class: "hero",

            video {
                id: HERO_VIDEO_ID,
                class: "hero-video",
                src: "{hero.video_url}",
                poster: hero.fallback_artwork_url.clone(),
                muted: true,
                r#loop: true,
                playsinline: true,
                onmounted: move |evt| {
                    if let Some(video) = MediaHandle::from_mounted(&evt.data(), HERO_VIDEO_ID) {
                        observer.observe(&video);
                    }
                },
            }

            div {
                class: "hero-content",
                h1 { class: "hero-title", "{hero.title}" }
                if let Some(subtitle) = &hero.subtitle {
                    h2 { class: "hero-subtitle", "{subtitle}" }
                }
                if let Some(tag_line) = tag_line {
                    p { class: "hero-tags", "{tag_line}" }
                }
                p { class: "hero-description", "{hero.description}" }

                div {
                    class: "hero-actions",
                    if let Some(action) = &hero.primary_action {
                        HeroActionButton { action: action.clone(), primary: true }
                    }
                    if let Some(action) = &hero.secondary_action {
                        HeroActionButton { action: action.clone(), primary: false }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct HeroActionButtonProps {
    action: HeroAction,
    primary: bool,
}

#[component]
fn HeroActionButton(props: HeroActionButtonProps) -> Element {
    let platform = use_platform();
    let navigator = use_navigator();
    let link = props.action.link.clone();
    let class = if props.primary {
        "hero-action primary"
    } else {
        "hero-action secondary"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                if let Some(route) = activate_link(&link, &platform) {
                    navigator.push(route);
                }
            },
            "{props.action.label}"
        }
    }
}
