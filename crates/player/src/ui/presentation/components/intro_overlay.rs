//! Intro overlay
//!
//! Full-screen video played once after a profile is chosen. Playback policy
//! lives in [`IntroPlayback`]; this component only applies its commands to
//! the video element.

use dioxus::prelude::*;

use reelfolio_domain::{IntroCommand, IntroExit, IntroPlayback};

use crate::infrastructure::media::{MediaHandle, MediaLease};

const INTRO_VIDEO_ID: &str = "intro-video";

/// Props for the IntroOverlay component
#[derive(Props, Clone, PartialEq)]
pub struct IntroOverlayProps {
    /// Resolved video URL
    pub src: String,
    /// Fired once, when the intro ends or is dismissed
    pub on_close: EventHandler<IntroExit>,
}

#[component]
pub fn IntroOverlay(props: IntroOverlayProps) -> Element {
    let mut playback = use_signal(IntroPlayback::new);
    // Dropping the lease stops, rewinds and releases the video
    let mut lease = use_signal(|| None::<MediaLease>);

    let on_close = props.on_close;
    let mut apply = move |command: IntroCommand, exit: IntroExit| {
        let handle = lease.read().as_ref().map(|l| l.handle().clone());
        match command {
            IntroCommand::Nothing | IntroCommand::RetryMuted => {}
            IntroCommand::Unmute => {
                // The tap may still not satisfy the autoplay policy
                if let Some(handle) = handle {
                    spawn(play_with_sound_fallback(handle, playback));
                }
            }
            IntroCommand::Dismiss => {
                drop(lease.write().take());
                on_close.call(exit);
            }
        }
    };

    let muted = playback.read().is_muted();
    let hint = playback.read().hint();

    rsx! {
        div {
            class: "intro-overlay",
            role: "button",
            aria_label: "{hint}",
            onclick: move |_| {
                let command = playback.write().tap();
                apply(command, IntroExit::Dismissed);
            },

            video {
                id: INTRO_VIDEO_ID,
                class: "intro-video",
                src: "{props.src}",
                playsinline: true,
                muted: muted,
                onmounted: move |evt| {
                    let Some(handle) = MediaHandle::from_mounted(&evt.data(), INTRO_VIDEO_ID) else {
                        tracing::warn!("Intro video element unavailable");
                        return;
                    };
                    lease.set(Some(MediaLease::new(handle.clone())));
                    spawn(play_with_sound_fallback(handle, playback));
                },
                onended: move |_| {
                    let command = playback.write().ended();
                    apply(command, IntroExit::Ended);
                },
            }

            div { class: "intro-hint", "{hint}" }
        }
    }
}

/// Try with sound first, then muted. A second refusal leaves the overlay
/// waiting for a tap. Used for the initial autoplay and for every unmute.
async fn play_with_sound_fallback(handle: MediaHandle, mut playback: Signal<IntroPlayback>) {
    handle.set_muted(false);
    let Err(e) = handle.play().await else {
        return;
    };
    tracing::debug!(error = %e, "Intro playback with sound blocked");

    if playback.write().autoplay_rejected() != IntroCommand::RetryMuted {
        return;
    }
    handle.set_muted(true);
    if let Err(e) = handle.play().await {
        tracing::debug!(error = %e, "Muted intro autoplay blocked");
        let _ = playback.write().autoplay_rejected();
    }
}
